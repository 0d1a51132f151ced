//! HTTP response types for the SKY API client.

use std::collections::HashMap;

/// An HTTP response from the SKY API, before status mapping.
///
/// The body is kept as text so hooks and error mapping see exactly what the
/// service sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers with lower-cased names (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub text: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, text: String) -> Self {
        Self {
            code,
            headers,
            text,
        }
    }

    /// Returns `true` for statuses below 400.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code < 400
    }

    /// Returns `true` for 204 No Content.
    #[must_use]
    pub const fn is_no_content(&self) -> bool {
        self.code == 204
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Decodes the body as JSON.
    ///
    /// An empty (or whitespace-only) body decodes to `None`.
    ///
    /// # Errors
    ///
    /// Returns the decoding error if the body is not valid JSON.
    pub fn json(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        if self.text.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&self.text).map(Some)
    }
}
