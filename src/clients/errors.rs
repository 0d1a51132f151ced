//! HTTP-specific error types for the SKY API client.
//!
//! # Error Handling
//!
//! - [`HttpError::Token`]: The service rejected the credentials (401 on POST)
//! - [`HttpError::Validation`]: The service rejected a POST (any other 4xx/5xx)
//! - [`HttpError::Api`]: Any 4xx/5xx on GET, PUT, PATCH or DELETE
//! - [`HttpError::InvalidJson`]: A success response whose body is not JSON
//! - [`HttpError::InvalidRequest`]: The request was rejected before sending
//! - [`HttpError::Network`]: Transport failure, passed through from `reqwest`
//!
//! # Example
//!
//! ```rust,ignore
//! use sky_api::clients::HttpError;
//!
//! match api.constituent().get(7).await {
//!     Ok(Some(constituent)) => println!("{}", constituent["last"]),
//!     Ok(None) => println!("nothing returned"),
//!     Err(HttpError::Token(e)) => println!("re-authenticate: {}", e.body),
//!     Err(HttpError::Api(e)) => println!("API error {}: {}", e.code, e.body),
//!     Err(other) => println!("{other}"),
//! }
//! ```

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::clients::http_response::HttpResponse;

/// A response body that could not be decoded as JSON.
///
/// Carried in place of the JSON error body so that decoding failures never
/// mask the original API error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lower-cased names.
    pub headers: HashMap<String, Vec<String>>,
    /// The undecoded body text.
    pub text: String,
}

/// The body of an error response.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorBody {
    /// The body decoded as JSON.
    Json(serde_json::Value),
    /// The body was empty or not JSON.
    Raw(RawResponse),
}

impl ErrorBody {
    /// Returns the decoded JSON body, if the body was JSON.
    #[must_use]
    pub const fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// Returns the raw response, if the body was not JSON.
    #[must_use]
    pub const fn as_raw(&self) -> Option<&RawResponse> {
        match self {
            Self::Json(_) => None,
            Self::Raw(raw) => Some(raw),
        }
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Raw(raw) => write!(f, "{}", serde_json::json!({ "response": raw.text })),
        }
    }
}

/// An error response returned by the SKY API.
///
/// # Example
///
/// ```rust
/// use sky_api::clients::{ApiResponseError, ErrorBody};
///
/// let error = ApiResponseError {
///     code: 404,
///     body: ErrorBody::Json(serde_json::json!({"error": "not found"})),
///     request_id: None,
/// };
/// assert_eq!(error.to_string(), r#"404: {"error":"not found"}"#);
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{code}: {body}")]
pub struct ApiResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The parsed error body, or the raw response when it isn't JSON.
    pub body: ErrorBody,
    /// The `X-Request-Id` response header, if present.
    pub request_id: Option<String>,
}

impl ApiResponseError {
    /// Builds the error from a response, falling back to the raw body when
    /// it does not decode as JSON.
    #[must_use]
    pub fn from_response(response: HttpResponse) -> Self {
        let code = response.code;
        let request_id = response.request_id().map(String::from);
        let body = match serde_json::from_str(&response.text) {
            Ok(value) => ErrorBody::Json(value),
            Err(_) => ErrorBody::Raw(RawResponse {
                code,
                headers: response.headers,
                text: response.text,
            }),
        };
        Self {
            code,
            body,
            request_id,
        }
    }
}

/// Error returned when a request is rejected before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A header name or value is not valid HTTP.
    #[error("Invalid request header '{name}'.")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },

    /// The path could not be joined onto the base URL.
    #[error("Cannot resolve request path '{path}' against the base URL.")]
    InvalidPath {
        /// The offending path.
        path: String,
    },

    /// A body was attached to a method that does not send one.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that does not take a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The service rejected the access token.
    #[error("SKY API token error {0}")]
    Token(ApiResponseError),

    /// The service rejected a POST request.
    #[error("SKY API validation error {0}")]
    Validation(ApiResponseError),

    /// The service returned an error status.
    #[error("SKY API error {0}")]
    Api(ApiResponseError),

    /// A success response carried a body that is not JSON.
    #[error("Response with status {code} is not valid JSON: {source}")]
    InvalidJson {
        /// The HTTP status code of the response.
        code: u16,
        /// The decoding error.
        source: serde_json::Error,
    },

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the API error response, for the status-derived variants.
    #[must_use]
    pub const fn response(&self) -> Option<&ApiResponseError> {
        match self {
            Self::Token(e) | Self::Validation(e) | Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the HTTP status code, when a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Token(e) | Self::Validation(e) | Self::Api(e) => Some(e.code),
            Self::InvalidJson { code, .. } => Some(*code),
            Self::Network(e) => e.status().as_ref().map(reqwest::StatusCode::as_u16),
            Self::InvalidRequest(_) => None,
        }
    }
}
