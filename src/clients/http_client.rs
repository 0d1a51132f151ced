//! HTTP client for SKY API communication.
//!
//! This module provides the [`HttpClient`] type: it resolves paths against the
//! base URL, signs requests, sends them and maps status codes to results.

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, USER_AGENT};

use crate::auth::SkyApiAuth;
use crate::clients::errors::{ApiResponseError, HttpError, InvalidHttpRequestError};
use crate::clients::hooks::ResponseHook;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUrl, SkyApiConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the SKY API.
///
/// The client handles:
/// - Joining relative paths onto the base URL
/// - Default and configured request headers
/// - The authentication headers, applied last so they always win
/// - Response hooks
/// - Mapping status codes to results and errors
///
/// When the configuration is disabled, every dispatch returns `Ok(None)`
/// without touching the network.
///
/// # Status Mapping
///
/// | Status | GET / PUT / PATCH / DELETE | POST |
/// |---|---|---|
/// | 204 | `Ok(None)` | `Ok(None)` |
/// | other < 400 | `Ok(Some(json))` | `Ok(Some(json))` |
/// | 401 | [`HttpError::Api`] | [`HttpError::Token`] |
/// | other >= 400 | [`HttpError::Api`] | [`HttpError::Validation`] |
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and immutable after construction.
///
/// # Example
///
/// ```rust,ignore
/// use sky_api::{AccessToken, SkyApiConfig};
/// use sky_api::clients::HttpClient;
///
/// let config = SkyApiConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config)?;
/// let constituent = client.get("constituent/v1/constituents/7", None).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: BaseUrl,
    auth: SkyApiAuth,
    enabled: bool,
    default_headers: HeaderMap,
    response_hooks: Vec<Arc<dyn ResponseHook>>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying transport cannot be
    /// initialized (e.g., TLS backend failure).
    pub fn new(config: &SkyApiConfig) -> Result<Self, HttpError> {
        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let default_headers = config
            .request_headers()
            .cloned()
            .unwrap_or_else(|| library_default_headers(config.user_agent_prefix()));

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            auth: SkyApiAuth::new(
                config.access_token().clone(),
                config.subscription_key().cloned(),
            ),
            enabled: config.enabled(),
            default_headers,
            response_hooks: config.response_hooks().to_vec(),
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns whether this client sends requests.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the headers sent before per-request and authentication headers
    /// are applied.
    #[must_use]
    pub const fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<Option<serde_json::Value>, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, path);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.request(builder.build()?).await
    }

    /// Sends a POST request with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn post(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Option<serde_json::Value>, HttpError> {
        self.send_with_body(HttpMethod::Post, path, body).await
    }

    /// Sends a PUT request with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn put(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Option<serde_json::Value>, HttpError> {
        self.send_with_body(HttpMethod::Put, path, body).await
    }

    /// Sends a PATCH request with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn patch(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Option<serde_json::Value>, HttpError> {
        self.send_with_body(HttpMethod::Patch, path, body).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn delete(&self, path: &str) -> Result<Option<serde_json::Value>, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path).build()?;
        self.request(request).await
    }

    async fn send_with_body(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Option<serde_json::Value>, HttpError> {
        let request = HttpRequest::builder(method, path).maybe_body(body).build()?;
        self.request(request).await
    }

    /// Sends an HTTP request to the SKY API.
    ///
    /// Returns `Ok(None)` without sending anything when the client is
    /// disabled, and for 204 and empty-bodied success responses.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - The request fails validation (`InvalidRequest`)
    /// - The transport fails (`Network`)
    /// - The service answers with an error status (`Token`, `Validation`, `Api`)
    /// - A success body is not JSON (`InvalidJson`)
    pub async fn request(
        &self,
        request: HttpRequest,
    ) -> Result<Option<serde_json::Value>, HttpError> {
        if !self.enabled {
            tracing::debug!(
                "Client disabled, skipping {} {}",
                request.http_method,
                request.path
            );
            return Ok(None);
        }

        request.verify()?;

        let url = self
            .base_url
            .join(&request.path)
            .ok_or_else(|| InvalidHttpRequestError::InvalidPath {
                path: request.path.clone(),
            })?;
        let headers = self.prepare_headers(&request)?;

        tracing::info!("{} Request: {}", request.http_method, url);

        let mut req_builder = self
            .client
            .request(request.http_method.to_reqwest(), url)
            .headers(headers);

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            tracing::debug!("PAYLOAD: {}", body);
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let text = res.text().await?;

        tracing::debug!("{} Response: {} {}", request.http_method, code, text);

        let response = HttpResponse::new(code, res_headers, text);

        for hook in &self.response_hooks {
            hook.on_response(&request, &response);
        }

        map_response(request.http_method, response)
    }

    /// Merges default, per-request and authentication headers, in that order
    /// of increasing precedence.
    pub(crate) fn prepare_headers(
        &self,
        request: &HttpRequest,
    ) -> Result<HeaderMap, InvalidHttpRequestError> {
        let mut headers = self.default_headers.clone();

        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                let invalid = || InvalidHttpRequestError::InvalidHeader { name: key.clone() };
                let name = HeaderName::from_bytes(key.as_bytes()).map_err(|_| invalid())?;
                let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
                headers.insert(name, value);
            }
        }

        self.auth.apply(&mut headers)?;
        Ok(headers)
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

/// Library default headers, used when no request headers are configured.
fn library_default_headers(user_agent_prefix: Option<&str>) -> HeaderMap {
    let prefix = user_agent_prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
    let rust_version = env!("CARGO_PKG_RUST_VERSION");
    let user_agent = format!("{prefix}SKY API Rust Library v{SDK_VERSION} | Rust {rust_version}");

    let mut headers = HeaderMap::new();
    let user_agent = HeaderValue::from_str(&user_agent)
        .unwrap_or_else(|_| HeaderValue::from_static("SKY API Rust Library"));
    headers.insert(USER_AGENT, user_agent);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Maps a response to the dispatch result for `method`.
///
/// POST distinguishes 401 ([`HttpError::Token`]) from every other error
/// status ([`HttpError::Validation`]); the other verbs report any error
/// status as [`HttpError::Api`]. Error bodies that are not JSON are carried
/// as the raw response.
pub(crate) fn map_response(
    method: HttpMethod,
    response: HttpResponse,
) -> Result<Option<serde_json::Value>, HttpError> {
    let code = response.code;

    if response.is_no_content() {
        return Ok(None);
    }

    if response.is_ok() {
        return response
            .json()
            .map_err(|source| HttpError::InvalidJson { code, source });
    }

    let error = ApiResponseError::from_response(response);
    Err(match method {
        HttpMethod::Post if code == 401 => HttpError::Token(error),
        HttpMethod::Post => HttpError::Validation(error),
        HttpMethod::Get | HttpMethod::Put | HttpMethod::Patch | HttpMethod::Delete => {
            HttpError::Api(error)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, SubscriptionKey};
    use crate::clients::ErrorBody;
    use serde_json::json;

    fn create_test_config() -> SkyApiConfig {
        SkyApiConfig::builder()
            .access_token(AccessToken::new("test-access-token").unwrap())
            .subscription_key(SubscriptionKey::new("test-subscription-key").unwrap())
            .build()
            .unwrap()
    }

    fn response(code: u16, text: &str) -> HttpResponse {
        HttpResponse::new(code, HashMap::new(), text.to_string())
    }

    #[test]
    fn test_client_construction_uses_sky_endpoint() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(client.base_url().as_ref(), "https://api.sky.blackbaud.com/");
        assert!(client.enabled());
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        let user_agent = client.default_headers()[USER_AGENT].to_str().unwrap();
        assert!(user_agent.contains("SKY API Rust Library v"));
        assert!(user_agent.contains("Rust"));
        assert_eq!(client.default_headers()[ACCEPT], "application/json");
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = SkyApiConfig::builder()
            .access_token(AccessToken::new("t").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers()[USER_AGENT].to_str().unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_configured_headers_replace_library_defaults() {
        let config = SkyApiConfig::builder()
            .access_token(AccessToken::new("t").unwrap())
            .request_header("X-App", "crm-sync")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        assert_eq!(client.default_headers().len(), 1);
        assert_eq!(client.default_headers()["x-app"], "crm-sync");
    }

    #[test]
    fn test_prepare_headers_auth_overrides_every_layer() {
        let config = SkyApiConfig::builder()
            .access_token(AccessToken::new("real-token").unwrap())
            .subscription_key(SubscriptionKey::new("real-key").unwrap())
            .request_header("Authorization", "Bearer configured")
            .request_header("Content-Type", "text/xml")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, "x")
            .header("authorization", "Bearer per-request")
            .header("bb-api-subscription-key", "per-request-key")
            .header("X-Correlation-Id", "42")
            .build()
            .unwrap();

        let headers = client.prepare_headers(&request).unwrap();

        assert_eq!(headers.get_all("authorization").iter().count(), 1);
        assert_eq!(headers["authorization"], "Bearer real-token");
        assert_eq!(headers["bb-api-subscription-key"], "real-key");
        assert_eq!(headers["content-type"], "application/json");
        assert_eq!(headers["x-correlation-id"], "42");
    }

    #[test]
    fn test_prepare_headers_rejects_invalid_extra_header() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, "x")
            .header("bad header", "v")
            .build()
            .unwrap();

        assert!(matches!(
            client.prepare_headers(&request),
            Err(InvalidHttpRequestError::InvalidHeader { name }) if name == "bad header"
        ));
    }

    #[test]
    fn test_map_response_no_content_returns_none_for_every_method() {
        for method in [
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Patch,
            HttpMethod::Delete,
        ] {
            // Body is never parsed for 204.
            let result = map_response(method, response(204, "not json")).unwrap();
            assert_eq!(result, None);
        }
    }

    #[test]
    fn test_map_response_success_returns_decoded_body() {
        let body = json!({"id": 7, "last": "Pipas"});
        let result = map_response(HttpMethod::Get, response(200, &body.to_string())).unwrap();
        assert_eq!(result, Some(body));
    }

    #[test]
    fn test_map_response_success_with_invalid_json() {
        let result = map_response(HttpMethod::Put, response(200, "OK"));
        assert!(matches!(result, Err(HttpError::InvalidJson { code: 200, .. })));
    }

    #[test]
    fn test_map_response_post_401_is_token_error() {
        let result = map_response(
            HttpMethod::Post,
            response(401, r#"{"error":"invalid_token"}"#),
        );
        match result {
            Err(HttpError::Token(e)) => {
                assert_eq!(e.code, 401);
                assert_eq!(e.body, ErrorBody::Json(json!({"error": "invalid_token"})));
            }
            other => panic!("Expected Token error, got: {other:?}"),
        }
    }

    #[test]
    fn test_map_response_post_other_errors_are_validation_errors() {
        for code in [400, 402, 403, 404, 409, 422, 500, 503] {
            let result = map_response(HttpMethod::Post, response(code, r#"{"error":"x"}"#));
            assert!(
                matches!(&result, Err(HttpError::Validation(e)) if e.code == code),
                "status {code} mapped to {result:?}"
            );
        }
    }

    #[test]
    fn test_map_response_other_methods_map_every_error_to_api_error() {
        for method in [
            HttpMethod::Get,
            HttpMethod::Put,
            HttpMethod::Patch,
            HttpMethod::Delete,
        ] {
            for code in [400, 401, 403, 404, 500] {
                let result = map_response(method, response(code, r#"{"error":"x"}"#));
                assert!(
                    matches!(&result, Err(HttpError::Api(e)) if e.code == code),
                    "{method} {code} mapped to {result:?}"
                );
            }
        }
    }

    #[test]
    fn test_map_response_non_json_error_body_is_wrapped() {
        let result = map_response(HttpMethod::Post, response(400, "Bad Request"));
        match result {
            Err(HttpError::Validation(e)) => {
                let raw = e.body.as_raw().unwrap();
                assert_eq!(raw.code, 400);
                assert_eq!(raw.text, "Bad Request");
            }
            other => panic!("Expected Validation error, got: {other:?}"),
        }
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
