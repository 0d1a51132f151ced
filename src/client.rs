//! The top-level SKY API client.

use std::collections::HashMap;
use std::sync::Arc;

use crate::clients::{HttpClient, HttpError, HttpRequest};
use crate::config::{SkyApiConfig, SkyApiConfigBuilder};
use crate::rest::resources::Constituent;

/// Entry point aggregating every entity façade over one shared client.
///
/// The generic verb methods are available for endpoints that have no façade
/// yet; paths are relative to the base URL.
///
/// # Example
///
/// ```rust,ignore
/// use sky_api::{AccessToken, SkyApi, SubscriptionKey};
///
/// let api = SkyApi::new(
///     SkyApi::builder()
///         .access_token(AccessToken::new("access-token")?)
///         .subscription_key(SubscriptionKey::new("subscription-key")?)
///         .build()?,
/// )?;
///
/// let constituent = api.constituent().get(7).await?;
/// let gifts = api.get("gift/v1/gifts", None).await?;
/// ```
#[derive(Clone, Debug)]
pub struct SkyApi {
    http_client: Arc<HttpClient>,
    constituent: Constituent,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SkyApi>();
};

impl SkyApi {
    /// Shortcut for [`SkyApiConfig::builder`].
    #[must_use]
    pub fn builder() -> SkyApiConfigBuilder {
        SkyApiConfig::builder()
    }

    /// Creates the client and attaches every entity façade.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the transport cannot be initialized.
    pub fn new(config: SkyApiConfig) -> Result<Self, HttpError> {
        let http_client = Arc::new(HttpClient::new(&config)?);
        tracing::debug!(
            "SKY API client created for {} (enabled: {})",
            http_client.base_url(),
            http_client.enabled()
        );

        Ok(Self {
            constituent: Constituent::new(Arc::clone(&http_client)),
            http_client,
        })
    }

    /// The constituent façade.
    #[must_use]
    pub const fn constituent(&self) -> &Constituent {
        &self.constituent
    }

    /// The shared HTTP client.
    #[must_use]
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request to a path relative to the base URL.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<Option<serde_json::Value>, HttpError> {
        self.http_client.get(path, query).await
    }

    /// Sends a POST request.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn post(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Option<serde_json::Value>, HttpError> {
        self.http_client.post(path, body).await
    }

    /// Sends a PUT request.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn put(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Option<serde_json::Value>, HttpError> {
        self.http_client.put(path, body).await
    }

    /// Sends a PATCH request.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn patch(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Option<serde_json::Value>, HttpError> {
        self.http_client.patch(path, body).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn delete(&self, path: &str) -> Result<Option<serde_json::Value>, HttpError> {
        self.http_client.delete(path).await
    }

    /// Sends a fully built request.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn request(
        &self,
        request: HttpRequest,
    ) -> Result<Option<serde_json::Value>, HttpError> {
        self.http_client.request(request).await
    }
}
