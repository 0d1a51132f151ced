//! Configuration types for the SKY API client.
//!
//! # Overview
//!
//! - [`SkyApiConfig`]: Immutable client settings
//! - [`SkyApiConfigBuilder`]: Builder for [`SkyApiConfig`]
//! - [`AccessToken`]: Validated OAuth2 bearer token, masked in debug output
//! - [`SubscriptionKey`]: Validated `Bb-Api-Subscription-Key`, masked in debug output
//! - [`BaseUrl`]: Validated base URL request paths are joined against
//! - [`ApiVersion`]: The version path segment (`v1`)
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use sky_api::{AccessToken, SkyApiConfig, SubscriptionKey};
//!
//! let config = SkyApiConfig::builder()
//!     .access_token(AccessToken::new("access-token").unwrap())
//!     .subscription_key(SubscriptionKey::new("subscription-key").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert!(config.enabled());
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, BaseUrl, SubscriptionKey, SKY_API_ENDPOINT};
pub use version::ApiVersion;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::clients::ResponseHook;
use crate::error::ConfigError;

/// Configuration for the SKY API client.
///
/// # Thread Safety
///
/// `SkyApiConfig` is `Clone`, `Send`, and `Sync`. Hooks are shared through
/// [`Arc`], so cloning a configuration never duplicates hook state.
#[derive(Clone, Debug)]
pub struct SkyApiConfig {
    access_token: AccessToken,
    subscription_key: Option<SubscriptionKey>,
    base_url: BaseUrl,
    enabled: bool,
    timeout: Option<Duration>,
    request_headers: Option<HeaderMap>,
    response_hooks: Vec<Arc<dyn ResponseHook>>,
    user_agent_prefix: Option<String>,
}

impl SkyApiConfig {
    /// Creates a new builder for constructing a `SkyApiConfig`.
    #[must_use]
    pub fn builder() -> SkyApiConfigBuilder {
        SkyApiConfigBuilder::new()
    }

    /// Returns the OAuth2 access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the subscription key, if configured.
    #[must_use]
    pub const fn subscription_key(&self) -> Option<&SubscriptionKey> {
        self.subscription_key.as_ref()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns whether requests are sent at all.
    ///
    /// A disabled client turns every dispatch into a no-op returning nothing.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the transport timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the configured request headers.
    ///
    /// `None` means the library defaults are used.
    #[must_use]
    pub const fn request_headers(&self) -> Option<&HeaderMap> {
        self.request_headers.as_ref()
    }

    /// Returns the configured response hooks.
    #[must_use]
    pub fn response_hooks(&self) -> &[Arc<dyn ResponseHook>] {
        &self.response_hooks
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SkyApiConfig>();
};

/// Builder for constructing [`SkyApiConfig`] instances.
///
/// The only required field is `access_token`.
///
/// # Defaults
///
/// - `subscription_key`: `None`
/// - `base_url`: [`SKY_API_ENDPOINT`]
/// - `enabled`: `true`
/// - `timeout`: `None` (transport default)
/// - `request_headers`: `None` (library defaults `User-Agent` and `Accept`)
/// - `response_hooks`: empty
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct SkyApiConfigBuilder {
    access_token: Option<AccessToken>,
    subscription_key: Option<SubscriptionKey>,
    base_url: Option<BaseUrl>,
    enabled: Option<bool>,
    timeout: Option<Duration>,
    request_headers: Option<HashMap<String, String>>,
    response_hooks: Vec<Arc<dyn ResponseHook>>,
    user_agent_prefix: Option<String>,
}

impl SkyApiConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the OAuth2 access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the `Bb-Api-Subscription-Key`.
    #[must_use]
    pub fn subscription_key(mut self, key: SubscriptionKey) -> Self {
        self.subscription_key = Some(key);
        self
    }

    /// Overrides the base URL, e.g. to route through a proxy.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Enables or disables all network calls.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Sets the transport timeout applied to every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replaces the library default request headers.
    ///
    /// The authentication headers are always applied on top of these.
    #[must_use]
    pub fn request_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.request_headers = Some(headers);
        self
    }

    /// Adds a single request header, starting from an empty set.
    #[must_use]
    pub fn request_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request_headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Registers a hook invoked with every response.
    #[must_use]
    pub fn response_hook(mut self, hook: Arc<dyn ResponseHook>) -> Self {
        self.response_hooks.push(hook);
        self
    }

    /// Sets the user agent prefix for the default `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`SkyApiConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` is not
    /// set, or [`ConfigError::InvalidHeader`] if a request header name or
    /// value is not valid HTTP.
    pub fn build(self) -> Result<SkyApiConfig, ConfigError> {
        let access_token = self.access_token.ok_or(ConfigError::MissingRequiredField {
            field: "access_token",
        })?;

        let request_headers = self
            .request_headers
            .map(|headers| to_header_map(&headers))
            .transpose()?;

        Ok(SkyApiConfig {
            access_token,
            subscription_key: self.subscription_key,
            base_url: self.base_url.unwrap_or_default(),
            enabled: self.enabled.unwrap_or(true),
            timeout: self.timeout,
            request_headers,
            response_hooks: self.response_hooks,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

fn to_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap, ConfigError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let invalid = || ConfigError::InvalidHeader { name: name.clone() };
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
        let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}
