//! Validated newtype wrappers for configuration values.
//!
//! Credentials are checked on construction and masked in debug output so
//! they never end up in logs.

use crate::error::ConfigError;
use reqwest::Url;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Default SKY API host.
pub const SKY_API_ENDPOINT: &str = "https://api.sky.blackbaud.com/";

/// A validated OAuth2 access token.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `AccessToken(*****)`.
///
/// # Example
///
/// ```rust
/// use sky_api::AccessToken;
///
/// let token = AccessToken::new("eyJhbGciOi").unwrap();
/// assert_eq!(token.as_ref(), "eyJhbGciOi");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated `Bb-Api-Subscription-Key` value.
///
/// The key identifies the calling application and is masked in debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct SubscriptionKey(String);

impl SubscriptionKey {
    /// Creates a new validated subscription key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySubscriptionKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptySubscriptionKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for SubscriptionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SubscriptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SubscriptionKey(*****)")
    }
}

/// A validated base URL that relative request paths are joined against.
///
/// The URL must be absolute with an `http` or `https` scheme. A trailing
/// slash is added when missing so that joining `constituent/v1/...` keeps
/// every existing path segment.
///
/// # Example
///
/// ```rust
/// use sky_api::BaseUrl;
///
/// let url = BaseUrl::new("https://proxy.example.com/sky").unwrap();
/// assert_eq!(url.as_ref(), "https://proxy.example.com/sky/");
///
/// let joined = url.join("constituent/v1/constituents/7").unwrap();
/// assert_eq!(joined.as_str(), "https://proxy.example.com/sky/constituent/v1/constituents/7");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL cannot be parsed, is
    /// not `http`/`https`, or cannot carry a path.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let invalid = || ConfigError::InvalidBaseUrl { url: raw.clone() };

        let mut parsed = Url::parse(raw.trim()).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(invalid());
        }
        if !parsed.path().ends_with('/') {
            let path = format!("{}/", parsed.path());
            parsed.set_path(&path);
        }

        Ok(Self(parsed))
    }

    /// Resolves a relative request path against this base URL.
    ///
    /// Uses URL-join semantics: a path starting with `/` replaces the base
    /// path, anything else is appended to it.
    ///
    /// Returns `None` if the joined URL cannot be parsed.
    #[must_use]
    pub fn join(&self, path: &str) -> Option<Url> {
        self.0.join(path).ok()
    }

    /// Returns the host name of the base URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.0.host_str()
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(Url::parse(SKY_API_ENDPOINT).expect("SKY_API_ENDPOINT is a valid URL"))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_rejects_empty_string() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
        assert!(matches!(
            AccessToken::new("   "),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("super-secret-token").unwrap();
        let debug_output = format!("{token:?}");
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_subscription_key_masks_value_in_debug() {
        let key = SubscriptionKey::new("sub-key-123").unwrap();
        assert_eq!(format!("{key:?}"), "SubscriptionKey(*****)");
        assert_eq!(key.as_ref(), "sub-key-123");
    }

    #[test]
    fn test_subscription_key_rejects_empty_string() {
        assert!(matches!(
            SubscriptionKey::new(""),
            Err(ConfigError::EmptySubscriptionKey)
        ));
    }

    #[test]
    fn test_default_base_url_is_sky_endpoint() {
        let url = BaseUrl::default();
        assert_eq!(url.as_ref(), SKY_API_ENDPOINT);
        assert_eq!(url.host_name(), Some("api.sky.blackbaud.com"));
    }

    #[test]
    fn test_base_url_adds_trailing_slash() {
        let url = BaseUrl::new("http://127.0.0.1:8080/sky").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:8080/sky/");
    }

    #[test]
    fn test_base_url_join_appends_relative_path() {
        let url = BaseUrl::default();
        let joined = url.join("constituent/v1/constituents/7").unwrap();
        assert_eq!(
            joined.as_str(),
            "https://api.sky.blackbaud.com/constituent/v1/constituents/7"
        );
    }

    #[test]
    fn test_base_url_join_absolute_path_replaces_base_path() {
        let url = BaseUrl::new("https://proxy.example.com/sky/").unwrap();
        let joined = url.join("/constituent/v1/constituents").unwrap();
        assert_eq!(
            joined.as_str(),
            "https://proxy.example.com/constituent/v1/constituents"
        );
    }

    #[test]
    fn test_base_url_rejects_invalid_values() {
        assert!(matches!(
            BaseUrl::new("not a url"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            BaseUrl::new("ftp://files.example.com/"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            BaseUrl::new("mailto:someone@example.com"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_base_url_serde_round_trip() {
        let url = BaseUrl::new("https://proxy.example.com/sky").unwrap();
        let json = serde_json::to_string(&url).unwrap();
        assert_eq!(json, r#""https://proxy.example.com/sky/""#);
        let back: BaseUrl = serde_json::from_str(&json).unwrap();
        assert_eq!(back, url);
    }
}
