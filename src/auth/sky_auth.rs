//! Bearer token and subscription key header attachment.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue};

use crate::clients::InvalidHttpRequestError;
use crate::config::{AccessToken, SubscriptionKey};

/// Header carrying the OAuth2 bearer token.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Header carrying the application's subscription key.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Bb-Api-Subscription-Key";

/// Content type header name.
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// The only content type the SKY API accepts.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Request signer for the SKY API.
///
/// [`apply`](Self::apply) unconditionally sets `Authorization`,
/// `Bb-Api-Subscription-Key` and `Content-Type`, overwriting any value the
/// caller supplied for those names. Header names are matched
/// case-insensitively.
///
/// There is no refresh or expiry check: a stale token surfaces as a 401 from
/// the service.
///
/// # Security
///
/// `Debug` output never includes the token or the key.
#[derive(Clone)]
pub struct SkyApiAuth {
    access_token: AccessToken,
    subscription_key: Option<SubscriptionKey>,
}

impl SkyApiAuth {
    /// Creates a new signer from the access token and optional subscription key.
    #[must_use]
    pub const fn new(access_token: AccessToken, subscription_key: Option<SubscriptionKey>) -> Self {
        Self {
            access_token,
            subscription_key,
        }
    }

    /// Returns the subscription key, if any.
    #[must_use]
    pub const fn subscription_key(&self) -> Option<&SubscriptionKey> {
        self.subscription_key.as_ref()
    }

    /// Writes the authentication headers into `headers`.
    ///
    /// Without a subscription key, a caller-supplied `Bb-Api-Subscription-Key`
    /// is removed so the header is only ever sent with the configured value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidHeader`] if the token or key
    /// contains bytes that are not allowed in a header value.
    pub fn apply(&self, headers: &mut HeaderMap) -> Result<(), InvalidHttpRequestError> {
        let bearer = format!("Bearer {}", self.access_token.as_ref());
        let mut authorization =
            HeaderValue::from_str(&bearer).map_err(|_| InvalidHttpRequestError::InvalidHeader {
                name: AUTHORIZATION_HEADER.to_string(),
            })?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION_HEADER, authorization);

        match &self.subscription_key {
            Some(key) => {
                let mut value = HeaderValue::from_str(key.as_ref()).map_err(|_| {
                    InvalidHttpRequestError::InvalidHeader {
                        name: SUBSCRIPTION_KEY_HEADER.to_string(),
                    }
                })?;
                value.set_sensitive(true);
                headers.insert(SUBSCRIPTION_KEY_HEADER, value);
            }
            None => {
                headers.remove(SUBSCRIPTION_KEY_HEADER);
            }
        }

        headers.insert(
            CONTENT_TYPE_HEADER,
            HeaderValue::from_static(JSON_CONTENT_TYPE),
        );

        Ok(())
    }
}

impl fmt::Debug for SkyApiAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkyApiAuth")
            .field("access_token", &self.access_token)
            .field("subscription_key", &self.subscription_key)
            .finish()
    }
}
