//! Authentication for SKY API requests.
//!
//! SKY API requests are authorized with an OAuth2 bearer token identifying
//! the user and a `Bb-Api-Subscription-Key` identifying the application.
//! Acquiring the token (authorization code flow) happens outside this crate;
//! see <https://developer.blackbaud.com/skyapi/docs/authorization/auth-code-flow>.
//!
//! # Overview
//!
//! - [`SkyApiAuth`]: Writes the authentication headers onto outgoing requests
//!
//! # Example
//!
//! ```rust
//! use reqwest::header::HeaderMap;
//! use sky_api::auth::SkyApiAuth;
//! use sky_api::{AccessToken, SubscriptionKey};
//!
//! let auth = SkyApiAuth::new(
//!     AccessToken::new("token").unwrap(),
//!     Some(SubscriptionKey::new("key").unwrap()),
//! );
//!
//! let mut headers = HeaderMap::new();
//! auth.apply(&mut headers).unwrap();
//! assert_eq!(headers["authorization"], "Bearer token");
//! ```

mod sky_auth;

pub use sky_auth::{
    SkyApiAuth, AUTHORIZATION_HEADER, CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE,
    SUBSCRIPTION_KEY_HEADER,
};
