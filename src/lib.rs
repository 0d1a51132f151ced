//! # SKY API Rust Client
//!
//! A Rust client for v1 of the Blackbaud SKY API.
//! Documentation for the API itself: <https://developer.sky.blackbaud.com/docs/services/>
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`SkyApiConfig`] and [`SkyApiConfigBuilder`]
//! - Validated, debug-masked credentials ([`AccessToken`], [`SubscriptionKey`])
//! - Bearer token and subscription key attachment on every request
//! - An async HTTP client with `get`, `post`, `put`, `patch` and `delete`
//! - Status code mapping to [`HttpError`] kinds
//! - Entity façades, starting with [`rest::resources::Constituent`]
//!
//! ## Quick Start
//!
//! ```rust
//! use sky_api::{AccessToken, SkyApi, SubscriptionKey};
//!
//! let config = SkyApi::builder()
//!     .access_token(AccessToken::new("your-access-token").unwrap())
//!     .subscription_key(SubscriptionKey::new("your-subscription-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let api = SkyApi::new(config).unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! // Through an entity façade
//! let constituent = api.constituent().get(7).await?;
//! assert_eq!(constituent.unwrap()["last"], "Pipas");
//!
//! // Or directly, for endpoints without a façade
//! let gifts = api.get("gift/v1/gifts", None).await?;
//! ```
//!
//! ## Errors
//!
//! - [`ConfigError`]: Raised while building the configuration, e.g. when no
//!   access token is set
//! - [`HttpError::Token`]: 401 on POST
//! - [`HttpError::Validation`]: Any other error status on POST
//! - [`HttpError::Api`]: Any error status on GET, PUT, PATCH or DELETE
//! - [`HttpError::Network`]: Transport failures, passed through unchanged
//!
//! ## Disabling Network Calls
//!
//! A client built with `.enabled(false)` turns every dispatch into a no-op
//! returning `Ok(None)`.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (requests at `info`, payloads and
//! responses at `debug`) and installs no subscriber.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Credentials are validated on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

mod client;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use client::SkyApi;
pub use config::{
    AccessToken, ApiVersion, BaseUrl, SkyApiConfig, SkyApiConfigBuilder, SubscriptionKey,
    SKY_API_ENDPOINT,
};
pub use error::ConfigError;

pub use clients::{
    ApiResponseError, ErrorBody, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, InvalidHttpRequestError, RawResponse, ResponseHook,
};
