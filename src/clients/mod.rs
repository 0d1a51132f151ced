//! HTTP client types for SKY API communication.
//!
//! This module provides the dispatch layer: every request goes through
//! [`HttpClient`], which signs it, sends it and maps the status code.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client, with `get`/`post`/`put`/`patch`/`delete`
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A received response, before status mapping
//! - [`HttpMethod`]: Supported HTTP methods
//! - [`ResponseHook`]: Observer invoked with every response
//! - [`HttpError`]: Unified error type for dispatch
//!
//! # Example
//!
//! ```rust,ignore
//! use sky_api::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "constituent/v1/constituents")
//!     .query_param("limit", "10")
//!     .build()
//!     .unwrap();
//!
//! let constituents = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Each dispatch sends exactly one request; timeouts and connection
//! reuse are left to the transport.

mod errors;
mod hooks;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{ApiResponseError, ErrorBody, HttpError, InvalidHttpRequestError, RawResponse};
pub use hooks::ResponseHook;
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
