//! Response hooks.
//!
//! A [`ResponseHook`] observes every response the client receives, before
//! the status code is mapped to a result or an error. Hooks are registered
//! on [`SkyApiConfigBuilder::response_hook`](crate::SkyApiConfigBuilder::response_hook)
//! and run in registration order.
//!
//! # Example
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use sky_api::clients::{HttpRequest, HttpResponse, ResponseHook};
//!
//! #[derive(Debug, Default)]
//! struct CountErrors(AtomicUsize);
//!
//! impl ResponseHook for CountErrors {
//!     fn on_response(&self, _request: &HttpRequest, response: &HttpResponse) {
//!         if !response.is_ok() {
//!             self.0.fetch_add(1, Ordering::Relaxed);
//!         }
//!     }
//! }
//! ```

use std::fmt;

use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;

/// Observer invoked with each request and its response.
///
/// Hooks cannot alter the response. They are shared across tasks, so
/// implementations must be `Send + Sync`.
pub trait ResponseHook: Send + Sync + fmt::Debug {
    /// Called once per received response.
    fn on_response(&self, request: &HttpRequest, response: &HttpResponse);
}
