//! The [`SkyEntity`] trait shared by entity façades.
//!
//! An entity façade groups the path metadata of one SKY API resource with
//! convenience methods that call the shared [`HttpClient`]. Adding a new
//! resource means declaring the three constants and writing the methods:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sky_api::clients::{HttpClient, HttpError};
//! use sky_api::rest::SkyEntity;
//!
//! pub struct Gift {
//!     client: Arc<HttpClient>,
//! }
//!
//! impl SkyEntity for Gift {
//!     const ENTITY: &'static str = "gift";
//!     const ENDPOINT: &'static str = "gifts";
//!
//!     fn http_client(&self) -> &HttpClient {
//!         &self.client
//!     }
//! }
//!
//! impl Gift {
//!     pub async fn get(&self, id: u64) -> Result<Option<serde_json::Value>, HttpError> {
//!         self.http_client().get(&self.build_path([id]), None).await
//!     }
//! }
//! ```

use std::fmt::Display;

use crate::clients::HttpClient;
use crate::config::ApiVersion;
use crate::rest::path::build_path;

/// Path metadata and client access for an entity façade.
pub trait SkyEntity {
    /// The entity (service) segment, e.g. `"constituent"`.
    const ENTITY: &'static str;

    /// The endpoint segment, e.g. `"constituents"`.
    const ENDPOINT: &'static str;

    /// The version segment.
    const VERSION: ApiVersion = ApiVersion::V1;

    /// Returns the client requests are dispatched through.
    fn http_client(&self) -> &HttpClient;

    /// Builds `<entity>/<version>/<endpoint>[/<token>...]`.
    fn build_path<I>(&self, tokens: I) -> String
    where
        I: IntoIterator,
        I::Item: Display,
    {
        build_path(Self::ENTITY, &Self::VERSION, Self::ENDPOINT, tokens)
    }
}
