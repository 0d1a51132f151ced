//! Constituent entity façade.
//!
//! Constituents are the individuals and organizations that support an
//! organization. All methods return the JSON payload as the service sent it.
//!
//! # Example
//!
//! ```rust,ignore
//! let constituent = api.constituent().get(7).await?;
//! if let Some(constituent) = constituent {
//!     println!("{}", constituent["last"]);
//! }
//! ```

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::Arc;

use crate::clients::{HttpClient, HttpError};
use crate::rest::SkyEntity;

/// Façade for `constituent/v1/constituents`.
#[derive(Clone, Debug)]
pub struct Constituent {
    client: Arc<HttpClient>,
}

impl SkyEntity for Constituent {
    const ENTITY: &'static str = "constituent";
    const ENDPOINT: &'static str = "constituents";

    fn http_client(&self) -> &HttpClient {
        &self.client
    }
}

impl Constituent {
    /// Creates the façade over a shared client.
    #[must_use]
    pub const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Fetches one constituent: `GET constituent/v1/constituents/<id>`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or an error status.
    pub async fn get(
        &self,
        constituent_id: impl Display + Send,
    ) -> Result<Option<serde_json::Value>, HttpError> {
        let path = self.build_path([constituent_id]);
        self.client.get(&path, None).await
    }

    /// Lists constituents, passing `query` through unchanged
    /// (e.g. `limit`, `offset`, `sort`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or an error status.
    pub async fn list(
        &self,
        query: Option<HashMap<String, String>>,
    ) -> Result<Option<serde_json::Value>, HttpError> {
        let path = self.build_path(std::iter::empty::<&str>());
        self.client.get(&path, query).await
    }

    /// Creates a constituent: `POST constituent/v1/constituents`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Token`] on 401, [`HttpError::Validation`] on any
    /// other error status.
    pub async fn create(
        &self,
        body: serde_json::Value,
    ) -> Result<Option<serde_json::Value>, HttpError> {
        let path = self.build_path(std::iter::empty::<&str>());
        self.client.post(&path, Some(body)).await
    }

    /// Partially updates a constituent: `PATCH constituent/v1/constituents/<id>`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or an error status.
    pub async fn update(
        &self,
        constituent_id: impl Display + Send,
        body: serde_json::Value,
    ) -> Result<Option<serde_json::Value>, HttpError> {
        let path = self.build_path([constituent_id]);
        self.client.patch(&path, Some(body)).await
    }

    /// Deletes a constituent: `DELETE constituent/v1/constituents/<id>`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or an error status.
    pub async fn delete(
        &self,
        constituent_id: impl Display + Send,
    ) -> Result<Option<serde_json::Value>, HttpError> {
        let path = self.build_path([constituent_id]);
        self.client.delete(&path).await
    }
}
