//! SKY API version definitions.
//!
//! Every SKY API service is addressed as `<entity>/<version>/<endpoint>`.
//! This module provides the [`ApiVersion`] enum used for the version segment.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// SKY API version path segment.
///
/// # Example
///
/// ```rust
/// use sky_api::ApiVersion;
///
/// let version: ApiVersion = "v1".parse().unwrap();
/// assert_eq!(version, ApiVersion::V1);
/// assert_eq!(version.to_string(), "v1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    /// Version 1, the only version the SKY API services publish.
    #[default]
    V1,
    /// Custom version segment for services that publish something else.
    Custom(String),
}

impl ApiVersion {
    /// Returns the version segment as it appears in request paths.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V1 => "v1",
            Self::Custom(version) => version,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let version = s.trim();
        if version.is_empty() || version.contains('/') {
            return Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            });
        }
        match version.to_ascii_lowercase().as_str() {
            "v1" => Ok(Self::V1),
            _ => Ok(Self::Custom(version.to_string())),
        }
    }
}

impl Serialize for ApiVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
