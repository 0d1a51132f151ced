//! Path building for SKY API entities.
//!
//! Every SKY API endpoint lives at `<entity>/<version>/<endpoint>`, followed
//! by zero or more tokens such as a record ID:
//!
//! ```rust
//! use sky_api::rest::build_path;
//! use sky_api::ApiVersion;
//!
//! let path = build_path("constituent", &ApiVersion::V1, "constituents", [7]);
//! assert_eq!(path, "constituent/v1/constituents/7");
//! ```
//!
//! Tokens are rendered through [`Display`] and joined verbatim. Nothing is
//! escaped, so a token containing `/` produces extra path segments.

use std::fmt::Display;

use crate::config::ApiVersion;

/// Joins entity, version, endpoint and tokens with `/`.
#[must_use]
pub fn build_path<I>(entity: &str, version: &ApiVersion, endpoint: &str, tokens: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut path = format!("{entity}/{version}/{endpoint}");
    for token in tokens {
        path.push('/');
        path.push_str(&token.to_string());
    }
    path
}
