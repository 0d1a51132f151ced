//! Entity façades for SKY API resources.
//!
//! Each façade implements [`SkyEntity`](crate::rest::SkyEntity) and shares the
//! owning client's [`HttpClient`](crate::clients::HttpClient).
//!
//! - [`Constituent`]: `constituent/v1/constituents`

mod constituent;

pub use constituent::Constituent;
