//! Entity façades and path building for the SKY API.
//!
//! - [`build_path`]: Joins `<entity>/<version>/<endpoint>` and path tokens
//! - [`SkyEntity`]: Path metadata and client access shared by façades
//! - [`resources`]: The implemented façades

mod path;
mod resource;
pub mod resources;

pub use path::build_path;
pub use resource::SkyEntity;
