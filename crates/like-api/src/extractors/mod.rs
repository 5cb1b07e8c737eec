//! Axum extractors for request handling

mod params;
mod path;

pub use params::LikeRequestParams;
pub use path::TargetPath;
