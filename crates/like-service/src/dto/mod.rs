//! Data transfer objects for API requests and responses
//!
//! - Request parameters with validation
//! - Response DTOs for serializing API outputs
//! - Mappers from domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{parse_raw_id, LikeParams};
pub use responses::{
    HealthChecks, HealthResponse, LikeActionResponse, ReactorPage, ReadinessResponse,
    UserProfileResponse,
};
