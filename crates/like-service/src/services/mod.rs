//! Business logic services
//!
//! Orchestration of the like state machine against the lookup and event
//! channel ports.

pub mod context;
pub mod error;
pub mod like;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use like::{LikeService, MAX_LIST_LIMIT};
