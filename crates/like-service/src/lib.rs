//! # like-service
//!
//! Application layer: the like use cases, their dependency container, error
//! taxonomy and DTOs. Only the port traits from like-core are used here;
//! concrete adapters are injected at bootstrap.

pub mod dto;
pub mod services;

pub use services::{LikeService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult};
