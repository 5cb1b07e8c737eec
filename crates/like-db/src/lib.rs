//! # like-db
//!
//! Lookup layer implementing the like-core repository ports with PostgreSQL
//! via SQLx.
//!
//! - Connection pool management and bundled migrations
//! - Database models with SQLx `FromRow` derives
//! - Row → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use like_db::{create_pool, DatabaseConfig, PgLikeActionRepository};
//! use like_core::traits::LikeActionRepository;
//!
//! async fn example(config: &like_common::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from(&config.database)).await?;
//!     let likes = PgLikeActionRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgLikeActionRepository, PgUserProfileRepository};
