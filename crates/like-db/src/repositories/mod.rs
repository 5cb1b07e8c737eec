//! Repository implementations
//!
//! PostgreSQL implementations of the lookup ports defined in like-core.

mod error;
mod like_action;
mod user_profile;

pub use error::map_db_error;
pub use like_action::PgLikeActionRepository;
pub use user_profile::PgUserProfileRepository;
