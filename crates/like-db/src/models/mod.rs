//! Database models
//!
//! These structs map directly to database tables using SQLx `FromRow`.

mod like_action;
mod user;

pub use like_action::LikeActionModel;
pub use user::UserModel;
