//! Domain entities - core business objects

mod like_action;
mod mood;
mod user_profile;

pub use like_action::LikeAction;
pub use mood::Mood;
pub use user_profile::UserProfile;
