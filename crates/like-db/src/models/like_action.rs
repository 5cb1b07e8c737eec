//! Like action database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for like_actions table
#[derive(Debug, Clone, FromRow)]
pub struct LikeActionModel {
    pub user_id: i64,
    pub target_id: i64,
    pub mood: i32,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
