//! UserProfile - what a listing shows about a user who liked something

use crate::value_objects::UserId;

/// Public profile of a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserId,
    pub nickname: String,
    pub avatar: Option<String>,
}

impl UserProfile {
    /// Create a profile without an avatar
    pub fn new(id: UserId, nickname: impl Into<String>) -> Self {
        Self {
            id,
            nickname: nickname.into(),
            avatar: None,
        }
    }

    /// Get avatar URL or the default avatar URL
    pub fn avatar_url(&self) -> String {
        match &self.avatar {
            Some(hash) => format!("/avatars/{}/{}.png", self.id, hash),
            None => "/avatars/default.png".to_string(),
        }
    }
}
