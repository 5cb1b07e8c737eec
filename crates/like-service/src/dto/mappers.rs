//! Entity to DTO mappers

use like_core::entities::{LikeAction, UserProfile};

use super::responses::{LikeActionResponse, UserProfileResponse};

impl From<&LikeAction> for LikeActionResponse {
    fn from(action: &LikeAction) -> Self {
        Self {
            user_id: action.user_id.to_string(),
            target_id: action.target_id.to_string(),
            mood: action.mood,
            deleted: action.deleted,
        }
    }
}

impl From<LikeAction> for LikeActionResponse {
    fn from(action: LikeAction) -> Self {
        Self::from(&action)
    }
}

impl From<&UserProfile> for UserProfileResponse {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            nickname: profile.nickname.clone(),
            avatar: profile.avatar.clone(),
            avatar_url: profile.avatar_url(),
        }
    }
}

impl From<UserProfile> for UserProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self::from(&profile)
    }
}
