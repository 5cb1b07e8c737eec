//! LikeAction entity - one user's like on one target

use crate::entities::Mood;
use crate::value_objects::{TargetId, UserId};

/// LikeAction entity
///
/// At most one exists per `(user_id, target_id)` pair. Unliking flips
/// `deleted` instead of removing the row, so a later like on the same pair
/// reuses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeAction {
    pub user_id: UserId,
    pub target_id: TargetId,
    pub mood: Mood,
    pub deleted: bool,
}

impl LikeAction {
    /// Create a new, active LikeAction
    pub fn new(user_id: UserId, target_id: TargetId, mood: Mood) -> Self {
        Self {
            user_id,
            target_id,
            mood,
            deleted: false,
        }
    }

    /// Check if the like is currently in effect
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.deleted
    }

    /// Check if the like carries a specific mood
    #[inline]
    pub fn has_mood(&self, mood: Mood) -> bool {
        self.mood == mood
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserId {
        UserId::try_from(1001).unwrap()
    }

    #[test]
    fn test_like_action_creation() {
        let action = LikeAction::new(user(), TargetId::new(55), Mood::Like);
        assert_eq!(action.user_id, user());
        assert_eq!(action.target_id, TargetId::new(55));
        assert!(action.is_active());
        assert!(action.has_mood(Mood::Like));
        assert!(!action.has_mood(Mood::Sad));
    }
}
