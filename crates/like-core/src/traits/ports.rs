//! Ports - the interfaces the like service needs from the outside world
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{LikeAction, Mood, UserProfile};
use crate::error::DomainError;
use crate::events::LikeEvent;
use crate::value_objects::{TargetId, UserId};

/// Result type for port operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Page size used when a listing does not ask for one
pub const DEFAULT_LIST_LIMIT: u32 = 19;

// ============================================================================
// Like Action Repository
// ============================================================================

/// Filter and size for listing the likes on a target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeQuery {
    /// Only likes with this mood; `None` lists every mood
    pub mood: Option<Mood>,
    pub limit: u32,
}

impl LikeQuery {
    /// Build a query, substituting the default page size for zero
    pub fn new(mood: Option<Mood>, limit: u32) -> Self {
        let limit = if limit == 0 { DEFAULT_LIST_LIMIT } else { limit };
        Self { mood, limit }
    }
}

impl Default for LikeQuery {
    fn default() -> Self {
        Self::new(None, 0)
    }
}

/// One page of likes plus the size of the whole matching set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikeActionPage {
    /// Most recent first, at most `limit` entries
    pub actions: Vec<LikeAction>,
    pub total: i64,
}

#[async_trait]
pub trait LikeActionRepository: Send + Sync {
    /// Find the row for a pair; `None` if no like was ever made
    async fn find_by_participants(
        &self,
        user_id: UserId,
        target_id: TargetId,
    ) -> RepoResult<Option<LikeAction>>;

    /// List active likes on a target, most recent first
    async fn list_by_target(&self, target_id: TargetId, query: LikeQuery)
        -> RepoResult<LikeActionPage>;
}

// ============================================================================
// User Profile Repository
// ============================================================================

#[async_trait]
pub trait UserProfileRepository: Send + Sync {
    /// Find a user's public profile
    async fn find_profile(&self, user_id: UserId) -> RepoResult<Option<UserProfile>>;
}

// ============================================================================
// Event Publisher
// ============================================================================

/// Durable, ordered event channel
///
/// Implementations make exactly one attempt per call and return only after the
/// broker has accepted the event. Failures are `DomainError::PublishFailed`.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, topic: &str, event: &LikeEvent) -> RepoResult<()>;
}
