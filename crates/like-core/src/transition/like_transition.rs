//! Like state machine
//!
//! Pure decisions over the current row for a `(user, target)` pair:
//!
//! | Current            | Request       | Result            | Event  |
//! |--------------------|---------------|-------------------|--------|
//! | absent             | like(m)       | `Create`          | Add    |
//! | active, mood m     | like(m)       | `NoOp`            | none   |
//! | active, mood m     | like(m' != m) | `Update`          | Update |
//! | deleted            | like(any)     | `Update`          | Update |
//! | active             | unlike        | `MarkDeleted`     | Delete |
//! | deleted            | unlike        | `AlreadyDeleted`  | none   |
//! | absent             | unlike        | `NoSuchReaction`  | none   |

use crate::entities::{LikeAction, Mood};
use crate::events::RequestMethod;
use crate::value_objects::{TargetId, UserId};

/// Outcome of a like request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LikeTransition {
    /// No row exists yet
    Create { mood: Mood },
    /// The row already says exactly this
    NoOp(LikeAction),
    /// Change the mood and clear `deleted`
    Update { previous: LikeAction, mood: Mood },
}

impl LikeTransition {
    /// Event method to publish, `None` for a no-op
    pub fn method(&self) -> Option<RequestMethod> {
        match self {
            Self::Create { .. } => Some(RequestMethod::Add),
            Self::NoOp(_) => None,
            Self::Update { .. } => Some(RequestMethod::Update),
        }
    }

    /// Project the row as it looks once this transition is applied
    pub fn apply(self, user_id: UserId, target_id: TargetId) -> LikeAction {
        match self {
            Self::Create { mood } => LikeAction::new(user_id, target_id, mood),
            Self::NoOp(current) => current,
            Self::Update { previous, mood } => LikeAction {
                mood,
                deleted: false,
                ..previous
            },
        }
    }
}

/// Decide what a like request does to the current row
///
/// `requested` must already be resolved; see `Mood::resolve_or_default`.
pub fn decide(existing: Option<&LikeAction>, requested: Mood) -> LikeTransition {
    match existing {
        None => LikeTransition::Create { mood: requested },
        Some(action) if action.is_active() && action.has_mood(requested) => {
            LikeTransition::NoOp(action.clone())
        }
        Some(action) => LikeTransition::Update {
            previous: action.clone(),
            mood: requested,
        },
    }
}

/// Why an unlike request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UnlikeRejection {
    #[error("no like to remove")]
    NoSuchReaction,

    #[error("like already removed")]
    AlreadyDeleted,
}

impl UnlikeRejection {
    /// Stable identifier for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoSuchReaction => "NO_SUCH_REACTION",
            Self::AlreadyDeleted => "ALREADY_DELETED",
        }
    }
}

/// Outcome of an unlike request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnlikeDecision {
    /// Snapshot of the row with `deleted` set
    MarkDeleted(LikeAction),
    Rejected(UnlikeRejection),
}

/// Decide what an unlike request does to the current row
pub fn decide_unlike(existing: Option<LikeAction>) -> UnlikeDecision {
    match existing {
        None => UnlikeDecision::Rejected(UnlikeRejection::NoSuchReaction),
        Some(action) if action.deleted => UnlikeDecision::Rejected(UnlikeRejection::AlreadyDeleted),
        Some(action) => UnlikeDecision::MarkDeleted(LikeAction {
            deleted: true,
            ..action
        }),
    }
}
