//! # like-core
//!
//! Domain layer containing the like entity, mood vocabulary, the like/unlike
//! state machine, the event envelope, and the port traits.
//! This crate has zero dependencies on infrastructure (database, broker, web framework).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod transition;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{LikeAction, Mood, UserProfile};
pub use error::DomainError;
pub use events::{CodecError, LikeActionRecord, LikeEvent, RequestMethod};
pub use traits::{
    EventPublisher, LikeActionPage, LikeActionRepository, LikeQuery, RepoResult,
    UserProfileRepository, DEFAULT_LIST_LIMIT,
};
pub use transition::{decide, decide_unlike, LikeTransition, UnlikeDecision, UnlikeRejection};
pub use value_objects::{IdError, ParticipantKind, TargetId, UserId};
