//! Port traits

mod ports;

pub use ports::{
    EventPublisher, LikeActionPage, LikeActionRepository, LikeQuery, RepoResult,
    UserProfileRepository, DEFAULT_LIST_LIMIT,
};
