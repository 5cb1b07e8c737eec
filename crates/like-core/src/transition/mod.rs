//! Transition rules for likes and unlikes

mod like_transition;

pub use like_transition::{decide, decide_unlike, LikeTransition, UnlikeDecision, UnlikeRejection};
