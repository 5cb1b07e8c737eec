//! Service layer error types
//!
//! Every like operation fails with exactly one of these. Nothing here is
//! retried internally; `is_retryable` only tells the caller whether trying
//! again could help.

use like_common::AppError;
use like_core::{DomainError, IdError, UnlikeRejection};
use std::fmt;
use validator::ValidationErrors;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Malformed identifier or parameter
    InvalidInput(String),

    /// Identifier is not tagged as a user
    InvalidActor(i64),

    /// The lookup port failed; nothing is known about the current row
    LookupFailure(DomainError),

    /// Unlike on a missing or already removed like
    TransitionRejected(UnlikeRejection),

    /// The event channel did not accept the event; the transition is not applied
    PublishFailure(DomainError),

    /// Misconfiguration or encoding failure
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::InvalidActor(raw) => write!(f, "Invalid user ID: {raw}"),
            Self::LookupFailure(e) => write!(f, "Lookup failed: {e}"),
            Self::TransitionRejected(reason) => write!(f, "{reason}"),
            Self::PublishFailure(e) => write!(f, "{e}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LookupFailure(e) | Self::PublishFailure(e) => Some(e),
            Self::TransitionRejected(reason) => Some(reason),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Wrap a lookup port failure
    pub fn lookup(err: DomainError) -> Self {
        Self::LookupFailure(err)
    }

    /// Wrap an event channel failure
    pub fn publish(err: DomainError) -> Self {
        Self::PublishFailure(err)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Check if the caller may succeed by trying again unchanged
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::LookupFailure(_) | Self::PublishFailure(_))
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) | Self::InvalidActor(_) => 400,
            Self::TransitionRejected(UnlikeRejection::NoSuchReaction) => 404,
            Self::TransitionRejected(UnlikeRejection::AlreadyDeleted) => 409,
            Self::LookupFailure(_) | Self::PublishFailure(_) => 503,
            Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::InvalidActor(_) => "INVALID_ACTOR",
            Self::LookupFailure(_) => "LOOKUP_FAILED",
            Self::TransitionRejected(reason) => reason.code(),
            Self::PublishFailure(_) => "PUBLISH_FAILED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidInput(msg) => Self::InvalidInput(msg),
            DomainError::InvalidActor(raw) => Self::InvalidActor(raw),
            DomainError::DatabaseError(_) => Self::LookupFailure(err),
            DomainError::PublishFailed(_) => Self::PublishFailure(err),
            DomainError::Codec(e) => Self::Internal(e.to_string()),
            DomainError::InternalError(msg) => Self::Internal(msg),
        }
    }
}

impl From<IdError> for ServiceError {
    fn from(err: IdError) -> Self {
        DomainError::from(err).into()
    }
}

impl From<UnlikeRejection> for ServiceError {
    fn from(reason: UnlikeRejection) -> Self {
        Self::TransitionRejected(reason)
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(err: ValidationErrors) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(msg) => AppError::InvalidInput(msg),
            ServiceError::InvalidActor(raw) => AppError::Domain(DomainError::InvalidActor(raw)),
            ServiceError::LookupFailure(e) => AppError::Database(e.to_string()),
            ServiceError::TransitionRejected(reason) => AppError::Validation(reason.to_string()),
            ServiceError::PublishFailure(e) => AppError::Broker(e.to_string()),
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
