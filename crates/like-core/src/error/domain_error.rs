//! Domain errors - error types for the domain layer and its ports

use thiserror::Error;

use crate::events::CodecError;
use crate::value_objects::IdError;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid user ID: {0}")]
    InvalidActor(i64),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Event publish failed: {0}")]
    PublishFailed(String),

    #[error("Event encoding error: {0}")]
    Codec(#[from] CodecError),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::InvalidActor(_) => "INVALID_ACTOR",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::PublishFailed(_) => "PUBLISH_FAILED",
            Self::Codec(_) => "CODEC_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::InvalidActor(_))
    }
}

impl From<IdError> for DomainError {
    fn from(err: IdError) -> Self {
        match err {
            IdError::NotAUser(raw) => Self::InvalidActor(raw),
            IdError::InvalidFormat => Self::InvalidInput(err.to_string()),
        }
    }
}
