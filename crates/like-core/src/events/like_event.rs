//! Like events - the envelope published for every effective like transition
//!
//! Binary layout (bincode 1.x, fixed-width little endian):
//!
//! ```text
//! LikeEvent        { version: u8, method: i32, payload: Vec<u8> }
//! LikeActionRecord { user_id: i64, target_id: i64, mood: i32, deleted: bool }
//! ```
//!
//! `payload` holds an encoded `LikeActionRecord`. Consumers reject envelopes
//! with an unknown `version`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::{LikeAction, Mood};
use crate::value_objects::{IdError, TargetId, UserId};

/// Kind of transition an event records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum RequestMethod {
    Add = 1,
    Update = 2,
    Delete = 3,
}

impl RequestMethod {
    /// Wire value
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Decode a wire value
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            1 => Some(Self::Add),
            2 => Some(Self::Update),
            3 => Some(Self::Delete),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialized form of a LikeAction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeActionRecord {
    pub user_id: i64,
    pub target_id: i64,
    pub mood: i32,
    pub deleted: bool,
}

impl From<&LikeAction> for LikeActionRecord {
    fn from(action: &LikeAction) -> Self {
        Self {
            user_id: action.user_id.into_inner(),
            target_id: action.target_id.into_inner(),
            mood: action.mood.as_i32(),
            deleted: action.deleted,
        }
    }
}

impl TryFrom<LikeActionRecord> for LikeAction {
    type Error = IdError;

    fn try_from(record: LikeActionRecord) -> Result<Self, Self::Error> {
        // A zero mood on the wire means the default mood
        let mood = match Mood::from_i32(record.mood) {
            Mood::Unset => Mood::Like,
            mood => mood,
        };

        Ok(Self {
            user_id: UserId::try_from(record.user_id)?,
            target_id: TargetId::new(record.target_id),
            mood,
            deleted: record.deleted,
        })
    }
}

/// Errors encoding or decoding a like event
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("unsupported event version: {0}")]
    UnsupportedVersion(u8),

    #[error("unknown request method: {0}")]
    UnknownMethod(i32),

    #[error("invalid payload: {0}")]
    InvalidPayload(#[from] IdError),
}

/// Envelope placed on the event channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeEvent {
    pub version: u8,
    pub method: i32,
    pub payload: Vec<u8>,
}

impl LikeEvent {
    /// Current envelope version
    pub const VERSION: u8 = 1;

    /// Build an event carrying a snapshot of `action`
    pub fn from_action(method: RequestMethod, action: &LikeAction) -> Result<Self, CodecError> {
        let payload = bincode::serialize(&LikeActionRecord::from(action))?;
        Ok(Self {
            version: Self::VERSION,
            method: method.as_i32(),
            payload,
        })
    }

    /// Transition kind carried by this event
    pub fn method(&self) -> Result<RequestMethod, CodecError> {
        RequestMethod::from_i32(self.method).ok_or(CodecError::UnknownMethod(self.method))
    }

    /// Decode the payload as a raw record
    pub fn record(&self) -> Result<LikeActionRecord, CodecError> {
        Ok(bincode::deserialize(&self.payload)?)
    }

    /// Decode the payload as a LikeAction
    pub fn action(&self) -> Result<LikeAction, CodecError> {
        Ok(LikeAction::try_from(self.record()?)?)
    }

    /// Encode the whole envelope
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode an envelope, rejecting unknown versions and methods
    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        let event: Self = bincode::deserialize(bytes)?;
        if event.version != Self::VERSION {
            return Err(CodecError::UnsupportedVersion(event.version));
        }
        event.method()?;
        Ok(event)
    }
}
