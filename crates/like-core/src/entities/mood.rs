//! Mood vocabulary - the classifier carried by a like

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mood of a like
///
/// `Unset` is the wire zero value. A like that has been created never carries
/// it: requests resolve missing or unknown tokens to `Like` before any
/// transition is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum Mood {
    #[default]
    Unset = 0,
    Like = 1,
    Love = 2,
    Laugh = 3,
    Sad = 4,
    Angry = 5,
}

impl Mood {
    /// Every mood a caller may request
    pub const NAMED: [Mood; 5] = [Mood::Like, Mood::Love, Mood::Laugh, Mood::Sad, Mood::Angry];

    /// Token used in requests and responses
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Like => "like",
            Self::Love => "love",
            Self::Laugh => "laugh",
            Self::Sad => "sad",
            Self::Angry => "angry",
        }
    }

    /// Wire value
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Decode a wire value; unknown numbers decode as `Unset`
    pub fn from_i32(value: i32) -> Self {
        Self::NAMED
            .into_iter()
            .find(|mood| mood.as_i32() == value)
            .unwrap_or(Self::Unset)
    }

    /// Look up a named mood by token
    pub fn from_token(token: &str) -> Option<Self> {
        Self::NAMED.into_iter().find(|mood| mood.as_str() == token)
    }

    /// Resolve a requested mood, falling back to `Like`
    ///
    /// An unrecognized token is indistinguishable from a missing one; neither
    /// is an error.
    pub fn resolve_or_default(token: Option<&str>) -> Self {
        token.and_then(Self::from_token).unwrap_or(Self::Like)
    }

    /// Resolve a listing filter; missing or unknown tokens mean every mood
    pub fn filter_from_token(token: Option<&str>) -> Option<Self> {
        token.and_then(Self::from_token)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
