//! Identifiers for participants and like targets
//!
//! Raw identifiers share a single 64-bit space. The low byte of a participant
//! identifier carries a set of kind tags; only identifiers tagged as users may
//! act on a target. `UserId` can only be built through that check, so holding
//! one is proof the tag was validated.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Participant kind tags packed into the low byte of an identifier
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ParticipantKind: u8 {
        /// Regular user account
        const USER  = 1 << 0;
        /// Group account
        const GROUP = 1 << 1;
        /// Public page
        const PAGE  = 1 << 2;
    }
}

impl ParticipantKind {
    /// Read the kind tags from a raw identifier
    #[inline]
    pub fn of(raw: i64) -> Self {
        Self::from_bits_truncate((raw & 0xFF) as u8)
    }
}

/// Error when building an identifier from raw input
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("invalid identifier format")]
    InvalidFormat,

    #[error("identifier {0} is not a user")]
    NotAUser(i64),
}

/// Identifier of a user allowed to like things
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i64);

impl UserId {
    /// Get the raw identifier
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse and validate from a decimal string
    pub fn parse(s: &str) -> Result<Self, IdError> {
        let raw = s.trim().parse::<i64>().map_err(|_| IdError::InvalidFormat)?;
        Self::try_from(raw)
    }
}

impl TryFrom<i64> for UserId {
    type Error = IdError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        if ParticipantKind::of(raw).contains(ParticipantKind::USER) {
            Ok(Self(raw))
        } else {
            Err(IdError::NotAUser(raw))
        }
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserId::parse(s)
    }
}

/// Identifier of the content being liked; opaque to this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TargetId(i64);

impl TargetId {
    /// Create a TargetId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw identifier
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse from a decimal string
    pub fn parse(s: &str) -> Result<Self, IdError> {
        s.trim()
            .parse::<i64>()
            .map(TargetId)
            .map_err(|_| IdError::InvalidFormat)
    }
}

impl From<i64> for TargetId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<TargetId> for i64 {
    fn from(id: TargetId) -> Self {
        id.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TargetId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetId::parse(s)
    }
}

// Serialize as string for JSON (JavaScript BigInt safety)
impl Serialize for UserId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl Serialize for TargetId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = deserialize_raw_id(deserializer)?;
        UserId::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for TargetId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_raw_id(deserializer).map(TargetId)
    }
}

// Accepts either a string or an integer
fn deserialize_raw_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct RawIdVisitor;

    impl Visitor<'_> for RawIdVisitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer identifier")
        }

        fn visit_i64<E>(self, value: i64) -> Result<i64, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<i64, E>
        where
            E: de::Error,
        {
            i64::try_from(value).map_err(|_| de::Error::custom("identifier out of range"))
        }

        fn visit_str<E>(self, value: &str) -> Result<i64, E>
        where
            E: de::Error,
        {
            value
                .parse::<i64>()
                .map_err(|_| de::Error::custom("invalid identifier string"))
        }
    }

    deserializer.deserialize_any(RawIdVisitor)
}
