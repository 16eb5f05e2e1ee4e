use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::timestamp::LogTime;

/// Wire type tag of a property value.
///
/// Tag codes are persisted in property lines and must stay stable across
/// deployments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropKind {
    /// Absent value. Never written to the wire; the encoder skips the
    /// whole property line instead.
    None,
    /// Length-prefixed raw bytes.
    String,
    /// Signed decimal integer.
    Number,
    /// Colon-joined syslog timestamp.
    Timestamp,
}

impl PropKind {
    /// Numeric wire tag.
    pub fn tag(&self) -> i64 {
        match self {
            Self::None => 0,
            Self::String => 1,
            Self::Number => 2,
            Self::Timestamp => 3,
        }
    }

    /// Parse a numeric wire tag.
    pub fn from_tag(tag: i64) -> Result<Self, TypeError> {
        match tag {
            0 => Ok(Self::None),
            1 => Ok(Self::String),
            2 => Ok(Self::Number),
            3 => Ok(Self::Timestamp),
            other => Err(TypeError::UnknownPropKind(other)),
        }
    }
}

/// A decoded property value.
///
/// String payloads are raw bytes: the wire format length-prefixes them, so
/// embedded delimiters and newlines are legal and preserved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropValue {
    String(Vec<u8>),
    Number(i64),
    Timestamp(LogTime),
}

impl PropValue {
    /// Wire type tag of this value.
    pub fn kind(&self) -> PropKind {
        match self {
            Self::String(_) => PropKind::String,
            Self::Number(_) => PropKind::Number,
            Self::Timestamp(_) => PropKind::Timestamp,
        }
    }

    /// Borrow the string payload, if this is a string value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::String(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// The numeric payload, if this is a number value.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The timestamp payload, if this is a timestamp value.
    pub fn as_timestamp(&self) -> Option<&LogTime> {
        match self {
            Self::Timestamp(t) => Some(t),
            _ => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        Self::String(s.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for PropValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self::String(bytes)
    }
}

impl From<i64> for PropValue {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<LogTime> for PropValue {
    fn from(t: LogTime) -> Self {
        Self::Timestamp(t)
    }
}
