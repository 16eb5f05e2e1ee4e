use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Upper bound (exclusive) on registrable class ids.
///
/// Class ids are persisted in record headers, so this bound may grow across
/// releases but must never shrink.
pub const MAX_CLASS_IDS: u16 = 32;

/// Identifier of a registered object class.
///
/// A small positive integer, unique per class, valid in
/// `[1, MAX_CLASS_IDS)`. The constructor validates the range, so a
/// `ClassId` value is always usable as a registry slot index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClassId(u16);

impl ClassId {
    /// Create a class id, validating the range.
    pub fn new(raw: i64) -> Result<Self, TypeError> {
        if raw < 1 || raw >= i64::from(MAX_CLASS_IDS) {
            return Err(TypeError::ClassIdOutOfRange(raw));
        }
        Ok(Self(raw as u16))
    }

    /// Raw numeric id as written into record headers.
    pub fn get(&self) -> u16 {
        self.0
    }

    /// Slot index into the registry table.
    pub fn index(&self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({})", self.0)
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
