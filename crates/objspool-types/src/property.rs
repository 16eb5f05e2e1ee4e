use serde::{Deserialize, Serialize};

use crate::value::{PropKind, PropValue};

/// A single named value exchanged during (de)serialization.
///
/// Properties arrive in wire order; the decoder performs no deduplication
/// and classes see them exactly as written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: PropValue,
}

impl Property {
    /// Create a property from a name and value.
    pub fn new(name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Wire type tag of the carried value.
    pub fn kind(&self) -> PropKind {
        self.value.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_value() {
        assert_eq!(Property::new("size", 10i64).kind(), PropKind::Number);
        assert_eq!(Property::new("tag", "x").kind(), PropKind::String);
    }

    #[test]
    fn serde_roundtrip() {
        let prop = Property::new("msg", "payload");
        let json = serde_json::to_string(&prop).unwrap();
        let parsed: Property = serde_json::from_str(&json).unwrap();
        assert_eq!(prop, parsed);
    }
}
