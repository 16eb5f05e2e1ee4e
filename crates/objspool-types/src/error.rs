use thiserror::Error;

/// Errors produced by value-model operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("class id {0} outside valid range")]
    ClassIdOutOfRange(i64),

    #[error("unknown property type tag: {0}")]
    UnknownPropKind(i64),
}
