use thiserror::Error;

use objspool_types::ClassId;
use objspool_wire::WireError;

#[derive(Debug, Error)]
pub enum ObjectError {
    /// No class is registered under the given id.
    #[error("no class registered for id {0}")]
    UnknownClass(ClassId),

    /// The id is already taken. Registering twice is a programming error,
    /// never resolved by overwriting.
    #[error("class id {id} already registered as {name}")]
    DuplicateClass { id: ClassId, name: &'static str },

    /// A well-formed record carries a different class than required.
    #[error("record class id {found} does not match expected {expected}")]
    ClassMismatch { expected: ClassId, found: ClassId },

    /// A class rejected a decoded property.
    #[error("invalid property {name}: {reason}")]
    InvalidProperty { name: String, reason: String },

    #[error(transparent)]
    Wire(#[from] WireError),
}

pub type ObjectResult<T> = Result<T, ObjectError>;
