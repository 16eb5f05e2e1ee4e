//! Class registry and object lifecycle orchestration.
//!
//! Concrete object types plug into the engine by implementing
//! [`ObjectClass`] (the lifecycle dispatch: construct, set property,
//! optionally finalize) and registering it in a [`ClassRegistry`] during
//! single-threaded startup. The deserializer then revives instances from a
//! record stream knowing nothing about the concrete types beyond their
//! registered class ids.

pub mod class;
pub mod deserializer;
pub mod error;
pub mod instance;
pub mod registry;
pub mod serializer;

pub use class::ObjectClass;
pub use deserializer::{deserialize_into, deserialize_object, FixupFn};
pub use error::{ObjectError, ObjectResult};
pub use instance::{ObjectCore, SpoolObject};
pub use registry::ClassRegistry;
pub use serializer::{begin_object, begin_prop_bag, end_record, write_property};
