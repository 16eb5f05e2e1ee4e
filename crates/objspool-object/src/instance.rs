use std::any::Any;
use std::fmt;

use objspool_types::ClassId;

/// Common header embedded in every persistable object.
///
/// Concrete classes hold an `ObjectCore` alongside their own state and
/// expose it through [`SpoolObject::core`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectCore {
    class_id: ClassId,
    name: Option<String>,
}

impl ObjectCore {
    /// Create the header for an instance of the given class.
    pub fn new(class_id: ClassId) -> Self {
        Self {
            class_id,
            name: None,
        }
    }

    /// Class this instance belongs to.
    pub fn class_id(&self) -> ClassId {
        self.class_id
    }

    /// Optional display name assigned to this instance.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Replace the display name. The previous name, if any, is dropped.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }
}

/// A typed object instance driven through registry dispatch.
///
/// The deserializer never touches type-specific state directly; it hands
/// instances to [`ObjectClass`] methods, and each class downcasts its own
/// instances through the `Any` accessors. There is no destruct operation:
/// dropping the box destroys the instance.
///
/// [`ObjectClass`]: crate::class::ObjectClass
pub trait SpoolObject: Any + Send {
    /// Shared object header.
    fn core(&self) -> &ObjectCore;

    /// Mutable access to the shared object header.
    fn core_mut(&mut self) -> &mut ObjectCore;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl dyn SpoolObject {
    /// Class id this instance was constructed under.
    pub fn class_id(&self) -> ClassId {
        self.core().class_id()
    }
}

impl fmt::Debug for dyn SpoolObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpoolObject")
            .field("core", self.core())
            .finish()
    }
}
