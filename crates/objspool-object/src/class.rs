use std::fmt;

use objspool_types::{ClassId, Property};

use crate::error::ObjectResult;
use crate::instance::SpoolObject;

/// Lifecycle dispatch for one registered object class.
///
/// `construct` and `set_property` are required of every class. The
/// construction finalizer is optional: a class that has one overrides both
/// `finalize_construction` and `has_construction_finalizer`, and the
/// deserializer consults the probe before dispatching, so the default
/// no-op body is never invoked by mistake.
///
/// Destruction needs no slot here: concrete instances are destroyed by
/// `Drop` when their box goes away.
pub trait ObjectClass: Send + Sync {
    /// Registered class id, unique per class for the process lifetime.
    fn class_id(&self) -> ClassId;

    /// Constant class name written into record headers.
    fn class_name(&self) -> &'static str;

    /// Declared serialization version of this class.
    fn version(&self) -> u32;

    /// Produce a fresh, empty instance.
    fn construct(&self) -> ObjectResult<Box<dyn SpoolObject>>;

    /// Apply one decoded property to an instance of this class.
    fn set_property(&self, obj: &mut dyn SpoolObject, prop: Property) -> ObjectResult<()>;

    /// Post-population hook, run once after all properties are applied.
    fn finalize_construction(&self, obj: &mut dyn SpoolObject) -> ObjectResult<()> {
        let _ = obj;
        Ok(())
    }

    /// Whether this class supplies a construction finalizer.
    fn has_construction_finalizer(&self) -> bool {
        false
    }
}

impl fmt::Debug for dyn ObjectClass + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectClass")
            .field("class_id", &self.class_id())
            .field("class_name", &self.class_name())
            .finish()
    }
}
