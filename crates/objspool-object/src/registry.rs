use std::sync::Arc;

use tracing::debug;

use objspool_types::{ClassId, MAX_CLASS_IDS};

use crate::class::ObjectClass;
use crate::error::{ObjectError, ObjectResult};

/// Process-lifetime table of registered object classes.
///
/// Populated once during single-threaded startup — `register` takes
/// `&mut self`, so the writer phase cannot overlap with readers — and
/// shared read-only afterwards. Lookups index by class id and never lock.
pub struct ClassRegistry {
    slots: Vec<Option<Arc<dyn ObjectClass>>>,
}

impl ClassRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            slots: vec![None; usize::from(MAX_CLASS_IDS)],
        }
    }

    /// Register a class descriptor under its own id.
    ///
    /// Each id may be registered at most once; a duplicate is a
    /// programming error reported as [`ObjectError::DuplicateClass`].
    pub fn register(&mut self, class: Arc<dyn ObjectClass>) -> ObjectResult<()> {
        let id = class.class_id();
        let slot = &mut self.slots[id.index()];
        if let Some(existing) = slot {
            return Err(ObjectError::DuplicateClass {
                id,
                name: existing.class_name(),
            });
        }
        debug!(class = class.class_name(), id = id.get(), "registered object class");
        *slot = Some(class);
        Ok(())
    }

    /// Look up the descriptor registered under `id`.
    pub fn lookup(&self, id: ClassId) -> ObjectResult<&dyn ObjectClass> {
        self.slots[id.index()]
            .as_deref()
            .ok_or(ObjectError::UnknownClass(id))
    }

    /// Whether a class is registered under `id`.
    pub fn is_registered(&self, id: ClassId) -> bool {
        self.slots[id.index()].is_some()
    }
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}
