//! Object lifecycle orchestration: decode, construct, populate, finalize.
//!
//! Header parsing is the one place that absorbs malformed input: a header
//! that fails to parse triggers a recovery scan to the next record
//! boundary, and the loop tries again until a header parses or the stream
//! is exhausted. Errors in the property or trailer stage abort the current
//! record and propagate; the caller decides whether to drain on.

use tracing::warn;

use objspool_stream::RecordStream;
use objspool_types::ClassId;
use objspool_wire::{decoder, RecordHeader, RecordType};

use crate::class::ObjectClass;
use crate::error::{ObjectError, ObjectResult};
use crate::instance::SpoolObject;
use crate::registry::ClassRegistry;

/// Caller-supplied adjustment applied after the property loop and before
/// the construction finalizer. Context travels in the closure's captures.
pub type FixupFn<'a> = dyn FnMut(&mut dyn SpoolObject) -> ObjectResult<()> + 'a;

/// Read one object record and construct a new instance from it.
///
/// The record's class id must equal `expected`; a mismatch on a
/// well-formed header is not a corruption signal and fails without any
/// recovery scan. On any failure after construction the partially built
/// instance is dropped before the error propagates.
pub fn deserialize_object(
    registry: &ClassRegistry,
    stream: &mut dyn RecordStream,
    expected: ClassId,
    fixup: Option<&mut FixupFn<'_>>,
) -> ObjectResult<Box<dyn SpoolObject>> {
    let header = read_header_with_recovery(stream, RecordType::Object)?;
    if header.class_id != expected {
        return Err(ObjectError::ClassMismatch {
            expected,
            found: header.class_id,
        });
    }

    let class = registry.lookup(header.class_id)?;
    let mut obj = class.construct()?;

    apply_record_body(class, obj.as_mut(), stream)?;

    if let Some(fixup) = fixup {
        fixup(obj.as_mut())?;
    }

    if class.has_construction_finalizer() {
        class.finalize_construction(obj.as_mut())?;
    }

    Ok(obj)
}

/// Apply a record of the given kind onto an existing instance.
///
/// The record's class id is checked against the instance's own. No fixup
/// and no finalizer run: the record only patches properties onto an object
/// the caller fully owns. Used for true property bags (`RecordType::PropBag`)
/// and for replaying a full object record onto a pre-existing instance.
pub fn deserialize_into(
    registry: &ClassRegistry,
    obj: &mut dyn SpoolObject,
    stream: &mut dyn RecordStream,
    rec_type: RecordType,
) -> ObjectResult<()> {
    let header = read_header_with_recovery(stream, rec_type)?;
    let own = obj.class_id();
    if header.class_id != own {
        return Err(ObjectError::ClassMismatch {
            expected: own,
            found: header.class_id,
        });
    }

    let class = registry.lookup(own)?;
    apply_record_body(class, obj, stream)
}

/// Parse a header, scanning past corruption until one parses or the
/// stream ends.
fn read_header_with_recovery(
    stream: &mut dyn RecordStream,
    rec_type: RecordType,
) -> ObjectResult<RecordHeader> {
    loop {
        match decoder::read_header(stream, rec_type) {
            Ok(header) => return Ok(header),
            Err(err) => {
                warn!(error = %err, "record header unreadable, scanning for next record");
                decoder::resync(stream)?;
            }
        }
    }
}

fn apply_record_body(
    class: &dyn ObjectClass,
    obj: &mut dyn SpoolObject,
    stream: &mut dyn RecordStream,
) -> ObjectResult<()> {
    while let Some(prop) = decoder::read_property(stream)? {
        class.set_property(obj, prop)?;
    }
    decoder::read_trailer(stream)?;
    Ok(())
}
