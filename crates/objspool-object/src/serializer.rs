//! Serialization helpers composing the wire encoder from a class
//! descriptor.
//!
//! Serialization stays in the hands of each class: it opens a record, writes
//! the properties it chooses in the order it chooses, and closes the record.
//! The engine contributes only the framing.

use objspool_stream::RecordStream;
use objspool_types::PropValue;
use objspool_wire::{encoder, RecordType};

use crate::class::ObjectClass;
use crate::error::ObjectResult;

/// Open a stream record and write a full-object header for `class`.
pub fn begin_object(stream: &mut dyn RecordStream, class: &dyn ObjectClass) -> ObjectResult<()> {
    encoder::begin_record(
        stream,
        RecordType::Object,
        class.class_id(),
        class.version(),
        class.class_name(),
    )?;
    Ok(())
}

/// Open a stream record and write a property-bag header for `class`.
///
/// A property bag carries some of an object's properties, not necessarily
/// all; it can only be applied to an instance the caller already owns.
pub fn begin_prop_bag(stream: &mut dyn RecordStream, class: &dyn ObjectClass) -> ObjectResult<()> {
    encoder::begin_record(
        stream,
        RecordType::PropBag,
        class.class_id(),
        class.version(),
        class.class_name(),
    )?;
    Ok(())
}

/// Write one property line; an absent value writes nothing and succeeds.
pub fn write_property(
    stream: &mut dyn RecordStream,
    name: &str,
    value: Option<&PropValue>,
) -> ObjectResult<()> {
    encoder::write_property(stream, name, value)?;
    Ok(())
}

/// Write the record trailer and close the stream record.
pub fn end_record(stream: &mut dyn RecordStream) -> ObjectResult<()> {
    encoder::end_record(stream)?;
    Ok(())
}
