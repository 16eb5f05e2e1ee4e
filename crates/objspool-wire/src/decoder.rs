//! Record decoder: incremental parsing and corruption recovery.
//!
//! Every function reads the stream one byte at a time and surfaces the
//! first error it encounters. Only [`resync`] ever skips bytes.

use tracing::debug;

use objspool_stream::RecordStream;
use objspool_types::{ClassId, LogTime, PropKind, Property, PropValue};

use crate::error::{WireError, WireResult};
use crate::{RecordType, COOKIE_HEADER, COOKIE_PROP};

/// Parsed record header: class id and declared class version.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordHeader {
    pub class_id: ClassId,
    pub version: u32,
}

/// Decode a signed decimal number terminated by `:`.
///
/// The terminator is consumed. An empty digit sequence is
/// [`WireError::InvalidNumber`]; a terminator other than `:` is
/// [`WireError::InvalidDelimiter`].
pub fn read_number(stream: &mut dyn RecordStream) -> WireResult<i64> {
    let mut c = stream.read_byte()?;
    let negative = if c == b'-' {
        c = stream.read_byte()?;
        true
    } else {
        false
    };

    if !c.is_ascii_digit() {
        return Err(WireError::InvalidNumber(c));
    }

    let mut value: i64 = 0;
    while c.is_ascii_digit() {
        value = value.wrapping_mul(10).wrapping_add(i64::from(c - b'0'));
        c = stream.read_byte()?;
    }

    if c != b':' {
        return Err(WireError::InvalidDelimiter(c));
    }

    Ok(if negative { value.wrapping_neg() } else { value })
}

/// Decode exactly `len` raw bytes followed by a `:` terminator.
///
/// The length bounds the payload, not a terminator, so the bytes may
/// contain anything. A stream that ends mid-payload propagates
/// `EndOfStream` rather than yielding a truncated string.
pub fn read_string(stream: &mut dyn RecordStream, len: usize) -> WireResult<Vec<u8>> {
    // A corrupt length must not pre-allocate unbounded memory; the read
    // loop below still honors `len` exactly.
    let mut bytes = Vec::with_capacity(len.min(64 * 1024));
    for _ in 0..len {
        bytes.push(stream.read_byte()?);
    }
    let c = stream.read_byte()?;
    if c != b':' {
        return Err(WireError::InvalidDelimiter(c));
    }
    Ok(bytes)
}

/// Decode a colon-joined timestamp value.
///
/// Aborts on the first failed sub-field; there are no partial timestamps.
pub fn read_timestamp(stream: &mut dyn RecordStream) -> WireResult<LogTime> {
    let time_type = read_number(stream)? as i32;
    let year = read_number(stream)? as i32;
    let month = read_number(stream)? as i32;
    let day = read_number(stream)? as i32;
    let hour = read_number(stream)? as i32;
    let minute = read_number(stream)? as i32;
    let second = read_number(stream)? as i32;
    let sec_frac = read_number(stream)? as i32;
    let sec_frac_precision = read_number(stream)? as i32;

    // The offset sign is a single character, not a number.
    let offset_sign = stream.read_byte()?;
    let c = stream.read_byte()?;
    if c != b':' {
        return Err(WireError::InvalidDelimiter(c));
    }

    let offset_hour = read_number(stream)? as i32;
    let offset_minute = read_number(stream)? as i32;

    Ok(LogTime {
        time_type,
        year,
        month,
        day,
        hour,
        minute,
        second,
        sec_frac,
        sec_frac_precision,
        offset_sign: char::from(offset_sign),
        offset_hour,
        offset_minute,
    })
}

/// Parse a record header line of the given record type.
///
/// Validates byte by byte: header cookie, three record-type bytes, the
/// `:1:` serializer-version marker, then the class id and version numbers.
/// The trailing class name exists for human readers and is skipped up to
/// and including the newline, not validated.
pub fn read_header(
    stream: &mut dyn RecordStream,
    rec_type: RecordType,
) -> WireResult<RecordHeader> {
    if stream.read_byte()? != COOKIE_HEADER {
        return Err(WireError::InvalidHeader);
    }
    for &expected in rec_type.tag() {
        if stream.read_byte()? != expected {
            return Err(WireError::InvalidHeaderRecType);
        }
    }
    if stream.read_byte()? != b':' {
        return Err(WireError::InvalidHeader);
    }
    if stream.read_byte()? != b'1' {
        return Err(WireError::InvalidHeaderVersion);
    }
    if stream.read_byte()? != b':' {
        return Err(WireError::InvalidHeaderVersion);
    }

    let raw_id = read_number(stream)?;
    let raw_version = read_number(stream)?;
    let class_id = ClassId::new(raw_id)?;
    let version =
        u32::try_from(raw_version).map_err(|_| WireError::InvalidHeaderVersion)?;

    // Skip the class name suffix.
    while stream.read_byte()? != b'\n' {}

    Ok(RecordHeader { class_id, version })
}

/// Parse one property line.
///
/// Returns `Ok(None)` when the next line is not a property line. The
/// single lookahead byte is pushed back onto the stream, so the caller can
/// go on to parse the trailer. This is loop termination, not failure.
pub fn read_property(stream: &mut dyn RecordStream) -> WireResult<Option<Property>> {
    let cookie = stream.read_byte()?;
    if cookie != COOKIE_PROP {
        stream.unread_byte(cookie)?;
        return Ok(None);
    }

    let mut name = Vec::new();
    let mut c = stream.read_byte()?;
    while c != b':' {
        name.push(c);
        c = stream.read_byte()?;
    }
    let name = String::from_utf8(name).map_err(|_| WireError::InvalidPropertyFrame)?;

    let kind = PropKind::from_tag(read_number(stream)?)?;
    let len = usize::try_from(read_number(stream)?)
        .map_err(|_| WireError::InvalidPropertyFrame)?;

    let value = match kind {
        PropKind::String => PropValue::String(read_string(stream, len)?),
        PropKind::Number => PropValue::Number(read_number(stream)?),
        PropKind::Timestamp => PropValue::Timestamp(read_timestamp(stream)?),
        // The absent tag is never written; a line carrying it is broken.
        PropKind::None => return Err(WireError::InvalidPropertyFrame),
    };

    if stream.read_byte()? != b'\n' {
        return Err(WireError::InvalidPropertyFrame);
    }

    Ok(Some(Property { name, value }))
}

/// Require the exact trailer byte sequence `>End\n.\n`.
pub fn read_trailer(stream: &mut dyn RecordStream) -> WireResult<()> {
    for &expected in b">End\n.\n" {
        if stream.read_byte()? != expected {
            return Err(WireError::InvalidTrailer);
        }
    }
    Ok(())
}

/// Scan forward past corrupted bytes to the next plausible record start.
///
/// Stops as soon as a newline is immediately followed by the header
/// cookie, pushing the cookie back so header parsing restarts exactly
/// there. Invoked at a position already on a record boundary, it consumes
/// nothing of the header. `EndOfStream` during the scan propagates: the
/// store is exhausted and recovery has failed.
pub fn resync(stream: &mut dyn RecordStream) -> WireResult<()> {
    let mut at_line_start = true;
    let mut skipped = 0usize;
    loop {
        let c = stream.read_byte()?;
        if c == b'\n' {
            at_line_start = true;
        } else if at_line_start && c == COOKIE_HEADER {
            stream.unread_byte(c)?;
            debug!(skipped, "re-synchronized to a record boundary");
            return Ok(());
        } else {
            at_line_start = false;
        }
        skipped += 1;
    }
}
