use crate::error::StreamResult;

/// Ordered byte sink/source with one byte of read lookahead and
/// record-boundary bookkeeping.
///
/// All implementations must satisfy these invariants:
/// - `read_byte` fails with [`StreamError::EndOfStream`] once the stream is
///   exhausted, and keeps failing on further calls.
/// - `unread_byte` holds exactly one byte; pushing a second byte before an
///   intervening read fails with [`StreamError::PushbackOccupied`]. The
///   pushed-back byte is returned by the next `read_byte`.
/// - `record_begin`/`record_end` bracket one serialized record. Buffering
///   and flush policy hang off these hooks; their meaning is opaque to the
///   codecs driving the stream.
/// - A stream instance serves one logical caller at a time; access from
///   multiple callers must be serialized externally.
///
/// [`StreamError::EndOfStream`]: crate::error::StreamError::EndOfStream
/// [`StreamError::PushbackOccupied`]: crate::error::StreamError::PushbackOccupied
pub trait RecordStream {
    /// Read the next byte.
    fn read_byte(&mut self) -> StreamResult<u8>;

    /// Push back the last byte read, making it the next read's result.
    fn unread_byte(&mut self, byte: u8) -> StreamResult<()>;

    /// Append one byte.
    fn write_byte(&mut self, byte: u8) -> StreamResult<()>;

    /// Append a run of bytes.
    fn write_all(&mut self, bytes: &[u8]) -> StreamResult<()>;

    /// Mark the start of a record.
    fn record_begin(&mut self) -> StreamResult<()>;

    /// Mark the end of a record.
    fn record_end(&mut self) -> StreamResult<()>;
}
