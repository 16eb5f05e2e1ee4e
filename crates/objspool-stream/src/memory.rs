//! In-memory stream for tests and in-process replay.

use crate::error::{StreamError, StreamResult};
use crate::traits::RecordStream;

/// An in-memory implementation of [`RecordStream`].
///
/// Writes append to an internal buffer; reads consume from the same buffer
/// front-to-back. `rewind` resets the read cursor so freshly written bytes
/// can be replayed.
#[derive(Debug, Default)]
pub struct MemoryStream {
    buf: Vec<u8>,
    pos: usize,
    pushback: Option<u8>,
}

impl MemoryStream {
    /// Create an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stream positioned at the start of the given bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            buf: bytes.into(),
            pos: 0,
            pushback: None,
        }
    }

    /// All bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the stream, returning its buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Current read position, adjusted for a held lookahead byte.
    pub fn position(&self) -> usize {
        self.pos.saturating_sub(usize::from(self.pushback.is_some()))
    }

    /// Reset the read cursor to the start of the buffer.
    pub fn rewind(&mut self) {
        self.pos = 0;
        self.pushback = None;
    }
}

impl RecordStream for MemoryStream {
    fn read_byte(&mut self) -> StreamResult<u8> {
        if let Some(byte) = self.pushback.take() {
            return Ok(byte);
        }
        let byte = *self.buf.get(self.pos).ok_or(StreamError::EndOfStream)?;
        self.pos += 1;
        Ok(byte)
    }

    fn unread_byte(&mut self, byte: u8) -> StreamResult<()> {
        if self.pushback.is_some() {
            return Err(StreamError::PushbackOccupied);
        }
        self.pushback = Some(byte);
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> StreamResult<()> {
        self.buf.push(byte);
        Ok(())
    }

    fn write_all(&mut self, bytes: &[u8]) -> StreamResult<()> {
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    fn record_begin(&mut self) -> StreamResult<()> {
        Ok(())
    }

    fn record_end(&mut self) -> StreamResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_rewind_then_read() {
        let mut s = MemoryStream::new();
        s.write_all(b"abc").unwrap();
        s.write_byte(b'd').unwrap();
        s.rewind();
        assert_eq!(s.read_byte().unwrap(), b'a');
        assert_eq!(s.read_byte().unwrap(), b'b');
        assert_eq!(s.read_byte().unwrap(), b'c');
        assert_eq!(s.read_byte().unwrap(), b'd');
        assert!(matches!(s.read_byte(), Err(StreamError::EndOfStream)));
    }

    #[test]
    fn end_of_stream_is_sticky() {
        let mut s = MemoryStream::from_bytes(b"x".to_vec());
        s.read_byte().unwrap();
        assert!(matches!(s.read_byte(), Err(StreamError::EndOfStream)));
        assert!(matches!(s.read_byte(), Err(StreamError::EndOfStream)));
    }

    #[test]
    fn unread_byte_is_returned_first() {
        let mut s = MemoryStream::from_bytes(b"ab".to_vec());
        let first = s.read_byte().unwrap();
        s.unread_byte(first).unwrap();
        assert_eq!(s.read_byte().unwrap(), b'a');
        assert_eq!(s.read_byte().unwrap(), b'b');
    }

    #[test]
    fn second_unread_rejected() {
        let mut s = MemoryStream::from_bytes(b"ab".to_vec());
        s.read_byte().unwrap();
        s.unread_byte(b'a').unwrap();
        assert!(matches!(
            s.unread_byte(b'z'),
            Err(StreamError::PushbackOccupied)
        ));
    }

    #[test]
    fn position_accounts_for_pushback() {
        let mut s = MemoryStream::from_bytes(b"abc".to_vec());
        s.read_byte().unwrap();
        assert_eq!(s.position(), 1);
        s.unread_byte(b'a').unwrap();
        assert_eq!(s.position(), 0);
    }

    #[test]
    fn unread_past_end_allows_final_replay() {
        let mut s = MemoryStream::from_bytes(b"a".to_vec());
        let byte = s.read_byte().unwrap();
        s.unread_byte(byte).unwrap();
        assert_eq!(s.read_byte().unwrap(), b'a');
        assert!(matches!(s.read_byte(), Err(StreamError::EndOfStream)));
    }
}
