//! File-backed stream for durable spool files.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StreamError, StreamResult};
use crate::traits::RecordStream;

/// Flush/sync strategy applied when a record ends.
#[derive(Clone, Debug, Default)]
pub enum SyncMode {
    /// `fsync` after every completed record (safest, highest latency).
    EveryRecord,
    /// Write at record end, rely on OS page-cache buffering (fastest,
    /// least durable).
    #[default]
    OsDefault,
}

/// Configuration for a [`FileStream`].
#[derive(Clone, Debug)]
pub struct FileStreamConfig {
    /// Read buffer capacity in bytes.
    pub buffer_size: usize,
    /// Durability policy at record boundaries.
    pub sync_mode: SyncMode,
}

impl Default for FileStreamConfig {
    fn default() -> Self {
        Self {
            buffer_size: 64 * 1024, // 64 KiB
            sync_mode: SyncMode::default(),
        }
    }
}

/// Buffered file-backed implementation of [`RecordStream`].
///
/// Writes accumulate in memory between `record_begin` and `record_end` and
/// reach the file as one append when the record ends, so the file never
/// holds a partial record ahead of the previous boundary. Reads go through
/// an internal buffer with an explicit offset, independent of the append
/// position.
pub struct FileStream {
    path: PathBuf,
    file: File,
    config: FileStreamConfig,
    rd_buf: Vec<u8>,
    rd_pos: usize,
    rd_offset: u64,
    pushback: Option<u8>,
    wr_buf: Vec<u8>,
}

impl FileStream {
    /// Open (or create) a spool file at the given path.
    pub fn open(path: &Path, config: FileStreamConfig) -> StreamResult<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
            config,
            rd_buf: Vec::new(),
            rd_pos: 0,
            rd_offset: 0,
            pushback: None,
            wr_buf: Vec::new(),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn refill(&mut self) -> StreamResult<()> {
        self.rd_buf.resize(self.config.buffer_size.max(1), 0);
        self.file.seek(SeekFrom::Start(self.rd_offset))?;
        let n = self.file.read(&mut self.rd_buf)?;
        if n == 0 {
            return Err(StreamError::EndOfStream);
        }
        self.rd_buf.truncate(n);
        self.rd_pos = 0;
        self.rd_offset += n as u64;
        Ok(())
    }
}

impl RecordStream for FileStream {
    fn read_byte(&mut self) -> StreamResult<u8> {
        if let Some(byte) = self.pushback.take() {
            return Ok(byte);
        }
        if self.rd_pos == self.rd_buf.len() {
            self.refill()?;
        }
        let byte = self.rd_buf[self.rd_pos];
        self.rd_pos += 1;
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
        self.wr_buf.push(byte);
        Ok(())
    }

    fn write_all(&mut self, bytes: &[u8]) -> StreamResult<()> {
        self.wr_buf.extend_from_slice(bytes);
        Ok(())
    }

    fn record_begin(&mut self) -> StreamResult<()> {
        Ok(())
    }

    fn record_end(&mut self) -> StreamResult<()> {
        if self.wr_buf.is_empty() {
            return Ok(());
        }
        self.file.write_all(&self.wr_buf)?;
        if matches!(self.config.sync_mode, SyncMode::EveryRecord) {
            self.file.sync_all()?;
        }
        debug!(len = self.wr_buf.len(), "record appended to spool file");
        self.wr_buf.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(stream: &mut FileStream) -> Vec<u8> {
        let mut out = Vec::new();
        while let Ok(byte) = stream.read_byte() {
            out.push(byte);
        }
        out
    }

    #[test]
    fn records_append_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spool.osp");

        let mut s = FileStream::open(&path, FileStreamConfig::default()).unwrap();
        s.record_begin().unwrap();
        s.write_all(b"first\n").unwrap();
        s.record_end().unwrap();
        s.record_begin().unwrap();
        s.write_all(b"second\n").unwrap();
        s.record_end().unwrap();
        drop(s);

        let mut s = FileStream::open(&path, FileStreamConfig::default()).unwrap();
        assert_eq!(read_all(&mut s), b"first\nsecond\n");
    }

    #[test]
    fn end_of_stream_on_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.osp");

        let mut s = FileStream::open(&path, FileStreamConfig::default()).unwrap();
        assert!(matches!(s.read_byte(), Err(StreamError::EndOfStream)));
    }

    #[test]
    fn pushback_survives_buffer_refill() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.osp");

        let mut s = FileStream::open(
            &path,
            FileStreamConfig {
                buffer_size: 1,
                ..FileStreamConfig::default()
            },
        )
        .unwrap();
        s.record_begin().unwrap();
        s.write_all(b"xy").unwrap();
        s.record_end().unwrap();

        let first = s.read_byte().unwrap();
        assert_eq!(first, b'x');
        s.unread_byte(first).unwrap();
        assert_eq!(read_all(&mut s), b"xy");
    }

    #[test]
    fn sync_every_record_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sync.osp");

        let mut s = FileStream::open(
            &path,
            FileStreamConfig {
                sync_mode: SyncMode::EveryRecord,
                ..FileStreamConfig::default()
            },
        )
        .unwrap();
        s.record_begin().unwrap();
        s.write_all(b"durable").unwrap();
        s.record_end().unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"durable");
    }

    #[test]
    fn empty_record_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noop.osp");

        let mut s = FileStream::open(&path, FileStreamConfig::default()).unwrap();
        s.record_begin().unwrap();
        s.record_end().unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"");
    }
}
