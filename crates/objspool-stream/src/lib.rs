//! Byte stream abstraction consumed by the objspool codecs.
//!
//! The codecs never touch files or sockets directly. They speak to a
//! [`RecordStream`]: an ordered byte sink/source with exactly one byte of
//! read lookahead and record-boundary bookkeeping hooks. Two backends are
//! provided: [`MemoryStream`] for tests and in-process replay, and
//! [`FileStream`] for durable spool files.

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::{StreamError, StreamResult};
pub use file::{FileStream, FileStreamConfig, SyncMode};
pub use memory::MemoryStream;
pub use traits::RecordStream;
