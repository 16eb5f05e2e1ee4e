//! Record wire format for serialized objects.
//!
//! Records are newline-delimited text lines, each introduced by a one-byte
//! line cookie:
//!
//! ```text
//! <Obj:1:<classId>:<version>:<className>:\n     object header ("OPB" for a property bag)
//! +<propName>:<typeTag>:<length>:<value>:\n     zero or more property lines
//! >End\n
//! .\n                                           trailer
//! ```
//!
//! String values are length-prefixed raw bytes, so embedded delimiters and
//! newlines never break framing. The decoder recovers from corrupted input
//! by scanning to the next line that starts with the header cookie.

pub mod decoder;
pub mod encoder;
pub mod error;

pub use decoder::RecordHeader;
pub use error::{WireError, WireResult};

/// Line-start cookie of a record header.
pub const COOKIE_HEADER: u8 = b'<';
/// Line-start cookie of a property line.
pub const COOKIE_PROP: u8 = b'+';
/// Line-start cookie of the end line.
pub const COOKIE_END: u8 = b'>';
/// Line-start cookie of the blank trailer line.
pub const COOKIE_BLANK: u8 = b'.';

/// The two record flavors carried by the wire format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordType {
    /// A complete object record.
    Object,
    /// A property bag: a partial set of properties applied to an already
    /// constructed object.
    PropBag,
}

impl RecordType {
    /// Three-byte record type tag written after the header cookie.
    pub fn tag(&self) -> &'static [u8; 3] {
        match self {
            Self::Object => b"Obj",
            Self::PropBag => b"OPB",
        }
    }
}
