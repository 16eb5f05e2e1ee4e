use thiserror::Error;

use objspool_stream::StreamError;
use objspool_types::TypeError;

#[derive(Debug, Error)]
pub enum WireError {
    /// Header line cookie or field delimiter out of place.
    #[error("invalid record header")]
    InvalidHeader,

    /// Header record type tag does not match the expected record flavor.
    #[error("invalid record type in header")]
    InvalidHeaderRecType,

    /// Header serializer-version marker is not the supported version.
    #[error("unsupported serializer version in header")]
    InvalidHeaderVersion,

    /// A digit was required but another byte was found.
    #[error("expected digit, got byte {0:#04x}")]
    InvalidNumber(u8),

    /// A `:` terminator was required but another byte was found.
    #[error("expected ':' delimiter, got byte {0:#04x}")]
    InvalidDelimiter(u8),

    /// The record trailer deviates from the fixed `>End\n.\n` sequence.
    #[error("invalid record trailer")]
    InvalidTrailer,

    /// A property line is structurally broken (bad name, tag, length, or
    /// missing terminating newline).
    #[error("invalid property line")]
    InvalidPropertyFrame,

    #[error(transparent)]
    Type(#[from] TypeError),

    #[error(transparent)]
    Stream(#[from] StreamError),
}

pub type WireResult<T> = Result<T, WireError>;
