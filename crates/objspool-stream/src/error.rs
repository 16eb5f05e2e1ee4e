use thiserror::Error;

#[derive(Debug, Error)]
pub enum StreamError {
    /// The stream has no further bytes to read.
    #[error("end of stream")]
    EndOfStream,

    /// A second byte was pushed back without an intervening read.
    #[error("lookahead slot already occupied")]
    PushbackOccupied,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StreamResult<T> = Result<T, StreamError>;
