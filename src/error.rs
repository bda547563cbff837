//! Error types for probing and header parsing.

use std::fmt;
use std::io;

/// Result type alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while probing a source or reading a PCX header.
///
/// A source that simply is not PCX is never an error: probing reports that
/// as `Ok(false)`. Errors mean the source itself could not be read or put
/// back where it was.
#[derive(Debug)]
pub enum Error {
    /// Reading from the source failed (truncated stream, device error).
    Io(io::Error),
    /// Restoring the saved stream position failed.
    Restore {
        /// The error raised by the seek back to the saved position.
        restore: io::Error,
        /// The read error that was already in flight, if any.
        read: Option<io::Error>,
    },
    /// A header field holds a value the reader cannot accept.
    InvalidDecode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error while reading source: {err}"),
            Error::Restore {
                restore,
                read: Some(read),
            } => write!(
                f,
                "failed to restore stream position: {restore} (after read error: {read})"
            ),
            Error::Restore { restore, read: None } => {
                write!(f, "failed to restore stream position: {restore}")
            }
            Error::InvalidDecode(msg) => write!(f, "invalid PCX header: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Restore { restore, .. } => Some(restore),
            Error::InvalidDecode(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl Error {
    /// Returns `true` if the error came from the underlying source rather
    /// than from header validation.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_) | Error::Restore { .. })
    }
}
