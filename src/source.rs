//! Probe inputs and scoped stream-position marks.
//!
//! A probe must be able to look at the first bytes of a stream and then put
//! the stream back exactly where it found it, so the next prober in a
//! dispatch chain sees the same bytes. [`with_mark`] provides that
//! guarantee for any [`Seek`] source: the position is saved, the body runs,
//! and the position is restored on every exit path, including read errors.

use std::any::Any;
use std::fmt;
use std::io::{self, Read, Seek, SeekFrom};

use crate::error::{Error, Result};

/// A readable, seekable byte source owned by the caller.
///
/// Implemented for every `Read + Seek` type, e.g. [`std::fs::File`],
/// [`std::io::Cursor`] or [`std::io::BufReader`] over a file.
pub trait ByteSource: Read + Seek {}

impl<T: Read + Seek> ByteSource for T {}

/// The input handed to a probe.
///
/// Probes only know how to inspect seekable byte sources. Anything else is
/// passed as [`ProbeInput::Other`] and is rejected without being touched.
pub enum ProbeInput<'a> {
    /// A source the probe can read from and rewind.
    Seekable(&'a mut dyn ByteSource),
    /// Any other input object.
    Other(&'a dyn Any),
}

impl<'a> ProbeInput<'a> {
    /// Wraps a seekable source.
    pub fn seekable<S: ByteSource>(source: &'a mut S) -> Self {
        ProbeInput::Seekable(source)
    }

    /// Wraps an arbitrary object that does not expose read/seek access.
    pub fn other<T: Any>(object: &'a T) -> Self {
        ProbeInput::Other(object)
    }

    /// Returns `true` if the input can be probed.
    pub fn is_seekable(&self) -> bool {
        matches!(self, ProbeInput::Seekable(_))
    }
}

impl<'a, S: ByteSource> From<&'a mut S> for ProbeInput<'a> {
    fn from(source: &'a mut S) -> Self {
        ProbeInput::Seekable(source)
    }
}

impl fmt::Debug for ProbeInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeInput::Seekable(_) => f.write_str("ProbeInput::Seekable(..)"),
            ProbeInput::Other(_) => f.write_str("ProbeInput::Other(..)"),
        }
    }
}

/// Runs `body` against `source` and seeks back to the starting position
/// afterwards, whatever `body` returned.
///
/// A read error from `body` is reported as [`Error::Io`]. If the seek back
/// fails, [`Error::Restore`] is returned instead, carrying the read error
/// (if any) alongside the restore error.
pub fn with_mark<S, T, F>(source: &mut S, body: F) -> Result<T>
where
    S: Seek + ?Sized,
    F: FnOnce(&mut S) -> io::Result<T>,
{
    let mark = source.stream_position()?;
    let outcome = body(source);
    let restored = source.seek(SeekFrom::Start(mark));

    match (outcome, restored) {
        (Ok(value), Ok(_)) => Ok(value),
        (Err(read), Ok(_)) => Err(Error::Io(read)),
        (Ok(_), Err(restore)) => Err(Error::Restore {
            restore,
            read: None,
        }),
        (Err(read), Err(restore)) => Err(Error::Restore {
            restore,
            read: Some(read),
        }),
    }
}

/// Reads a single byte, failing with `UnexpectedEof` at end of stream.
#[inline]
pub(crate) fn read_u8<R: Read + ?Sized>(reader: &mut R) -> io::Result<u8> {
    let mut byte = [0u8; 1];
    reader.read_exact(&mut byte)?;
    Ok(byte[0])
}
