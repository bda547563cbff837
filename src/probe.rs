//! Non-consuming PCX format detection.
//!
//! [`probe_pcx`] decides whether a stream starts with a PCX header prefix by
//! checking, in order and with short-circuiting:
//!
//! 1. magic byte `0x0A`
//! 2. version in {0, 2, 3, 4, 5}
//! 3. compression in {0, 1} and bits per pixel in {1, 2, 4, 8}
//!
//! At most [`PROBE_LEN`](crate::header::PROBE_LEN) bytes are read, and the
//! stream position is restored before returning on every path. A stream that
//! is not PCX yields `Ok(false)`; a stream that cannot be read (for example,
//! one that ends after the magic byte) yields an error.

use std::io::{self, Read, Seek};

use crate::error::Result;
use crate::header::{is_valid_bits_per_pixel, Compression, Version, MAGIC};
use crate::source::{read_u8, with_mark, ProbeInput};

/// Answers "can this input be decoded" without consuming it.
pub trait FormatProbe {
    /// Returns `Ok(true)` if the input looks decodable, `Ok(false)` if it
    /// does not (or is not a probeable input at all), and `Err` if the input
    /// could not be read or rewound.
    fn can_decode(&self, input: ProbeInput<'_>) -> Result<bool>;
}

/// Probes a seekable source for a PCX header prefix.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// use pcx_provider::probe::probe_pcx;
///
/// # fn main() -> pcx_provider::Result<()> {
/// let mut cursor = Cursor::new(vec![0x0A, 0x05, 0x01, 0x08, 0x00]);
/// assert!(probe_pcx(&mut cursor)?);
/// assert_eq!(cursor.position(), 0);
/// # Ok(())
/// # }
/// ```
pub fn probe_pcx<S: Read + Seek + ?Sized>(source: &mut S) -> Result<bool> {
    with_mark(source, |s| check_prefix(s))
}

/// Probes any [`ProbeInput`]. Non-seekable inputs are rejected unread.
pub fn probe_input(input: ProbeInput<'_>) -> Result<bool> {
    match input {
        ProbeInput::Seekable(source) => probe_pcx(source),
        ProbeInput::Other(_) => Ok(false),
    }
}

fn check_prefix<R: Read + ?Sized>(reader: &mut R) -> io::Result<bool> {
    if read_u8(reader)? != MAGIC {
        return Ok(false);
    }
    if Version::from_byte(read_u8(reader)?).is_none() {
        return Ok(false);
    }

    let mut tail = [0u8; 2];
    reader.read_exact(&mut tail)?;
    let [compression, bpp] = tail;

    Ok(Compression::from_byte(compression).is_some() && is_valid_bits_per_pixel(bpp))
}
