//! # pcx-provider
//!
//! A reader provider for PC Paintbrush (PCX) images, meant to be plugged
//! into a host image-I/O framework that selects a decoder by sniffing the
//! input.
//!
//! - **Descriptor**: format names (`pcx`, `PCX`), suffix `pcx`, and MIME
//!   types `image/pcx` / `image/x-pcx`, carried in a [`ProviderConfig`].
//! - **Probe**: [`FormatProbe::can_decode`] checks the magic, version,
//!   compression and bits-per-pixel bytes and always leaves the stream
//!   where it found it, so other providers can inspect the same bytes.
//! - **Factory**: [`PcxReaderProvider::create_reader`] returns a fresh
//!   [`PcxReader`] that can parse the 128-byte file header.
//!
//! ## Quickstart
//!
//! ```rust
//! use std::io::Cursor;
//! use pcx_provider::{FormatProbe, PcxReaderProvider, ProbeInput};
//!
//! # fn main() -> pcx_provider::Result<()> {
//! let provider = PcxReaderProvider::new();
//!
//! // PCX 3.0, RLE, 8 bits per pixel
//! let mut stream = Cursor::new(vec![0x0A, 0x05, 0x01, 0x08, 0x00, 0x00]);
//! assert!(provider.can_decode(ProbeInput::from(&mut stream))?);
//! assert_eq!(stream.position(), 0);
//!
//! // Not a PCX stream: a negative answer, not an error
//! let mut png = Cursor::new(b"\x89PNG\r\n\x1a\n".to_vec());
//! assert!(!provider.can_decode(ProbeInput::from(&mut png))?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Probing distinguishes "not PCX" (`Ok(false)`) from "could not read the
//! source" ([`Error::Io`]) and "could not put the source back"
//! ([`Error::Restore`]). A stream that ends after the magic byte is an
//! I/O error, not a negative match.
//!
//! ## Feature flags
//! - `cli`: the `pcxprobe` command-line tool.

#![forbid(unsafe_code)]

pub mod error;
pub mod header;
pub mod probe;
pub mod provider;
pub mod reader;
pub mod source;

pub use error::{Error, Result};
pub use header::{Compression, Header, HeaderFields, Version};
pub use probe::{probe_pcx, FormatProbe};
pub use provider::{InputKind, PcxReaderProvider, ProviderConfig, ProviderInfo};
pub use reader::PcxReader;
pub use source::{with_mark, ByteSource, ProbeInput};
