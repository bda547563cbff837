//! Reader handles created by [`PcxReaderProvider`](crate::PcxReaderProvider).
//!
//! A reader is bound to the provider that created it and reads the PCX file
//! header. Scanline decoding is left to the host decoder.

use std::io::Read;
use std::sync::Arc;

use crate::error::Result;
use crate::header::Header;
use crate::provider::ProviderConfig;

/// A PCX reader instance.
///
/// Each instance owns its own state; only the provider's immutable
/// descriptor is shared.
#[derive(Debug, Clone)]
pub struct PcxReader {
    origin: Arc<ProviderConfig>,
    header: Option<Header>,
}

impl PcxReader {
    pub(crate) fn new(origin: Arc<ProviderConfig>) -> Self {
        Self {
            origin,
            header: None,
        }
    }

    /// Descriptor of the provider that created this reader.
    pub fn provider_config(&self) -> &ProviderConfig {
        &self.origin
    }

    /// Reads and validates the 128-byte header from the current position
    /// of `input`, replacing any header read earlier.
    ///
    /// Unlike probing, this consumes the header bytes: the stream is left
    /// positioned at the start of the image data.
    pub fn read_header<R: Read + ?Sized>(&mut self, input: &mut R) -> Result<&Header> {
        self.header = None;
        let header = Header::read(input)?;
        Ok(self.header.insert(header))
    }

    /// The header read by the last successful [`read_header`](Self::read_header).
    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    /// Image `(width, height)`, once the header has been read.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.header.as_ref().map(|h| (h.width(), h.height()))
    }

    /// Whether a 256-color palette trails the image data.
    pub fn has_trailing_palette(&self) -> bool {
        self.header
            .as_ref()
            .is_some_and(Header::has_trailing_palette)
    }

    /// Drops any header state, returning the reader to its freshly created state.
    pub fn reset(&mut self) {
        self.header = None;
    }
}
