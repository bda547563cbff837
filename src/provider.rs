//! The PCX reader provider: format descriptor, probe and reader factory.
//!
//! A host image-I/O framework asks each registered provider three things:
//! which names, suffixes and MIME types it serves ([`ProviderConfig`]),
//! whether it can decode a given input ([`FormatProbe::can_decode`]), and
//! for a fresh reader ([`PcxReaderProvider::create_reader`]).

use std::sync::Arc;

use crate::error::Result;
use crate::probe::{probe_input, FormatProbe};
use crate::reader::PcxReader;
use crate::source::ProbeInput;

/// Fixed description returned for every locale.
pub const DESCRIPTION: &str = "PC Paintbrush (PCX) image reader";

/// Format names the PCX reader answers to.
pub const FORMAT_NAMES: [&str; 2] = ["pcx", "PCX"];

/// File suffixes, without the leading dot.
pub const SUFFIXES: [&str; 1] = ["pcx"];

/// MIME types. PCX has no IANA registration, so both common forms are listed.
pub const MIME_TYPES: [&str; 2] = ["image/pcx", "image/x-pcx"];

/// Vendor and version of the code providing a reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    pub vendor: String,
    pub version: String,
}

impl ProviderInfo {
    pub fn new(vendor: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            vendor: vendor.into(),
            version: version.into(),
        }
    }

    /// Vendor and version taken from this crate's package metadata.
    pub fn from_package() -> Self {
        let authors = env!("CARGO_PKG_AUTHORS");
        let vendor = if authors.is_empty() {
            env!("CARGO_PKG_NAME")
        } else {
            authors
        };
        Self::new(vendor, env!("CARGO_PKG_VERSION"))
    }
}

impl Default for ProviderInfo {
    fn default() -> Self {
        Self::from_package()
    }
}

/// Kinds of input object a provider accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// A readable, seekable byte stream.
    SeekableStream,
}

/// Describes a reader provider to the host framework.
///
/// Only the fields a format actually uses need to be set; everything else
/// defaults to "none" / `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub vendor: String,
    pub version: String,
    pub format_names: Vec<String>,
    pub suffixes: Vec<String>,
    pub mime_types: Vec<String>,
    /// Type name of the reader the provider creates.
    pub reader_type_name: String,
    pub input_kinds: Vec<InputKind>,
    /// Names of writer providers able to write this format.
    pub writer_names: Vec<String>,
    pub supports_standard_stream_metadata: bool,
    pub native_stream_metadata_format: Option<String>,
    pub extra_stream_metadata_formats: Vec<String>,
    pub supports_standard_image_metadata: bool,
    pub native_image_metadata_format: Option<String>,
    pub extra_image_metadata_formats: Vec<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            vendor: String::new(),
            version: String::new(),
            format_names: Vec::new(),
            suffixes: Vec::new(),
            mime_types: Vec::new(),
            reader_type_name: String::new(),
            input_kinds: vec![InputKind::SeekableStream],
            writer_names: Vec::new(),
            supports_standard_stream_metadata: false,
            native_stream_metadata_format: None,
            extra_stream_metadata_formats: Vec::new(),
            supports_standard_image_metadata: false,
            native_image_metadata_format: None,
            extra_image_metadata_formats: Vec::new(),
        }
    }
}

impl ProviderConfig {
    /// Create a builder for [`ProviderConfig`].
    pub fn builder() -> ProviderConfigBuilder {
        ProviderConfigBuilder::new()
    }

    /// The PCX reader descriptor for the given provider info.
    pub fn pcx(info: &ProviderInfo) -> Self {
        Self::builder()
            .info(info)
            .format_names(FORMAT_NAMES)
            .suffixes(SUFFIXES)
            .mime_types(MIME_TYPES)
            .reader_type_name(std::any::type_name::<PcxReader>())
            .standard_stream_metadata(true)
            .standard_image_metadata(true)
            .build()
    }

    /// Exact, case-sensitive match against the advertised format names.
    pub fn handles_format_name(&self, name: &str) -> bool {
        self.format_names.iter().any(|n| n == name)
    }

    /// Case-insensitive suffix match; a leading dot is ignored.
    pub fn handles_suffix(&self, suffix: &str) -> bool {
        let suffix = suffix.strip_prefix('.').unwrap_or(suffix);
        self.suffixes.iter().any(|s| s.eq_ignore_ascii_case(suffix))
    }

    /// Case-insensitive MIME type match.
    pub fn handles_mime_type(&self, mime: &str) -> bool {
        self.mime_types.iter().any(|m| m.eq_ignore_ascii_case(mime.trim()))
    }
}

/// Builder for [`ProviderConfig`].
#[derive(Debug, Clone, Default)]
pub struct ProviderConfigBuilder {
    config: ProviderConfig,
}

impl ProviderConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set vendor and version from a [`ProviderInfo`].
    pub fn info(mut self, info: &ProviderInfo) -> Self {
        self.config.vendor = info.vendor.clone();
        self.config.version = info.version.clone();
        self
    }

    pub fn format_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.format_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn mime_types<I, S>(mut self, mime_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.mime_types = mime_types.into_iter().map(Into::into).collect();
        self
    }

    pub fn reader_type_name(mut self, name: impl Into<String>) -> Self {
        self.config.reader_type_name = name.into();
        self
    }

    pub fn input_kinds(mut self, kinds: impl IntoIterator<Item = InputKind>) -> Self {
        self.config.input_kinds = kinds.into_iter().collect();
        self
    }

    pub fn writer_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.writer_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn standard_stream_metadata(mut self, supported: bool) -> Self {
        self.config.supports_standard_stream_metadata = supported;
        self
    }

    pub fn native_stream_metadata_format(mut self, name: impl Into<String>) -> Self {
        self.config.native_stream_metadata_format = Some(name.into());
        self
    }

    pub fn standard_image_metadata(mut self, supported: bool) -> Self {
        self.config.supports_standard_image_metadata = supported;
        self
    }

    pub fn native_image_metadata_format(mut self, name: impl Into<String>) -> Self {
        self.config.native_image_metadata_format = Some(name.into());
        self
    }

    #[must_use]
    pub fn build(self) -> ProviderConfig {
        self.config
    }
}

/// Provider for the PCX reader.
///
/// Stateless apart from its immutable descriptor, so a single instance can
/// be shared across threads and probe independent sources concurrently.
#[derive(Debug, Clone)]
pub struct PcxReaderProvider {
    config: Arc<ProviderConfig>,
}

impl PcxReaderProvider {
    /// Provider described by this crate's package metadata.
    pub fn new() -> Self {
        Self::with_info(&ProviderInfo::from_package())
    }

    /// Provider with an explicit vendor/version.
    pub fn with_info(info: &ProviderInfo) -> Self {
        Self {
            config: Arc::new(ProviderConfig::pcx(info)),
        }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Human-readable description. The locale is accepted for API symmetry
    /// with hosts that localize; only one language is provided.
    pub fn description(&self, _locale: Option<&str>) -> &'static str {
        DESCRIPTION
    }

    /// Creates a new, independent reader bound to this provider.
    pub fn create_reader(&self) -> PcxReader {
        PcxReader::new(Arc::clone(&self.config))
    }
}

impl Default for PcxReaderProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatProbe for PcxReaderProvider {
    fn can_decode(&self, input: ProbeInput<'_>) -> Result<bool> {
        probe_input(input)
    }
}
