//! PCX header layout and field validation.
//!
//! Every PCX file starts with a fixed 128-byte little-endian header. The
//! first four bytes (magic, version, compression, bits per pixel) are enough
//! to tell a PCX stream apart from anything else; the rest describe the
//! image window, resolution, plane layout and the 16-color EGA palette.
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0      | 1    | magic (`0x0A`) |
//! | 1      | 1    | version |
//! | 2      | 1    | compression (0 = none, 1 = RLE) |
//! | 3      | 1    | bits per pixel per plane |
//! | 4      | 8    | window: xmin, ymin, xmax, ymax |
//! | 12     | 4    | horizontal / vertical DPI |
//! | 16     | 48   | EGA palette |
//! | 64     | 1    | reserved |
//! | 65     | 1    | color planes |
//! | 66     | 2    | bytes per scanline per plane |
//! | 68     | 2    | palette info |
//! | 70     | 4    | horizontal / vertical screen size |
//! | 74     | 54   | filler |

use std::io::Read;

use crate::error::{Error, Result};

/// PCX magic byte (ZSoft manufacturer id).
pub const MAGIC: u8 = 0x0A;

/// Size of the full PCX file header in bytes.
pub const HEADER_SIZE: usize = 128;

/// Number of leading header bytes a probe inspects.
pub const PROBE_LEN: usize = 4;

/// Bits-per-pixel values a PCX plane may declare.
pub const VALID_BITS_PER_PIXEL: [u8; 4] = [1, 2, 4, 8];

/// Size of the EGA palette stored inside the header.
pub const EGA_PALETTE_SIZE: usize = 48;

/// PCX format version (header byte 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Version {
    /// PC Paintbrush 2.5.
    V2_5 = 0,
    /// PC Paintbrush 2.8 with palette information.
    V2_8Palette = 2,
    /// PC Paintbrush 2.8 without palette information.
    V2_8NoPalette = 3,
    /// PC Paintbrush for Windows (2.x).
    V2xWindows = 4,
    /// PC Paintbrush 3.0 and later, including PC Paintbrush Plus.
    V3_0 = 5,
}

impl Version {
    /// All recognized versions, in header-byte order.
    pub const ALL: [Version; 5] = [
        Version::V2_5,
        Version::V2_8Palette,
        Version::V2_8NoPalette,
        Version::V2xWindows,
        Version::V3_0,
    ];

    /// Maps a header byte to a version, or `None` if unrecognized.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Version::V2_5),
            2 => Some(Version::V2_8Palette),
            3 => Some(Version::V2_8NoPalette),
            4 => Some(Version::V2xWindows),
            5 => Some(Version::V3_0),
            _ => None,
        }
    }

    /// The header byte for this version.
    #[inline]
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Human-readable version label.
    pub fn name(self) -> &'static str {
        match self {
            Version::V2_5 => "2.5",
            Version::V2_8Palette => "2.8 (palette)",
            Version::V2_8NoPalette => "2.8 (no palette)",
            Version::V2xWindows => "2.x (Windows)",
            Version::V3_0 => "3.0",
        }
    }
}

/// PCX compression method (header byte 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Compression {
    /// Uncompressed scanlines.
    None = 0,
    /// PCX run-length encoding.
    Rle = 1,
}

impl Compression {
    /// Maps a header byte to a compression method, or `None` if unrecognized.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Compression::None),
            1 => Some(Compression::Rle),
            _ => None,
        }
    }

    /// The header byte for this compression method.
    #[inline]
    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

/// Returns `true` if `bpp` is a bits-per-pixel value PCX allows.
#[inline]
pub fn is_valid_bits_per_pixel(bpp: u8) -> bool {
    VALID_BITS_PER_PIXEL.contains(&bpp)
}

/// The four identifying bytes at the start of a PCX stream, unvalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderFields {
    pub magic: u8,
    pub version: u8,
    pub compression: u8,
    pub bits_per_pixel: u8,
}

impl HeaderFields {
    /// Splits a 4-byte prefix into its fields.
    pub fn from_bytes(bytes: [u8; PROBE_LEN]) -> Self {
        Self {
            magic: bytes[0],
            version: bytes[1],
            compression: bytes[2],
            bits_per_pixel: bytes[3],
        }
    }

    /// Checks every field in header order and returns the typed version and
    /// compression, or a description of the first field that failed.
    pub fn validate(&self) -> Result<(Version, Compression)> {
        if self.magic != MAGIC {
            return Err(Error::InvalidDecode(format!(
                "bad magic byte 0x{:02X}",
                self.magic
            )));
        }
        let version = Version::from_byte(self.version).ok_or_else(|| {
            Error::InvalidDecode(format!("unsupported version {}", self.version))
        })?;
        let compression = Compression::from_byte(self.compression).ok_or_else(|| {
            Error::InvalidDecode(format!("unsupported compression {}", self.compression))
        })?;
        if !is_valid_bits_per_pixel(self.bits_per_pixel) {
            return Err(Error::InvalidDecode(format!(
                "unsupported bits per pixel {}",
                self.bits_per_pixel
            )));
        }
        Ok((version, compression))
    }

    /// Returns `true` if all four fields hold accepted values.
    pub fn is_pcx(&self) -> bool {
        self.validate().is_ok()
    }
}

/// A parsed and validated PCX file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub version: Version,
    pub compression: Compression,
    /// Bits per pixel in each plane.
    pub bits_per_pixel: u8,
    pub x_min: u16,
    pub y_min: u16,
    pub x_max: u16,
    pub y_max: u16,
    pub h_dpi: u16,
    pub v_dpi: u16,
    /// 16-entry RGB palette used by EGA-era images.
    pub ega_palette: [u8; EGA_PALETTE_SIZE],
    pub planes: u8,
    /// Bytes per scanline in each plane, including padding.
    pub bytes_per_line: u16,
    /// 1 = color/monochrome, 2 = grayscale. Often 0 in older files.
    pub palette_info: u16,
    pub h_screen_size: u16,
    pub v_screen_size: u16,
}

#[inline]
fn le_u16(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

impl Header {
    /// Reads exactly [`HEADER_SIZE`] bytes from `reader` and parses them.
    ///
    /// A short read is reported as [`Error::Io`]; a header with unacceptable
    /// fields as [`Error::InvalidDecode`].
    pub fn read<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let mut buf = [0u8; HEADER_SIZE];
        reader.read_exact(&mut buf)?;
        Self::parse(&buf)
    }

    /// Parses a header from the first [`HEADER_SIZE`] bytes of `data`.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(Error::InvalidDecode(format!(
                "header needs {HEADER_SIZE} bytes, got {}",
                data.len()
            )));
        }

        let fields = HeaderFields::from_bytes([data[0], data[1], data[2], data[3]]);
        let (version, compression) = fields.validate()?;

        let mut ega_palette = [0u8; EGA_PALETTE_SIZE];
        ega_palette.copy_from_slice(&data[16..16 + EGA_PALETTE_SIZE]);

        let header = Header {
            version,
            compression,
            bits_per_pixel: fields.bits_per_pixel,
            x_min: le_u16(data, 4),
            y_min: le_u16(data, 6),
            x_max: le_u16(data, 8),
            y_max: le_u16(data, 10),
            h_dpi: le_u16(data, 12),
            v_dpi: le_u16(data, 14),
            ega_palette,
            planes: data[65],
            bytes_per_line: le_u16(data, 66),
            palette_info: le_u16(data, 68),
            h_screen_size: le_u16(data, 70),
            v_screen_size: le_u16(data, 72),
        };
        header.check_layout()?;
        Ok(header)
    }

    fn check_layout(&self) -> Result<()> {
        if self.x_max < self.x_min || self.y_max < self.y_min {
            return Err(Error::InvalidDecode(format!(
                "inverted window ({}, {})-({}, {})",
                self.x_min, self.y_min, self.x_max, self.y_max
            )));
        }
        if !matches!(self.planes, 1 | 3 | 4) {
            return Err(Error::InvalidDecode(format!(
                "unsupported plane count {}",
                self.planes
            )));
        }
        let min_line = (self.width() as usize * self.bits_per_pixel as usize).div_ceil(8);
        if (self.bytes_per_line as usize) < min_line {
            return Err(Error::InvalidDecode(format!(
                "bytes per line {} too small for width {} at {} bpp",
                self.bytes_per_line,
                self.width(),
                self.bits_per_pixel
            )));
        }
        Ok(())
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        u32::from(self.x_max) - u32::from(self.x_min) + 1
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        u32::from(self.y_max) - u32::from(self.y_min) + 1
    }

    /// Decoded bytes in one scanline across all planes.
    #[inline]
    pub fn scanline_len(&self) -> usize {
        self.planes as usize * self.bytes_per_line as usize
    }

    /// Whether a 256-color VGA palette follows the image data.
    ///
    /// Only version 3.0 files with a single 8-bit plane carry one.
    pub fn has_trailing_palette(&self) -> bool {
        self.version == Version::V3_0 && self.bits_per_pixel == 8 && self.planes == 1
    }
}
