//! Synthetic PCX headers and data.

use pcx_provider::header::HEADER_SIZE;

pub const VALID_VERSIONS: [u8; 5] = [0, 2, 3, 4, 5];
pub const VALID_COMPRESSIONS: [u8; 2] = [0, 1];
pub const VALID_BPP: [u8; 4] = [1, 2, 4, 8];

/// A complete 128-byte header for a `width` x `height` image.
pub fn header(version: u8, bpp: u8, planes: u8, width: u16, height: u16) -> Vec<u8> {
    let mut buf = vec![0u8; HEADER_SIZE];
    buf[0] = 0x0A;
    buf[1] = version;
    buf[2] = 1;
    buf[3] = bpp;
    buf[8..10].copy_from_slice(&(width - 1).to_le_bytes());
    buf[10..12].copy_from_slice(&(height - 1).to_le_bytes());
    buf[12..14].copy_from_slice(&96u16.to_le_bytes());
    buf[14..16].copy_from_slice(&96u16.to_le_bytes());
    buf[65] = planes;
    let line = (width as usize * bpp as usize).div_ceil(8);
    let line = (line + (line & 1)) as u16;
    buf[66..68].copy_from_slice(&line.to_le_bytes());
    buf[68..70].copy_from_slice(&1u16.to_le_bytes());
    buf
}

/// Header followed by a short run of RLE bytes.
pub fn file(version: u8, bpp: u8, planes: u8, width: u16, height: u16) -> Vec<u8> {
    let mut data = header(version, bpp, planes, width, height);
    data.extend_from_slice(&[0xC4, 0x00, 0x7F, 0xC1, 0xC0]);
    data
}
