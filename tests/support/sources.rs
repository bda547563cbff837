//! Byte sources with controllable failure behavior.

use std::io::{self, Cursor, Read, Seek, SeekFrom};

/// Cursor that records how many bytes were read and can refuse rewinds.
pub struct InstrumentedSource {
    inner: Cursor<Vec<u8>>,
    pub bytes_read: usize,
    pub fail_restore: bool,
    pub fail_reads: bool,
}

impl InstrumentedSource {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            inner: Cursor::new(data.into()),
            bytes_read: 0,
            fail_restore: false,
            fail_reads: false,
        }
    }

    pub fn at(mut self, position: u64) -> Self {
        self.inner.set_position(position);
        self
    }

    pub fn failing_restore(mut self) -> Self {
        self.fail_restore = true;
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn position(&self) -> u64 {
        self.inner.position()
    }
}

impl Read for InstrumentedSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.fail_reads {
            return Err(io::Error::new(io::ErrorKind::Other, "device error"));
        }
        let n = self.inner.read(buf)?;
        self.bytes_read += n;
        Ok(n)
    }
}

impl Seek for InstrumentedSource {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        if self.fail_restore && !matches!(pos, SeekFrom::Current(0)) {
            return Err(io::Error::new(io::ErrorKind::Other, "seek refused"));
        }
        self.inner.seek(pos)
    }
}
