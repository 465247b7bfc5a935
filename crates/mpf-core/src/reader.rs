// crates/mpf-core/src/reader.rs

use std::io::{ErrorKind, Read};

use crate::error::{MpfError, Result};

/// Forward-only cursor over a byte source.
///
/// Header reads go through the `take_*` helpers, which turn a short read into
/// `UnexpectedEof` for the named field. Record reads use `fill`/`next_u8` so the
/// caller can tell a clean end of stream from a truncated record.
pub struct ByteReader<R> {
    inner: R,
    pos: u64,
}

impl<R: Read> ByteReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, pos: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Read into `buf` until it is full or the source is exhausted.
    /// Returns the number of bytes read; less than `buf.len()` only at eof.
    pub fn fill(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut n = 0usize;
        while n < buf.len() {
            match self.inner.read(&mut buf[n..]) {
                Ok(0) => break,
                Ok(k) => n += k,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(MpfError::Io(e)),
            }
        }
        self.pos += n as u64;
        Ok(n)
    }

    /// `None` on a clean end of stream.
    pub fn next_u8(&mut self) -> Result<Option<u8>> {
        let mut b = [0u8; 1];
        match self.fill(&mut b)? {
            0 => Ok(None),
            _ => Ok(Some(b[0])),
        }
    }

    pub fn take_exact(&mut self, n: usize, field: &'static str) -> Result<Vec<u8>> {
        let mut out = vec![0u8; n];
        if self.fill(&mut out)? != n {
            return Err(MpfError::UnexpectedEof { field });
        }
        Ok(out)
    }

    pub fn take_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        if self.fill(&mut out)? != N {
            return Err(MpfError::UnexpectedEof { field });
        }
        Ok(out)
    }

    pub fn take_u8(&mut self, field: &'static str) -> Result<u8> {
        let [b] = self.take_array::<1>(field)?;
        Ok(b)
    }

    pub fn take_u32_le(&mut self, field: &'static str) -> Result<u32> {
        Ok(u32::from_le_bytes(self.take_array::<4>(field)?))
    }
}
