//! Bounded, endian-explicit access to in-memory byte buffers.
//!
//! Identification works on plain byte slices. [`ByteView`] wraps one and is the only sanctioned
//! way to pull integers, arrays, and sub-slices back out: every accessor takes an absolute offset,
//! checks bounds, and returns [`EndOfFile`](DataError::EndOfFile) instead of touching memory past
//! the end. Probes never index a buffer directly.

use snafu::prelude::*;

/// Error conditions for when reading data.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum DataError {
    /// Thrown if a read tries to go out of bounds.
    #[snafu(display("Tried to read out-of-bounds"))]
    EndOfFile,
}

/// Represents the endianness of the data being read.
///
/// There is deliberately no `Default` impl. Every multi-byte read names its byte order at the
/// call site, so a probe can never inherit the host's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Endian {
    Little,
    Big,
}

/// A read-only view over a byte buffer, addressed by absolute offset.
///
/// `ByteView` carries no cursor. Header probing reads fields at fixed offsets in no particular
/// order, so stateless accessors fit better than a seekable stream.
///
/// # Examples
/// ```
/// use cartouche_core::prelude::*;
///
/// let view = ByteView::new(&[0x34, 0x12, 0xFF]);
/// let value = view.read_u16(0, Endian::Little)?;
/// assert_eq!(value, 0x1234);
/// assert!(view.read_u16(2, Endian::Little).is_err());
/// # Ok::<(), DataError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByteView<'a> {
    data: &'a [u8],
}

impl<'a> ByteView<'a> {
    /// Creates a new `ByteView` over the given data.
    #[inline]
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Returns the total length of the underlying buffer.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the underlying buffer is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the underlying buffer.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &'a [u8] {
        self.data
    }

    /// Reads exactly N bytes starting at `offset`.
    ///
    /// # Errors
    /// Returns [`EndOfFile`](DataError::EndOfFile) if the range does not fit in the buffer.
    #[inline]
    pub fn read_exact<const N: usize>(&self, offset: usize) -> Result<[u8; N], DataError> {
        ensure!(offset.saturating_add(N) <= self.data.len(), EndOfFileSnafu);

        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.data[offset..offset + N]);
        Ok(bytes)
    }

    /// Reads a `u8` at `offset`.
    ///
    /// # Errors
    /// Returns [`EndOfFile`](DataError::EndOfFile) if `offset` is past the end of the buffer.
    #[inline]
    pub fn read_u8(&self, offset: usize) -> Result<u8, DataError> {
        ensure!(offset < self.data.len(), EndOfFileSnafu);
        Ok(self.data[offset])
    }

    /// Reads a `u16` at `offset` in the given byte order.
    ///
    /// # Errors
    /// Returns [`EndOfFile`](DataError::EndOfFile) if the value does not fit in the buffer.
    #[inline]
    pub fn read_u16(&self, offset: usize, endian: Endian) -> Result<u16, DataError> {
        let bytes = self.read_exact::<2>(offset)?;
        Ok(match endian {
            Endian::Little => u16::from_le_bytes(bytes),
            Endian::Big => u16::from_be_bytes(bytes),
        })
    }

    /// Reads a `u32` at `offset` in the given byte order.
    ///
    /// # Errors
    /// Returns [`EndOfFile`](DataError::EndOfFile) if the value does not fit in the buffer.
    #[inline]
    pub fn read_u32(&self, offset: usize, endian: Endian) -> Result<u32, DataError> {
        let bytes = self.read_exact::<4>(offset)?;
        Ok(match endian {
            Endian::Little => u32::from_le_bytes(bytes),
            Endian::Big => u32::from_be_bytes(bytes),
        })
    }

    /// Reads a `u64` at `offset` in the given byte order.
    ///
    /// # Errors
    /// Returns [`EndOfFile`](DataError::EndOfFile) if the value does not fit in the buffer.
    #[inline]
    pub fn read_u64(&self, offset: usize, endian: Endian) -> Result<u64, DataError> {
        let bytes = self.read_exact::<8>(offset)?;
        Ok(match endian {
            Endian::Little => u64::from_le_bytes(bytes),
            Endian::Big => u64::from_be_bytes(bytes),
        })
    }

    /// Borrows `length` bytes starting at `offset`.
    ///
    /// # Errors
    /// Returns [`EndOfFile`](DataError::EndOfFile) if the range does not fit in the buffer.
    #[inline]
    pub fn slice(&self, offset: usize, length: usize) -> Result<&'a [u8], DataError> {
        ensure!(offset.saturating_add(length) <= self.data.len(), EndOfFileSnafu);
        Ok(&self.data[offset..offset + length])
    }

    /// Compares the bytes at `offset` against a literal.
    ///
    /// Unlike the readers this cannot fail. A range that falls outside the buffer simply does not
    /// match.
    #[inline]
    #[must_use]
    pub fn matches_at(&self, offset: usize, literal: &[u8]) -> bool {
        match self.slice(offset, literal.len()) {
            Ok(bytes) => bytes == literal,
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_are_offset_addressed() {
        let view = ByteView::new(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);
        assert_eq!(view.read_u8(3).ok(), Some(0x04));
        assert_eq!(view.read_u16(0, Endian::Little).ok(), Some(0x0201));
        assert_eq!(view.read_u16(0, Endian::Big).ok(), Some(0x0102));
        assert_eq!(view.read_u32(2, Endian::Little).ok(), Some(0x06050403));
        assert_eq!(view.read_u64(0, Endian::Big).ok(), Some(0x0102030405060708));
    }

    #[test]
    fn reads_stop_at_the_end() {
        let view = ByteView::new(&[0xAA, 0xBB]);
        assert!(view.read_u8(1).is_ok());
        assert!(view.read_u8(2).is_err());
        assert!(view.read_u16(1, Endian::Little).is_err());
        assert!(view.read_u32(0, Endian::Big).is_err());
        assert!(view.read_exact::<3>(0).is_err());
    }

    #[test]
    fn offset_overflow_is_out_of_bounds() {
        let view = ByteView::new(&[0u8; 4]);
        assert!(view.read_u32(usize::MAX - 1, Endian::Little).is_err());
        assert!(view.slice(usize::MAX, 2).is_err());
    }

    #[test]
    fn literal_matching_never_reads_past_the_end() {
        let view = ByteView::new(b"RIFF data");
        assert!(view.matches_at(0, b"RIFF"));
        assert!(!view.matches_at(0, b"RIFX"));
        assert!(!view.matches_at(7, b"tail"));
        assert!(view.matches_at(5, b"data"));
    }

    #[test]
    fn slices_borrow_from_the_buffer() {
        let view = ByteView::new(b"MEDIA DESCRIPTOR");
        assert_eq!(view.slice(6, 10).ok(), Some(&b"DESCRIPTOR"[..]));
        assert!(view.slice(6, 11).is_err());
        assert!(view.slice(16, 0).is_ok());
    }
}
