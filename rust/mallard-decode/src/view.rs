//! Bounds-checked access to a vector's raw data buffer.

use mallard_common::{Result, error::Error};

/// A bounds-checked view over a column vector's raw byte buffer.
///
/// A `ByteView` is constructed once per vector and borrows the vector's data
/// slice, so it can never outlive the chunk the vector belongs to. All typed
/// reads are range-checked against the buffer length and performed in native
/// endianness, matching the engine's in-memory layout.
#[derive(Debug, Clone, Copy)]
pub struct ByteView<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteView<'a> {
    /// Creates a view over the given buffer.
    pub fn new(bytes: &'a [u8]) -> ByteView<'a> {
        ByteView { bytes }
    }

    /// Returns the length of the underlying buffer in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the underlying buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the byte range `[offset, offset + len)`, or `IndexOutOfBounds`
    /// if it extends past the end of the buffer.
    pub fn bytes(&self, offset: usize, len: usize) -> Result<&'a [u8]> {
        let end = offset
            .checked_add(len)
            .ok_or_else(|| Error::index_out_of_bounds(offset, self.bytes.len()))?;
        self.bytes
            .get(offset..end)
            .ok_or_else(|| Error::index_out_of_bounds(end, self.bytes.len()))
    }

    /// Reads a plain-old-data value of type `T` at the given byte offset.
    ///
    /// The read is unaligned and native-endian.
    #[inline]
    pub fn read<T: bytemuck::AnyBitPattern>(&self, offset: usize) -> Result<T> {
        let bytes = self.bytes(offset, std::mem::size_of::<T>())?;
        Ok(bytemuck::pod_read_unaligned(bytes))
    }

    #[inline]
    pub fn read_i8(&self, offset: usize) -> Result<i8> {
        self.read::<i8>(offset)
    }

    #[inline]
    pub fn read_u8(&self, offset: usize) -> Result<u8> {
        self.read::<u8>(offset)
    }

    #[inline]
    pub fn read_i16(&self, offset: usize) -> Result<i16> {
        self.read::<i16>(offset)
    }

    #[inline]
    pub fn read_u16(&self, offset: usize) -> Result<u16> {
        self.read::<u16>(offset)
    }

    #[inline]
    pub fn read_i32(&self, offset: usize) -> Result<i32> {
        self.read::<i32>(offset)
    }

    #[inline]
    pub fn read_u32(&self, offset: usize) -> Result<u32> {
        self.read::<u32>(offset)
    }

    #[inline]
    pub fn read_i64(&self, offset: usize) -> Result<i64> {
        self.read::<i64>(offset)
    }

    #[inline]
    pub fn read_u64(&self, offset: usize) -> Result<u64> {
        self.read::<u64>(offset)
    }

    #[inline]
    pub fn read_f32(&self, offset: usize) -> Result<f32> {
        self.read::<f32>(offset)
    }

    #[inline]
    pub fn read_f64(&self, offset: usize) -> Result<f64> {
        self.read::<f64>(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mallard_common::error::ErrorKind;

    #[test]
    fn test_typed_reads() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&0x1234_5678i32.to_ne_bytes());
        buf.extend_from_slice(&(-5i64).to_ne_bytes());
        buf.extend_from_slice(&2.5f64.to_ne_bytes());
        let view = ByteView::new(&buf);

        assert_eq!(view.read_i32(0).unwrap(), 0x1234_5678);
        assert_eq!(view.read_i64(4).unwrap(), -5);
        assert_eq!(view.read_f64(12).unwrap(), 2.5);
    }

    #[test]
    fn test_unaligned_read() {
        let mut buf = vec![0u8; 1];
        buf.extend_from_slice(&0xDEAD_BEEFu32.to_ne_bytes());
        let view = ByteView::new(&buf);
        assert_eq!(view.read_u32(1).unwrap(), 0xDEAD_BEEF);
    }

    #[test]
    fn test_out_of_bounds_read() {
        let buf = [0u8; 8];
        let view = ByteView::new(&buf);
        let err = view.read_i64(1).expect_err("read past end");
        assert!(matches!(err.kind(), ErrorKind::IndexOutOfBounds { .. }));

        let err = view.bytes(8, 1).expect_err("range past end");
        assert!(matches!(err.kind(), ErrorKind::IndexOutOfBounds { .. }));
    }

    #[test]
    fn test_empty_range_at_end() {
        let buf = [0u8; 4];
        let view = ByteView::new(&buf);
        assert_eq!(view.bytes(4, 0).unwrap(), &[] as &[u8]);
    }
}
