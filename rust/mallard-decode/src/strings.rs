//! Hybrid inline/out-of-line string decoding.
//!
//! `VARCHAR`, `BLOB` and `BIT` cells are 16-byte records: an `i32` length,
//! followed either by the payload itself (when it fits in the remaining 12
//! bytes) or by a 4-byte prefix (ignored here) and an 8-byte pointer into an
//! out-of-line buffer owned by the vector. The branch is selected solely by
//! the length field.

use mallard_common::{Result, verify_data};

use crate::source::ColumnVector;
use crate::view::ByteView;

/// Size of one string-view record in a vector's data buffer.
pub const STRING_VIEW_SIZE: usize = 16;

/// Maximum payload length stored inline within the record.
pub const INLINE_CAPACITY: usize = 12;

/// Byte offset of the out-of-line pointer within the record.
const POINTER_OFFSET: usize = 8;

/// Byte offset of the inline payload within the record.
const INLINE_OFFSET: usize = 4;

/// Decodes the string-view record at `row` of `vector` into an owned byte
/// payload.
///
/// The result never borrows native memory: inline payloads are copied out of
/// the record and out-of-line payloads are copied through
/// [`ColumnVector::read_out_of_line`], so the value stays alive after the
/// chunk is released. A zero length takes the inline path and yields an
/// empty payload.
pub fn decode_string_view<V: ColumnVector + ?Sized>(vector: &V, row: usize) -> Result<Vec<u8>> {
    let view = ByteView::new(vector.data());
    let record = view.bytes(row * STRING_VIEW_SIZE, STRING_VIEW_SIZE)?;
    let record = ByteView::new(record);

    let length = record.read_i32(0)?;
    verify_data!(string_view, length >= 0);
    let length = length as usize;

    if length <= INLINE_CAPACITY {
        Ok(record.bytes(INLINE_OFFSET, length)?.to_vec())
    } else {
        let ptr = record.read_u64(POINTER_OFFSET)?;
        vector.read_out_of_line(ptr, length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeid::LogicalType;

    /// A single-record vector with an offset-addressed side buffer standing
    /// in for the native out-of-line allocation.
    struct RecordVector {
        record: [u8; STRING_VIEW_SIZE],
        heap: Vec<u8>,
    }

    impl RecordVector {
        fn inline(payload: &[u8]) -> RecordVector {
            assert!(payload.len() <= INLINE_CAPACITY);
            let mut record = [0u8; STRING_VIEW_SIZE];
            record[..4].copy_from_slice(&(payload.len() as i32).to_ne_bytes());
            record[4..4 + payload.len()].copy_from_slice(payload);
            RecordVector {
                record,
                heap: Vec::new(),
            }
        }

        fn out_of_line(payload: &[u8]) -> RecordVector {
            assert!(payload.len() > INLINE_CAPACITY);
            let mut record = [0u8; STRING_VIEW_SIZE];
            record[..4].copy_from_slice(&(payload.len() as i32).to_ne_bytes());
            record[4..8].copy_from_slice(&payload[..4]);
            record[8..].copy_from_slice(&0u64.to_ne_bytes());
            RecordVector {
                record,
                heap: payload.to_vec(),
            }
        }
    }

    impl ColumnVector for RecordVector {
        fn logical_type(&self) -> LogicalType {
            LogicalType::new(crate::typeid::TypeId::Varchar)
        }

        fn data(&self) -> &[u8] {
            &self.record
        }

        fn validity(&self) -> Option<&[u64]> {
            None
        }

        fn read_out_of_line(&self, ptr: u64, len: usize) -> Result<Vec<u8>> {
            let start = ptr as usize;
            Ok(self.heap[start..start + len].to_vec())
        }
    }

    #[test]
    fn test_inline_at_capacity() {
        let vector = RecordVector::inline(b"exactly12chr");
        assert_eq!(decode_string_view(&vector, 0).unwrap(), b"exactly12chr");
    }

    #[test]
    fn test_out_of_line_above_capacity() {
        let vector = RecordVector::out_of_line(b"thirteen chrs");
        assert_eq!(decode_string_view(&vector, 0).unwrap(), b"thirteen chrs");
    }

    #[test]
    fn test_empty_payload_is_inline() {
        let vector = RecordVector::inline(b"");
        assert_eq!(decode_string_view(&vector, 0).unwrap(), b"");
    }

    #[test]
    fn test_negative_length_rejected() {
        let mut vector = RecordVector::inline(b"x");
        vector.record[..4].copy_from_slice(&(-1i32).to_ne_bytes());
        let err = decode_string_view(&vector, 0).expect_err("negative length");
        assert!(matches!(
            err.kind(),
            mallard_common::error::ErrorKind::InvalidFormat { .. }
        ));
    }
}
