//! Column encoders producing the engine's physical vector layouts.

use mallard_common::{Result, error::Error};
use mallard_decode::source::ColumnVector;
use mallard_decode::strings::{INLINE_CAPACITY, STRING_VIEW_SIZE};
use mallard_decode::typeid::{LogicalType, TypeId};

/// One in-memory column vector: raw data, optional validity words, a side
/// heap for out-of-line string payloads, and the logical type.
#[derive(Debug, Clone)]
pub struct TestColumn {
    ty: LogicalType,
    data: Vec<u8>,
    validity: Option<Vec<u64>>,
    heap: Vec<u8>,
}

impl TestColumn {
    /// Encodes a column of fixed-width values. `None` entries write a zeroed
    /// slot and clear the row's validity bit.
    pub fn fixed<T: bytemuck::NoUninit + Default>(
        ty: LogicalType,
        values: &[Option<T>],
    ) -> TestColumn {
        let mut data = Vec::with_capacity(values.len() * std::mem::size_of::<T>());
        for value in values {
            data.extend_from_slice(bytemuck::bytes_of(&value.unwrap_or_default()));
        }
        TestColumn {
            ty,
            data,
            validity: build_validity(values.iter().map(Option::is_some)),
            heap: Vec::new(),
        }
    }

    /// Encodes a `BOOLEAN` column (one byte per value).
    pub fn booleans(values: &[Option<bool>]) -> TestColumn {
        let mapped: Vec<Option<u8>> = values.iter().map(|v| v.map(u8::from)).collect();
        TestColumn::fixed(LogicalType::new(TypeId::Boolean), &mapped)
    }

    /// Encodes a `VARCHAR` column as string-view records, spilling payloads
    /// longer than the inline capacity to the column heap.
    pub fn strings(values: &[Option<&str>]) -> TestColumn {
        let bytes: Vec<Option<&[u8]>> = values.iter().map(|v| v.map(str::as_bytes)).collect();
        TestColumn::string_class(LogicalType::new(TypeId::Varchar), &bytes)
    }

    /// Encodes a `BLOB` column as string-view records.
    pub fn blobs(values: &[Option<&[u8]>]) -> TestColumn {
        TestColumn::string_class(LogicalType::new(TypeId::Blob), values)
    }

    /// Encodes a string-class column (`VARCHAR`, `BLOB`, `BIT`) of the given
    /// type. Out-of-line pointers are heap offsets.
    pub fn string_class(ty: LogicalType, values: &[Option<&[u8]>]) -> TestColumn {
        let mut data = Vec::with_capacity(values.len() * STRING_VIEW_SIZE);
        let mut heap = Vec::new();
        for value in values {
            let payload = value.unwrap_or_default();
            let mut record = [0u8; STRING_VIEW_SIZE];
            record[..4].copy_from_slice(&(payload.len() as i32).to_ne_bytes());
            if payload.len() <= INLINE_CAPACITY {
                record[4..4 + payload.len()].copy_from_slice(payload);
            } else {
                record[4..8].copy_from_slice(&payload[..4]);
                record[8..].copy_from_slice(&(heap.len() as u64).to_ne_bytes());
                heap.extend_from_slice(payload);
            }
            data.extend_from_slice(&record);
        }
        TestColumn {
            ty,
            data,
            validity: build_validity(values.iter().map(Option::is_some)),
            heap,
        }
    }

    /// Creates a column from already-encoded parts, for layouts the typed
    /// encoders do not cover (e.g. deliberately malformed buffers).
    pub fn from_raw_parts(
        ty: LogicalType,
        data: Vec<u8>,
        validity: Option<Vec<u64>>,
        heap: Vec<u8>,
    ) -> TestColumn {
        TestColumn {
            ty,
            data,
            validity,
            heap,
        }
    }
}

impl ColumnVector for TestColumn {
    fn logical_type(&self) -> LogicalType {
        self.ty
    }

    fn data(&self) -> &[u8] {
        &self.data
    }

    fn validity(&self) -> Option<&[u64]> {
        self.validity.as_deref()
    }

    fn read_out_of_line(&self, ptr: u64, len: usize) -> Result<Vec<u8>> {
        let start = ptr as usize;
        let end = start
            .checked_add(len)
            .ok_or_else(|| Error::index_out_of_bounds(start, self.heap.len()))?;
        self.heap
            .get(start..end)
            .map(<[u8]>::to_vec)
            .ok_or_else(|| Error::index_out_of_bounds(end, self.heap.len()))
    }
}

/// Builds validity words from per-row presence, or `None` when every row is
/// valid (the engine omits the mask in that case).
fn build_validity(present: impl Iterator<Item = bool>) -> Option<Vec<u64>> {
    let mut words = Vec::new();
    let mut any_null = false;
    for (row, is_present) in present.enumerate() {
        if row % 64 == 0 {
            words.push(0u64);
        }
        if is_present {
            *words.last_mut().expect("word pushed above") |= 1u64 << (row % 64);
        } else {
            any_null = true;
        }
    }
    any_null.then_some(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mallard_decode::validity::ValidityMask;

    #[test]
    fn test_fixed_layout() {
        let column = TestColumn::fixed(
            LogicalType::new(TypeId::Integer),
            &[Some(1i32), None, Some(3)],
        );
        assert_eq!(column.data().len(), 12);
        let mask = ValidityMask::new(column.validity());
        assert!(mask.is_valid(0));
        assert!(mask.is_null(1));
        assert!(mask.is_valid(2));
    }

    #[test]
    fn test_all_valid_omits_mask() {
        let column = TestColumn::fixed(LogicalType::new(TypeId::Integer), &[Some(1i32), Some(2)]);
        assert!(column.validity().is_none());
    }

    #[test]
    fn test_string_spill_to_heap() {
        let column = TestColumn::strings(&[Some("short"), Some("long enough to spill")]);
        assert_eq!(column.data().len(), 2 * STRING_VIEW_SIZE);
        assert_eq!(column.heap, b"long enough to spill");
    }

    #[test]
    fn test_out_of_line_bounds() {
        let column = TestColumn::strings(&[Some("long enough to spill")]);
        assert!(column.read_out_of_line(0, 20).is_ok());
        assert!(column.read_out_of_line(8, 20).is_err());
    }
}
