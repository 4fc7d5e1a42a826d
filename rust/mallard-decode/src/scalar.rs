//! Fixed-width scalar decoding.

use mallard_common::Result;

use crate::typeid::TypeId;
use crate::value::Value;
use crate::view::ByteView;

/// Decodes the fixed-width primitive at `row` of a vector's data buffer.
///
/// The value slot is at byte offset `row * width`, where `width` is the
/// physical width of `id`. Bytes are read native-endian. Booleans are stored
/// as one byte, non-zero meaning `true`.
///
/// # Panics
///
/// Debug-asserts that `id` is one of the eleven scalar tags; the dispatch in
/// [`crate::decode`] only routes those here.
pub fn decode_scalar(id: TypeId, view: &ByteView, row: usize) -> Result<Value> {
    let value = match id {
        TypeId::Boolean => Value::Boolean(view.read_u8(row)? != 0),
        TypeId::TinyInt => Value::Int8(view.read_i8(row)?),
        TypeId::SmallInt => Value::Int16(view.read_i16(row * 2)?),
        TypeId::Integer => Value::Int32(view.read_i32(row * 4)?),
        TypeId::BigInt => Value::Int64(view.read_i64(row * 8)?),
        TypeId::UTinyInt => Value::UInt8(view.read_u8(row)?),
        TypeId::USmallInt => Value::UInt16(view.read_u16(row * 2)?),
        TypeId::UInteger => Value::UInt32(view.read_u32(row * 4)?),
        TypeId::UBigInt => Value::UInt64(view.read_u64(row * 8)?),
        TypeId::Float => Value::Float32(view.read_f32(row * 4)?),
        TypeId::Double => Value::Float64(view.read_f64(row * 8)?),
        other => {
            debug_assert!(false, "non-scalar type {other:?} routed to decode_scalar");
            return Err(mallard_common::error::Error::invalid_arg(
                "id",
                format!("{} is not a fixed-width scalar type", other.name()),
            ));
        }
    };
    Ok(value)
}
