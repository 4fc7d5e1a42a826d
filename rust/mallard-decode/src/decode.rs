//! Per-cell decode dispatch.

use mallard_common::{Result, error::Error};

use crate::decimal;
use crate::scalar;
use crate::source::ColumnVector;
use crate::strings;
use crate::temporal;
use crate::typeid::{TimeUnit, TypeId};
use crate::validity::ValidityMask;
use crate::value::Value;
use crate::view::ByteView;

/// Decodes the cell at `row` of `vector` into an owned [`Value`].
///
/// Validity is consulted first: a null row yields `Value::Null` without any
/// decoder touching the value bytes. For valid rows, a single exhaustive
/// match over the column's [`TypeId`] routes to the scalar, string, decimal
/// or temporal decoder. Composite and dictionary-backed types (`LIST`,
/// `STRUCT`, `MAP`, `ARRAY`, `UNION`, `ENUM`, `ANY`, `VARINT`) fail with
/// `UnsupportedType` naming the offending type; this is a documented
/// limitation, not a silent default.
///
/// `column` is only used to position error diagnostics.
pub fn decode_cell<V: ColumnVector + ?Sized>(vector: &V, row: usize, column: usize) -> Result<Value> {
    let validity = ValidityMask::new(vector.validity());
    if validity.is_null(row) {
        return Ok(Value::Null);
    }

    let ty = vector.logical_type();
    let view = ByteView::new(vector.data());

    let value = match ty.id {
        TypeId::Boolean
        | TypeId::TinyInt
        | TypeId::SmallInt
        | TypeId::Integer
        | TypeId::BigInt
        | TypeId::UTinyInt
        | TypeId::USmallInt
        | TypeId::UInteger
        | TypeId::UBigInt
        | TypeId::Float
        | TypeId::Double => scalar::decode_scalar(ty.id, &view, row)?,

        TypeId::Varchar => {
            let bytes = strings::decode_string_view(vector, row)?;
            let text = String::from_utf8(bytes).map_err(|err| {
                Error::invalid_format("varchar", format!("invalid UTF-8 payload: {err}"))
            })?;
            Value::Varchar(text)
        }
        // BIT shares the string-view layout; its payload is the engine's raw
        // bit-string encoding, padding prefix included.
        TypeId::Blob | TypeId::Bit => Value::Blob(strings::decode_string_view(vector, row)?),

        TypeId::Decimal => Value::Decimal(decimal::decode_decimal(
            &view,
            row,
            ty.decimal_width,
            ty.decimal_scale,
        )?),
        TypeId::Hugeint => Value::Hugeint(decimal::decode_hugeint(&view, row)?),
        TypeId::Uhugeint => Value::Uhugeint(decimal::decode_uhugeint(&view, row)?),
        TypeId::Uuid => Value::Uuid(view.read::<u128>(row * 16)?),

        TypeId::Date => Value::Date(temporal::decode_date(&view, row)?),
        TypeId::Time => Value::Time(temporal::decode_time(&view, row)?),
        TypeId::TimeTz => Value::TimeTz(temporal::decode_time_tz(&view, row)?),
        TypeId::Timestamp => {
            Value::Timestamp(temporal::decode_timestamp(&view, row, TimeUnit::Microseconds)?)
        }
        TypeId::TimestampS => {
            Value::Timestamp(temporal::decode_timestamp(&view, row, TimeUnit::Seconds)?)
        }
        TypeId::TimestampMs => {
            Value::Timestamp(temporal::decode_timestamp(&view, row, TimeUnit::Milliseconds)?)
        }
        TypeId::TimestampNs => {
            Value::Timestamp(temporal::decode_timestamp(&view, row, TimeUnit::Nanoseconds)?)
        }
        // TIMESTAMP_TZ is stored as UTC microseconds; the zone designation
        // is schema-level only.
        TypeId::TimestampTz => {
            Value::Timestamp(temporal::decode_timestamp(&view, row, TimeUnit::Microseconds)?)
        }

        TypeId::Interval => Value::Interval(temporal::decode_interval(&view, row)?),

        TypeId::SqlNull => Value::Null,

        TypeId::Invalid
        | TypeId::Enum
        | TypeId::List
        | TypeId::Struct
        | TypeId::Map
        | TypeId::Union
        | TypeId::Array
        | TypeId::Any
        | TypeId::Varint => {
            return Err(Error::unsupported_type(ty.id.name(), column, row));
        }
    };
    Ok(value)
}
