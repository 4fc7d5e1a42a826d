//! Logical type descriptors for result columns.

use mallard_common::{Result, error::Error};

/// Closed set of logical type tags reported by the engine for result columns.
///
/// The discriminants mirror the engine's C-level type enum exactly, including
/// the non-contiguous assignments (`Uhugeint = 32`, `Array = 33`) that were
/// appended after the original numbering was frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum TypeId {
    Invalid = 0,
    Boolean = 1,
    TinyInt = 2,
    SmallInt = 3,
    Integer = 4,
    BigInt = 5,
    UTinyInt = 6,
    USmallInt = 7,
    UInteger = 8,
    UBigInt = 9,
    Float = 10,
    Double = 11,
    Timestamp = 12,
    Date = 13,
    Time = 14,
    Interval = 15,
    Hugeint = 16,
    Varchar = 17,
    Blob = 18,
    Decimal = 19,
    TimestampS = 20,
    TimestampMs = 21,
    TimestampNs = 22,
    Enum = 23,
    List = 24,
    Struct = 25,
    Map = 26,
    Uuid = 27,
    Union = 28,
    Bit = 29,
    TimeTz = 30,
    TimestampTz = 31,
    Uhugeint = 32,
    Array = 33,
    Any = 34,
    Varint = 35,
    SqlNull = 36,
}

impl TypeId {
    /// Converts a raw type tag reported by the engine into a `TypeId`.
    ///
    /// Tags outside the known set fail with an `InvalidFormat` error: an
    /// unknown tag means the schema and this decoder disagree about the
    /// engine's type enum, and decoding raw bytes under a guessed layout
    /// would be unsound.
    pub fn from_raw(raw: u32) -> Result<TypeId> {
        let id = match raw {
            0 => TypeId::Invalid,
            1 => TypeId::Boolean,
            2 => TypeId::TinyInt,
            3 => TypeId::SmallInt,
            4 => TypeId::Integer,
            5 => TypeId::BigInt,
            6 => TypeId::UTinyInt,
            7 => TypeId::USmallInt,
            8 => TypeId::UInteger,
            9 => TypeId::UBigInt,
            10 => TypeId::Float,
            11 => TypeId::Double,
            12 => TypeId::Timestamp,
            13 => TypeId::Date,
            14 => TypeId::Time,
            15 => TypeId::Interval,
            16 => TypeId::Hugeint,
            17 => TypeId::Varchar,
            18 => TypeId::Blob,
            19 => TypeId::Decimal,
            20 => TypeId::TimestampS,
            21 => TypeId::TimestampMs,
            22 => TypeId::TimestampNs,
            23 => TypeId::Enum,
            24 => TypeId::List,
            25 => TypeId::Struct,
            26 => TypeId::Map,
            27 => TypeId::Uuid,
            28 => TypeId::Union,
            29 => TypeId::Bit,
            30 => TypeId::TimeTz,
            31 => TypeId::TimestampTz,
            32 => TypeId::Uhugeint,
            33 => TypeId::Array,
            34 => TypeId::Any,
            35 => TypeId::Varint,
            36 => TypeId::SqlNull,
            _ => {
                return Err(Error::invalid_format(
                    "type_tag",
                    format!("unknown raw type tag {raw}"),
                ));
            }
        };
        Ok(id)
    }

    /// Returns the engine's name for this type, as used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TypeId::Invalid => "INVALID",
            TypeId::Boolean => "BOOLEAN",
            TypeId::TinyInt => "TINYINT",
            TypeId::SmallInt => "SMALLINT",
            TypeId::Integer => "INTEGER",
            TypeId::BigInt => "BIGINT",
            TypeId::UTinyInt => "UTINYINT",
            TypeId::USmallInt => "USMALLINT",
            TypeId::UInteger => "UINTEGER",
            TypeId::UBigInt => "UBIGINT",
            TypeId::Float => "FLOAT",
            TypeId::Double => "DOUBLE",
            TypeId::Timestamp => "TIMESTAMP",
            TypeId::Date => "DATE",
            TypeId::Time => "TIME",
            TypeId::Interval => "INTERVAL",
            TypeId::Hugeint => "HUGEINT",
            TypeId::Varchar => "VARCHAR",
            TypeId::Blob => "BLOB",
            TypeId::Decimal => "DECIMAL",
            TypeId::TimestampS => "TIMESTAMP_S",
            TypeId::TimestampMs => "TIMESTAMP_MS",
            TypeId::TimestampNs => "TIMESTAMP_NS",
            TypeId::Enum => "ENUM",
            TypeId::List => "LIST",
            TypeId::Struct => "STRUCT",
            TypeId::Map => "MAP",
            TypeId::Uuid => "UUID",
            TypeId::Union => "UNION",
            TypeId::Bit => "BIT",
            TypeId::TimeTz => "TIME_TZ",
            TypeId::TimestampTz => "TIMESTAMP_TZ",
            TypeId::Uhugeint => "UHUGEINT",
            TypeId::Array => "ARRAY",
            TypeId::Any => "ANY",
            TypeId::Varint => "VARINT",
            TypeId::SqlNull => "SQLNULL",
        }
    }

    /// Returns the physical width in bytes of one value slot in a vector of
    /// this type, or `None` if the type has no fixed-width slot this decoder
    /// recognizes (composite types and `SQLNULL`).
    ///
    /// Variable-length types (`VARCHAR`, `BLOB`, `BIT`) report the 16-byte
    /// string-view record width. `DECIMAL` slots depend on the declared
    /// width and are sized by the decimal decoder instead.
    pub fn fixed_width(&self) -> Option<usize> {
        match self {
            TypeId::Boolean => Some(1),
            TypeId::TinyInt | TypeId::UTinyInt => Some(1),
            TypeId::SmallInt | TypeId::USmallInt => Some(2),
            TypeId::Integer | TypeId::UInteger => Some(4),
            TypeId::BigInt | TypeId::UBigInt => Some(8),
            TypeId::Float => Some(4),
            TypeId::Double => Some(8),
            TypeId::Date => Some(4),
            TypeId::Time | TypeId::TimeTz => Some(8),
            TypeId::Timestamp
            | TypeId::TimestampS
            | TypeId::TimestampMs
            | TypeId::TimestampNs
            | TypeId::TimestampTz => Some(8),
            TypeId::Interval => Some(16),
            TypeId::Hugeint | TypeId::Uhugeint | TypeId::Uuid => Some(16),
            TypeId::Varchar | TypeId::Blob | TypeId::Bit => Some(16),
            TypeId::Decimal => None,
            TypeId::Invalid
            | TypeId::Enum
            | TypeId::List
            | TypeId::Struct
            | TypeId::Map
            | TypeId::Union
            | TypeId::Array
            | TypeId::Any
            | TypeId::Varint
            | TypeId::SqlNull => None,
        }
    }
}

/// Time unit of a timestamp column.
///
/// A decoded timestamp is always tagged with the unit of the column type it
/// came from; units are never silently normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

/// A column's logical type descriptor.
///
/// Only the type tag and, for `DECIMAL`, the declared width and scale are
/// consumed by the decode path. Parameters of composite types (child types,
/// enum dictionaries) are not represented since those columns are rejected
/// as unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalType {
    pub id: TypeId,
    /// Declared decimal precision width. Zero for non-decimal types.
    pub decimal_width: u8,
    /// Declared decimal scale. Zero for non-decimal types.
    pub decimal_scale: u8,
}

impl LogicalType {
    /// Creates a descriptor for a non-parameterized type.
    pub fn new(id: TypeId) -> LogicalType {
        LogicalType {
            id,
            decimal_width: 0,
            decimal_scale: 0,
        }
    }

    /// Creates a `DECIMAL` descriptor with the declared width and scale.
    pub fn decimal(width: u8, scale: u8) -> LogicalType {
        LogicalType {
            id: TypeId::Decimal,
            decimal_width: width,
            decimal_scale: scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mallard_common::error::ErrorKind;

    #[test]
    fn test_from_raw_round_trips_known_tags() {
        for raw in 0..=36u32 {
            let id = TypeId::from_raw(raw).expect("known tag");
            assert_eq!(id as u32, raw);
        }
    }

    #[test]
    fn test_from_raw_rejects_unknown_tags() {
        for raw in [37u32, 64, u32::MAX] {
            let err = TypeId::from_raw(raw).expect_err("unknown tag");
            assert!(matches!(err.kind(), ErrorKind::InvalidFormat { .. }));
        }
    }

    #[test]
    fn test_fixed_width_table() {
        assert_eq!(TypeId::Boolean.fixed_width(), Some(1));
        assert_eq!(TypeId::SmallInt.fixed_width(), Some(2));
        assert_eq!(TypeId::UInteger.fixed_width(), Some(4));
        assert_eq!(TypeId::Double.fixed_width(), Some(8));
        assert_eq!(TypeId::Interval.fixed_width(), Some(16));
        assert_eq!(TypeId::Varchar.fixed_width(), Some(16));
        assert_eq!(TypeId::Decimal.fixed_width(), None);
        assert_eq!(TypeId::List.fixed_width(), None);
    }
}
