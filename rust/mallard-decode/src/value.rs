//! Decoded value model: the typed result of decoding one cell.

use crate::typeid::TimeUnit;

/// A fixed-point decimal value: an integer mantissa scaled by `10^scale`.
///
/// The mantissa is preserved exactly as stored; no floating-point rounding
/// happens during decode. Callers wanting a display value can use
/// [`Decimal::to_f64`] or split it with [`Decimal::integer_part`] and
/// [`Decimal::fractional_part`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decimal {
    /// Declared precision width of the column, in decimal digits.
    pub width: u8,
    /// Number of fractional digits.
    pub scale: u8,
    /// Unscaled mantissa; the represented value is `mantissa / 10^scale`.
    pub mantissa: i128,
}

impl Decimal {
    /// Returns `10^scale`, the divisor separating integer and fractional digits.
    fn scale_factor(&self) -> i128 {
        10i128.pow(self.scale as u32)
    }

    /// Returns the integer part of the value (`mantissa / 10^scale`),
    /// truncated toward zero.
    pub fn integer_part(&self) -> i128 {
        self.mantissa / self.scale_factor()
    }

    /// Returns the fractional digits of the value (`mantissa % 10^scale`),
    /// carrying the sign of the mantissa.
    pub fn fractional_part(&self) -> i128 {
        self.mantissa % self.scale_factor()
    }

    /// Returns an approximate floating-point rendering of the value.
    pub fn to_f64(&self) -> f64 {
        self.mantissa as f64 / self.scale_factor() as f64
    }
}

/// A 128-bit signed integer as stored by the engine: a lower unsigned and an
/// upper signed 64-bit half.
///
/// The decoded value keeps the halves separate; [`Hugeint::as_i128`] composes
/// them for callers that want the full-width integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hugeint {
    pub lower: u64,
    pub upper: i64,
}

impl Hugeint {
    /// Composes the halves into the 128-bit value, `(upper << 64) | lower`.
    pub fn as_i128(&self) -> i128 {
        ((self.upper as i128) << 64) | self.lower as i128
    }
}

/// A 128-bit unsigned integer as stored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uhugeint {
    pub lower: u64,
    pub upper: u64,
}

impl Uhugeint {
    /// Composes the halves into the 128-bit value, `(upper << 64) | lower`.
    pub fn as_u128(&self) -> u128 {
        ((self.upper as u128) << 64) | self.lower as u128
    }
}

/// A calendar date, in days since 1970-01-01.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pub days: i32,
}

impl Date {
    /// Decomposes the day offset into proleptic-Gregorian calendar parts
    /// `(year, month, day)`.
    pub fn to_parts(&self) -> (i32, u32, u32) {
        // Howard Hinnant's civil_from_days algorithm.
        let z = self.days as i64 + 719468;
        let era = if z >= 0 { z } else { z - 146096 } / 146097;
        let doe = (z - era * 146097) as u64;
        let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
        let y = yoe as i64 + era * 400;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
        let m = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
        let year = if m <= 2 { y + 1 } else { y } as i32;
        (year, m, d)
    }
}

/// A time of day, in microseconds since 00:00:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Time {
    pub micros: i64,
}

/// An offset from the Unix epoch in the unit declared by the column type.
///
/// The unit is carried alongside the raw offset; this decoder never converts
/// between units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub value: i64,
    pub unit: TimeUnit,
}

/// A calendar interval: months, days and microseconds are kept as independent
/// components since none of them has a fixed conversion to the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub months: i32,
    pub days: i32,
    pub micros: i64,
}

/// A time of day with a UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeTz {
    /// Microseconds since 00:00:00.
    pub micros: i64,
    /// UTC offset in seconds, in `[-57599, 57599]` (up to +/-15:59:59).
    pub offset: i32,
}

/// A single decoded cell value.
///
/// Variable-length payloads (`Varchar`, `Blob`) are owned copies made before
/// the backing chunk is released; no variant borrows native memory.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    Decimal(Decimal),
    Hugeint(Hugeint),
    Uhugeint(Uhugeint),
    Date(Date),
    Time(Time),
    Timestamp(Timestamp),
    Interval(Interval),
    TimeTz(TimeTz),
    Varchar(String),
    Blob(Vec<u8>),
    /// Raw 128-bit UUID storage value, without display transforms.
    Uuid(u128),
}

impl Value {
    /// Returns `true` for the `Null` variant.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// One decoded result row: an ordered sequence of values, one per column,
/// in the column order reported by the result schema.
pub type Row = Vec<Value>;
