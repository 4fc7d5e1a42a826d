//! Decimal and 128-bit integer decoding.
//!
//! A `DECIMAL(width, scale)` column stores its mantissa in the narrowest of
//! four signed integer storage classes that can hold `width` decimal digits.
//! The class is selected solely by the declared width, never probed from the
//! data:
//!
//! | declared width | storage   | slot size |
//! |----------------|-----------|-----------|
//! | 1..=4          | `i16`     | 2 bytes   |
//! | 5..=9          | `i32`     | 4 bytes   |
//! | 10..=18        | `i64`     | 8 bytes   |
//! | 19..=38        | `i128`    | 16 bytes  |

use mallard_common::{Result, error::Error};

use crate::value::{Decimal, Hugeint, Uhugeint};
use crate::view::ByteView;

/// Maximum declared width of a decimal column, in decimal digits.
pub const MAX_DECIMAL_WIDTH: u8 = 38;

/// Returns the physical slot size in bytes for a decimal of the declared
/// `width`, or `InvalidDecimalWidth` if the width is outside `[1, 38]`.
pub fn decimal_storage_size(width: u8) -> Result<usize> {
    match width {
        1..=4 => Ok(2),
        5..=9 => Ok(4),
        10..=18 => Ok(8),
        19..=38 => Ok(16),
        _ => Err(Error::invalid_decimal_width(width)),
    }
}

/// Decodes the decimal mantissa at `row`, widening it to `i128`.
///
/// The 16-byte storage class is composed from its halves as
/// `(high << 64) | low`, with the high half carrying the sign.
pub fn decode_decimal(view: &ByteView, row: usize, width: u8, scale: u8) -> Result<Decimal> {
    let mantissa = match decimal_storage_size(width)? {
        2 => view.read_i16(row * 2)? as i128,
        4 => view.read_i32(row * 4)? as i128,
        8 => view.read_i64(row * 8)? as i128,
        _ => {
            let offset = row * 16;
            let low = view.read_u64(offset)?;
            let high = view.read_i64(offset + 8)?;
            ((high as i128) << 64) | low as i128
        }
    };
    Ok(Decimal {
        width,
        scale,
        mantissa,
    })
}

/// Decodes the 16-byte signed 128-bit integer at `row` as its lower/upper
/// halves. No composition is performed; see [`Hugeint::as_i128`].
pub fn decode_hugeint(view: &ByteView, row: usize) -> Result<Hugeint> {
    let offset = row * 16;
    Ok(Hugeint {
        lower: view.read_u64(offset)?,
        upper: view.read_i64(offset + 8)?,
    })
}

/// Decodes the 16-byte unsigned 128-bit integer at `row` as its lower/upper
/// halves.
pub fn decode_uhugeint(view: &ByteView, row: usize) -> Result<Uhugeint> {
    let offset = row * 16;
    Ok(Uhugeint {
        lower: view.read_u64(offset)?,
        upper: view.read_u64(offset + 8)?,
    })
}
