//! Temporal type decoding: dates, times, timestamps, intervals.

use mallard_common::Result;

use crate::typeid::TimeUnit;
use crate::value::{Date, Interval, Time, TimeTz, Timestamp};
use crate::view::ByteView;

/// Number of bits of a packed TIME_TZ value holding microseconds.
const TIME_TZ_MICROS_BITS: u32 = 40;

/// Maximum absolute UTC offset in seconds (15:59:59).
pub const MAX_TZ_OFFSET_SECONDS: i32 = 57599;

/// Decodes the `i32` day offset at `row` (days since 1970-01-01).
pub fn decode_date(view: &ByteView, row: usize) -> Result<Date> {
    Ok(Date {
        days: view.read_i32(row * 4)?,
    })
}

/// Decodes the `i64` microseconds-since-midnight at `row`.
pub fn decode_time(view: &ByteView, row: usize) -> Result<Time> {
    Ok(Time {
        micros: view.read_i64(row * 8)?,
    })
}

/// Decodes the `i64` epoch offset at `row`, tagging it with the column's
/// declared `unit`. The offset is kept in that unit; no normalization.
pub fn decode_timestamp(view: &ByteView, row: usize, unit: TimeUnit) -> Result<Timestamp> {
    Ok(Timestamp {
        value: view.read_i64(row * 8)?,
        unit,
    })
}

/// Decodes the 16-byte interval record at `row`: months at offset 0, days at
/// offset 4, microseconds at offset 8.
pub fn decode_interval(view: &ByteView, row: usize) -> Result<Interval> {
    let offset = row * 16;
    Ok(Interval {
        months: view.read_i32(offset)?,
        days: view.read_i32(offset + 4)?,
        micros: view.read_i64(offset + 8)?,
    })
}

/// Decodes the packed 64-bit TIME_TZ value at `row`.
///
/// The low 40 bits hold microseconds since midnight; the high 24 bits hold
/// the UTC offset encoded as `57599 - offset` so that larger offsets order
/// first. Decoding inverts that encoding exactly: the maximum positive
/// offset (+15:59:59) is encoded as 0, and the minimum (-15:59:59) as
/// 115198.
pub fn decode_time_tz(view: &ByteView, row: usize) -> Result<TimeTz> {
    let bits = view.read_u64(row * 8)?;
    let micros = (bits & ((1u64 << TIME_TZ_MICROS_BITS) - 1)) as i64;
    let encoded_offset = (bits >> TIME_TZ_MICROS_BITS) as i32;
    Ok(TimeTz {
        micros,
        offset: MAX_TZ_OFFSET_SECONDS - encoded_offset,
    })
}

/// Packs a TIME_TZ value; inverse of [`decode_time_tz`].
pub fn pack_time_tz(micros: i64, offset: i32) -> u64 {
    let encoded_offset = (MAX_TZ_OFFSET_SECONDS - offset) as u64;
    (encoded_offset << TIME_TZ_MICROS_BITS) | (micros as u64 & ((1u64 << TIME_TZ_MICROS_BITS) - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_date_epoch() {
        let buf = bytemuck::cast_slice::<i32, u8>(&[0, 1, -719468]).to_vec();
        let view = ByteView::new(&buf);
        assert_eq!(decode_date(&view, 0).unwrap(), Date { days: 0 });
        assert_eq!(decode_date(&view, 1).unwrap(), Date { days: 1 });
        assert_eq!(
            decode_date(&view, 2).unwrap().to_parts(),
            (0, 3, 1) // year 0, March 1st: origin of the civil algorithm
        );
    }

    #[test]
    fn test_decode_time() {
        let micros = 23 * 3_600_000_000i64 + 59 * 60_000_000 + 59_000_000;
        let buf = micros.to_ne_bytes();
        let view = ByteView::new(&buf);
        assert_eq!(decode_time(&view, 0).unwrap(), Time { micros });
    }

    #[test]
    fn test_timestamp_units_are_tagged() {
        let buf = bytemuck::cast_slice::<i64, u8>(&[1_000, 1_000]).to_vec();
        let view = ByteView::new(&buf);
        let seconds = decode_timestamp(&view, 0, TimeUnit::Seconds).unwrap();
        let nanos = decode_timestamp(&view, 1, TimeUnit::Nanoseconds).unwrap();
        assert_eq!(seconds.value, nanos.value);
        assert_ne!(seconds, nanos);
        assert_eq!(seconds.unit, TimeUnit::Seconds);
        assert_eq!(nanos.unit, TimeUnit::Nanoseconds);
    }

    #[test]
    fn test_decode_interval() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&2i32.to_ne_bytes());
        buf.extend_from_slice(&5i32.to_ne_bytes());
        buf.extend_from_slice(&3_600_000_000i64.to_ne_bytes());
        let view = ByteView::new(&buf);
        assert_eq!(
            decode_interval(&view, 0).unwrap(),
            Interval {
                months: 2,
                days: 5,
                micros: 3_600_000_000,
            }
        );
    }

    #[test]
    fn test_time_tz_boundary_offsets() {
        // Encoded offset 0 is the maximum positive unencoded offset.
        let buf = 0u64.to_ne_bytes();
        let view = ByteView::new(&buf);
        assert_eq!(
            decode_time_tz(&view, 0).unwrap(),
            TimeTz {
                micros: 0,
                offset: MAX_TZ_OFFSET_SECONDS,
            }
        );

        let buf = pack_time_tz(0, 0).to_ne_bytes();
        let view = ByteView::new(&buf);
        assert_eq!(decode_time_tz(&view, 0).unwrap(), TimeTz { micros: 0, offset: 0 });

        let buf = pack_time_tz(123_456, -MAX_TZ_OFFSET_SECONDS).to_ne_bytes();
        let view = ByteView::new(&buf);
        assert_eq!(
            decode_time_tz(&view, 0).unwrap(),
            TimeTz {
                micros: 123_456,
                offset: -MAX_TZ_OFFSET_SECONDS,
            }
        );
    }

    #[test]
    fn test_time_tz_round_trip() {
        for (micros, offset) in [(0i64, 0i32), (86_399_999_999, 3_600), (42, -7_200)] {
            let buf = pack_time_tz(micros, offset).to_ne_bytes();
            let view = ByteView::new(&buf);
            assert_eq!(decode_time_tz(&view, 0).unwrap(), TimeTz { micros, offset });
        }
    }
}
