//! Functions in this module convert Windows FILETIME field bytes into UTC
//! timestamps.
//!
//! The artifact formats this library serves (MFT records, registry cells,
//! event logs) store timestamps as FILETIME: an unsigned 64-bit
//! little-endian count of 100-nanosecond ticks since 1601-01-01T00:00:00Z.

use chrono::{DateTime, Utc};

use crate::error::{Error, ExpectedLength, Result};

/// Number of ticks between the FILETIME epoch and the Unix epoch.
const UNIX_EPOCH_TICKS: i128 = 116_444_736_000_000_000;

/// Number of 100-nanosecond ticks per second.
const TICKS_PER_SECOND: i128 = 10_000_000;

/// Converts a little-endian byte slice of exactly 8 bytes to the UTC
/// timestamp of the FILETIME value it holds.
///
/// # Examples
///
/// ```rust
/// use field_bytes::filetime::timestamp_from_filetime_bytes;
///
/// let modified = timestamp_from_filetime_bytes(&131_301_625_330_000_000u64.to_le_bytes())?;
/// assert_eq!("2017-01-29 11:22:13 UTC", modified.to_string());
///
/// assert!(timestamp_from_filetime_bytes(&[0x00; 4]).is_err());
/// # Ok::<(), field_bytes::Error>(())
/// ```
pub fn timestamp_from_filetime_bytes(bytes: &[u8]) -> Result<DateTime<Utc>> {
    match <[u8; 8]>::try_from(bytes) {
        Ok(word) => timestamp_from_filetime(u64::from_le_bytes(word)),
        Err(_) => Err(Error::invalid_length(
            "timestamp_from_filetime_bytes",
            bytes.len(),
            ExpectedLength::Exactly(8),
        )),
    }
}

/// Converts a FILETIME tick count to a UTC timestamp.
///
/// A tick is 100 nanoseconds; tick 0 is 1601-01-01T00:00:00Z. The count is
/// rebased onto the Unix epoch with 128-bit arithmetic so that values above
/// `i64::MAX` cannot wrap.
///
/// # Examples
///
/// ```rust
/// use field_bytes::filetime::timestamp_from_filetime;
///
/// assert_eq!(
///     "1601-01-01 00:00:00 UTC",
///     timestamp_from_filetime(0)?.to_string()
/// );
/// assert_eq!(
///     "1970-01-01 00:00:00 UTC",
///     timestamp_from_filetime(116_444_736_000_000_000)?.to_string()
/// );
/// # Ok::<(), field_bytes::Error>(())
/// ```
pub fn timestamp_from_filetime(ticks: u64) -> Result<DateTime<Utc>> {
    let unix_ticks = i128::from(ticks) - UNIX_EPOCH_TICKS;
    let seconds = unix_ticks.div_euclid(TICKS_PER_SECOND);
    let nanoseconds = unix_ticks.rem_euclid(TICKS_PER_SECOND) * 100;

    i64::try_from(seconds)
        .ok()
        .and_then(|seconds| DateTime::from_timestamp(seconds, nanoseconds as u32))
        .ok_or_else(|| Error::timestamp_out_of_range("timestamp_from_filetime"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_from_filetime() {
        assert_eq!(
            DateTime::from_timestamp(-11_644_473_600, 0),
            timestamp_from_filetime(0).ok()
        );
        assert_eq!(
            DateTime::from_timestamp(0, 0),
            timestamp_from_filetime(116_444_736_000_000_000).ok()
        );
        assert_eq!(
            DateTime::from_timestamp(1_485_688_933, 0),
            timestamp_from_filetime(131_301_625_330_000_000).ok()
        );
    }

    #[test]
    fn test_timestamp_from_filetime_keeps_sub_second_ticks() {
        assert_eq!(
            DateTime::from_timestamp(0, 100),
            timestamp_from_filetime(116_444_736_000_000_001).ok()
        );
        assert_eq!(
            DateTime::from_timestamp(-1, 999_999_900),
            timestamp_from_filetime(116_444_735_999_999_999).ok()
        );
        assert_eq!(
            DateTime::from_timestamp(1_485_688_933, 500),
            timestamp_from_filetime(131_301_625_330_000_005).ok()
        );
    }

    #[test]
    fn test_timestamp_from_filetime_covers_the_full_tick_range() {
        assert!(timestamp_from_filetime(u64::MAX).is_ok());
    }

    #[test]
    fn test_timestamp_from_filetime_bytes() {
        assert_eq!(
            timestamp_from_filetime(131_301_625_330_000_000),
            timestamp_from_filetime_bytes(&131_301_625_330_000_000u64.to_le_bytes())
        );
        assert_eq!(
            timestamp_from_filetime(0),
            timestamp_from_filetime_bytes(&[0x00; 8])
        );
    }

    #[test]
    fn test_timestamp_from_filetime_bytes_rejects_invalid_lengths() {
        for received in [0usize, 4, 7, 9] {
            assert_eq!(
                Err(Error::InvalidLength {
                    decoder: "timestamp_from_filetime_bytes",
                    received,
                    expected: ExpectedLength::Exactly(8),
                }),
                timestamp_from_filetime_bytes(&vec![0x00; received])
            );
        }
    }
}
