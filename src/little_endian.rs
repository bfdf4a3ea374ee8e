//! Functions in this module convert little-endian field bytes into integer
//! values and back.
//!
//! The two 64-bit decoders accept any field width between 1 and 8 bytes and
//! extend the supplied bytes to a full word: `i64_from_le_bytes` replicates
//! the sign bit of the most-significant supplied byte, `u64_from_le_bytes`
//! always extends with zeroes. The 16- and 32-bit decoders require their
//! exact width. Extension happens in a local 8-byte buffer; the caller's
//! slice is never modified.

use crate::error::{Error, ExpectedLength, Result};

/// Inclusive byte-count bounds shared by the variable-width decoders.
const VARIABLE_WIDTH: ExpectedLength = ExpectedLength::Between(1, 8);

fn check_variable_width(decoder: &'static str, received: usize) -> Result<()> {
    if (1..=8).contains(&received) {
        Ok(())
    } else {
        Err(Error::invalid_length(decoder, received, VARIABLE_WIDTH))
    }
}

/// Converts a little-endian byte slice of 1 to 8 bytes to an `i64`.
///
/// The slice is interpreted as a two's-complement integer occupying exactly
/// its own width and is sign-extended to 64 bits, so narrow negative fields
/// keep their value.
///
/// # Examples
///
/// ```rust
/// use field_bytes::little_endian::i64_from_le_bytes;
///
/// assert_eq!(Ok(-60140), i64_from_le_bytes(&[0x14, 0x15, 0xFF]));
/// assert_eq!(Ok(255), i64_from_le_bytes(&[0xFF, 0x00]));
/// assert!(i64_from_le_bytes(&[]).is_err());
/// ```
pub fn i64_from_le_bytes(bytes: &[u8]) -> Result<i64> {
    check_variable_width("i64_from_le_bytes", bytes.len())?;

    // The high bit of the most-significant supplied byte picks the filler.
    let filler = if bytes[bytes.len() - 1] >= 0x80 {
        0xFF
    } else {
        0x00
    };

    let mut word = [filler; 8];
    word[..bytes.len()].copy_from_slice(bytes);

    Ok(i64::from_le_bytes(word))
}

/// Converts a little-endian byte slice of 1 to 8 bytes to a `u64`.
///
/// The slice is zero-extended to 64 bits regardless of its top bit.
///
/// # Examples
///
/// ```rust
/// use field_bytes::little_endian::u64_from_le_bytes;
///
/// assert_eq!(Ok(16_717_076), u64_from_le_bytes(&[0x14, 0x15, 0xFF]));
/// assert_eq!(Ok(255), u64_from_le_bytes(&[0xFF]));
/// assert!(u64_from_le_bytes(&[0u8; 9]).is_err());
/// ```
pub fn u64_from_le_bytes(bytes: &[u8]) -> Result<u64> {
    check_variable_width("u64_from_le_bytes", bytes.len())?;

    let mut word = [0u8; 8];
    word[..bytes.len()].copy_from_slice(bytes);

    Ok(u64::from_le_bytes(word))
}

/// Converts a little-endian byte slice of exactly 2 bytes to a `u16`.
///
/// # Examples
///
/// ```rust
/// use field_bytes::little_endian::u16_from_le_bytes;
///
/// assert_eq!(Ok(51702), u16_from_le_bytes(&[0xF6, 0xC9]));
/// assert!(u16_from_le_bytes(&[0xF6]).is_err());
/// ```
pub fn u16_from_le_bytes(bytes: &[u8]) -> Result<u16> {
    match <[u8; 2]>::try_from(bytes) {
        Ok(word) => Ok(u16::from_le_bytes(word)),
        Err(_) => Err(Error::invalid_length(
            "u16_from_le_bytes",
            bytes.len(),
            ExpectedLength::Exactly(2),
        )),
    }
}

/// Converts a little-endian byte slice of exactly 4 bytes to a `u32`.
///
/// # Examples
///
/// ```rust
/// use field_bytes::little_endian::u32_from_le_bytes;
///
/// assert_eq!(Ok(13_224_438), u32_from_le_bytes(&[0xF6, 0xC9, 0xC9, 0x00]));
/// assert!(u32_from_le_bytes(&[0xF6, 0xC9, 0xC9]).is_err());
/// ```
pub fn u32_from_le_bytes(bytes: &[u8]) -> Result<u32> {
    match <[u8; 4]>::try_from(bytes) {
        Ok(word) => Ok(u32::from_le_bytes(word)),
        Err(_) => Err(Error::invalid_length(
            "u32_from_le_bytes",
            bytes.len(),
            ExpectedLength::Exactly(4),
        )),
    }
}

/// Encodes `value` as the shortest little-endian byte sequence that
/// `i64_from_le_bytes` maps back to `value`.
///
/// The result is between 1 and 8 bytes long; trailing bytes that sign
/// extension would regenerate are dropped.
///
/// # Examples
///
/// ```rust
/// use field_bytes::little_endian::i64_to_min_le_bytes;
///
/// assert_eq!(vec![0x14, 0x15, 0xFF], i64_to_min_le_bytes(-60140));
/// assert_eq!(vec![0x80, 0x00], i64_to_min_le_bytes(128));
/// assert_eq!(vec![0x80], i64_to_min_le_bytes(-128));
/// ```
pub fn i64_to_min_le_bytes(value: i64) -> Vec<u8> {
    let word = value.to_le_bytes();

    let mut len = word.len();
    while len > 1 {
        let redundant = match word[len - 1] {
            0x00 => word[len - 2] < 0x80,
            0xFF => word[len - 2] >= 0x80,
            _ => false,
        };
        if !redundant {
            break;
        }
        len -= 1;
    }

    word[..len].to_vec()
}

/// Encodes `value` as the shortest little-endian byte sequence that
/// `u64_from_le_bytes` maps back to `value`.
///
/// The result is between 1 and 8 bytes long; trailing zero bytes are
/// dropped.
///
/// # Examples
///
/// ```rust
/// use field_bytes::little_endian::u64_to_min_le_bytes;
///
/// assert_eq!(vec![0x14, 0x15, 0xFF], u64_to_min_le_bytes(16_717_076));
/// assert_eq!(vec![0x00], u64_to_min_le_bytes(0));
/// ```
pub fn u64_to_min_le_bytes(value: u64) -> Vec<u8> {
    let word = value.to_le_bytes();

    let mut len = word.len();
    while len > 1 && word[len - 1] == 0x00 {
        len -= 1;
    }

    word[..len].to_vec()
}
