//! Functions in this module recover ASCII text from UTF-16LE field bytes.

use crate::error::{Error, Result};

/// Converts a byte slice of UTF-16LE text whose code units sit in the ASCII
/// range to a `String` by stripping every null byte.
///
/// ASCII characters appear in UTF-16LE as their code paired with a zero high
/// byte, so dropping every `0x00` byte recovers the text. The strip is
/// literal and position-independent: code unit boundaries are not validated
/// and an odd trailing byte passes through. Characters outside the ASCII
/// range come out mangled because only their zero bytes are removed. A slice
/// consisting entirely of null bytes yields an empty string.
///
/// # Examples
///
/// ```rust
/// use field_bytes::unicode::ascii_from_utf16le_bytes;
///
/// let name = ascii_from_utf16le_bytes(&[116, 0, 101, 0, 115, 0, 116])?;
/// assert_eq!("test", name);
///
/// assert!(ascii_from_utf16le_bytes(&[]).is_err());
/// # Ok::<(), field_bytes::Error>(())
/// ```
pub fn ascii_from_utf16le_bytes(bytes: &[u8]) -> Result<String> {
    if bytes.is_empty() {
        return Err(Error::empty_input("ascii_from_utf16le_bytes"));
    }

    let text = bytes
        .iter()
        .filter(|&&byte| byte != 0x00)
        .map(|&byte| char::from(byte))
        .collect();

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_from_utf16le_bytes() {
        assert_eq!(
            Ok("test".to_string()),
            ascii_from_utf16le_bytes(&[116, 0, 101, 0, 115, 0, 116])
        );
        assert_eq!(
            Ok("$MFT".to_string()),
            ascii_from_utf16le_bytes(&[0x24, 0x00, 0x4D, 0x00, 0x46, 0x00, 0x54, 0x00])
        );
    }

    #[test]
    fn test_ascii_from_utf16le_bytes_rejects_empty_input() {
        assert_eq!(
            Err(Error::EmptyInput {
                decoder: "ascii_from_utf16le_bytes",
            }),
            ascii_from_utf16le_bytes(&[])
        );
    }

    #[test]
    fn test_all_null_bytes_yield_empty_text() {
        assert_eq!(Ok(String::new()), ascii_from_utf16le_bytes(&[0x00, 0x00]));
    }

    #[test]
    fn test_non_ascii_code_units_are_mangled() {
        // U+2026 splits into two surviving bytes.
        assert_eq!(
            Ok("& ".to_string()),
            ascii_from_utf16le_bytes(&[0x26, 0x20])
        );
        // U+0100 loses its zero low byte entirely.
        assert_eq!(
            Ok("\u{1}".to_string()),
            ascii_from_utf16le_bytes(&[0x00, 0x01])
        );
    }

    #[test]
    fn test_repeated_conversion_is_stable() {
        let bytes = [116, 0, 101, 0, 115, 0, 116];

        assert_eq!(
            ascii_from_utf16le_bytes(&bytes),
            ascii_from_utf16le_bytes(&bytes)
        );
    }
}
