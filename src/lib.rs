// This is part of field-bytes.rs.
// See README.md for details.

//! # field-bytes.rs
//!
//! A Rust library for decoding raw little-endian field bytes from binary
//! file formats.
//!
//!
//! ## Features
//!
//! - Decodes 1 to 8 byte little-endian fields into sign- or zero-extended
//!   64-bit integers
//! - Decodes exact-width little-endian fields into 16- and 32-bit integers
//! - Recovers ASCII text from UTF-16LE field bytes
//! - Converts Windows FILETIME fields into UTC timestamps
//! - Reports every rejected input with the decoder name and the received
//!   and expected byte counts
//!
//!
//! ## Planned, but not yet implemented features
//!
//! - Big-endian counterparts for mixed-endianness formats
//! - DOS date/time conversion for FAT-era artifacts
//!
//!
//! ## Examples
//!
//! ### Decoding the fields of an on-disk record
//!
//! ```rust
//! use field_bytes::{filetime, little_endian, unicode};
//!
//! // A record laid out as: flags (2 bytes), allocated size (4 bytes),
//! // modified timestamp (8 bytes, FILETIME), name (UTF-16LE).
//! let mut record = Vec::new();
//! record.extend([0x01, 0x00]);
//! record.extend([0x00, 0x04, 0x00, 0x00]);
//! record.extend(131_301_625_330_000_000u64.to_le_bytes());
//! record.extend([0x24, 0x00, 0x4D, 0x00, 0x46, 0x00, 0x54, 0x00]);
//!
//! let flags = little_endian::u16_from_le_bytes(&record[0..2])?;
//! let allocated_size = little_endian::u32_from_le_bytes(&record[2..6])?;
//! let modified = filetime::timestamp_from_filetime_bytes(&record[6..14])?;
//! let name = unicode::ascii_from_utf16le_bytes(&record[14..])?;
//!
//! assert_eq!(1, flags);
//! assert_eq!(1024, allocated_size);
//! assert_eq!("2017-01-29 11:22:13 UTC", modified.to_string());
//! assert_eq!("$MFT", name);
//! # Ok::<(), field_bytes::Error>(())
//! ```
//!
//! Every conversion is a pure function of its input: the library keeps no
//! state and never mutates the caller's slice, so calls from any number of
//! threads are safe.

#![warn(missing_docs)]
#![deny(missing_debug_implementations)]
// #![deny(warnings)]

mod error;
pub use error::{Error, ExpectedLength, Result};

pub mod little_endian;

pub mod unicode;

pub mod filetime;
