use std::fmt;

use thiserror::Error;
use tracing::trace;

/// The byte-count requirement a decoder places on its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpectedLength {
    /// The decoder accepts exactly this many bytes.
    Exactly(usize),

    /// The decoder accepts any byte count within this inclusive range.
    Between(usize, usize),
}

impl fmt::Display for ExpectedLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ExpectedLength::Exactly(count) => write!(f, "exactly {count} bytes"),
            ExpectedLength::Between(min, max) => write!(f, "between {min} and {max} bytes"),
        }
    }
}

/// A common error type.
///
/// Every failure identifies the rejecting decoder by name together with the
/// byte counts involved, so callers can log or surface the error without
/// further context.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The input length does not satisfy the decoder's byte-count requirement.
    #[error("{decoder} received {received} bytes, expected {expected}")]
    InvalidLength {
        /// The decoder that rejected the input.
        decoder: &'static str,

        /// The number of bytes supplied by the caller.
        received: usize,

        /// The byte-count requirement that was violated.
        expected: ExpectedLength,
    },

    /// The input was empty.
    #[error("{decoder} received an empty byte slice")]
    EmptyInput {
        /// The decoder that rejected the input.
        decoder: &'static str,
    },

    /// The decoded instant cannot be represented as a timestamp.
    #[error("{decoder} decoded an instant outside the representable timestamp range")]
    TimestampOutOfRange {
        /// The decoder that rejected the input.
        decoder: &'static str,
    },
}

impl Error {
    pub(crate) fn invalid_length(
        decoder: &'static str,
        received: usize,
        expected: ExpectedLength,
    ) -> Error {
        trace!(decoder, received, %expected, "rejected field bytes");
        Error::InvalidLength {
            decoder,
            received,
            expected,
        }
    }

    pub(crate) fn empty_input(decoder: &'static str) -> Error {
        trace!(decoder, "rejected empty field bytes");
        Error::EmptyInput { decoder }
    }

    pub(crate) fn timestamp_out_of_range(decoder: &'static str) -> Error {
        trace!(decoder, "rejected unrepresentable timestamp");
        Error::TimestampOutOfRange { decoder }
    }
}

/// A common result type.
pub type Result<T> = std::result::Result<T, Error>;
