//! Error types for byte stream codec operations.

use std::fmt;
use std::io;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while decoding or encoding values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Attempted to read past the end of the available bytes.
    StreamExhausted {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// A string length prefix was negative or exceeded the decoding cap.
    InvalidLength {
        /// The length that was rejected.
        length: i64,
    },

    /// The underlying stream failed with a non-EOF I/O error.
    ///
    /// Only the [`io::ErrorKind`] is retained so the error stays cheap to
    /// clone and compare.
    Io {
        /// The kind of error reported by the stream.
        kind: io::ErrorKind,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StreamExhausted {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bytes but only {available} bytes available"
                )
            }
            Self::InvalidLength { length } => {
                write!(f, "invalid string length: {length}")
            }
            Self::Io { kind } => {
                write!(f, "stream I/O error: {kind}")
            }
        }
    }
}

impl std::error::Error for CodecError {}
