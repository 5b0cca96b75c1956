use core::fmt;

use bstr::BString;
use thiserror::Error;

use crate::Position;

/// Failure of a single [`Scanner::scan`](crate::Scanner::scan) call.
///
/// End-of-stream is not an error; it is reported as `Ok(None)`.
#[derive(Error, Debug, PartialEq)]
pub enum ScanError<E> {
    /// The underlying source failed; the error is passed through unchanged.
    #[error("read error: {0}")]
    Read(E),
    /// The bytes at the current position are not valid UTF-8.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl<E> ScanError<E> {
    /// Returns the decode failure, if this is one.
    #[must_use]
    pub fn as_decode(&self) -> Option<&DecodeError> {
        match self {
            ScanError::Decode(err) => Some(err),
            ScanError::Read(_) => None,
        }
    }
}

/// Why a byte window did not form a code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The bytes can never start a valid UTF-8 sequence.
    Invalid,
    /// The source ended in the middle of a sequence.
    Truncated,
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DecodeErrorKind::Invalid => "invalid",
            DecodeErrorKind::Truncated => "truncated",
        })
    }
}

/// A byte sequence that is not valid UTF-8, and where it was found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} UTF-8 sequence {bytes:?} at {line}:{column} (byte {offset})")]
pub struct DecodeError {
    /// What went wrong.
    pub kind: DecodeErrorKind,
    /// Byte offset of the first offending byte.
    pub offset: usize,
    /// 1-based line of the offending sequence.
    pub line: usize,
    /// 1-based column, counted in code points.
    pub column: usize,
    /// The offending bytes.
    pub bytes: BString,
}

impl DecodeError {
    pub(crate) fn new(kind: DecodeErrorKind, at: Position, bytes: &[u8]) -> Self {
        Self {
            kind,
            offset: at.offset,
            line: at.line,
            column: at.column,
            bytes: BString::from(bytes),
        }
    }
}

/// Rejected [`ScannerOptions`](crate::ScannerOptions).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// The read buffer could not hold the widest UTF-8 sequence.
    #[error("read capacity {capacity} is smaller than the widest UTF-8 sequence (4 bytes)")]
    ReadCapacityTooSmall {
        /// The requested capacity.
        capacity: usize,
    },
}
