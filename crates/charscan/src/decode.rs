//! Decoding of the first code point in a byte window.

use core::str;

/// The widest UTF-8 encoding of a single code point, in bytes.
pub const MAX_UTF8_LEN: usize = 4;

/// Outcome of decoding the first code point of a byte window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    /// A complete code point occupying the first `len` bytes.
    Char {
        /// The decoded code point.
        ch: char,
        /// Number of bytes in `ch`'s UTF-8 representation (1-4).
        len: usize,
    },
    /// The window is empty or holds a valid but unfinished prefix; more
    /// bytes are needed before anything can be decided.
    Incomplete,
    /// The first `len` bytes can never start a valid code point.
    Invalid {
        /// Length of the offending sequence (1-3).
        len: usize,
    },
}

/// Decode the first code point of `bytes`.
///
/// At most [`MAX_UTF8_LEN`] bytes are inspected, so the cost does not depend
/// on the window size. Overlong encodings, surrogates and values above
/// U+10FFFF are rejected the same way `core::str::from_utf8` rejects them.
#[must_use]
pub fn decode_first(bytes: &[u8]) -> Decoded {
    let window = &bytes[..bytes.len().min(MAX_UTF8_LEN)];
    let valid = match str::from_utf8(window) {
        Ok(text) => text,
        Err(err) if err.valid_up_to() > 0 => {
            // The prefix up to `valid_up_to` has already been validated.
            match str::from_utf8(&window[..err.valid_up_to()]) {
                Ok(text) => text,
                Err(_) => return Decoded::Invalid { len: 1 },
            }
        }
        Err(err) => {
            return match err.error_len() {
                Some(len) => Decoded::Invalid { len },
                None => Decoded::Incomplete,
            };
        }
    };
    match valid.chars().next() {
        Some(ch) => Decoded::Char {
            ch,
            len: ch.len_utf8(),
        },
        None => Decoded::Incomplete,
    }
}

/// Expected sequence length announced by a leading byte, or `None` for bytes
/// that cannot lead a sequence.
#[must_use]
pub(crate) fn sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}
