//! A streaming scanner that turns a byte source into Unicode code points, one
//! per call.
//!
//! The scanner reads into a small fixed-size buffer, decodes the first UTF-8
//! sequence, and splices whatever it over-read back in front of the source so
//! the next call resumes exactly where decoding stopped. Sources that deliver
//! a single byte per read decode the same as sources that deliver everything
//! at once.
//!
//! ```rust
//! use charscan::Scanner;
//!
//! let mut scanner = Scanner::new("Hi, 世界".as_bytes());
//! let mut out = Vec::new();
//! while let Some(ch) = scanner.scan().unwrap() {
//!     out.push(ch);
//! }
//! assert_eq!(out, ['H', 'i', ',', ' ', '世', '界']);
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod chunk_utils;
mod decode;
mod error;
mod options;
mod position;
mod scanner;
mod source;
mod spliced;
mod split;

#[cfg(test)]
mod tests;

pub use chunk_utils::produce_chunks;
pub use decode::{Decoded, MAX_UTF8_LEN, decode_first};
pub use error::{DecodeError, DecodeErrorKind, OptionsError, ScanError};
pub use options::{DEFAULT_READ_CAPACITY, ScannerOptions};
pub use position::Position;
pub use scanner::Scanner;
#[cfg(feature = "std")]
pub use source::IoSource;
pub use source::{ByteSource, Chain, Chunked, Take};
pub(crate) use spliced::Spliced;
pub use split::{Lines, Words};
