//! Scanner: one decoded code point per call.
//!
//! What it does
//! - Reads up to `read_capacity` bytes from the spliced source into a scratch
//!   buffer and decodes the first code point.
//! - Pushes the unconsumed tail of the buffer back in front of the source, so
//!   the next call starts exactly after the decoded bytes.
//! - Keeps reading into the rest of the buffer while the bytes seen so far are
//!   only a prefix of a code point. A source that returns one byte per read
//!   therefore takes as many reads as the code point is wide.
//!
//! Invariants
//! - The spliced source always yields every byte not yet returned as a `char`,
//!   in order. Failures splice back everything read during the call.
//! - `position.offset` equals the bytes consumed by successful decodes.
//! - The scratch buffer is at least `MAX_UTF8_LEN` long, so an incomplete
//!   prefix always has room to grow.

use alloc::{boxed::Box, vec, vec::Vec};
use core::iter::FusedIterator;

use log::{debug, trace};

use crate::{
    ByteSource, DecodeError, DecodeErrorKind, Decoded, OptionsError, Position, ScanError,
    ScannerOptions, Spliced, decode::sequence_len, decode_first,
};

/// A streaming UTF-8 decoder over a [`ByteSource`].
///
/// Typical loop:
/// ```rust
/// use charscan::Scanner;
///
/// let mut scanner = Scanner::new("a\nβ".as_bytes());
/// while let Some(ch) = scanner.scan()? {
///     let at = scanner.position();
///     println!("{ch:?} ends at {}:{}", at.line, at.column);
/// }
/// # Ok::<(), charscan::ScanError<core::convert::Infallible>>(())
/// ```
///
/// The scanner also iterates over `Result<char, ScanError<_>>`, stopping for
/// good after end-of-stream or the first error.
#[derive(Debug)]
pub struct Scanner<S> {
    source: Spliced<S>,
    buf: Box<[u8]>,
    options: ScannerOptions,
    position: Position,
    halted: bool,
}

impl<S: ByteSource> Scanner<S> {
    /// Creates a scanner with [`ScannerOptions::default`].
    pub fn new(source: S) -> Self {
        Self::from_validated(source, ScannerOptions::default())
    }

    /// Creates a scanner with custom options.
    ///
    /// # Errors
    ///
    /// Fails if `options.read_capacity` cannot hold the widest UTF-8 sequence.
    pub fn with_options(source: S, options: ScannerOptions) -> Result<Self, OptionsError> {
        Ok(Self::from_validated(source, options.validate()?))
    }

    fn from_validated(source: S, options: ScannerOptions) -> Self {
        Self {
            source: Spliced::new(source),
            buf: vec![0u8; options.read_capacity].into_boxed_slice(),
            options,
            position: Position::default(),
            halted: false,
        }
    }

    /// Decodes the next code point.
    ///
    /// Returns `Ok(None)` at end-of-stream. A decode failure leaves the
    /// offending bytes unconsumed, so calling again reports the same error.
    ///
    /// # Errors
    ///
    /// [`ScanError::Read`] if the source fails, [`ScanError::Decode`] if the
    /// bytes at the current position are not valid UTF-8 or the source ends
    /// in the middle of a sequence.
    pub fn scan(&mut self) -> Result<Option<char>, ScanError<S::Error>> {
        let mut filled = 0;
        loop {
            let n = match self.source.read(&mut self.buf[filled..]) {
                Ok(n) => n,
                Err(err) => {
                    self.source.unread(&self.buf[..filled]);
                    return Err(ScanError::Read(err));
                }
            };
            trace!(
                "read {n} bytes at offset {} ({filled} already buffered)",
                self.position.offset
            );

            if n == 0 {
                if filled == 0 {
                    debug!("end of stream at offset {}", self.position.offset);
                    return Ok(None);
                }
                self.source.unread(&self.buf[..filled]);
                return Err(self.fail(DecodeErrorKind::Truncated, filled));
            }
            filled += n;

            match decode_first(&self.buf[..filled]) {
                Decoded::Char { ch, len } => {
                    self.source.unread(&self.buf[len..filled]);
                    self.position.advance(ch);
                    return Ok(Some(ch));
                }
                Decoded::Invalid { len } => {
                    self.source.unread(&self.buf[..filled]);
                    return Err(self.fail(DecodeErrorKind::Invalid, len));
                }
                Decoded::Incomplete => {
                    trace!(
                        "incomplete sequence, {filled} of {:?} bytes",
                        sequence_len(self.buf[0])
                    );
                    debug_assert!(filled < self.buf.len());
                }
            }
        }
    }

    /// Builds the error for the `len` offending bytes at the head of the
    /// buffer.
    fn fail(&self, kind: DecodeErrorKind, len: usize) -> ScanError<S::Error> {
        let err = DecodeError::new(kind, self.position, &self.buf[..len]);
        debug!("{err}");
        ScanError::Decode(err)
    }

    /// Location of the next code point.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Total bytes consumed by successful decodes.
    #[must_use]
    pub fn bytes_consumed(&self) -> usize {
        self.position.offset
    }

    /// Options this scanner was built with.
    #[must_use]
    pub fn options(&self) -> ScannerOptions {
        self.options
    }

    /// Bytes read from the source but not yet decoded.
    #[must_use]
    pub fn carried(&self) -> usize {
        self.source.carried()
    }

    /// The original source. Bytes already carried are not visible through it.
    pub fn get_ref(&self) -> &S {
        self.source.inner()
    }

    /// Gives up the scanner, returning the carried bytes and the original
    /// source.
    ///
    /// The carried bytes come before anything the source still holds, so
    /// nothing read but undecoded is lost.
    pub fn into_parts(self) -> (Vec<u8>, S) {
        self.source.into_parts()
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> Scanner<crate::IoSource<R>> {
    /// Creates a scanner over any [`std::io::Read`], such as standard input or
    /// a file.
    pub fn from_reader(reader: R) -> Self {
        Self::new(crate::IoSource::new(reader))
    }
}

impl<S: ByteSource> Iterator for Scanner<S> {
    type Item = Result<char, ScanError<S::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        let res = self.scan().transpose();
        if !matches!(res, Some(Ok(_))) {
            self.halted = true;
        }
        res
    }
}

impl<S: ByteSource> FusedIterator for Scanner<S> {}
