//! Line and word tokenizers layered on a [`Scanner`].

use alloc::string::String;
use core::iter::FusedIterator;

use crate::{ByteSource, ScanError, Scanner};

impl<S: ByteSource> Scanner<S> {
    /// Splits the stream into lines.
    ///
    /// Lines are terminated by `\n` or `\r\n`; the terminator is not part of
    /// the yielded line. A final line without a terminator is yielded only if
    /// it is non-empty.
    ///
    /// ```rust
    /// use charscan::Scanner;
    ///
    /// let lines: Result<Vec<_>, _> = Scanner::new("one\r\ntwo\nthree".as_bytes()).lines().collect();
    /// assert_eq!(lines.unwrap(), ["one", "two", "three"]);
    /// ```
    pub fn lines(self) -> Lines<S> {
        Lines { scanner: self }
    }

    /// Splits the stream into runs of non-whitespace code points.
    ///
    /// Any Unicode whitespace separates words, including U+3000 ideographic
    /// space.
    pub fn words(self) -> Words<S> {
        Words { scanner: self }
    }
}

/// Iterator over the lines of a scanned stream. See [`Scanner::lines`].
#[derive(Debug)]
pub struct Lines<S> {
    scanner: Scanner<S>,
}

impl<S> Lines<S> {
    /// Returns the underlying scanner.
    pub fn into_inner(self) -> Scanner<S> {
        self.scanner
    }
}

impl<S: ByteSource> Iterator for Lines<S> {
    type Item = Result<String, ScanError<S::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        loop {
            match self.scanner.next() {
                Some(Ok('\n')) => {
                    if line.ends_with('\r') {
                        line.pop();
                    }
                    return Some(Ok(line));
                }
                Some(Ok(ch)) => line.push(ch),
                Some(Err(err)) => return Some(Err(err)),
                None if line.is_empty() => return None,
                None => return Some(Ok(line)),
            }
        }
    }
}

impl<S: ByteSource> FusedIterator for Lines<S> {}

/// Iterator over the whitespace-separated words of a scanned stream. See
/// [`Scanner::words`].
#[derive(Debug)]
pub struct Words<S> {
    scanner: Scanner<S>,
}

impl<S> Words<S> {
    /// Returns the underlying scanner.
    pub fn into_inner(self) -> Scanner<S> {
        self.scanner
    }
}

impl<S: ByteSource> Iterator for Words<S> {
    type Item = Result<String, ScanError<S::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut word = String::new();
        loop {
            match self.scanner.next() {
                Some(Ok(ch)) if ch.is_whitespace() => {
                    if !word.is_empty() {
                        return Some(Ok(word));
                    }
                }
                Some(Ok(ch)) => word.push(ch),
                Some(Err(err)) => return Some(Err(err)),
                None if word.is_empty() => return None,
                None => return Some(Ok(word)),
            }
        }
    }
}

impl<S: ByteSource> FusedIterator for Words<S> {}
