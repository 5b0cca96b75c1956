//! Spliced: a carry ring of unread bytes in front of a source.
//!
//! The scanner reads more than it decodes. Whatever it over-read is handed
//! back through [`Spliced::unread`] and becomes the head of the stream, so
//! logically the spliced source is always "every byte not yet decoded".
//!
//! Invariants
//! - The carry is drained before the inner source is touched again.
//! - A read served from the carry never also reads the inner source, so a
//!   blocking inner source is only waited on when nothing is carried.

use alloc::{collections::VecDeque, vec::Vec};

use crate::ByteSource;

/// A byte source with pushed-back bytes ahead of it.
#[derive(Debug)]
pub struct Spliced<S> {
    carry: VecDeque<u8>,
    inner: S,
}

impl<S> Spliced<S> {
    /// Wraps `inner` with an empty carry.
    pub fn new(inner: S) -> Self {
        Self {
            carry: VecDeque::new(),
            inner,
        }
    }

    /// Puts `bytes` back at the head of the stream, keeping their order.
    pub fn unread(&mut self, bytes: &[u8]) {
        self.carry.reserve(bytes.len());
        for &b in bytes.iter().rev() {
            self.carry.push_front(b);
        }
    }

    /// Number of bytes waiting in the carry.
    #[must_use]
    pub fn carried(&self) -> usize {
        self.carry.len()
    }

    /// The inner source, without the carry.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Splits into the carried bytes and the inner source.
    ///
    /// The carried bytes precede everything the inner source has left.
    pub fn into_parts(self) -> (Vec<u8>, S) {
        (self.carry.into(), self.inner)
    }
}

impl<S: ByteSource> ByteSource for Spliced<S> {
    type Error = S::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.carry.is_empty() {
            return self.inner.read(buf);
        }
        let n = buf.len().min(self.carry.len());
        for (dst, b) in buf.iter_mut().zip(self.carry.drain(..n)) {
            *dst = b;
        }
        Ok(n)
    }
}
