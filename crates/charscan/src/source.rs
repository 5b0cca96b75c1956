//! Byte sources the scanner can read from.
//!
//! [`ByteSource`] is the one seam between the scanner and the outside world.
//! It mirrors the shape of `std::io::Read` so that it stays usable without
//! `std`: a read fills a prefix of the buffer and reports how many bytes it
//! wrote, with `Ok(0)` meaning end-of-stream.

use core::convert::Infallible;

/// A producer of bytes.
pub trait ByteSource {
    /// Error reported by a failed read.
    type Error;

    /// Read up to `buf.len()` bytes into the front of `buf`.
    ///
    /// Returns the number of bytes written. `Ok(0)` with a non-empty `buf`
    /// means the source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns the source's own error when the read fails.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Read all of `self`, then all of `next`.
    fn chain<B>(self, next: B) -> Chain<Self, B>
    where
        Self: Sized,
        B: ByteSource<Error = Self::Error>,
    {
        Chain {
            first: self,
            second: next,
            done_first: false,
        }
    }

    /// Yield at most `limit` bytes, then report end-of-stream.
    fn take(self, limit: u64) -> Take<Self>
    where
        Self: Sized,
    {
        Take { inner: self, limit }
    }

    /// Deliver at most `max` bytes per physical read.
    ///
    /// A `max` of zero is treated as one.
    fn chunked(self, max: usize) -> Chunked<Self>
    where
        Self: Sized,
    {
        Chunked {
            inner: self,
            max: max.max(1),
        }
    }

    /// Borrow the source so adaptors can be applied without giving it up.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    type Error = S::Error;

    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        (**self).read(buf)
    }
}

impl ByteSource for &[u8] {
    type Error = Infallible;

    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let n = buf.len().min(self.len());
        let (head, tail) = self.split_at(n);
        buf[..n].copy_from_slice(head);
        *self = tail;
        Ok(n)
    }
}

/// Two sources read back to back. See [`ByteSource::chain`].
#[derive(Debug)]
pub struct Chain<A, B> {
    first: A,
    second: B,
    done_first: bool,
}

impl<A, B> Chain<A, B> {
    /// Returns the two halves of the chain.
    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> ByteSource for Chain<A, B>
where
    A: ByteSource,
    B: ByteSource<Error = A::Error>,
{
    type Error = A::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if !self.done_first {
            match self.first.read(buf)? {
                0 if !buf.is_empty() => self.done_first = true,
                n => return Ok(n),
            }
        }
        self.second.read(buf)
    }
}

/// A source cut off after a fixed number of bytes. See [`ByteSource::take`].
#[derive(Debug)]
pub struct Take<S> {
    inner: S,
    limit: u64,
}

impl<S> Take<S> {
    /// Bytes that may still be read before the limit is hit.
    #[must_use]
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Returns the wrapped source.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ByteSource> ByteSource for Take<S> {
    type Error = S::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.limit == 0 {
            return Ok(0);
        }
        let max = usize::try_from(self.limit).map_or(buf.len(), |limit| limit.min(buf.len()));
        let n = self.inner.read(&mut buf[..max])?;
        self.limit -= n as u64;
        Ok(n)
    }
}

/// A source that hands out at most a few bytes per read. See
/// [`ByteSource::chunked`].
#[derive(Debug)]
pub struct Chunked<S> {
    inner: S,
    max: usize,
}

impl<S> Chunked<S> {
    /// Returns the wrapped source.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ByteSource> ByteSource for Chunked<S> {
    type Error = S::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let max = self.max.min(buf.len());
        self.inner.read(&mut buf[..max])
    }
}

/// Adapts any [`std::io::Read`] into a [`ByteSource`].
///
/// Reads interrupted by a signal are retried; every other I/O error is passed
/// through unchanged.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSource<R> {
    reader: R,
}

#[cfg(feature = "std")]
impl<R: std::io::Read> IoSource<R> {
    /// Wraps `reader`.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ByteSource for IoSource<R> {
    type Error = std::io::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        loop {
            match self.reader.read(buf) {
                Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {}
                res => return res,
            }
        }
    }
}
