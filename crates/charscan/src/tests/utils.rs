use alloc::{string::String, vec::Vec};
use core::convert::Infallible;

use crate::{ByteSource, ScanError, Scanner};

/// Counts the physical reads issued against the wrapped source.
#[derive(Debug)]
pub struct CountingSource<S> {
    inner: S,
    pub reads: usize,
}

impl<S> CountingSource<S> {
    pub fn new(inner: S) -> Self {
        Self { inner, reads: 0 }
    }
}

impl<S: ByteSource> ByteSource for CountingSource<S> {
    type Error = S::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.reads += 1;
        self.inner.read(buf)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Broken;

/// Serves `data`, then fails every read once it is exhausted.
#[derive(Debug)]
pub struct FailingSource<'a> {
    pub data: &'a [u8],
}

impl ByteSource for FailingSource<'_> {
    type Error = Broken;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.data.is_empty() {
            return Err(Broken);
        }
        let n = buf.len().min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Feeds `pieces` one per read.
#[derive(Debug)]
pub struct PieceSource<'a> {
    pieces: Vec<&'a [u8]>,
    next: usize,
    offset: usize,
}

impl<'a> PieceSource<'a> {
    pub fn new(pieces: Vec<&'a [u8]>) -> Self {
        Self {
            pieces,
            next: 0,
            offset: 0,
        }
    }
}

impl ByteSource for PieceSource<'_> {
    type Error = Infallible;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        while let Some(piece) = self.pieces.get(self.next) {
            let rest = &piece[self.offset..];
            if rest.is_empty() {
                self.next += 1;
                self.offset = 0;
                continue;
            }
            let n = buf.len().min(rest.len());
            buf[..n].copy_from_slice(&rest[..n]);
            self.offset += n;
            return Ok(n);
        }
        Ok(0)
    }
}

/// Scans to the end, returning the decoded text and the terminating error.
pub fn scan_all<S: ByteSource>(scanner: &mut Scanner<S>) -> (String, Option<ScanError<S::Error>>) {
    let mut out = String::new();
    loop {
        match scanner.scan() {
            Ok(Some(ch)) => out.push(ch),
            Ok(None) => return (out, None),
            Err(err) => return (out, Some(err)),
        }
    }
}
