//! Bounds-checked read position over a borrowed buffer

use crate::{NdrError, Result};

/// Read position into a fixed input buffer
///
/// The position only moves forward through [`take`](Self::take) and
/// [`skip`](Self::skip), and only when the requested span lies entirely
/// inside the buffer. A failed call leaves the position where it was, but
/// callers should treat the decode as aborted.
#[derive(Debug, Clone)]
pub struct NdrCursor<'a> {
    buf: &'a [u8],
    position: usize,
}

impl<'a> NdrCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, position: 0 }
    }

    /// Byte offset from the start of the buffer
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.position
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The unread tail of the buffer
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.position..]
    }

    /// Fail unless at least `len` bytes remain.
    #[inline]
    pub fn require(&self, len: usize, context: &'static str) -> Result<()> {
        if self.remaining() < len {
            return Err(NdrError::truncated(context, len, self.remaining()));
        }
        Ok(())
    }

    /// Consume exactly `len` bytes and return them.
    #[inline]
    pub fn take(&mut self, len: usize, context: &'static str) -> Result<&'a [u8]> {
        self.require(len, context)?;
        let start = self.position;
        self.position += len;
        debug_assert!(self.position <= self.buf.len());
        Ok(&self.buf[start..self.position])
    }

    /// Consume `len` bytes without looking at them.
    #[inline]
    pub fn skip(&mut self, len: usize, context: &'static str) -> Result<()> {
        self.take(len, context).map(|_| ())
    }
}
