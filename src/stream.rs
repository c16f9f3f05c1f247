//! Forward-only byte sources.
//!
//! The pipeline consumes its input through [`ByteSource`]: a blocking,
//! non-seekable reader. There is deliberately no way to rewind or peek;
//! the row scheduler relies on every byte being consumed exactly once.

use crate::error::FrameError;

/// A blocking, forward-only byte stream.
///
/// `read_exact` blocks until `buf` is filled or fails with
/// [`FrameError::UnexpectedEof`] (stream closed short) or
/// [`FrameError::Transport`] (connection-level failure). Timeout policy
/// belongs to the implementation, surfaced here as a transport error.
pub trait ByteSource {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), FrameError>;

    /// Consume and discard `n` bytes.
    ///
    /// Default implementation reads through a small scratch buffer so that
    /// non-seekable sources need nothing beyond `read_exact`.
    fn discard(&mut self, mut n: usize) -> Result<(), FrameError> {
        let mut scratch = [0u8; 64];
        while n > 0 {
            let take = n.min(scratch.len());
            self.read_exact(&mut scratch[..take])?;
            n -= take;
        }
        Ok(())
    }
}

/// Byte source over an in-memory slice.
///
/// Used by tests and by callers that already hold the full payload; the
/// pipeline still consumes it strictly forward.
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes remaining.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

impl ByteSource for SliceSource<'_> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), FrameError> {
        let n = buf.len();
        if self.pos + n > self.data.len() {
            return Err(FrameError::UnexpectedEof);
        }
        buf.copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(())
    }
}

/// Adapter for any [`std::io::Read`] (TCP streams, files, ...).
#[cfg(feature = "std")]
pub struct IoSource<R> {
    inner: R,
}

#[cfg(feature = "std")]
impl<R: std::io::Read> IoSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ByteSource for IoSource<R> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), FrameError> {
        self.inner.read_exact(buf).map_err(|e| match e.kind() {
            std::io::ErrorKind::UnexpectedEof => FrameError::UnexpectedEof,
            _ => FrameError::Transport(e.to_string()),
        })
    }
}
