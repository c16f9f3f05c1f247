//! Forward-only row scheduling.
//!
//! The stream cannot seek, so reaching source row `n` means reading and
//! discarding every unread row before it. The scheduler tracks the last
//! row read and guarantees each source row is consumed at most once, in
//! strictly increasing order, into a single reused buffer.

use crate::error::FrameError;
use crate::stream::ByteSource;

pub struct RowScheduler {
    stride: usize,
    height: u32,
    /// Index of the most recently read source row, or -1 before any read.
    last_read: i64,
}

impl RowScheduler {
    pub fn new(stride: usize, height: u32) -> Self {
        Self {
            stride,
            height,
            last_read: -1,
        }
    }

    /// Source rows consumed so far.
    pub fn rows_read(&self) -> u32 {
        (self.last_read + 1) as u32
    }

    /// Bytes per source row.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Advance the stream so that `buf` holds source row `row`.
    ///
    /// Rows strictly between the last read row and `row` are read into
    /// `buf` and overwritten; their content is never observed. If `row`
    /// was already the last read row, the buffer is left untouched and no
    /// bytes are consumed.
    ///
    /// `row` must be monotonically non-decreasing across calls.
    pub fn advance_to<S: ByteSource>(
        &mut self,
        source: &mut S,
        buf: &mut [u8],
        row: u32,
    ) -> Result<(), FrameError> {
        debug_assert!(i64::from(row) >= self.last_read);
        debug_assert_eq!(buf.len(), self.stride);

        while self.last_read < i64::from(row) {
            source.read_exact(buf)?;
            self.last_read += 1;
        }
        Ok(())
    }

    /// Consume the source rows after the last sampled one, so the whole
    /// operation reads exactly `height` rows. A stream that cannot supply
    /// them is reported as truncated even though no pixel depended on the
    /// tail.
    pub fn drain<S: ByteSource>(&mut self, source: &mut S, buf: &mut [u8]) -> Result<(), FrameError> {
        while self.last_read + 1 < i64::from(self.height) {
            source.read_exact(buf)?;
            self.last_read += 1;
        }
        Ok(())
    }
}
