/// Resource limits for a render operation.
///
/// All fields default to `None` (no limit). Limits are checked during the
/// pre-flight gate sequence, before the row buffer is allocated, so a
/// rejected render never touches the heap or the sink.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum size of the single row buffer, in bytes.
    pub max_row_bytes: Option<u64>,
}

impl Limits {
    /// Check source dimensions against limits.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), crate::FrameError> {
        if let Some(max_w) = self.max_width {
            if u64::from(width) > max_w {
                return Err(crate::FrameError::LimitExceeded(alloc::format!(
                    "width {width} exceeds limit {max_w}"
                )));
            }
        }
        if let Some(max_h) = self.max_height {
            if u64::from(height) > max_h {
                return Err(crate::FrameError::LimitExceeded(alloc::format!(
                    "height {height} exceeds limit {max_h}"
                )));
            }
        }
        Ok(())
    }

    /// Check that the row buffer allocation is within the memory limit.
    pub(crate) fn check_row_bytes(&self, bytes: usize) -> Result<(), crate::FrameError> {
        if let Some(max_row) = self.max_row_bytes {
            if bytes as u64 > max_row {
                return Err(crate::FrameError::LimitExceeded(alloc::format!(
                    "row buffer of {bytes} bytes exceeds limit {max_row}"
                )));
            }
        }
        Ok(())
    }
}
