use alloc::string::String;
use enough::StopReason;

/// Errors from the fetch/decode/render pipeline.
///
/// Every variant is terminal: the pipeline never retries internally, and a
/// failed render leaves the sink in whatever partially-written state it had
/// reached. Sinks have no transaction concept; callers should re-render
/// from scratch.
// Manual Display/Error impls: `thiserror` unconditionally treats a field
// named `source` as the error source, but `DepthUnsupported::source` is a
// bit depth and part of the public API.
#[derive(Debug)]
#[non_exhaustive]
pub enum FrameError {
    FetchFailed { status: u16 },

    Transport(String),

    InvalidHeader(String),

    UnsupportedDepth(u16),

    RotationUnsupported,

    DepthUnsupported { source: u16, sink: u16 },

    SourceTooSmall {
        width: u32,
        height: u32,
        target_width: u32,
        target_height: u32,
    },

    LimitExceeded(String),

    UnexpectedEof,

    Cancelled(StopReason),
}

impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FrameError::FetchFailed { status } => {
                write!(f, "fetch returned status {status}")
            }
            FrameError::Transport(msg) => write!(f, "transport failure: {msg}"),
            FrameError::InvalidHeader(msg) => write!(f, "invalid header: {msg}"),
            FrameError::UnsupportedDepth(depth) => {
                write!(f, "unsupported bit depth: {depth}")
            }
            FrameError::RotationUnsupported => {
                write!(f, "rotation required but sink does not support it")
            }
            FrameError::DepthUnsupported { source, sink } => {
                write!(f, "sink bit depth {sink} below source bit depth {source}")
            }
            FrameError::SourceTooSmall {
                width,
                height,
                target_width,
                target_height,
            } => write!(
                f,
                "source {width}x{height} smaller than target {target_width}x{target_height}"
            ),
            FrameError::LimitExceeded(msg) => write!(f, "limit exceeded: {msg}"),
            FrameError::UnexpectedEof => write!(f, "unexpected end of stream"),
            FrameError::Cancelled(_) => write!(f, "operation cancelled"),
        }
    }
}

impl core::error::Error for FrameError {}

impl From<StopReason> for FrameError {
    fn from(r: StopReason) -> Self {
        FrameError::Cancelled(r)
    }
}
