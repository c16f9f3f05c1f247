//! # epframe
//!
//! Streaming BMP pipeline for memory-constrained e-paper frames.
//!
//! A frame server renders a dashboard into an uncompressed BMP; the device
//! fetches it over HTTP and pushes pixels to its panel. The panel side has
//! kilobytes of RAM, so the image is never held in memory: the header is
//! parsed from the live stream, rows are read strictly forward into a
//! single reused scanline buffer, and each target pixel is nearest-neighbor
//! sampled, optionally quarter-turned, and written to the display sink.
//!
//! ## Pipeline
//!
//! ```text
//! fetch -> parse header -> capability/size gates -> stream rows -> set_pixel
//! ```
//!
//! - [`FrameFetcher`] is the fetch collaborator: anything that can turn a
//!   URL into a status code and a [`ByteSource`].
//! - [`RenderRequest`] drives one render: gates first (rotation support,
//!   bit depth, no upscaling, [`Limits`]), then the row loop.
//! - [`DisplaySink`] is the panel contract. [`MonoSink`] (1-bit
//!   black/white) and [`PaletteSink`] (7-color, nearest-match quantized)
//!   are in-memory framebuffer implementations; real drivers flush those
//!   buffers over SPI.
//!
//! ## Supported input
//!
//! Uncompressed BMP at bit depths 1, 4, 8, 24 and 32. Sub-byte and 8-bit
//! pixels are handed to the sink as raw indices, never palette-resolved.
//!
//! ## Non-Goals
//!
//! - Compressed BMP variants (RLE, bitfields)
//! - Upscaling or any transform beyond the axis-aligned quarter-turn
//! - Color management beyond raw channel extraction
//!
//! ## Usage
//!
//! ```no_run
//! use enough::Unstoppable;
//! use epframe::{Limits, MonoSink, RenderRequest, SliceSource};
//!
//! let data: &[u8] = &[]; // BMP bytes
//! let limits = Limits {
//!     max_row_bytes: Some(4096),
//!     ..Default::default()
//! };
//!
//! let mut sink = MonoSink::new(400, 640);
//! let summary = RenderRequest::new(sink.width(), sink.height())
//!     .with_limits(&limits)
//!     .render(&mut SliceSource::new(data), &mut sink, &Unstoppable)?;
//! // sink.buffer() now holds the packed frame, ready to flush to the panel
//! # Ok::<(), epframe::FrameError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod limits;

pub mod bmp;
pub mod fetch;
pub mod sink;

mod geometry;
mod render;
mod rows;
mod stream;

// Re-exports
pub use bmp::{BitDepth, BitmapHeader, extract_color, parse_header};
pub use enough::{Stop, Unstoppable};
pub use error::FrameError;
pub use fetch::{FetchResponse, FrameFetcher};
pub use geometry::TargetGeometry;
pub use limits::Limits;
pub use render::{RenderRequest, RenderSummary, fetch_and_render};
pub use rows::RowScheduler;
pub use sink::{DisplaySink, MonoSink, Palette, PaletteSink};
pub use stream::{ByteSource, SliceSource};

#[cfg(feature = "std")]
pub use stream::IoSource;
