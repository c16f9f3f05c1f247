//! Streaming BMP subset: header parsing and per-pixel extraction.
//!
//! This is not a general BMP decoder. It reads exactly the uncompressed
//! subset the frame server emits (little-endian, bottom-up row data is
//! taken as-is) and never materializes more than one scanline.

mod header;
mod pixel;

pub use header::{BitmapHeader, parse_header};
pub use pixel::{BitDepth, extract_color};
