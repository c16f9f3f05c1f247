//! Display sink contract and reference framebuffer sinks.
//!
//! The pipeline consumes this trait; concrete panel drivers implement it.
//! Register-level panel protocol (command framing, busy-pin polling) stays
//! inside the driver; the pipeline only ever calls the three methods below.

mod mono;
mod palette;

pub use mono::MonoSink;
pub use palette::{Palette, PaletteSink};

/// Capability surface of a display panel driver.
///
/// Capabilities are plain data returned by methods, not behavior to
/// override: the orchestrator queries both before any pixel is written and
/// aborts if the source needs more than the panel offers.
pub trait DisplaySink {
    /// Highest source bit depth this panel can accept.
    fn supported_bit_depth(&self) -> u16;

    /// Whether the panel accepts a quarter-turned render.
    fn supports_rotation(&self) -> bool {
        true
    }

    /// Write one pixel.
    ///
    /// `color` is the little-endian packed word produced by pixel
    /// extraction: for 24/32-bit sources bytes are B, G, R, A; for shallower
    /// depths the low byte carries the bit or index and the rest are zero.
    /// A sink that needs a palette match quantizes here, from the full raw
    /// channel bytes.
    fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]);
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn supported_bit_depth(&self) -> u16 {
        (**self).supported_bit_depth()
    }

    fn supports_rotation(&self) -> bool {
        (**self).supports_rotation()
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        (**self).set_pixel(x, y, color)
    }
}
