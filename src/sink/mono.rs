//! 1-bit packed framebuffer sink for black/white electrophoretic panels.

use alloc::vec;
use alloc::vec::Vec;

use crate::sink::DisplaySink;

/// Monochrome framebuffer, one bit per pixel, MSB-first within each byte.
///
/// Bit set = white, bit clear = black, matching the common e-paper
/// controller convention. The buffer is owned by the sink and sized at
/// construction; flushing it to a physical panel is the driver's job.
pub struct MonoSink {
    width: u32,
    height: u32,
    row_bytes: usize,
    buf: Vec<u8>,
}

impl MonoSink {
    pub fn new(width: u32, height: u32) -> Self {
        let row_bytes = (width as usize).div_ceil(8);
        Self {
            width,
            height,
            row_bytes,
            // all white
            buf: vec![0xFF; row_bytes * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reset the framebuffer to white.
    pub fn clear(&mut self) {
        self.buf.fill(0xFF);
    }

    /// Packed framebuffer contents, row-major.
    pub fn buffer(&self) -> &[u8] {
        &self.buf
    }

    /// Read back one pixel; `true` means black.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        let byte = self.buf[y as usize * self.row_bytes + x as usize / 8];
        byte & (0x80 >> (x % 8)) == 0
    }
}

impl DisplaySink for MonoSink {
    fn supported_bit_depth(&self) -> u16 {
        1
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y as usize * self.row_bytes + x as usize / 8;
        let mask = 0x80 >> (x % 8);
        if color[0] == 1 {
            // 1 = black: clear the bit
            self.buf[index] &= !mask;
        } else {
            self.buf[index] |= mask;
        }
    }
}
