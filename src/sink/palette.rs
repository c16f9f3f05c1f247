//! Fixed-palette framebuffer sink for 7-color ACeP-class panels.

use alloc::vec;
use alloc::vec::Vec;

use crate::sink::DisplaySink;

/// A device palette: RGB reference colors with the 4-bit code the panel
/// uses for each.
#[derive(Clone, Debug)]
pub struct Palette {
    entries: Vec<([u8; 3], u8)>,
}

impl Palette {
    /// Build a palette from `(rgb, panel_code)` pairs.
    pub fn new(entries: Vec<([u8; 3], u8)>) -> Self {
        Self { entries }
    }

    /// The standard Waveshare 4.01" F palette: white, black, green, blue,
    /// red, orange, yellow. Black is matched against dark gray (70,70,70)
    /// because the panel pigment never reaches true black.
    pub fn acep_7color() -> Self {
        Self::new(vec![
            ([255, 255, 255], 0x1), // white
            ([70, 70, 70], 0x0),    // black
            ([0, 255, 0], 0x2),     // green
            ([0, 0, 255], 0x3),     // blue
            ([255, 0, 0], 0x4),     // red
            ([255, 128, 0], 0x6),   // orange
            ([255, 255, 0], 0x5),   // yellow
        ])
    }

    #[cfg(feature = "rgb")]
    pub fn from_rgb(entries: &[(rgb::RGB8, u8)]) -> Self {
        Self::new(
            entries
                .iter()
                .map(|(c, code)| ([c.r, c.g, c.b], *code))
                .collect(),
        )
    }

    /// Nearest palette code for an RGB triple, by squared Euclidean
    /// distance in RGB space.
    pub fn nearest(&self, r: u8, g: u8, b: u8) -> u8 {
        let mut best_code = 0u8;
        let mut best_distance = i32::MAX;
        for (rgb, code) in &self.entries {
            let dr = i32::from(r) - i32::from(rgb[0]);
            let dg = i32::from(g) - i32::from(rgb[1]);
            let db = i32::from(b) - i32::from(rgb[2]);
            let distance = dr * dr + dg * dg + db * db;
            if distance < best_distance {
                best_distance = distance;
                best_code = *code;
            }
        }
        best_code
    }
}

/// Framebuffer sink that quantizes true-color pixels to a fixed palette,
/// packing two 4-bit codes per byte (even column in the high nibble).
///
/// Declares 32-bit support: it wants the full raw BGRA word and performs
/// nearest-color matching itself, which is exactly the sink-local
/// quantization the pipeline contract allows.
pub struct PaletteSink {
    width: u32,
    height: u32,
    row_bytes: usize,
    palette: Palette,
    buf: Vec<u8>,
}

impl PaletteSink {
    pub fn new(width: u32, height: u32, palette: Palette) -> Self {
        let row_bytes = (width as usize).div_ceil(2);
        let white = palette.nearest(255, 255, 255);
        Self {
            width,
            height,
            row_bytes,
            palette,
            buf: vec![white << 4 | white; row_bytes * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Packed nibble framebuffer, row-major.
    pub fn buffer(&self) -> &[u8] {
        &self.buf
    }

    /// Read back the palette code at one pixel.
    pub fn code_at(&self, x: u32, y: u32) -> u8 {
        let byte = self.buf[y as usize * self.row_bytes + x as usize / 2];
        if x % 2 == 0 { byte >> 4 } else { byte & 0x0F }
    }
}

impl DisplaySink for PaletteSink {
    fn supported_bit_depth(&self) -> u16 {
        32
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        // Packed word is little-endian BGRA; alpha is ignored.
        let [b, g, r, _a] = color;
        let code = self.palette.nearest(r, g, b);

        let index = y as usize * self.row_bytes + x as usize / 2;
        if x % 2 == 0 {
            self.buf[index] = (self.buf[index] & 0x0F) | (code << 4);
        } else {
            self.buf[index] = (self.buf[index] & 0xF0) | (code & 0x0F);
        }
    }
}
