//! Target geometry: scale factors and the optional quarter-turn.

use crate::bmp::BitmapHeader;

/// Derived once from the source header and the device size; immutable for
/// the rest of the operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetGeometry {
    pub source_width: u32,
    pub source_height: u32,
    pub target_width: u32,
    pub target_height: u32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub rotate: bool,
}

impl TargetGeometry {
    /// Compute the geometry for rendering `header` onto a
    /// `device_width` x `device_height` panel.
    ///
    /// Rotation triggers only when a landscape source meets a portrait
    /// device: the panel shows the image turned a quarter-turn, and the
    /// target dimensions swap so the scan still walks source rows.
    pub fn compute(header: &BitmapHeader, device_width: u32, device_height: u32) -> Self {
        let rotate = header.width > header.height && device_width < device_height;

        let (target_width, target_height) = if rotate {
            (device_height, device_width)
        } else {
            (device_width, device_height)
        };

        Self {
            source_width: header.width,
            source_height: header.height,
            target_width,
            target_height,
            scale_x: header.width as f32 / target_width as f32,
            scale_y: header.height as f32 / target_height as f32,
            rotate,
        }
    }

    /// Nearest-neighbor source row for target row `y`, clamped to the last
    /// source row.
    pub fn source_row(&self, y: u32) -> u32 {
        ((y as f32 * self.scale_y) as u32).min(self.source_height - 1)
    }

    /// Nearest-neighbor source column for target column `x`, clamped to
    /// the last source column.
    pub fn source_column(&self, x: u32) -> u32 {
        ((x as f32 * self.scale_x) as u32).min(self.source_width - 1)
    }

    /// Map iteration coordinates to output coordinates on the panel.
    ///
    /// When rotating, `(x, y)` in the target-height-major loop lands at
    /// `(y, target_width - x - 1)`; otherwise coordinates pass through.
    pub fn map(&self, x: u32, y: u32) -> (u32, u32) {
        if self.rotate {
            (y, self.target_width - x - 1)
        } else {
            (x, y)
        }
    }

    /// Whether the source can cover the target without upscaling.
    pub fn fits(&self) -> bool {
        self.source_width >= self.target_width && self.source_height >= self.target_height
    }
}
