//! Raw pixel extraction from a single scanline.

use crate::error::FrameError;

/// Bits used to encode one source pixel.
///
/// Parsing the header narrows the raw depth field into this enum, so every
/// later stage can match exhaustively instead of carrying an "unknown
/// depth" case into the hot loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitDepth {
    One,
    Four,
    Eight,
    TwentyFour,
    ThirtyTwo,
}

impl BitDepth {
    /// Narrow a raw header field. Anything outside {1, 4, 8, 24, 32} fails
    /// loudly here rather than degenerating to zero pixels downstream.
    pub fn try_from_raw(raw: u16) -> Result<Self, FrameError> {
        match raw {
            1 => Ok(Self::One),
            4 => Ok(Self::Four),
            8 => Ok(Self::Eight),
            24 => Ok(Self::TwentyFour),
            32 => Ok(Self::ThirtyTwo),
            other => Err(FrameError::UnsupportedDepth(other)),
        }
    }

    pub fn bits(self) -> u16 {
        match self {
            Self::One => 1,
            Self::Four => 4,
            Self::Eight => 8,
            Self::TwentyFour => 24,
            Self::ThirtyTwo => 32,
        }
    }
}

/// Extract the raw encoded color value for `column` from one scanline.
///
/// The value is not palette-resolved: sub-byte depths yield the bit or
/// nibble index, 8-bit the byte, and 24/32-bit the little-endian packed
/// BGR(A) word. Resolving indices against a palette is the sink's concern.
///
/// `column` must lie within the row described by `row`'s stride; for
/// depths below 24 that means `column / pixels_per_byte < row.len()`.
pub fn extract_color(row: &[u8], column: u32, depth: BitDepth) -> u32 {
    let column = column as usize;
    match depth {
        BitDepth::One => {
            let byte = row[column / 8];
            let bit = 7 - (column % 8);
            u32::from((byte >> bit) & 1)
        }
        BitDepth::Four => {
            let byte = row[column / 2];
            if column % 2 == 0 {
                u32::from((byte >> 4) & 0x0F)
            } else {
                u32::from(byte & 0x0F)
            }
        }
        BitDepth::Eight => u32::from(row[column]),
        BitDepth::TwentyFour => {
            // Only three bytes belong to this pixel; the fourth byte of the
            // packed word would read past the row for the last pixel of an
            // unpadded stride, so it is bounded to zero instead.
            let at = column * 3;
            u32::from_le_bytes([
                row[at],
                row[at + 1],
                row[at + 2],
                row.get(at + 3).copied().unwrap_or(0),
            ])
        }
        BitDepth::ThirtyTwo => {
            let at = column * 4;
            u32::from_le_bytes([row[at], row[at + 1], row[at + 2], row[at + 3]])
        }
    }
}
