//! BMP header parsing from a non-seekable stream.

use crate::bmp::pixel::BitDepth;
use crate::error::FrameError;
use crate::stream::ByteSource;

/// Fixed file header size. `data_offset` is measured from byte 0, so the
/// info header occupies `data_offset - FILE_HEADER_LEN` bytes.
const FILE_HEADER_LEN: usize = 14;

/// Minimum info-header coverage needed to reach the bit-depth field
/// (u16 at info offset 14).
const INFO_MIN_LEN: usize = 16;

/// Parsed BMP geometry. Created once per fetch, immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapHeader {
    /// Offset of the pixel data from the start of the file.
    pub data_offset: u32,
    pub width: u32,
    pub height: u32,
    pub depth: BitDepth,
}

impl BitmapHeader {
    /// Bytes per encoded row, padded to a 4-byte boundary.
    pub fn stride(&self) -> usize {
        ((self.width as usize * self.depth.bits() as usize + 31) / 32) * 4
    }

    /// Total pixel-data bytes the stream must supply.
    pub fn pixel_data_len(&self) -> usize {
        self.stride() * self.height as usize
    }
}

/// Parse the file header and info header, consuming exactly `data_offset`
/// bytes from the stream so the next byte read is the first pixel byte.
///
/// No magic signature or compression field is validated; any stream that
/// yields plausible header bytes is accepted. This is a documented
/// simplification, not a format guarantee.
pub fn parse_header<S: ByteSource>(source: &mut S) -> Result<BitmapHeader, FrameError> {
    let mut file_header = [0u8; FILE_HEADER_LEN];
    source.read_exact(&mut file_header)?;

    let data_offset = u32::from_le_bytes([
        file_header[10],
        file_header[11],
        file_header[12],
        file_header[13],
    ]);

    let info_len = (data_offset as usize)
        .checked_sub(FILE_HEADER_LEN)
        .ok_or_else(|| {
            FrameError::InvalidHeader(alloc::format!(
                "data offset {data_offset} points inside the file header"
            ))
        })?;
    if info_len < INFO_MIN_LEN {
        return Err(FrameError::InvalidHeader(alloc::format!(
            "info header of {info_len} bytes too short"
        )));
    }

    // The server emits small frames; reading the whole info header into a
    // fixed scratch area keeps the parse allocation-free. Anything past
    // the fields we use is consumed and ignored.
    let mut info = [0u8; INFO_MIN_LEN];
    source.read_exact(&mut info)?;
    source.discard(info_len - INFO_MIN_LEN)?;

    let width = u32::from(u16::from_le_bytes([info[4], info[5]]));
    let height = u32::from(u16::from_le_bytes([info[8], info[9]]));
    let raw_depth = u16::from_le_bytes([info[14], info[15]]);

    if width == 0 {
        return Err(FrameError::InvalidHeader("width is zero".into()));
    }
    if height == 0 {
        return Err(FrameError::InvalidHeader("height is zero".into()));
    }

    let depth = BitDepth::try_from_raw(raw_depth)?;

    Ok(BitmapHeader {
        data_offset,
        width,
        height,
        depth,
    })
}
