//! Render orchestration: gate sequence and the streaming row loop.

use alloc::vec;

use enough::Stop;
use log::{error, info};

use crate::bmp::{self, BitmapHeader, extract_color};
use crate::error::FrameError;
use crate::fetch::FrameFetcher;
use crate::geometry::TargetGeometry;
use crate::limits::Limits;
use crate::rows::RowScheduler;
use crate::sink::DisplaySink;
use crate::stream::ByteSource;

/// What a completed render did, for logging and assertions.
#[derive(Clone, Copy, Debug)]
pub struct RenderSummary {
    pub header: BitmapHeader,
    pub geometry: TargetGeometry,
    /// Source rows consumed; always equals the source height on success.
    pub rows_read: u32,
}

/// A render operation against a device of a given size.
///
/// ```no_run
/// use enough::Unstoppable;
/// use epframe::{MonoSink, RenderRequest, SliceSource};
///
/// let data: &[u8] = &[]; // BMP bytes from the frame server
/// let mut sink = MonoSink::new(400, 640);
/// let summary = RenderRequest::new(400, 640)
///     .render(&mut SliceSource::new(data), &mut sink, &Unstoppable)?;
/// # Ok::<(), epframe::FrameError>(())
/// ```
pub struct RenderRequest<'a> {
    device_width: u32,
    device_height: u32,
    limits: Option<&'a Limits>,
}

impl<'a> RenderRequest<'a> {
    pub fn new(device_width: u32, device_height: u32) -> Self {
        Self {
            device_width,
            device_height,
            limits: None,
        }
    }

    /// Apply resource limits, checked before the row buffer is allocated.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Parse the header from `source`, validate it against the sink's
    /// capabilities and the device size, then stream rows to the sink.
    ///
    /// The stream is consumed strictly forward and exactly one scanline is
    /// resident at any time. On any failure the sink may already hold
    /// partially written pixels; nothing is rolled back.
    pub fn render<S, D>(
        &self,
        source: &mut S,
        sink: &mut D,
        stop: &dyn Stop,
    ) -> Result<RenderSummary, FrameError>
    where
        S: ByteSource,
        D: DisplaySink + ?Sized,
    {
        let header = bmp::parse_header(source)?;
        let geometry = TargetGeometry::compute(&header, self.device_width, self.device_height);

        info!(
            "bmp {}x{} depth {} rotate {} target {}x{}",
            header.width,
            header.height,
            header.depth.bits(),
            geometry.rotate,
            geometry.target_width,
            geometry.target_height,
        );

        // Gate sequence. All checks pass before the row buffer exists, so
        // an aborted render allocates nothing and writes no pixel.
        if geometry.rotate && !sink.supports_rotation() {
            return Err(FrameError::RotationUnsupported);
        }
        if sink.supported_bit_depth() < header.depth.bits() {
            return Err(FrameError::DepthUnsupported {
                source: header.depth.bits(),
                sink: sink.supported_bit_depth(),
            });
        }
        if !geometry.fits() {
            return Err(FrameError::SourceTooSmall {
                width: header.width,
                height: header.height,
                target_width: geometry.target_width,
                target_height: geometry.target_height,
            });
        }

        let stride = header.stride();
        if let Some(limits) = self.limits {
            limits.check(header.width, header.height)?;
            limits.check_row_bytes(stride)?;
        }

        stop.check()?;
        let mut scheduler = RowScheduler::new(stride, header.height);
        let mut row = vec![0u8; scheduler.stride()];

        for y in 0..geometry.target_height {
            if y % 16 == 0 {
                stop.check()?;
            }

            scheduler.advance_to(source, &mut row, geometry.source_row(y))?;

            for x in 0..geometry.target_width {
                let bmp_x = geometry.source_column(x);
                let (out_x, out_y) = geometry.map(x, y);

                // The row is sampled mirrored: column `width - x` rather
                // than `x`, clamped to the last column. Frames rendered by
                // the server depend on this orientation, so it is kept
                // bit-for-bit. Review this inversion before pointing the
                // pipeline at a source that does not pre-mirror.
                let sampled = (header.width - bmp_x).min(header.width - 1);
                let color = extract_color(&row, sampled, header.depth);
                sink.set_pixel(out_x, out_y, color.to_le_bytes());
            }
        }

        // Consume the rows below the last sampled one so a short stream is
        // detected as truncation rather than silently succeeding.
        scheduler.drain(source, &mut row)?;

        Ok(RenderSummary {
            header,
            geometry,
            rows_read: scheduler.rows_read(),
        })
    }
}

/// Fetch `url` and render the response body onto `sink`.
///
/// Proceeds only on status 200; any other status is terminal. Errors are
/// logged before they surface, so a headless frame keeps an operator trail
/// even when the caller only retries.
pub fn fetch_and_render<F, D>(
    fetcher: &mut F,
    url: &str,
    request: &RenderRequest<'_>,
    sink: &mut D,
    stop: &dyn Stop,
) -> Result<RenderSummary, FrameError>
where
    F: FrameFetcher,
    D: DisplaySink + ?Sized,
{
    let result = (|| {
        let mut response = fetcher.fetch(url)?;
        if response.status != 200 {
            return Err(FrameError::FetchFailed {
                status: response.status,
            });
        }
        request.render(&mut response.body, sink, stop)
    })();

    if let Err(e) = &result {
        error!("frame render failed: {e}");
    }
    result
}
