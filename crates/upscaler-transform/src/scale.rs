//! Image resizing by bilinear interpolation
//!
//! Every output pixel `(r, c)` is mapped back into source space through
//! [`ScaleFactors`] and sampled with [`interpolate`](crate::interpolate).
//! Pixels are produced in row-major order, so a progress observer sees a
//! strictly increasing sequence `1/N, 2/N, ..., N/N`.
//!
//! | Function | Target size |
//! |---|---|
//! | [`resize`] | explicit height and width |
//! | [`resize_with_progress`] | explicit, with a progress observer |
//! | [`scale`] | `floor(source * factor)` per axis |

use crate::bilinear::interpolate_into;
use crate::{TransformError, TransformResult};
use tracing::debug;
use upscaler_core::PixelBuffer;

/// Ratio of source size to target size along each axis.
///
/// Output row `r` maps to source row `r * row` and output column `c` to
/// source column `c * col`. Upscaling gives ratios below 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors {
    /// `source_height / target_height`
    pub row: f64,
    /// `source_width / target_width`
    pub col: f64,
}

impl ScaleFactors {
    /// Compute the factors for a resize from `src_h x src_w` to
    /// `dst_h x dst_w`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidParameters`] if any dimension is 0.
    pub fn new(src_h: u32, src_w: u32, dst_h: u32, dst_w: u32) -> TransformResult<Self> {
        if src_h == 0 || src_w == 0 || dst_h == 0 || dst_w == 0 {
            return Err(TransformError::InvalidParameters(format!(
                "cannot resize {}x{} to {}x{}",
                src_w, src_h, dst_w, dst_h
            )));
        }
        Ok(Self {
            row: f64::from(src_h) / f64::from(dst_h),
            col: f64::from(src_w) / f64::from(dst_w),
        })
    }

    /// Source coordinate `(x, y)` for output pixel `(row, col)`.
    ///
    /// `x` is the column coordinate and `y` the row coordinate, the order
    /// [`interpolate`](crate::interpolate) expects.
    #[inline]
    pub fn source_coord(&self, row: u32, col: u32) -> (f64, f64) {
        (f64::from(col) * self.col, f64::from(row) * self.row)
    }
}

/// Resize an image to `target_height x target_width`.
///
/// # Arguments
/// * `source` - Input image (any channel count)
/// * `target_height` - Output height in pixels
/// * `target_width` - Output width in pixels
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if a target dimension is 0.
pub fn resize(
    source: &PixelBuffer,
    target_height: u32,
    target_width: u32,
) -> TransformResult<PixelBuffer> {
    resize_with_progress(source, target_height, target_width, None)
}

/// Resize an image, reporting progress after every output pixel.
///
/// The observer receives `k / N`, where `k` is the 1-based row-major index
/// of the pixel just written and `N` the output pixel count. It is called
/// exactly `N` times and the last value is `1.0`.
///
/// # Arguments
/// * `source` - Input image (any channel count)
/// * `target_height` - Output height in pixels
/// * `target_width` - Output width in pixels
/// * `progress` - Optional observer
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if a target dimension is 0
/// and [`TransformError::Core`] if the output cannot be allocated.
pub fn resize_with_progress(
    source: &PixelBuffer,
    target_height: u32,
    target_width: u32,
    mut progress: Option<&mut dyn FnMut(f64)>,
) -> TransformResult<PixelBuffer> {
    let factors = ScaleFactors::new(
        source.height(),
        source.width(),
        target_height,
        target_width,
    )?;
    debug!(
        src_h = source.height(),
        src_w = source.width(),
        dst_h = target_height,
        dst_w = target_width,
        channels = source.channels(),
        "bilinear resize"
    );

    let mut out = PixelBuffer::new(target_height, target_width, source.channels())?;
    let total = out.pixel_count() as f64;
    let mut done: u64 = 0;

    for row in 0..target_height {
        for col in 0..target_width {
            let (x, y) = factors.source_coord(row, col);
            if let Some(dst) = out.pixel_mut(row, col) {
                interpolate_into(source, x, y, dst);
            }
            done += 1;
            if let Some(ref mut cb) = progress {
                cb(done as f64 / total);
            }
        }
    }

    Ok(out)
}

/// Scale an image by per-axis factors.
///
/// The target size is `floor(height * factor_y) x floor(width * factor_x)`.
///
/// # Arguments
/// * `source` - Input image
/// * `factor_y` - Vertical scale factor (e.g., 5.0 = five times taller)
/// * `factor_x` - Horizontal scale factor
/// * `progress` - Optional observer, as in [`resize_with_progress`]
///
/// # Errors
///
/// Returns [`TransformError::InvalidScaleFactor`] if a factor is not finite
/// and positive, or if it yields an empty or oversized dimension.
pub fn scale(
    source: &PixelBuffer,
    factor_y: f64,
    factor_x: f64,
    progress: Option<&mut dyn FnMut(f64)>,
) -> TransformResult<PixelBuffer> {
    let target_height = scaled_dimension(source.height(), factor_y)?;
    let target_width = scaled_dimension(source.width(), factor_x)?;
    resize_with_progress(source, target_height, target_width, progress)
}

fn scaled_dimension(len: u32, factor: f64) -> TransformResult<u32> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(TransformError::InvalidScaleFactor(format!(
            "factor must be finite and positive, got {}",
            factor
        )));
    }
    let scaled = (f64::from(len) * factor).floor();
    if scaled < 1.0 || scaled > f64::from(u32::MAX) {
        return Err(TransformError::InvalidScaleFactor(format!(
            "factor {} maps dimension {} to {}",
            factor, len, scaled
        )));
    }
    Ok(scaled as u32)
}
