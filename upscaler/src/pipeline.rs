//! End-to-end enlarge-and-threshold pipeline
//!
//! 1. Read the input image and convert it to gray+alpha
//! 2. Enlarge it by the scale factor with bilinear interpolation
//! 3. Binarize the enlarged buffer against a uniform threshold
//! 4. Write the enlarged buffer, and the binarized one if requested
//!
//! The enlarged (not the binarized) buffer goes to [`PipelineConfig::output`].
//! Both buffers are returned in [`PipelineOutput`].

use crate::progress::ProgressBar;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use upscaler_color::{ColorError, ThresholdConfig, binarize_buffer, convert_to_gray_alpha};
use upscaler_core::PixelBuffer;
use upscaler_io::{ImageFormat, IoError};
use upscaler_transform::{TransformError, scale};

/// Errors from any pipeline stage
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("image I/O failed: {0}")]
    Io(#[from] IoError),

    #[error("resampling failed: {0}")]
    Transform(#[from] TransformError),

    #[error("thresholding failed: {0}")]
    Color(#[from] ColorError),
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Pipeline settings
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Image to read
    pub input: PathBuf,
    /// Destination for the enlarged image
    pub output: PathBuf,
    /// Destination for the binarized image, if it should be kept
    pub binarized_output: Option<PathBuf>,
    /// Enlargement factor applied to both axes
    pub scale_factor: f64,
    /// Per-channel threshold level
    pub threshold_level: u8,
    /// Draw a progress bar on stderr while resampling
    pub show_progress: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("lena.png"),
            output: PathBuf::from("lena_bi_py.png"),
            binarized_output: None,
            scale_factor: 5.0,
            threshold_level: 160,
            show_progress: true,
        }
    }
}

/// Buffers produced by [`run`]
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Gray+alpha input, enlarged
    pub resized: PixelBuffer,
    /// `resized` after thresholding, as RGB black and white
    pub binarized: PixelBuffer,
}

/// Enlarge `source` by `factor` on both axes.
///
/// Target dimensions are `floor(height * factor) x floor(width * factor)`.
pub fn enlarge(
    source: &PixelBuffer,
    factor: f64,
    progress: Option<&mut dyn FnMut(f64)>,
) -> PipelineResult<PixelBuffer> {
    Ok(scale(source, factor, factor, progress)?)
}

/// Run the whole pipeline.
///
/// # Errors
///
/// Returns the first stage error. Nothing is written when reading,
/// resampling or thresholding fails. Output paths whose extension names no
/// supported format are rejected with [`IoError::UnsupportedFormat`]
/// before any work is done.
pub fn run(config: &PipelineConfig) -> PipelineResult<PipelineOutput> {
    let format = output_format(&config.output)?;
    let binarized_target = match &config.binarized_output {
        Some(path) => Some((path, output_format(path)?)),
        None => None,
    };

    let source = upscaler_io::read_image(&config.input)?;
    debug!(
        path = %config.input.display(),
        shape = ?source.shape(),
        "loaded input"
    );
    let gray = convert_to_gray_alpha(&source)?;

    info!("Starting bilinear interpolation");
    let resized = if config.show_progress {
        enlarge_with_bar(&gray, config.scale_factor)?
    } else {
        enlarge(&gray, config.scale_factor, None)?
    };
    info!(
        width = resized.width(),
        height = resized.height(),
        "Image resized!"
    );

    info!("Enhancing image!");
    let threshold = ThresholdConfig::uniform(resized.channels() as usize, config.threshold_level);
    let binarized = binarize_buffer(&resized, &threshold)?;
    info!("Image is done!");

    save(&resized, &config.output, format)?;
    if let Some((path, format)) = binarized_target {
        save(&binarized, path, format)?;
    }

    Ok(PipelineOutput { resized, binarized })
}

fn enlarge_with_bar(source: &PixelBuffer, factor: f64) -> PipelineResult<PixelBuffer> {
    let mut bar = ProgressBar::stderr();
    let mut bar_error = None;
    let mut observer = |fraction: f64| {
        if bar_error.is_none() {
            if let Err(e) = bar.update(fraction) {
                bar_error = Some(e);
            }
        }
    };
    let resized = enlarge(source, factor, Some(&mut observer));

    if let Some(e) = bar_error.take() {
        warn!("progress bar disabled: {e}");
    }
    if let Err(e) = bar.finish() {
        warn!("progress bar: {e}");
    }
    resized
}

/// Format named by the extension of `path`.
fn output_format(path: &Path) -> PipelineResult<ImageFormat> {
    ImageFormat::from_path(path).ok_or_else(|| {
        PipelineError::Io(IoError::UnsupportedFormat(format!(
            "no supported image format for output {}",
            path.display()
        )))
    })
}

fn save(buf: &PixelBuffer, path: &Path, format: ImageFormat) -> PipelineResult<()> {
    upscaler_io::write_image(buf, path, format)?;
    info!(path = %path.display(), ?format, "saved image");
    Ok(())
}
