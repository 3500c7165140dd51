//! upscaler-io - Image I/O for the upscaler pipeline
//!
//! Decodes image files into [`PixelBuffer`]s and encodes them back.
//!
//! | Format | Read | Write | Feature |
//! |---|---|---|---|
//! | PNG | 1-4 channels, any bit depth | 1-4 channels, 8-bit | `png-format` |
//! | PNM | P5, P6 (maxval 255) | P5, P6 | `pnm` |
//!
//! Reading detects the format from magic bytes, never from the extension.

mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;
use tracing::debug;
use upscaler_core::PixelBuffer;

/// Read an image from a file path.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be opened,
/// [`IoError::UnsupportedFormat`] for unknown formats, and a decode error
/// for malformed data.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    debug!(path = %path.display(), ?format, "reading image");
    let reader = BufReader::new(File::open(path)?);
    read_image_format(reader, format)
}

/// Read an image from an in-memory encoded byte slice.
pub fn read_image_mem(data: &[u8]) -> IoResult<PixelBuffer> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), format)
}

fn read_image_format<R: std::io::BufRead + std::io::Seek>(
    reader: R,
    format: ImageFormat,
) -> IoResult<PixelBuffer> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support is not enabled",
            other
        ))),
    }
}

/// Write an image to a file path in the given format.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] if the format cannot hold the
/// buffer's channel count, and [`IoError::Io`] if the file cannot be
/// created or written.
pub fn write_image<P: AsRef<Path>>(buf: &PixelBuffer, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), ?format, "writing image");
    let mut writer = BufWriter::new(File::create(path)?);
    write_image_format(buf, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into memory.
pub fn write_image_mem(buf: &PixelBuffer, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();
    write_image_format(buf, &mut out, format)?;
    Ok(out)
}

fn write_image_format<W: Write>(buf: &PixelBuffer, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(buf, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(buf, writer),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support is not enabled",
            other
        ))),
    }
}
