//! PNG image format support
//!
//! Decoding normalizes every PNG to 8 bits per sample: palettes and
//! sub-byte grayscale are expanded and 16-bit samples are stripped to
//! their high byte. The channel count is preserved (1 gray, 2 gray+alpha,
//! 3 RGB, 4 RGBA).

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};
use tracing::debug;
use upscaler_core::PixelBuffer;

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG output depth: {:?}",
            bit_depth
        )));
    }
    let channels = channels_for(color_type)?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let bytes_per_row = output_info.line_size;
    let packed_row = width as usize * channels as usize;

    // Rows may carry padding beyond the packed sample count
    let mut data = Vec::with_capacity(packed_row * height as usize);
    for row in buf[..output_info.buffer_size()].chunks(bytes_per_row) {
        if row.len() < packed_row {
            return Err(IoError::InvalidData(format!(
                "PNG row holds {} bytes, expected {}",
                row.len(),
                packed_row
            )));
        }
        data.extend_from_slice(&row[..packed_row]);
    }

    debug!(width, height, channels, ?color_type, "decoded PNG");
    Ok(PixelBuffer::from_raw(height, width, channels, data)?)
}

/// Map a normalized PNG color type to a channel count.
fn channels_for(color_type: ColorType) -> IoResult<u32> {
    match color_type {
        ColorType::Grayscale => Ok(1),
        ColorType::GrayscaleAlpha => Ok(2),
        ColorType::Rgb => Ok(3),
        ColorType::Rgba => Ok(4),
        ColorType::Indexed => Err(IoError::UnsupportedFormat(
            "indexed PNG was not expanded".to_string(),
        )),
    }
}

/// Write a PNG image
///
/// The color type follows the channel count; buffers with more than four
/// channels cannot be stored as PNG.
pub fn write_png<W: Write>(buf: &PixelBuffer, writer: W) -> IoResult<()> {
    let color_type = match buf.channels() {
        1 => ColorType::Grayscale,
        2 => ColorType::GrayscaleAlpha,
        3 => ColorType::Rgb,
        4 => ColorType::Rgba,
        n => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNG cannot store {} channels",
                n
            )));
        }
    };

    let mut encoder = Encoder::new(writer, buf.width(), buf.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(buf.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    debug!(
        width = buf.width(),
        height = buf.height(),
        channels = buf.channels(),
        "encoded PNG"
    );
    Ok(())
}
