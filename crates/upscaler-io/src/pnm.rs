//! PNM (Portable Any Map) format support
//!
//! Reads and writes PGM (P5 binary) and PPM (P6 binary) with a maxval
//! of 255. ASCII variants (P1/P2/P3), bitmaps (P4) and PAM (P7) are not
//! supported, so gray+alpha and RGBA buffers cannot be written as PNM.

use crate::{IoError, IoResult};
use std::io::{BufRead, Read, Write};
use tracing::debug;
use upscaler_core::PixelBuffer;

/// Read a binary PNM image (P5/P6) from a reader.
///
/// # Returns
/// A 1-channel buffer for P5 and a 3-channel buffer for P6.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<PixelBuffer> {
    let magic = read_token(&mut reader)?;
    let channels = match magic.as_str() {
        "P5" => 1,
        "P6" => 3,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM variant: {}",
                other
            )));
        }
    };

    let width = read_number(&mut reader, "width")?;
    let height = read_number(&mut reader, "height")?;
    let maxval = read_number(&mut reader, "maxval")?;
    if maxval != 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNM maxval: {}",
            maxval
        )));
    }

    let len = PixelBuffer::sample_count(height, width, channels).map_err(|e| {
        IoError::InvalidData(format!("bad PNM size {}x{}: {}", width, height, e))
    })?;

    // Storage grows with the bytes actually present, not the header's claim
    let mut data = Vec::new();
    reader
        .take(len as u64)
        .read_to_end(&mut data)
        .map_err(|e| IoError::DecodeError(format!("PNM raster error: {}", e)))?;
    if data.len() != len {
        return Err(IoError::InvalidData(format!(
            "PNM raster truncated: expected {} bytes, got {}",
            len,
            data.len()
        )));
    }

    debug!(width, height, channels, "decoded PNM");
    Ok(PixelBuffer::from_raw(height, width, channels, data)?)
}

/// Read one whitespace-delimited header token, skipping `#` comments.
///
/// Consumes exactly one whitespace byte after the token, so after the
/// maxval the reader is positioned at the first raster byte.
fn read_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = Vec::new();
    let mut byte = [0u8; 1];
    loop {
        if reader.read(&mut byte)? == 0 {
            if token.is_empty() {
                return Err(IoError::InvalidData("truncated PNM header".to_string()));
            }
            break;
        }
        match byte[0] {
            b'#' if token.is_empty() => {
                let mut comment = Vec::new();
                reader.read_until(b'\n', &mut comment)?;
            }
            b if b.is_ascii_whitespace() => {
                if !token.is_empty() {
                    break;
                }
            }
            b => token.push(b),
        }
    }
    String::from_utf8(token).map_err(|_| IoError::InvalidData("non-ASCII PNM header".to_string()))
}

fn read_number<R: BufRead>(reader: &mut R, field: &str) -> IoResult<u32> {
    let token = read_token(reader)?;
    token
        .parse()
        .map_err(|_| IoError::InvalidData(format!("invalid PNM {}: {:?}", field, token)))
}

/// Write a buffer as binary PNM to a writer.
///
/// Chooses P5 (1 channel) or P6 (3 channels).
pub fn write_pnm<W: Write>(buf: &PixelBuffer, mut writer: W) -> IoResult<()> {
    let magic = match buf.channels() {
        1 => "P5",
        3 => "P6",
        n => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNM cannot store {} channels",
                n
            )));
        }
    };

    write!(writer, "{}\n{} {}\n255\n", magic, buf.width(), buf.height())?;
    writer.write_all(buf.data())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_pnm_roundtrip_gray() {
        let buf = PixelBuffer::from_gray_rows(&[[0, 64, 128], [192, 255, 7]]).unwrap();
        let mut bytes = Vec::new();
        write_pnm(&buf, &mut bytes).unwrap();
        assert!(bytes.starts_with(b"P5\n3 2\n255\n"));
        assert_eq!(read_pnm(Cursor::new(bytes)).unwrap(), buf);
    }

    #[test]
    fn test_pnm_roundtrip_rgb() {
        let buf = PixelBuffer::from_raw(1, 2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let mut bytes = Vec::new();
        write_pnm(&buf, &mut bytes).unwrap();
        assert_eq!(read_pnm(Cursor::new(bytes)).unwrap(), buf);
    }

    #[test]
    fn test_pnm_header_comments() {
        let mut bytes = b"P5\n# made by hand\n2 1\n# max\n255\n".to_vec();
        bytes.extend_from_slice(&[10, 32]);
        let buf = read_pnm(Cursor::new(bytes)).unwrap();
        assert_eq!(buf.shape(), (1, 2, 1));
        // 32 is ASCII space: must be read as raster, not header whitespace
        assert_eq!(buf.data(), &[10, 32]);
    }

    #[test]
    fn test_pnm_errors() {
        let gray_alpha = PixelBuffer::new(1, 1, 2).unwrap();
        assert!(matches!(
            write_pnm(&gray_alpha, Vec::new()),
            Err(IoError::UnsupportedFormat(_))
        ));
        assert!(read_pnm(Cursor::new(b"P5\n2 2\n65535\n".to_vec())).is_err());
        assert!(read_pnm(Cursor::new(b"P5\n2 2\n255\n\x01".to_vec())).is_err());
        assert!(read_pnm(Cursor::new(b"P5\n0 2\n255\n".to_vec())).is_err());
        assert!(read_pnm(Cursor::new(b"P5\nx 2\n255\n".to_vec())).is_err());
    }

    #[test]
    fn test_pnm_oversized_header() {
        // Sample count overflows usize
        let res = read_pnm(Cursor::new(b"P6\n4294967295 4294967295\n255\n".to_vec()));
        assert!(matches!(res, Err(IoError::InvalidData(_))));

        // Representable, but far larger than the input
        let mut bytes = b"P5\n100000 100000\n255\n".to_vec();
        bytes.extend_from_slice(&[7; 16]);
        let res = read_pnm(Cursor::new(bytes));
        assert!(matches!(res, Err(IoError::InvalidData(_))));
    }
}
