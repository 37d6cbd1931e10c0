//! 24-bit Windows bitmap codec.
//!
//! Decodes the uncompressed BMP layout the `filter` binary consumes (a
//! 14-byte file header followed by a 40-byte `BITMAPINFOHEADER`, `BI_RGB`,
//! 24 bits per pixel) into an [`Image`] with scanline padding stripped, and
//! re-encodes it on write. Anything else is rejected with a distinct error
//! rather than decoded into garbage.
//!
//! Scanlines are stored as BGR triples padded to a 4-byte boundary. Rows are
//! consumed and emitted in file order; a negative `biHeight` only affects
//! which way the stored rows run, not how they are copied.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::image::{Image, Pixel};

const FILE_HEADER_SIZE: usize = 14;
const INFO_HEADER_SIZE: usize = 40;
const HEADERS_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
/// "BM" little-endian.
const BMP_MAGIC: u16 = 0x4D42;
const BITS_PER_PIXEL: u16 = 24;
const BI_RGB: u32 = 0;

#[derive(Debug, Error)]
pub enum BmpError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("not a BMP file (bad magic)")]
    NotBmp,
    #[error("unsupported BMP variant: {reason}")]
    UnsupportedFormat { reason: String },
    #[error("pixel data ends before row {row} of {height}")]
    TruncatedPixelData { row: usize, height: usize },
}

fn u16_at(buf: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([buf[at], buf[at + 1]])
}

fn u32_at(buf: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
}

fn i32_at(buf: &[u8], at: usize) -> i32 {
    i32::from_le_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
}

/// Bytes of zero padding appended to each scanline.
fn row_padding(width: usize) -> usize {
    (4 - (width * 3) % 4) % 4
}

/// Decode a 24-bit uncompressed BMP from a byte stream.
pub fn decode<R: Read>(mut reader: R) -> Result<Image, BmpError> {
    let mut headers = [0u8; HEADERS_SIZE];
    reader.read_exact(&mut headers).map_err(|e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            BmpError::NotBmp
        } else {
            BmpError::Io(e)
        }
    })?;

    if u16_at(&headers, 0) != BMP_MAGIC {
        return Err(BmpError::NotBmp);
    }
    let pixel_offset = u32_at(&headers, 10) as usize;

    let info_size = u32_at(&headers, 14);
    let width_raw = i32_at(&headers, 18);
    let height_raw = i32_at(&headers, 22);
    let planes = u16_at(&headers, 26);
    let bit_count = u16_at(&headers, 28);
    let compression = u32_at(&headers, 30);

    if info_size != INFO_HEADER_SIZE as u32 || planes != 1 {
        return Err(BmpError::UnsupportedFormat {
            reason: format!("info header size {info_size}, {planes} plane(s)"),
        });
    }
    if bit_count != BITS_PER_PIXEL {
        return Err(BmpError::UnsupportedFormat {
            reason: format!("{bit_count} bits per pixel"),
        });
    }
    if compression != BI_RGB {
        return Err(BmpError::UnsupportedFormat {
            reason: format!("compression {compression}"),
        });
    }
    if width_raw < 0 || pixel_offset < HEADERS_SIZE {
        return Err(BmpError::UnsupportedFormat {
            reason: "malformed dimensions or pixel offset".into(),
        });
    }

    let width = width_raw as usize;
    let height = height_raw.unsigned_abs() as usize;
    debug!(width, height, pixel_offset, "decoding bitmap");

    // Skip any gap between the headers and the pixel array.
    let mut gap = vec![0u8; pixel_offset - HEADERS_SIZE];
    reader.read_exact(&mut gap)?;

    let padding = row_padding(width);
    let mut image = Image::new(height, width);
    let mut scanline = vec![0u8; width * 3 + padding];

    for row in 0..height {
        reader.read_exact(&mut scanline).map_err(|e| {
            if e.kind() == io::ErrorKind::UnexpectedEof {
                BmpError::TruncatedPixelData { row, height }
            } else {
                BmpError::Io(e)
            }
        })?;
        for col in 0..width {
            let at = col * 3;
            image.set(
                row,
                col,
                Pixel {
                    blue: scanline[at],
                    green: scanline[at + 1],
                    red: scanline[at + 2],
                },
            );
        }
    }

    Ok(image)
}

/// Encode an image as a 24-bit uncompressed BMP.
pub fn encode<W: Write>(mut writer: W, image: &Image) -> Result<(), BmpError> {
    let (height, width) = (image.height(), image.width());
    let padding = row_padding(width);
    let row_size = width * 3 + padding;
    let file_size = (HEADERS_SIZE + row_size * height) as u32;

    // BITMAPFILEHEADER
    writer.write_all(&BMP_MAGIC.to_le_bytes())?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(&0u32.to_le_bytes())?; // reserved
    writer.write_all(&(HEADERS_SIZE as u32).to_le_bytes())?;

    // BITMAPINFOHEADER
    writer.write_all(&(INFO_HEADER_SIZE as u32).to_le_bytes())?;
    writer.write_all(&(width as i32).to_le_bytes())?;
    writer.write_all(&(height as i32).to_le_bytes())?;
    writer.write_all(&1u16.to_le_bytes())?; // planes
    writer.write_all(&BITS_PER_PIXEL.to_le_bytes())?;
    writer.write_all(&BI_RGB.to_le_bytes())?;
    writer.write_all(&((row_size * height) as u32).to_le_bytes())?; // image size
    writer.write_all(&0i32.to_le_bytes())?; // x pixels per meter
    writer.write_all(&0i32.to_le_bytes())?; // y pixels per meter
    writer.write_all(&0u32.to_le_bytes())?; // colors used
    writer.write_all(&0u32.to_le_bytes())?; // important colors

    let mut scanline = vec![0u8; row_size];
    for row in 0..height {
        for col in 0..width {
            let px = image.pixel(row, col);
            let at = col * 3;
            scanline[at] = px.blue;
            scanline[at + 1] = px.green;
            scanline[at + 2] = px.red;
        }
        // Padding bytes stay zero.
        writer.write_all(&scanline)?;
    }

    Ok(())
}

/// Read a bitmap from disk.
pub fn read_bmp<P: AsRef<Path>>(path: P) -> Result<Image, BmpError> {
    decode(BufReader::new(File::open(path)?))
}

/// Write a bitmap to disk.
pub fn write_bmp<P: AsRef<Path>>(path: P, image: &Image) -> Result<(), BmpError> {
    let mut writer = BufWriter::new(File::create(path)?);
    encode(&mut writer, image)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(height: usize, width: usize) -> Image {
        let mut img = Image::new(height, width);
        for row in 0..height {
            for col in 0..width {
                img.set(
                    row,
                    col,
                    Pixel::new((row * 7 + col) as u8, col as u8, 255 - row as u8),
                );
            }
        }
        img
    }

    #[test]
    fn test_roundtrip_padded_width() {
        // Width 3 needs 3 padding bytes per scanline.
        let img = sample(4, 3);
        let mut buf = Vec::new();
        encode(&mut buf, &img).unwrap();

        assert_eq!(buf.len(), HEADERS_SIZE + 4 * (3 * 3 + 3));
        assert_eq!(decode(buf.as_slice()).unwrap(), img);
    }

    #[test]
    fn test_roundtrip_aligned_width() {
        // Width 4 scanlines are already 4-byte aligned.
        let img = sample(2, 4);
        let mut buf = Vec::new();
        encode(&mut buf, &img).unwrap();

        assert_eq!(buf.len(), HEADERS_SIZE + 2 * 4 * 3);
        assert_eq!(decode(buf.as_slice()).unwrap(), img);
    }

    #[test]
    fn test_rejects_bad_magic() {
        let img = sample(1, 1);
        let mut buf = Vec::new();
        encode(&mut buf, &img).unwrap();
        buf[0] = b'X';

        assert!(matches!(decode(buf.as_slice()), Err(BmpError::NotBmp)));
    }

    #[test]
    fn test_rejects_short_stream_as_not_bmp() {
        assert!(matches!(
            decode(&b"BM"[..]),
            Err(BmpError::NotBmp)
        ));
    }

    #[test]
    fn test_rejects_wrong_bit_depth() {
        let img = sample(1, 1);
        let mut buf = Vec::new();
        encode(&mut buf, &img).unwrap();
        buf[28] = 32; // biBitCount

        assert!(matches!(
            decode(buf.as_slice()),
            Err(BmpError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_rejects_compressed() {
        let img = sample(1, 1);
        let mut buf = Vec::new();
        encode(&mut buf, &img).unwrap();
        buf[30] = 1; // biCompression = BI_RLE8

        assert!(matches!(
            decode(buf.as_slice()),
            Err(BmpError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_reports_truncated_pixel_data() {
        let img = sample(3, 2);
        let mut buf = Vec::new();
        encode(&mut buf, &img).unwrap();
        buf.truncate(buf.len() - 10);

        assert!(matches!(
            decode(buf.as_slice()),
            Err(BmpError::TruncatedPixelData { .. })
        ));
    }

    #[test]
    fn test_negative_height_reads_rows_in_file_order() {
        let img = sample(2, 2);
        let mut buf = Vec::new();
        encode(&mut buf, &img).unwrap();
        // Flip biHeight to -2; the decoder keeps the stored row order.
        buf[22..26].copy_from_slice(&(-2i32).to_le_bytes());

        assert_eq!(decode(buf.as_slice()).unwrap(), img);
    }
}
