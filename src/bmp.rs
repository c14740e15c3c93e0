//! BMP encoding and decoding.
//!
//! Writes 32-bit BGRA top-down bitmaps with a `BITMAPINFOHEADER`. Reading
//! accepts 24-bit and 32-bit uncompressed files in either row order, which
//! covers what this crate writes and what common tools produce.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::rendering_buffer::RenderingBuffer;

const FILE_HEADER_SIZE: u32 = 14;
const INFO_HEADER_SIZE: u32 = 40;

/// Size in bytes of the encoded file for a `width × height` image.
pub fn encoded_len(width: u32, height: u32) -> usize {
    (FILE_HEADER_SIZE + INFO_HEADER_SIZE) as usize + width as usize * height as usize * 4
}

/// Header fields `(width, -height, image_size, file_size)` for a top-down
/// 32-bit image, or an error when the image does not fit the format.
fn header_dims(width: u32, height: u32) -> io::Result<(i32, i32, u32, u32)> {
    let too_large = || {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}x{} image is too large for BMP", width, height),
        )
    };
    let w = i32::try_from(width).map_err(|_| too_large())?;
    let h = i32::try_from(height).map_err(|_| too_large())?;
    let image_size = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(too_large)?;
    let file_size = image_size
        .checked_add(FILE_HEADER_SIZE + INFO_HEADER_SIZE)
        .ok_or_else(too_large)?;
    Ok((w, -h, image_size, file_size))
}

/// Encode a pixel buffer as a 32-bit BMP (top-down, BGRA).
///
/// Fails with `InvalidInput` when the pixel data exceeds the 4 GiB the
/// header can describe.
pub fn encode_bmp<W: Write>(buf: &RenderingBuffer, mut w: W) -> io::Result<()> {
    let (width, neg_height, image_size, file_size) = header_dims(buf.width(), buf.height())?;
    let pixel_offset = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

    // BMP file header (14 bytes)
    w.write_all(b"BM")?;
    w.write_all(&file_size.to_le_bytes())?;
    w.write_all(&[0u8; 4])?; // reserved
    w.write_all(&pixel_offset.to_le_bytes())?;

    // BITMAPINFOHEADER (40 bytes)
    w.write_all(&INFO_HEADER_SIZE.to_le_bytes())?;
    w.write_all(&width.to_le_bytes())?;
    w.write_all(&neg_height.to_le_bytes())?; // negative height = top-down
    w.write_all(&1u16.to_le_bytes())?; // planes
    w.write_all(&32u16.to_le_bytes())?; // bits per pixel
    w.write_all(&0u32.to_le_bytes())?; // compression (BI_RGB)
    w.write_all(&image_size.to_le_bytes())?;
    w.write_all(&[0u8; 4])?; // x pixels per meter
    w.write_all(&[0u8; 4])?; // y pixels per meter
    w.write_all(&0u32.to_le_bytes())?; // colors used
    w.write_all(&0u32.to_le_bytes())?; // important colors

    let mut row = vec![0u8; buf.stride()];
    for src in buf.rows() {
        for (d, s) in row.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
            d[0] = s[2]; // B
            d[1] = s[1]; // G
            d[2] = s[0]; // R
            d[3] = s[3]; // A
        }
        w.write_all(&row)?;
    }
    Ok(())
}

/// Encode into a byte vector.
pub fn encode_bmp_to_vec(buf: &RenderingBuffer) -> io::Result<Vec<u8>> {
    let mut out = Vec::with_capacity(encoded_len(buf.width(), buf.height()));
    encode_bmp(buf, &mut out)?;
    Ok(out)
}

fn invalid(msg: impl Into<String>) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg.into())
}

fn read_u16(d: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([d[at], d[at + 1]])
}

fn read_u32(d: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([d[at], d[at + 1], d[at + 2], d[at + 3]])
}

/// Decode a 24-bit or 32-bit uncompressed BMP.
pub fn decode_bmp(data: &[u8]) -> io::Result<RenderingBuffer> {
    let header_len = (FILE_HEADER_SIZE + INFO_HEADER_SIZE) as usize;
    if data.len() < header_len || &data[0..2] != b"BM" {
        return Err(invalid("not a valid BMP file"));
    }

    let pixel_offset = read_u32(data, 10) as usize;
    let w = read_u32(data, 18) as i32;
    let h = read_u32(data, 22) as i32;
    let bpp = read_u16(data, 28) as usize;
    let compression = read_u32(data, 30);

    if compression != 0 {
        return Err(invalid(format!("unsupported BMP compression {}", compression)));
    }
    if bpp != 24 && bpp != 32 {
        return Err(invalid(format!("unsupported BMP bit depth {}", bpp)));
    }
    if w <= 0 || h == 0 {
        return Err(invalid(format!("invalid BMP dimensions {}x{}", w, h)));
    }

    let width = w.unsigned_abs();
    let height = h.unsigned_abs();
    let top_down = h < 0;
    let bytes_pp = bpp / 8;
    let row_stride = (width as usize * bytes_pp).div_ceil(4) * 4;

    let pixel_end = row_stride
        .checked_mul(height as usize)
        .and_then(|n| n.checked_add(pixel_offset));
    match pixel_end {
        Some(end) if end <= data.len() => {}
        _ => return Err(invalid("BMP pixel data is truncated")),
    }

    let mut buf = RenderingBuffer::new(width, height);
    for y in 0..height {
        let src_y = (if top_down { y } else { height - 1 - y }) as usize;
        let src = &data[pixel_offset + src_y * row_stride..][..width as usize * bytes_pp];
        let dst = buf.row_slice_mut(y);
        for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(bytes_pp)) {
            d[0] = s[2];
            d[1] = s[1];
            d[2] = s[0];
            d[3] = if bytes_pp == 4 { s[3] } else { 255 };
        }
    }
    Ok(buf)
}

/// Write a pixel buffer to `path` as a BMP file.
pub fn save_bmp(path: &Path, buf: &RenderingBuffer) -> Result<()> {
    let bytes = encode_bmp_to_vec(buf).map_err(|e| Error::io(path, e))?;
    fs::write(path, bytes).map_err(|e| Error::io(path, e))
}

/// Read a BMP file into a pixel buffer.
pub fn load_bmp(path: &Path) -> Result<RenderingBuffer> {
    let data = fs::read(path).map_err(|e| Error::io(path, e))?;
    decode_bmp(&data).map_err(|e| Error::io(path, e))
}
