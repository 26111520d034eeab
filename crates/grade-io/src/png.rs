//! PNG format support.
//!
//! Reads 8- and 16-bit RGB/RGBA/grayscale PNGs into a [`Raster`] and
//! writes rasters as 8-bit RGBA with an sRGB chunk.

use crate::{IoError, IoResult};
use grade_core::Raster;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Reads a PNG file into a raster.
///
/// Grayscale and gray-alpha inputs are expanded to RGBA; 16-bit inputs are
/// normalized from the full 16-bit range.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let file = File::open(path.as_ref())?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::Decode(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::Decode("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::Decode(e.to_string()))?;

    let width = info.width;
    let height = info.height;
    let bytes = &buf[..info.buffer_size()];

    let rgba: Vec<u8> = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgba, png::BitDepth::Eight) => bytes.to_vec(),
        (png::ColorType::Rgb, png::BitDepth::Eight) => bytes
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            bytes.iter().flat_map(|&g| [g, g, g, 255]).collect()
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => bytes
            .chunks_exact(2)
            .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
            .collect(),
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => {
            return from_u16(width, height, bytes, 3);
        }
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => {
            return from_u16(width, height, bytes, 4);
        }
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedFormat(format!(
                "{color_type:?} {bit_depth:?}"
            )));
        }
    };

    Raster::from_rgba8(width, height, &rgba).map_err(|e| IoError::Decode(e.to_string()))
}

/// Builds a raster from big-endian 16-bit samples with 3 or 4 channels.
fn from_u16(width: u32, height: u32, bytes: &[u8], channels: usize) -> IoResult<Raster> {
    let expected = width as usize * height as usize * channels * 2;
    if bytes.len() != expected {
        return Err(IoError::Decode(format!(
            "expected {expected} bytes, got {}",
            bytes.len()
        )));
    }

    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for px in bytes.chunks_exact(channels * 2) {
        for c in 0..channels {
            let v = u16::from_be_bytes([px[c * 2], px[c * 2 + 1]]);
            data.push(v as f32 / u16::MAX as f32);
        }
        if channels == 3 {
            data.push(1.0);
        }
    }
    Raster::from_data(width, height, data).map_err(|e| IoError::Decode(e.to_string()))
}

/// Writes a raster to a PNG file as 8-bit RGBA.
pub fn write<P: AsRef<Path>>(path: P, image: &Raster) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::Encode(e.to_string()))?;
    png_writer
        .write_image_data(&image.to_rgba8())
        .map_err(|e| IoError::Encode(e.to_string()))?;

    Ok(())
}
