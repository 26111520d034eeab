//! JPEG format support.
//!
//! Reads RGB and grayscale JPEGs into a [`Raster`] and writes rasters as
//! RGB (alpha is dropped - JPEG has no alpha channel). Source photographs
//! arrive almost exclusively as JPEG; treated output goes out as PNG.

use crate::{IoError, IoResult};
use grade_core::Raster;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Encoder quality for written JPEGs.
pub const QUALITY: u8 = 90;

/// Reads a JPEG file into a raster.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let file = File::open(path.as_ref())?;
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(file));
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::Decode(e.to_string()))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::Decode("missing image info after decode".into()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let rgba: Vec<u8> = match info.pixel_format {
        jpeg_decoder::PixelFormat::RGB24 => pixels
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        jpeg_decoder::PixelFormat::L8 => {
            pixels.iter().flat_map(|&g| [g, g, g, 255]).collect()
        }
        other => {
            return Err(IoError::UnsupportedFormat(format!("{other:?}")));
        }
    };

    Raster::from_rgba8(width, height, &rgba).map_err(|e| IoError::Decode(e.to_string()))
}

/// Writes a raster to a JPEG file as RGB at [`QUALITY`].
pub fn write<P: AsRef<Path>>(path: P, image: &Raster) -> IoResult<()> {
    let rgba = image.to_rgba8();
    let rgb: Vec<u8> = rgba
        .chunks_exact(4)
        .flat_map(|p| [p[0], p[1], p[2]])
        .collect();

    let encoder = jpeg_encoder::Encoder::new_file(path.as_ref(), QUALITY)
        .map_err(|e| IoError::Encode(e.to_string()))?;
    encoder
        .encode(
            &rgb,
            image.width() as u16,
            image.height() as u16,
            jpeg_encoder::ColorType::Rgb,
        )
        .map_err(|e| IoError::Encode(e.to_string()))?;

    Ok(())
}
