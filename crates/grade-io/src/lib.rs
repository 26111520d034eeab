//! # grade-io
//!
//! Image decode/encode boundary for the brandgrade pipeline.
//!
//! The treatment pipeline operates purely on in-memory [`Raster`] buffers;
//! this crate is where files enter and leave. Supported formats:
//!
//! - [`png`] - read 8/16-bit RGB/RGBA/grayscale, write 8-bit RGBA
//! - [`jpeg`] - read RGB/grayscale, write RGB (alpha dropped)
//!
//! The top-level [`read`] and [`write`] dispatch on the file extension.
//!
//! # Example
//!
//! ```rust,ignore
//! use grade_io::{read, write};
//!
//! let image = read("photo.jpg")?;
//! write("treated.png", &image)?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod jpeg;
pub mod png;

pub use error::{IoError, IoResult};

use grade_core::Raster;
use std::path::Path;
use tracing::debug;

/// Reads an image, dispatching on the file extension.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for extensions other than
/// `png`, `jpg` and `jpeg` (case-insensitive).
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    debug!(path = %path.display(), "read image");
    match extension_of(path)?.as_str() {
        "png" => png::read(path),
        "jpg" | "jpeg" => jpeg::read(path),
        other => Err(IoError::UnsupportedFormat(other.to_string())),
    }
}

/// Writes an image, dispatching on the file extension.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for extensions other than
/// `png`, `jpg` and `jpeg` (case-insensitive).
pub fn write<P: AsRef<Path>>(path: P, image: &Raster) -> IoResult<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), "write image");
    match extension_of(path)?.as_str() {
        "png" => png::write(path, image),
        "jpg" | "jpeg" => jpeg::write(path, image),
        other => Err(IoError::UnsupportedFormat(other.to_string())),
    }
}

fn extension_of(path: &Path) -> IoResult<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .ok_or_else(|| IoError::UnsupportedFormat("missing file extension".to_string()))
}
