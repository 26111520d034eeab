//! CLI command implementations

pub mod analyze;
pub mod export;
pub mod treat;

use anyhow::{Context, Result};
use grade_core::Raster;
use std::path::Path;

/// Load image from path
pub fn load_image(path: &Path) -> Result<Raster> {
    grade_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &Raster) -> Result<()> {
    grade_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}
