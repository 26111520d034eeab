//! Raster resampling and fit-to-box math.
//!
//! The pipeline only ever scales uniformly: down to a preview bound
//! (via [`fit_dimensions`]) or up by an exact 2x/4x factor for print
//! exports. Bilinear interpolation matches the quality of a canvas
//! `drawImage` scale; nearest is kept for pixel-exact debugging.
//!
//! # Example
//!
//! ```rust
//! use grade_core::Raster;
//! use grade_ops::resize::{resize, Filter};
//!
//! let src = Raster::filled(64, 64, [0.5, 0.5, 0.5, 1.0]);
//! let dst = resize(&src, 128, 128, Filter::Bilinear).unwrap();
//! assert_eq!(dst.dimensions(), (128, 128));
//! ```

use crate::{OpsError, OpsResult};
use grade_core::Raster;
use rayon::prelude::*;
use tracing::trace;

/// Resampling filter for resize operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Nearest-neighbor (fastest, blocky).
    Nearest,
    /// Bilinear interpolation (smooth).
    #[default]
    Bilinear,
}

/// Calculates aspect-preserving dimensions bounded by `max_dim`.
///
/// The scale factor is `min(max_dim/width, max_dim/height, 1)` - the image
/// is never upscaled. Results are rounded and at least 1.
///
/// # Example
///
/// ```rust
/// use grade_ops::resize::fit_dimensions;
///
/// assert_eq!(fit_dimensions(1920, 1080, 640), (640, 360));
/// assert_eq!(fit_dimensions(320, 240, 640), (320, 240)); // already fits
/// ```
pub fn fit_dimensions(width: u32, height: u32, max_dim: u32) -> (u32, u32) {
    let scale = (max_dim as f32 / width as f32)
        .min(max_dim as f32 / height as f32)
        .min(1.0);
    let w = ((width as f32 * scale).round() as u32).max(1);
    let h = ((height as f32 * scale).round() as u32).max(1);
    (w, h)
}

/// Resizes a raster to exactly `dst_w` x `dst_h`.
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimensions`] if either target dimension is 0
/// or the source is empty.
pub fn resize(src: &Raster, dst_w: u32, dst_h: u32, filter: Filter) -> OpsResult<Raster> {
    if dst_w == 0 || dst_h == 0 {
        return Err(OpsError::InvalidDimensions(
            "destination size must be > 0".into(),
        ));
    }
    if src.is_empty() {
        return Err(OpsError::InvalidDimensions("source image is empty".into()));
    }
    trace!(
        src_w = src.width(),
        src_h = src.height(),
        dst_w,
        dst_h,
        ?filter,
        "resize"
    );

    let (src_w, src_h) = src.dimensions();
    if (src_w, src_h) == (dst_w, dst_h) {
        return Ok(src.clone());
    }

    let scale_x = src_w as f32 / dst_w as f32;
    let scale_y = src_h as f32 / dst_h as f32;

    let src_data = src.data();
    let row_len = dst_w as usize * 4;
    let mut dst_data = vec![0.0f32; dst_h as usize * row_len];

    dst_data
        .par_chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            let sy = (y as f32 + 0.5) * scale_y - 0.5;
            for x in 0..dst_w as usize {
                let sx = (x as f32 + 0.5) * scale_x - 0.5;
                let px = match filter {
                    Filter::Nearest => sample_nearest(src_data, src_w, src_h, sx, sy),
                    Filter::Bilinear => sample_bilinear(src_data, src_w, src_h, sx, sy),
                };
                row[x * 4..x * 4 + 4].copy_from_slice(&px);
            }
        });

    Raster::from_data(dst_w, dst_h, dst_data)
        .map_err(|e| OpsError::InvalidDimensions(e.to_string()))
}

#[inline]
fn fetch(data: &[f32], width: u32, x: u32, y: u32) -> [f32; 4] {
    let o = (y as usize * width as usize + x as usize) * 4;
    [data[o], data[o + 1], data[o + 2], data[o + 3]]
}

#[inline]
fn sample_nearest(data: &[f32], w: u32, h: u32, sx: f32, sy: f32) -> [f32; 4] {
    let x = (sx.round().max(0.0) as u32).min(w - 1);
    let y = (sy.round().max(0.0) as u32).min(h - 1);
    fetch(data, w, x, y)
}

#[inline]
fn sample_bilinear(data: &[f32], w: u32, h: u32, sx: f32, sy: f32) -> [f32; 4] {
    let x0f = sx.floor();
    let y0f = sy.floor();
    let tx = sx - x0f;
    let ty = sy - y0f;

    let x0 = (x0f.max(0.0) as u32).min(w - 1);
    let y0 = (y0f.max(0.0) as u32).min(h - 1);
    let x1 = (x0 + 1).min(w - 1);
    let y1 = (y0 + 1).min(h - 1);

    let p00 = fetch(data, w, x0, y0);
    let p10 = fetch(data, w, x1, y0);
    let p01 = fetch(data, w, x0, y1);
    let p11 = fetch(data, w, x1, y1);

    let mut out = [0.0f32; 4];
    for c in 0..4 {
        let top = p00[c] + (p10[c] - p00[c]) * tx;
        let bottom = p01[c] + (p11[c] - p01[c]) * tx;
        out[c] = top + (bottom - top) * ty;
    }
    out
}
