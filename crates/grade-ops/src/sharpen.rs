//! Unsharp mask for upscaled exports.
//!
//! Upscaling softens edges, so the export path pushes each pixel away from
//! a 3x3 weighted-average blur of its neighborhood:
//!
//! ```text
//! out = clamp(orig + amount * (orig - blurred))
//! ```
//!
//! Blur weights are corners 1, edge-midpoints 2, center 4, normalized by
//! 16. The 1-pixel border and the alpha channel are copied through
//! unchanged.

use grade_core::{clamp01, Raster};
use rayon::prelude::*;
use tracing::trace;

/// 3x3 blur weights, row-major, normalized by [`KERNEL_NORM`].
const KERNEL: [f32; 9] = [1.0, 2.0, 1.0, 2.0, 4.0, 2.0, 1.0, 2.0, 1.0];
const KERNEL_NORM: f32 = 16.0;

/// Applies an unsharp mask and returns a new raster.
///
/// `amount` scales how far each pixel is pushed away from its blurred
/// neighborhood; the export path uses 0.8 for 2x and 1.2 for 4x. Output
/// components are always clamped to [0, 1].
///
/// Images smaller than 3x3 have no interior and are returned unchanged.
///
/// # Example
///
/// ```rust
/// use grade_core::Raster;
/// use grade_ops::sharpen::unsharp_mask;
///
/// let src = Raster::filled(16, 16, [0.5, 0.5, 0.5, 1.0]);
/// let out = unsharp_mask(&src, 0.8);
/// // A constant image equals its own blur, so sharpening is a no-op.
/// assert_eq!(out, src);
/// ```
pub fn unsharp_mask(src: &Raster, amount: f32) -> Raster {
    let (w, h) = src.dimensions();
    trace!(w, h, amount, "unsharp mask");
    if w < 3 || h < 3 {
        return src.clone();
    }

    let mut out = src.clone();
    let src_data = src.data();
    let row_len = w as usize * 4;

    // Interior rows only; row 0 and row h-1 keep their source values.
    out.data_mut()[row_len..(h as usize - 1) * row_len]
        .par_chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(i, row)| {
            let y = i + 1;
            for x in 1..(w as usize - 1) {
                for c in 0..3 {
                    let mut blurred = 0.0f32;
                    for ky in 0..3 {
                        for kx in 0..3 {
                            let o = ((y + ky - 1) * w as usize + (x + kx - 1)) * 4 + c;
                            blurred += src_data[o] * KERNEL[ky * 3 + kx];
                        }
                    }
                    blurred /= KERNEL_NORM;
                    let orig = src_data[(y * w as usize + x) * 4 + c];
                    row[x * 4 + c] = clamp01(orig + amount * (orig - blurred));
                }
            }
        });

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_image_unchanged() {
        let src = Raster::filled(8, 8, [0.25, 0.5, 0.75, 1.0]);
        let out = unsharp_mask(&src, 1.2);
        assert_eq!(out, src);
    }

    #[test]
    fn test_border_copied_through() {
        let mut src = Raster::filled(5, 5, [0.5, 0.5, 0.5, 1.0]);
        src.set_pixel(2, 2, [1.0, 1.0, 1.0, 1.0]);
        let out = unsharp_mask(&src, 0.8);
        for x in 0..5 {
            assert_eq!(out.pixel(x, 0), src.pixel(x, 0));
            assert_eq!(out.pixel(x, 4), src.pixel(x, 4));
        }
        for y in 0..5 {
            assert_eq!(out.pixel(0, y), src.pixel(0, y));
            assert_eq!(out.pixel(4, y), src.pixel(4, y));
        }
    }

    #[test]
    fn test_edge_contrast_increases() {
        // Vertical edge: dark left, bright right.
        let mut src = Raster::new(8, 8);
        for y in 0..8 {
            for x in 0..8 {
                let v = if x < 4 { 0.3 } else { 0.7 };
                src.set_pixel(x, y, [v, v, v, 1.0]);
            }
        }
        let out = unsharp_mask(&src, 0.8);
        // Pixels adjacent to the edge overshoot past their source values.
        assert!(out.pixel(3, 4)[0] < 0.3);
        assert!(out.pixel(4, 4)[0] > 0.7);
    }

    #[test]
    fn test_output_always_clamped() {
        let mut src = Raster::new(9, 9);
        for y in 0..9 {
            for x in 0..9 {
                let v = if (x + y) % 2 == 0 { 0.0 } else { 1.0 };
                src.set_pixel(x, y, [v, v, v, 1.0]);
            }
        }
        // Extreme amount to force overshoot in both directions.
        let out = unsharp_mask(&src, 10.0);
        for &v in out.data() {
            assert!((0.0..=1.0).contains(&v), "component {v} escaped [0,1]");
        }
    }

    #[test]
    fn test_alpha_untouched() {
        let mut src = Raster::filled(6, 6, [0.5, 0.5, 0.5, 0.4]);
        src.set_pixel(3, 3, [0.9, 0.1, 0.5, 0.4]);
        let out = unsharp_mask(&src, 1.2);
        for y in 0..6 {
            for x in 0..6 {
                assert_eq!(out.pixel(x, y)[3], 0.4);
            }
        }
    }

    #[test]
    fn test_tiny_image_returned_unchanged() {
        let src = Raster::filled(2, 2, [0.1, 0.2, 0.3, 1.0]);
        let out = unsharp_mask(&src, 0.8);
        assert_eq!(out, src);
    }
}
