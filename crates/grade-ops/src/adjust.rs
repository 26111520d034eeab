//! Uniform color adjustment: saturate, contrast, brightness.
//!
//! Implements the compound filter `saturate(S) contrast(C) brightness(B)`
//! applied by the treatment compositor. Each stage matches the standard
//! CSS/SVG filter definition:
//!
//! - saturate: lerp from the Rec.709 luma gray axis toward the pixel by `S`
//! - contrast: `(v - 0.5) * C + 0.5`
//! - brightness: `v * B`
//!
//! The stages run in that order per pixel and the result is clamped to
//! [0, 1]. Alpha is untouched.

use grade_core::{clamp01, luminance, Raster};
use grade_look::TreatmentPreset;
use tracing::trace;

/// Parameters for a uniform color adjustment.
///
/// All three multipliers at 1.0 is the identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorAdjust {
    /// Saturation multiplier (1.0 = no change, 0.0 = grayscale).
    pub saturation: f32,
    /// Contrast multiplier (1.0 = no change).
    pub contrast: f32,
    /// Brightness multiplier (1.0 = no change).
    pub brightness: f32,
}

impl ColorAdjust {
    /// Creates the identity adjustment (no change).
    pub fn identity() -> Self {
        Self {
            saturation: 1.0,
            contrast: 1.0,
            brightness: 1.0,
        }
    }

    /// Returns `true` if applying this adjustment is a no-op.
    pub fn is_identity(&self) -> bool {
        self.saturation == 1.0 && self.contrast == 1.0 && self.brightness == 1.0
    }

    /// Applies the adjustment to one RGB pixel.
    ///
    /// # Example
    ///
    /// ```rust
    /// use grade_ops::adjust::ColorAdjust;
    ///
    /// let adj = ColorAdjust { saturation: 0.0, contrast: 1.0, brightness: 1.0 };
    /// let out = adj.apply([1.0, 0.0, 0.0]);
    /// // Fully desaturated red collapses to its luma.
    /// assert!((out[0] - out[1]).abs() < 1e-6);
    /// assert!((out[1] - out[2]).abs() < 1e-6);
    /// ```
    #[inline]
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        let gray = luminance(rgb);
        let mut out = [0.0f32; 3];
        for c in 0..3 {
            let mut v = gray + (rgb[c] - gray) * self.saturation;
            v = (v - 0.5) * self.contrast + 0.5;
            v *= self.brightness;
            out[c] = clamp01(v);
        }
        out
    }
}

impl From<&TreatmentPreset> for ColorAdjust {
    fn from(preset: &TreatmentPreset) -> Self {
        Self {
            saturation: preset.saturation,
            contrast: preset.contrast,
            brightness: preset.brightness,
        }
    }
}

/// Applies a [`ColorAdjust`] to every pixel of a raster in place.
pub fn apply_adjust(image: &mut Raster, adj: &ColorAdjust) {
    trace!(
        saturation = adj.saturation,
        contrast = adj.contrast,
        brightness = adj.brightness,
        "apply color adjust"
    );
    if adj.is_identity() {
        return;
    }
    image.map_pixels(|px| {
        let rgb = adj.apply([px[0], px[1], px[2]]);
        [rgb[0], rgb[1], rgb[2], px[3]]
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_leaves_pixels_alone() {
        let mut img = Raster::filled(4, 4, [0.3, 0.6, 0.9, 1.0]);
        let before = img.clone();
        apply_adjust(&mut img, &ColorAdjust::identity());
        assert_eq!(img, before);
    }

    #[test]
    fn test_brightness_scales() {
        let adj = ColorAdjust {
            saturation: 1.0,
            contrast: 1.0,
            brightness: 0.5,
        };
        let out = adj.apply([0.8, 0.4, 0.2]);
        assert_relative_eq!(out[0], 0.4, epsilon = 1e-6);
        assert_relative_eq!(out[1], 0.2, epsilon = 1e-6);
        assert_relative_eq!(out[2], 0.1, epsilon = 1e-6);
    }

    #[test]
    fn test_contrast_pivots_at_mid_gray() {
        let adj = ColorAdjust {
            saturation: 1.0,
            contrast: 1.12,
            brightness: 1.0,
        };
        let mid = adj.apply([0.5, 0.5, 0.5]);
        assert_relative_eq!(mid[0], 0.5, epsilon = 1e-6);

        let dark = adj.apply([0.25, 0.25, 0.25]);
        assert!(dark[0] < 0.25);
        let light = adj.apply([0.75, 0.75, 0.75]);
        assert!(light[0] > 0.75);
    }

    #[test]
    fn test_saturation_preserves_luma_gray() {
        let adj = ColorAdjust {
            saturation: 0.9,
            contrast: 1.0,
            brightness: 1.0,
        };
        let out = adj.apply([0.5, 0.5, 0.5]);
        assert_relative_eq!(out[0], 0.5, epsilon = 1e-6);
        assert_relative_eq!(out[1], 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_output_clamped() {
        let adj = ColorAdjust {
            saturation: 1.0,
            contrast: 4.0,
            brightness: 2.0,
        };
        for &rgb in &[[0.0f32, 0.0, 0.0], [1.0, 1.0, 1.0], [0.9, 0.1, 0.5]] {
            let out = adj.apply(rgb);
            for v in out {
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_alpha_untouched() {
        let mut img = Raster::filled(2, 2, [0.8, 0.4, 0.2, 0.5]);
        let adj = ColorAdjust {
            saturation: 0.9,
            contrast: 1.1,
            brightness: 0.98,
        };
        apply_adjust(&mut img, &adj);
        assert_eq!(img.pixel(0, 0)[3], 0.5);
    }

    #[test]
    fn test_from_preset() {
        use grade_look::analysis::ColorAnalysis;
        let preset = grade_look::select(&ColorAnalysis::neutral());
        let adj = ColorAdjust::from(&preset);
        assert_eq!(adj.saturation, preset.saturation);
        assert_eq!(adj.contrast, preset.contrast);
        assert_eq!(adj.brightness, preset.brightness);
    }
}
