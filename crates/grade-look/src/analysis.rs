//! Image sampler: aggregate color statistics over a raster.
//!
//! The sampler walks every [`SAMPLE_STRIDE`]-th pixel, converts it to HSL
//! and accumulates running sums plus a lightness min/max. The result is a
//! [`ColorAnalysis`]: the only input the preset selector needs.
//!
//! Sampling is an approximation by design - photographs are locally
//! correlated, so every 8th pixel characterizes the palette well enough for
//! a three-way warmth call. Achromatic pixels contribute hue 0 and
//! saturation 0 to the averages; this is accepted rather than corrected.

use grade_core::{rgb_to_hsl, Raster};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Default pixel sampling stride: every 8th pixel is inspected.
pub const SAMPLE_STRIDE: usize = 8;

/// Below this average saturation an image is considered achromatic and
/// classified [`Warmth::Neutral`] regardless of its (meaningless) hue.
pub const ACHROMATIC_SATURATION: f32 = 0.05;

/// Coarse three-way classification of an image's average hue.
///
/// Used to pick the base treatment recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Warmth {
    /// Average hue in [0, 70] or [300, 360).
    Warm,
    /// Everything that is neither warm nor cool.
    Neutral,
    /// Average hue in [170, 270].
    Cool,
}

/// Dominant tone bucket of the average hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    /// Average hue in [0, 30) or [330, 360).
    RedOrange,
    /// Average hue in [30, 70).
    YellowEarth,
    /// Average hue in [70, 160).
    Green,
    /// Average hue in [160, 250).
    BlueCyan,
    /// Average hue in [250, 330).
    PurpleMagenta,
}

impl Tone {
    /// Human-readable label shown in the analysis summary.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::RedOrange => "Red/Orange",
            Tone::YellowEarth => "Yellow/Earth",
            Tone::Green => "Green",
            Tone::BlueCyan => "Blue/Cyan",
            Tone::PurpleMagenta => "Purple/Magenta",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregate color statistics for one source image.
///
/// Computed once per image and discarded after preset selection; nothing
/// here is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorAnalysis {
    /// Average hue in degrees, [0, 360).
    pub avg_hue: f32,
    /// Average saturation, [0, 1].
    pub avg_saturation: f32,
    /// Average lightness, [0, 1].
    pub avg_lightness: f32,
    /// Warmth category derived from the average hue.
    pub warmth: Warmth,
    /// Max sampled lightness minus min sampled lightness, [0, 1].
    pub contrast_ratio: f32,
    /// Dominant tone bucket of the average hue.
    pub dominant_tone: Tone,
}

impl ColorAnalysis {
    /// The neutral analysis returned for images with no sampled pixels.
    ///
    /// All statistics are zero and the warmth is [`Warmth::Neutral`], so the
    /// selector never sees a NaN.
    pub fn neutral() -> Self {
        Self {
            avg_hue: 0.0,
            avg_saturation: 0.0,
            avg_lightness: 0.0,
            warmth: Warmth::Neutral,
            contrast_ratio: 0.0,
            dominant_tone: Tone::RedOrange,
        }
    }
}

/// Classifies an average hue into a warmth category.
///
/// The boundaries intentionally overlap the tone buckets at the edges
/// (e.g. 65 degrees is warm but already "Yellow/Earth", 75 degrees is
/// neutral yet "Green"); the thresholds are kept verbatim rather than
/// harmonized. Callers must handle the achromatic case first - a gray
/// image collapses to hue 0, which this table would wrongly call warm.
fn classify_warmth(hue: f32) -> Warmth {
    if hue <= 70.0 || hue >= 300.0 {
        Warmth::Warm
    } else if (170.0..=270.0).contains(&hue) {
        Warmth::Cool
    } else {
        Warmth::Neutral
    }
}

/// Buckets an average hue into a dominant tone.
fn dominant_tone(hue: f32) -> Tone {
    if hue < 30.0 || hue >= 330.0 {
        Tone::RedOrange
    } else if hue < 70.0 {
        Tone::YellowEarth
    } else if hue < 160.0 {
        Tone::Green
    } else if hue < 250.0 {
        Tone::BlueCyan
    } else {
        Tone::PurpleMagenta
    }
}

/// Analyzes a raster with the default [`SAMPLE_STRIDE`].
pub fn analyze(image: &Raster) -> ColorAnalysis {
    analyze_with_stride(image, SAMPLE_STRIDE)
}

/// Analyzes a raster, inspecting every `stride`-th pixel.
///
/// A `stride` of 0 is treated as 1. An empty image yields
/// [`ColorAnalysis::neutral`].
///
/// # Example
///
/// ```rust
/// use grade_core::Raster;
/// use grade_look::analysis::{analyze_with_stride, Warmth};
///
/// let img = Raster::filled(16, 16, [0.5, 0.5, 0.5, 1.0]);
/// let a = analyze_with_stride(&img, 4);
/// assert_eq!(a.warmth, Warmth::Neutral);
/// assert!(a.avg_saturation < 1e-6);
/// ```
pub fn analyze_with_stride(image: &Raster, stride: usize) -> ColorAnalysis {
    let stride = stride.max(1);
    let data = image.data();
    let pixel_count = image.pixel_count();

    let mut hue_sum = 0.0f64;
    let mut sat_sum = 0.0f64;
    let mut light_sum = 0.0f64;
    let mut min_light = f32::MAX;
    let mut max_light = f32::MIN;
    let mut samples = 0usize;

    for i in (0..pixel_count).step_by(stride) {
        let o = i * 4;
        let hsl = rgb_to_hsl([data[o], data[o + 1], data[o + 2]]);
        hue_sum += hsl.h as f64;
        sat_sum += hsl.s as f64;
        light_sum += hsl.l as f64;
        min_light = min_light.min(hsl.l);
        max_light = max_light.max(hsl.l);
        samples += 1;
    }

    if samples == 0 {
        return ColorAnalysis::neutral();
    }

    let avg_hue = (hue_sum / samples as f64) as f32;
    let avg_saturation = (sat_sum / samples as f64) as f32;
    let avg_lightness = (light_sum / samples as f64) as f32;
    let contrast_ratio = max_light - min_light;

    let warmth = if avg_saturation < ACHROMATIC_SATURATION {
        Warmth::Neutral
    } else {
        classify_warmth(avg_hue)
    };

    trace!(
        samples,
        avg_hue,
        avg_saturation,
        avg_lightness,
        contrast_ratio,
        "sampled image"
    );

    ColorAnalysis {
        avg_hue,
        avg_saturation,
        avg_lightness,
        warmth,
        contrast_ratio,
        dominant_tone: dominant_tone(avg_hue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn filled(rgb: [f32; 3]) -> Raster {
        Raster::filled(100, 100, [rgb[0], rgb[1], rgb[2], 1.0])
    }

    #[test]
    fn test_mid_gray_is_neutral() {
        let a = analyze(&filled([0.5, 0.5, 0.5]));
        assert!(a.avg_saturation < 1e-6);
        assert!(a.contrast_ratio < 1e-6);
        assert_eq!(a.warmth, Warmth::Neutral);
        assert_relative_eq!(a.avg_hue, 0.0);
    }

    #[test]
    fn test_pure_red_is_warm_red_orange() {
        let a = analyze(&filled([1.0, 0.0, 0.0]));
        assert_eq!(a.warmth, Warmth::Warm);
        assert_eq!(a.dominant_tone, Tone::RedOrange);
    }

    #[test]
    fn test_pure_cyan_is_cool_blue_cyan() {
        let a = analyze(&filled([0.0, 1.0, 1.0]));
        assert_eq!(a.warmth, Warmth::Cool);
        assert_eq!(a.dominant_tone, Tone::BlueCyan);
        assert_relative_eq!(a.avg_hue, 180.0, epsilon = 1e-3);
    }

    #[test]
    fn test_statistics_stay_in_range() {
        let mut img = Raster::new(32, 32);
        for y in 0..32 {
            for x in 0..32 {
                let t = (x + y * 32) as f32 / 1024.0;
                img.set_pixel(x, y, [t, 1.0 - t, t * 0.5, 1.0]);
            }
        }
        let a = analyze_with_stride(&img, 3);
        assert!((0.0..360.0).contains(&a.avg_hue));
        assert!((0.0..=1.0).contains(&a.avg_saturation));
        assert!((0.0..=1.0).contains(&a.avg_lightness));
        assert!((0.0..=1.0).contains(&a.contrast_ratio));
    }

    #[test]
    fn test_empty_image_is_neutral() {
        let a = analyze(&Raster::new(0, 0));
        assert_eq!(a, ColorAnalysis::neutral());
        assert_eq!(a.warmth, Warmth::Neutral);
        assert!(!a.avg_hue.is_nan());
    }

    #[test]
    fn test_warmth_boundaries() {
        assert_eq!(classify_warmth(0.0), Warmth::Warm);
        assert_eq!(classify_warmth(70.0), Warmth::Warm);
        assert_eq!(classify_warmth(300.0), Warmth::Warm);
        assert_eq!(classify_warmth(359.9), Warmth::Warm);
        assert_eq!(classify_warmth(170.0), Warmth::Cool);
        assert_eq!(classify_warmth(270.0), Warmth::Cool);
        // The gap rows: 75 is neutral even though the tone table calls it Green.
        assert_eq!(classify_warmth(75.0), Warmth::Neutral);
        assert_eq!(classify_warmth(290.0), Warmth::Neutral);
    }

    #[test]
    fn test_tone_boundaries() {
        assert_eq!(dominant_tone(0.0), Tone::RedOrange);
        assert_eq!(dominant_tone(29.9), Tone::RedOrange);
        assert_eq!(dominant_tone(330.0), Tone::RedOrange);
        assert_eq!(dominant_tone(30.0), Tone::YellowEarth);
        assert_eq!(dominant_tone(69.9), Tone::YellowEarth);
        assert_eq!(dominant_tone(70.0), Tone::Green);
        assert_eq!(dominant_tone(160.0), Tone::BlueCyan);
        assert_eq!(dominant_tone(249.9), Tone::BlueCyan);
        assert_eq!(dominant_tone(250.0), Tone::PurpleMagenta);
        assert_eq!(dominant_tone(329.9), Tone::PurpleMagenta);
    }

    #[test]
    fn test_stride_zero_is_clamped() {
        let img = filled([0.2, 0.4, 0.6]);
        let a = analyze_with_stride(&img, 0);
        let b = analyze_with_stride(&img, 1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_tone_labels() {
        assert_eq!(Tone::RedOrange.label(), "Red/Orange");
        assert_eq!(Tone::PurpleMagenta.to_string(), "Purple/Magenta");
    }
}
