//! Treatment preset selection.
//!
//! Maps a [`ColorAnalysis`] to a [`TreatmentPreset`]: one of three base
//! recipes keyed by warmth, plus two independent corrective adjustments for
//! already-desaturated and flat (low-contrast) sources. Pure and total -
//! equal analyses always select equal presets.
//!
//! The multipliers are deliberately gentle. Saturation never exceeds
//! [`MAX_SATURATION`] and contrast never exceeds [`MAX_CONTRAST`] no matter
//! how the corrections compound, so a photograph is never visibly distorted.

use crate::analysis::{ColorAnalysis, Warmth};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Upper bound for the saturation multiplier.
pub const MAX_SATURATION: f32 = 0.98;

/// Upper bound for the contrast multiplier.
pub const MAX_CONTRAST: f32 = 1.12;

/// Average saturation below which a source counts as already desaturated.
pub const LOW_SATURATION: f32 = 0.25;

/// Contrast ratio below which a source counts as flat.
pub const LOW_CONTRAST: f32 = 0.4;

/// A named bundle of color multipliers applied uniformly to an image.
///
/// Derived deterministically from a [`ColorAnalysis`]; immutable once built.
/// The `rationale` explains the choice to the person exporting the asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentPreset {
    /// Saturation multiplier, at most [`MAX_SATURATION`].
    pub saturation: f32,
    /// Contrast multiplier, at most [`MAX_CONTRAST`].
    pub contrast: f32,
    /// Brightness multiplier.
    pub brightness: f32,
    /// Short human-readable name of the recipe.
    pub label: String,
    /// Why this recipe was chosen, one or more sentences.
    pub rationale: String,
}

/// Selects the treatment preset for an analyzed image.
///
/// # Example
///
/// ```rust
/// use grade_look::analysis::ColorAnalysis;
/// use grade_look::preset::select;
///
/// let preset = select(&ColorAnalysis::neutral());
/// assert!(preset.saturation <= 0.98);
/// assert!(preset.contrast <= 1.12);
/// ```
pub fn select(analysis: &ColorAnalysis) -> TreatmentPreset {
    let hue = analysis.avg_hue.round();

    let mut preset = match analysis.warmth {
        Warmth::Warm => TreatmentPreset {
            saturation: 0.90,
            contrast: 1.06,
            brightness: 0.98,
            label: "Sunlit".to_string(),
            rationale: format!(
                "Average hue {hue}\u{b0} reads warm; easing saturation and \
                 lifting contrast for a clean editorial feel."
            ),
        },
        Warmth::Cool => TreatmentPreset {
            saturation: 0.92,
            contrast: 1.08,
            brightness: 0.99,
            label: "Coastal".to_string(),
            rationale: format!(
                "Average hue {hue}\u{b0} reads cool; preserving the cool cast \
                 with a gentle contrast lift."
            ),
        },
        Warmth::Neutral => TreatmentPreset {
            saturation: 0.88,
            contrast: 1.04,
            brightness: 0.98,
            label: "Studio".to_string(),
            rationale: format!(
                "Average hue {hue}\u{b0} is close to neutral; applying the \
                 standard house treatment."
            ),
        },
    };

    if analysis.avg_saturation < LOW_SATURATION {
        preset.saturation = (preset.saturation + 0.05).min(MAX_SATURATION);
        preset
            .rationale
            .push_str(" Source is already desaturated, so the saturation pull is relaxed.");
    }

    if analysis.contrast_ratio < LOW_CONTRAST {
        preset.contrast = (preset.contrast + 0.04).min(MAX_CONTRAST);
        preset
            .rationale
            .push_str(" Flat tonal range detected, so contrast gets an extra push.");
    }

    debug!(
        label = %preset.label,
        saturation = preset.saturation,
        contrast = preset.contrast,
        brightness = preset.brightness,
        "selected treatment preset"
    );

    preset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Tone, Warmth};

    fn analysis(warmth: Warmth, hue: f32, sat: f32, contrast: f32) -> ColorAnalysis {
        ColorAnalysis {
            avg_hue: hue,
            avg_saturation: sat,
            avg_lightness: 0.5,
            warmth,
            contrast_ratio: contrast,
            dominant_tone: Tone::RedOrange,
        }
    }

    #[test]
    fn test_warm_base_recipe() {
        let p = select(&analysis(Warmth::Warm, 24.0, 0.58, 0.5));
        assert_eq!(p.saturation, 0.90);
        assert_eq!(p.contrast, 1.06);
        assert_eq!(p.brightness, 0.98);
        assert!(p.rationale.contains("24"));
    }

    #[test]
    fn test_selection_is_deterministic() {
        let a = analysis(Warmth::Cool, 210.0, 0.4, 0.6);
        assert_eq!(select(&a), select(&a));
    }

    #[test]
    fn test_low_saturation_correction() {
        let p = select(&analysis(Warmth::Neutral, 100.0, 0.1, 0.5));
        assert!((p.saturation - 0.93).abs() < 1e-6); // 0.88 + 0.05
        assert!(p.rationale.contains("desaturated"));
    }

    #[test]
    fn test_low_contrast_correction() {
        let p = select(&analysis(Warmth::Warm, 24.0, 0.58, 0.0));
        assert!((p.contrast - 1.10).abs() < 1e-6); // 1.06 + 0.04
        assert!(p.rationale.contains("contrast"));
    }

    #[test]
    fn test_corrections_never_exceed_caps() {
        for warmth in [Warmth::Warm, Warmth::Neutral, Warmth::Cool] {
            let p = select(&analysis(warmth, 10.0, 0.0, 0.0));
            assert!(p.saturation <= MAX_SATURATION);
            assert!(p.contrast <= MAX_CONTRAST);
            assert!(p.brightness >= 0.98 && p.brightness <= 0.99);
        }
    }

    #[test]
    fn test_both_corrections_compound() {
        let p = select(&analysis(Warmth::Cool, 200.0, 0.1, 0.1));
        assert!((p.saturation - 0.97).abs() < 1e-6); // 0.92 + 0.05
        assert!((p.contrast - 1.12).abs() < 1e-6); // 1.08 + 0.04
        assert!(p.rationale.contains("desaturated"));
        assert!(p.rationale.contains("Flat tonal range"));
    }

    #[test]
    fn test_multipliers_stay_in_documented_ranges() {
        for warmth in [Warmth::Warm, Warmth::Neutral, Warmth::Cool] {
            for sat in [0.0, 0.3, 0.9] {
                for cr in [0.0, 0.5, 1.0] {
                    let p = select(&analysis(warmth, 45.0, sat, cr));
                    assert!(p.saturation >= 0.85 && p.saturation <= MAX_SATURATION);
                    assert!(p.contrast >= 1.0 && p.contrast <= MAX_CONTRAST);
                }
            }
        }
    }
}
