//! The treatment compositor.
//!
//! Ties the pipeline together: optional downscale, preset color adjust,
//! then the fixed brand decorations (two green radial washes, a cool
//! vertical gradient, a subtle vignette). A separate export path renders at
//! full resolution, upscales by an exact 2x/4x factor and sharpens.
//!
//! Every call allocates and returns a fresh [`Raster`]; the source is never
//! written to, so concurrent invocations are safe by construction.
//!
//! # Example
//!
//! ```rust
//! use grade_core::Raster;
//! use grade_look::{analyze, select};
//! use grade_ops::treatment::{render_treated, render_upscaled, UpscaleFactor};
//!
//! let src = Raster::filled(40, 30, [0.7, 0.4, 0.2, 1.0]);
//! let preset = select(&analyze(&src));
//!
//! let preview = render_treated(&src, &preset, Some(20)).unwrap();
//! assert_eq!(preview.dimensions(), (20, 15));
//!
//! let print = render_upscaled(&src, &preset, UpscaleFactor::Two).unwrap();
//! assert_eq!(print.dimensions(), (80, 60));
//! ```

use crate::adjust::{apply_adjust, ColorAdjust};
use crate::blend::BlendMode;
use crate::overlay::{
    apply_linear_gradient, apply_radial_wash, apply_vignette, LinearGradient, RadialWash, Vignette,
};
use crate::resize::{fit_dimensions, resize, Filter};
use crate::sharpen::unsharp_mask;
use crate::{OpsError, OpsResult};
use grade_core::Raster;
use grade_look::TreatmentPreset;
use tracing::debug;

/// Brand green used by both radial washes.
pub const BRAND_GREEN: [f32; 3] = [0.184, 0.620, 0.431];

/// Primary wash: upper-left splash at 12% peak opacity.
pub const WASH_PRIMARY: RadialWash = RadialWash {
    center: (0.22, 0.18),
    radius: 0.65,
    color: BRAND_GREEN,
    opacity: 0.12,
};

/// Secondary wash: lower-right splash at 10% peak opacity.
pub const WASH_SECONDARY: RadialWash = RadialWash {
    center: (0.78, 0.82),
    radius: 0.55,
    color: BRAND_GREEN,
    opacity: 0.10,
};

/// Cool top-to-bottom gradient, screened at 4% opacity.
pub const COOL_GRADIENT: LinearGradient = LinearGradient {
    top: [0.110, 0.227, 0.290],
    bottom: [0.161, 0.380, 0.420],
    opacity: 0.04,
};

/// The house vignette: white inside 0.45x width, fading to a barely-darker
/// edge at 0.85x width so edges are not visibly darkened.
pub const VIGNETTE: Vignette = Vignette {
    inner: 0.45,
    outer: 0.85,
    edge: [0.941, 0.941, 0.941],
};

/// Linear upscale factor for print exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpscaleFactor {
    /// Double linear dimensions.
    Two,
    /// Quadruple linear dimensions.
    Four,
}

impl UpscaleFactor {
    /// The linear dimension multiplier.
    #[inline]
    pub fn linear(&self) -> u32 {
        match self {
            UpscaleFactor::Two => 2,
            UpscaleFactor::Four => 4,
        }
    }

    /// Unsharp-mask amount paired with this factor.
    ///
    /// Larger upscales soften more, so 4x sharpens harder than 2x.
    #[inline]
    pub fn sharpen_amount(&self) -> f32 {
        match self {
            UpscaleFactor::Two => 0.8,
            UpscaleFactor::Four => 1.2,
        }
    }
}

/// Renders the treated image.
///
/// Steps, in order: optional aspect-preserving downscale so neither
/// dimension exceeds `max_dim` (never upscales), the preset's
/// saturate/contrast/brightness adjust, the two brand washes (soft-light),
/// the cool gradient (screen) and the vignette (multiply).
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] for `max_dim == Some(0)` and
/// [`OpsError::InvalidDimensions`] for an empty source.
pub fn render_treated(
    src: &Raster,
    preset: &TreatmentPreset,
    max_dim: Option<u32>,
) -> OpsResult<Raster> {
    if src.is_empty() {
        return Err(OpsError::InvalidDimensions("source image is empty".into()));
    }
    if max_dim == Some(0) {
        return Err(OpsError::InvalidParameter("max_dim must be > 0".into()));
    }

    let (w, h) = src.dimensions();
    let (out_w, out_h) = match max_dim {
        Some(bound) => fit_dimensions(w, h, bound),
        None => (w, h),
    };
    debug!(
        label = %preset.label,
        src_w = w,
        src_h = h,
        out_w,
        out_h,
        "render treated image"
    );

    let mut out = if (out_w, out_h) == (w, h) {
        src.clone()
    } else {
        resize(src, out_w, out_h, Filter::Bilinear)?
    };

    apply_adjust(&mut out, &ColorAdjust::from(preset));
    apply_radial_wash(&mut out, &WASH_PRIMARY, BlendMode::SoftLight);
    apply_radial_wash(&mut out, &WASH_SECONDARY, BlendMode::SoftLight);
    apply_linear_gradient(&mut out, &COOL_GRADIENT, BlendMode::Screen);
    apply_vignette(&mut out, &VIGNETTE);

    Ok(out)
}

/// Renders the 2x/4x print export.
///
/// The treatment runs at full (untransformed) resolution first, then the
/// result is upscaled bilinearly to exactly `factor` times the source
/// dimensions and sharpened with the factor's unsharp amount.
pub fn render_upscaled(
    src: &Raster,
    preset: &TreatmentPreset,
    factor: UpscaleFactor,
) -> OpsResult<Raster> {
    let treated = render_treated(src, preset, None)?;
    let (w, h) = treated.dimensions();
    let scale = factor.linear();
    debug!(scale, "render upscaled export");

    let upscaled = resize(&treated, w * scale, h * scale, Filter::Bilinear)?;
    Ok(unsharp_mask(&upscaled, factor.sharpen_amount()))
}
