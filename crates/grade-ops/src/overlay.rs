//! Decorative overlays: radial washes, linear gradient, vignette.
//!
//! These are the fixed brand decorations composited onto every treated
//! image. Each overlay is defined in fractional canvas coordinates so the
//! same recipe works at preview and export resolutions.

use crate::blend::{blend_pixel, BlendMode};
use grade_core::Raster;
use tracing::trace;

/// A soft radial color splash.
///
/// Coverage falls off linearly from full at the center to zero at the
/// radius. Positions are fractions of the canvas; the radius is a fraction
/// of the larger canvas dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialWash {
    /// Center as (x, y) fractions of the canvas, each in [0, 1].
    pub center: (f32, f32),
    /// Radius as a fraction of max(width, height).
    pub radius: f32,
    /// Wash color (RGB, [0, 1]).
    pub color: [f32; 3],
    /// Peak opacity at the center.
    pub opacity: f32,
}

/// A vertical two-color gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    /// Color at the top row.
    pub top: [f32; 3],
    /// Color at the bottom row.
    pub bottom: [f32; 3],
    /// Uniform opacity.
    pub opacity: f32,
}

/// A radial vignette multiplied over the image.
///
/// Inside `inner` the mask is pure white (no effect); between `inner` and
/// `outer` it fades to `edge`. Both radii are fractions of the canvas
/// width, measured from the canvas center. With an `edge` close to white
/// the darkening stays below the threshold of casual notice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vignette {
    /// Inner radius as a fraction of width; no darkening inside.
    pub inner: f32,
    /// Outer radius as a fraction of width; full `edge` color beyond.
    pub outer: f32,
    /// Mask color at and beyond the outer radius.
    pub edge: [f32; 3],
}

#[inline]
fn lerp3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// Composites a radial wash onto the image with the given blend mode.
pub fn apply_radial_wash(image: &mut Raster, wash: &RadialWash, mode: BlendMode) {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 {
        return;
    }
    trace!(
        cx = wash.center.0,
        cy = wash.center.1,
        radius = wash.radius,
        opacity = wash.opacity,
        "apply radial wash"
    );

    let cx = wash.center.0 * (w - 1).max(1) as f32;
    let cy = wash.center.1 * (h - 1).max(1) as f32;
    let radius = wash.radius * w.max(h) as f32;
    if radius <= 0.0 {
        return;
    }

    for y in 0..h {
        for x in 0..w {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist >= radius {
                continue;
            }
            let falloff = 1.0 - dist / radius;
            let bg = image.pixel(x, y);
            let out = blend_pixel(mode, wash.color, bg, wash.opacity * falloff);
            image.set_pixel(x, y, out);
        }
    }
}

/// Composites a vertical gradient onto the image with the given blend mode.
pub fn apply_linear_gradient(image: &mut Raster, grad: &LinearGradient, mode: BlendMode) {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 {
        return;
    }
    trace!(opacity = grad.opacity, "apply linear gradient");

    let denom = (h - 1).max(1) as f32;
    for y in 0..h {
        let t = y as f32 / denom;
        let color = lerp3(grad.top, grad.bottom, t);
        for x in 0..w {
            let bg = image.pixel(x, y);
            let out = blend_pixel(mode, color, bg, grad.opacity);
            image.set_pixel(x, y, out);
        }
    }
}

/// Multiplies a radial vignette over the image at full opacity.
pub fn apply_vignette(image: &mut Raster, vignette: &Vignette) {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 {
        return;
    }
    trace!(inner = vignette.inner, outer = vignette.outer, "apply vignette");

    let cx = (w - 1).max(1) as f32 * 0.5;
    let cy = (h - 1).max(1) as f32 * 0.5;
    let inner = vignette.inner * w as f32;
    let outer = vignette.outer * w as f32;
    let span = (outer - inner).max(1e-6);

    for y in 0..h {
        for x in 0..w {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            let t = ((dist - inner) / span).clamp(0.0, 1.0);
            if t <= 0.0 {
                continue;
            }
            let mask = lerp3([1.0, 1.0, 1.0], vignette.edge, t);
            let bg = image.pixel(x, y);
            let out = blend_pixel(BlendMode::Multiply, mask, bg, 1.0);
            image.set_pixel(x, y, out);
        }
    }
}
