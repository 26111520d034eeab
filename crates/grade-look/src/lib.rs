//! # grade-look
//!
//! Color analysis and treatment selection for brand photo grading.
//!
//! This crate decides *what* treatment a photograph should receive. It is
//! split into two pure stages:
//!
//! - [`analysis`] - scan a stride-sampled subset of pixels and reduce them
//!   to a [`ColorAnalysis`] (average hue/saturation/lightness, contrast
//!   ratio, warmth category, dominant tone)
//! - [`preset`] - map a [`ColorAnalysis`] to a [`TreatmentPreset`]
//!   (saturation/contrast/brightness multipliers plus a human-readable
//!   rationale) via fixed thresholds
//!
//! Applying the preset to pixels is the job of `grade-ops`.
//!
//! # Example
//!
//! ```rust
//! use grade_core::Raster;
//! use grade_look::{analyze, select};
//!
//! let img = Raster::filled(64, 64, [0.8, 0.3, 0.2, 1.0]);
//! let analysis = analyze(&img);
//! let preset = select(&analysis);
//! assert!(preset.saturation <= 0.98);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod analysis;
pub mod preset;

pub use analysis::{analyze, analyze_with_stride, ColorAnalysis, Tone, Warmth, SAMPLE_STRIDE};
pub use preset::{select, TreatmentPreset, MAX_CONTRAST, MAX_SATURATION};
