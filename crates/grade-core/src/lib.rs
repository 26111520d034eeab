//! # grade-core
//!
//! Core types for the brandgrade photo treatment pipeline.
//!
//! This crate provides the foundational types used throughout the workspace:
//!
//! - [`Raster`] - Owned RGBA image buffer (f32 components in [0, 1])
//! - [`Hsl`] - Hue/saturation/lightness triple with [`rgb_to_hsl`]
//! - [`luminance`] - Rec.709 luminance of an RGB pixel
//! - [`Error`] - Unified error type for buffer and I/O failures
//!
//! ## Design Philosophy
//!
//! The treatment pipeline is a pure function from an in-memory raster to a
//! freshly allocated raster. All operations in the workspace read and write
//! [`Raster`] values; decoding and encoding live in `grade-io`, so nothing
//! here touches the filesystem.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of the workspace and has no internal
//! dependencies. All other brandgrade crates depend on `grade-core`:
//!
//! ```text
//! grade-core (this crate)
//!    ^
//!    |
//!    +-- grade-look (sampler, preset selector)
//!    +-- grade-ops (adjust, blend, overlays, resize, sharpen)
//!    +-- grade-io (PNG/JPEG codecs)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod hsl;
pub mod pixel;
pub mod raster;

pub use error::{Error, Result};
pub use hsl::{rgb_to_hsl, Hsl};
pub use pixel::{clamp01, luminance, REC709_LUMA_B, REC709_LUMA_G, REC709_LUMA_R};
pub use raster::Raster;
