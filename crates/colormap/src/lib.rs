//! # heatstamp colormap
//!
//! Color schemes and heat-grid-to-RGBA rendering for heatstamp.
//!
//! Provides the predefined scheme catalog (`b2w`, `w2b` and the ColorBrewer
//! families in four interpolation modes) plus a multi-stop interpolation
//! engine. The main entry points are [`render`] and [`render_saturated`],
//! which turn a [`HeatGrid`](heatstamp_core::HeatGrid) into a row-major RGBA
//! pixel buffer.
//!
//! ## Usage
//!
//! ```ignore
//! use heatstamp_colormap::{render_saturated, scheme_by_name};
//!
//! let scheme = scheme_by_name("Spectral_mixed")?;
//! let rgba = render_saturated(&grid, scheme, 4.0)?;
//! ```

mod catalog;
mod render;
mod scheme;

pub use catalog::{default_scheme, scheme_by_name, scheme_names, schemes, DEFAULT_SCHEME};
pub use render::{render, render_default, render_into, render_saturated, render_with, RenderParams};
pub use scheme::{ColorScheme, ColorStop, InterpolationMode, Rgba, EXP_GAIN, MIXED_FADE};
