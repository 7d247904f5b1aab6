//! # heatstamp core
//!
//! Point-density accumulation for heatmaps.
//!
//! This crate provides:
//! - `Stamp`: an immutable 2D weight kernel (radial, custom falloff, or raw data)
//! - `HeatGrid`: a float accumulator with a running maximum
//! - `CancelSignal`: cooperative cancellation for bulk point insertion
//! - the shared `Error` type used across the workspace

pub mod cancel;
pub mod error;
pub mod raster;

pub use cancel::{CancelSignal, CancelToken, Deadline, NeverCancel};
pub use error::{Error, Result};
pub use raster::{HeatGrid, Stamp, DEGENERATE_MAX, STAMP_TOLERANCE};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cancel::{CancelSignal, CancelToken, Deadline, NeverCancel};
    pub use crate::error::{Error, Result};
    pub use crate::raster::{HeatGrid, Stamp};
}
