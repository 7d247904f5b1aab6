//! # heatstamp parallel
//!
//! Parallel point accumulation for heat grids.
//!
//! A [`HeatGrid`](heatstamp_core::HeatGrid) has a single writer. This crate
//! gives every Rayon worker its own grid for a slice of the points and merges
//! the partial grids into the target afterwards.

mod accumulate;

pub use accumulate::{ParallelAccumulator, DEFAULT_CHUNK_SIZE};
