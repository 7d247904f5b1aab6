//! Stamps and the heat grid they accumulate into

mod grid;
mod stamp;

pub use grid::{HeatGrid, DEGENERATE_MAX};
pub use stamp::{Stamp, STAMP_TOLERANCE};

use crate::error::{Error, Result};

/// Allocate a zero-filled buffer, reporting allocation failure instead of aborting.
pub(crate) fn alloc_zeroed(len: usize) -> Result<Vec<f32>> {
    let bytes = len.saturating_mul(std::mem::size_of::<f32>());
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| Error::OutOfMemory { bytes })?;
    buf.resize(len, 0.0);
    Ok(buf)
}
