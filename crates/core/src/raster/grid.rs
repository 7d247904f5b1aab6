//! The heat grid accumulator

use ndarray::{Array2, ArrayView2};

use crate::cancel::CancelSignal;
use crate::error::{Error, Result};
use crate::raster::alloc_zeroed;
use crate::raster::stamp::{almost_eq_slice, bits_eq_slice, Stamp};

/// Value reported by [`HeatGrid::max`] for a degenerate grid.
pub const DEGENERATE_MAX: f32 = -1.0;

/// A fixed-size float accumulator with a running maximum.
///
/// Cells are stored row-major as `(y, x)`. Points are splatted with a
/// [`Stamp`] centered on `(x, y)`; stamp cells falling outside the grid are
/// clipped. The running maximum always equals the largest cell and is the
/// normalization divisor used when rendering.
///
/// A grid whose storage could not be allocated is *degenerate*: every
/// mutation is a no-op, [`HeatGrid::max`] returns [`DEGENERATE_MAX`] and
/// renders come back empty.
///
/// # Example
///
/// ```ignore
/// use heatstamp_core::{HeatGrid, NeverCancel, Stamp};
///
/// let stamp = Stamp::generate_radial(8)?;
/// let mut grid = HeatGrid::try_new(256, 256)?;
/// grid.add_point_with_stamp(128, 128, &stamp);
/// grid.add_points_with_stamp(&[(10, 10), (12, 11)], &stamp, &NeverCancel)?;
/// assert_eq!(grid.max(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct HeatGrid {
    /// `None` when allocation failed
    data: Option<Array2<f32>>,
    /// Largest cell value
    max: f32,
}

impl HeatGrid {
    /// Allocate a zeroed `width x height` grid.
    pub fn try_new(width: usize, height: usize) -> Result<Self> {
        let len = width.checked_mul(height).ok_or(Error::OutOfMemory { bytes: usize::MAX })?;
        let buf = alloc_zeroed(len)?;
        let data = Array2::from_shape_vec((height, width), buf).map_err(|e| {
            Error::invalid_argument("shape", format!("{width}x{height}"), e.to_string())
        })?;
        Ok(Self {
            data: Some(data),
            max: 0.0,
        })
    }

    /// Allocate a zeroed grid, falling back to a degenerate grid when the
    /// allocation fails.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Ok(grid) => grid,
            Err(e) => {
                tracing::warn!(width, height, error = %e, "heat grid allocation failed, grid is degenerate");
                Self::degenerate()
            }
        }
    }

    /// A grid without storage.
    pub fn degenerate() -> Self {
        Self {
            data: None,
            max: DEGENERATE_MAX,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.data.is_none()
    }

    // Dimensions

    /// Number of columns (0 when degenerate)
    pub fn width(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.ncols())
    }

    /// Number of rows (0 when degenerate)
    pub fn height(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.nrows())
    }

    /// Dimensions as (width, height)
    pub fn shape(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Data access

    /// The running maximum, or [`DEGENERATE_MAX`] for a degenerate grid.
    pub fn max(&self) -> f32 {
        if self.is_degenerate() {
            DEGENERATE_MAX
        } else {
            self.max
        }
    }

    /// Cell value at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        self.data.as_ref()?.get((y, x)).copied()
    }

    /// View of the cells, indexed `(y, x)`
    pub fn cells(&self) -> Option<ArrayView2<'_, f32>> {
        self.data.as_ref().map(|d| d.view())
    }

    /// Iterate over cells in row-major order (nothing for a degenerate grid).
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.data.iter().flat_map(|d| d.iter().copied())
    }

    // Accumulation

    /// Add one observation at `(x, y)` with the implicit unit stamp.
    pub fn add_point(&mut self, x: i32, y: i32) {
        let Some(data) = self.data.as_mut() else {
            return;
        };
        if x < 0 || y < 0 {
            return;
        }
        if let Some(cell) = data.get_mut((y as usize, x as usize)) {
            *cell += 1.0;
            if *cell > self.max {
                self.max = *cell;
            }
        }
    }

    /// Splat `stamp` centered on `(x, y)`.
    pub fn add_point_with_stamp(&mut self, x: i32, y: i32, stamp: &Stamp) {
        self.splat(x, y, stamp, 1.0);
    }

    /// Splat `stamp` centered on `(x, y)`, every weight scaled by `weight`.
    pub fn add_weighted_point_with_stamp(&mut self, x: i32, y: i32, weight: f32, stamp: &Stamp) {
        self.splat(x, y, stamp, weight);
    }

    /// [`HeatGrid::add_point`] for every entry, in order.
    pub fn add_points<C>(&mut self, points: &[(i32, i32)], cancel: &C) -> Result<()>
    where
        C: CancelSignal + ?Sized,
    {
        self.add_each(points, cancel, |grid, x, y| grid.add_point(x, y))
    }

    /// [`HeatGrid::add_point_with_stamp`] for every entry, in order.
    pub fn add_points_with_stamp<C>(
        &mut self,
        points: &[(i32, i32)],
        stamp: &Stamp,
        cancel: &C,
    ) -> Result<()>
    where
        C: CancelSignal + ?Sized,
    {
        self.add_each(points, cancel, |grid, x, y| grid.splat(x, y, stamp, 1.0))
    }

    /// [`HeatGrid::add_weighted_point_with_stamp`] for every entry, in order.
    pub fn add_weighted_points_with_stamp<C>(
        &mut self,
        points: &[(i32, i32)],
        weight: f32,
        stamp: &Stamp,
        cancel: &C,
    ) -> Result<()>
    where
        C: CancelSignal + ?Sized,
    {
        self.add_each(points, cancel, |grid, x, y| grid.splat(x, y, stamp, weight))
    }

    /// Add every cell of an equally sized grid into this one.
    ///
    /// Merging into or from a degenerate grid does nothing.
    pub fn merge(&mut self, other: &HeatGrid) -> Result<()> {
        let (Some(data), Some(theirs)) = (self.data.as_mut(), other.data.as_ref()) else {
            return Ok(());
        };
        if data.dim() != theirs.dim() {
            return Err(Error::SizeMismatch {
                expected: data.len(),
                actual: theirs.len(),
            });
        }
        *data += theirs;
        self.max = max_of(data);
        Ok(())
    }

    /// Zero every cell and the running maximum.
    pub fn clear(&mut self) {
        if let Some(data) = self.data.as_mut() {
            data.fill(0.0);
            self.max = 0.0;
        }
    }

    // Comparison

    /// Same shape and every cell within [`crate::STAMP_TOLERANCE`].
    pub fn almost_eq(&self, other: &HeatGrid) -> bool {
        match (self.data.as_ref(), other.data.as_ref()) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                a.dim() == b.dim()
                    && match (a.as_slice(), b.as_slice()) {
                        (Some(a), Some(b)) => almost_eq_slice(a, b),
                        _ => false,
                    }
            }
            _ => false,
        }
    }

    /// Whether the grid holds exactly the weights of `stamp`.
    ///
    /// Fixture comparison: same width, height and cell bits.
    pub fn eq_stamp(&self, stamp: &Stamp) -> bool {
        let Some(data) = self.data.as_ref() else {
            return false;
        };
        data.ncols() == stamp.width()
            && data.nrows() == stamp.height()
            && data
                .as_slice()
                .is_some_and(|cells| bits_eq_slice(cells, stamp.weights()))
    }

    // Internals

    fn add_each<C, F>(&mut self, points: &[(i32, i32)], cancel: &C, mut add: F) -> Result<()>
    where
        C: CancelSignal + ?Sized,
        F: FnMut(&mut Self, i32, i32),
    {
        if self.is_degenerate() {
            return Ok(());
        }
        for (completed, &(x, y)) in points.iter().enumerate() {
            if cancel.is_cancelled() {
                tracing::debug!(completed, total = points.len(), "bulk insertion cancelled");
                return Err(Error::Cancelled { completed });
            }
            add(self, x, y);
        }
        Ok(())
    }

    fn splat(&mut self, x: i32, y: i32, stamp: &Stamp, weight: f32) {
        let Some(data) = self.data.as_mut() else {
            return;
        };
        let (rows, cols) = data.dim();
        let (sw, sh) = stamp.shape();

        // Grid position of the stamp's top-left cell
        let x0 = x as i64 - (sw / 2) as i64;
        let y0 = y as i64 - (sh / 2) as i64;

        let sx_lo = (-x0).clamp(0, sw as i64) as usize;
        let sx_hi = (cols as i64 - x0).clamp(0, sw as i64) as usize;
        let sy_lo = (-y0).clamp(0, sh as i64) as usize;
        let sy_hi = (rows as i64 - y0).clamp(0, sh as i64) as usize;
        if sx_lo >= sx_hi || sy_lo >= sy_hi {
            return;
        }

        let weights = stamp.weights();
        let mut max = self.max;
        let mut lowered = false;
        for sy in sy_lo..sy_hi {
            let gy = (y0 + sy as i64) as usize;
            let stamp_row = &weights[sy * sw..(sy + 1) * sw];
            let mut grid_row = data.row_mut(gy);
            for sx in sx_lo..sx_hi {
                let gx = (x0 + sx as i64) as usize;
                let contribution = stamp_row[sx] * weight;
                let cell = &mut grid_row[gx];
                *cell += contribution;
                if *cell > max {
                    max = *cell;
                }
                if contribution < 0.0 {
                    lowered = true;
                }
            }
        }

        self.max = if lowered { max_of(data) } else { max };
    }
}

/// Bit-exact comparison; two degenerate grids are equal.
impl PartialEq for HeatGrid {
    fn eq(&self, other: &Self) -> bool {
        match (self.data.as_ref(), other.data.as_ref()) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                a.dim() == b.dim()
                    && match (a.as_slice(), b.as_slice()) {
                        (Some(a), Some(b)) => bits_eq_slice(a, b),
                        _ => false,
                    }
            }
            _ => false,
        }
    }
}

fn max_of(data: &Array2<f32>) -> f32 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().copied().fold(f32::NEG_INFINITY, f32::max)
}
