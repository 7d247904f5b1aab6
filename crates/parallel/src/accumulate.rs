//! Chunked parallel accumulation into a heat grid

use heatstamp_core::{CancelSignal, Error, HeatGrid, Result, Stamp};
use rayon::prelude::*;

/// Default number of points handed to a worker at a time.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Splits a point list into chunks, accumulates every chunk into a
/// worker-local grid and merges the partial grids into the target.
///
/// Floating-point sums are formed in a different order than the sequential
/// bulk operations, so results agree within tolerance rather than bit for bit.
#[derive(Debug, Clone, Copy)]
pub struct ParallelAccumulator {
    chunk_size: usize,
}

impl Default for ParallelAccumulator {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl ParallelAccumulator {
    pub fn new(chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::invalid_argument(
                "chunk_size",
                chunk_size,
                "chunk size must be at least 1",
            ));
        }
        Ok(Self { chunk_size })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Parallel [`HeatGrid::add_points`].
    pub fn accumulate_points<C>(&self, grid: &mut HeatGrid, points: &[(i32, i32)], cancel: &C) -> Result<()>
    where
        C: CancelSignal + Sync + ?Sized,
    {
        self.accumulate_weighted_points_with_stamp(grid, points, 1.0, &Stamp::unit(), cancel)
    }

    /// Parallel [`HeatGrid::add_points_with_stamp`].
    pub fn accumulate_points_with_stamp<C>(
        &self,
        grid: &mut HeatGrid,
        points: &[(i32, i32)],
        stamp: &Stamp,
        cancel: &C,
    ) -> Result<()>
    where
        C: CancelSignal + Sync + ?Sized,
    {
        self.accumulate_weighted_points_with_stamp(grid, points, 1.0, stamp, cancel)
    }

    /// Parallel [`HeatGrid::add_weighted_points_with_stamp`].
    ///
    /// Every worker polls `cancel` before each point. Work finished before a
    /// stop is merged into `grid`, then `Cancelled { completed }` reports the
    /// total number of points applied across all workers. On any other error
    /// `grid` is left untouched.
    pub fn accumulate_weighted_points_with_stamp<C>(
        &self,
        grid: &mut HeatGrid,
        points: &[(i32, i32)],
        weight: f32,
        stamp: &Stamp,
        cancel: &C,
    ) -> Result<()>
    where
        C: CancelSignal + Sync + ?Sized,
    {
        if grid.is_degenerate() {
            return Ok(());
        }
        // A single chunk gains nothing from a worker-local grid
        if points.len() <= self.chunk_size {
            return grid.add_weighted_points_with_stamp(points, weight, stamp, cancel);
        }

        let (width, height) = grid.shape();
        tracing::debug!(
            points = points.len(),
            chunk_size = self.chunk_size,
            width,
            height,
            "parallel accumulation"
        );

        let partial = points
            .par_chunks(self.chunk_size)
            .try_fold(Partial::default, |mut acc, chunk| -> Result<Partial> {
                let local = acc.grid_mut(width, height)?;
                match local.add_weighted_points_with_stamp(chunk, weight, stamp, cancel) {
                    Ok(()) => acc.completed += chunk.len(),
                    Err(Error::Cancelled { completed }) => {
                        acc.completed += completed;
                        acc.cancelled = true;
                    }
                    Err(e) => return Err(e),
                }
                Ok(acc)
            })
            .try_reduce(Partial::default, Partial::combine)?;

        if let Some(local) = &partial.grid {
            grid.merge(local)?;
        }
        if partial.cancelled {
            tracing::debug!(completed = partial.completed, total = points.len(), "parallel accumulation cancelled");
            return Err(Error::Cancelled {
                completed: partial.completed,
            });
        }
        Ok(())
    }
}

/// One worker's share of the result. The grid is allocated on first use.
#[derive(Default)]
struct Partial {
    grid: Option<HeatGrid>,
    completed: usize,
    cancelled: bool,
}

impl Partial {
    fn grid_mut(&mut self, width: usize, height: usize) -> Result<&mut HeatGrid> {
        let grid = match self.grid.take() {
            Some(grid) => grid,
            None => HeatGrid::try_new(width, height)?,
        };
        Ok(self.grid.insert(grid))
    }

    fn combine(self, other: Partial) -> Result<Partial> {
        let grid = match (self.grid, other.grid) {
            (Some(mut a), Some(b)) => {
                a.merge(&b)?;
                Some(a)
            }
            (a, b) => a.or(b),
        };
        Ok(Partial {
            grid,
            completed: self.completed + other.completed,
            cancelled: self.cancelled || other.cancelled,
        })
    }
}
