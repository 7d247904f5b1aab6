//! Stamps: precomputed 2D weight kernels splatted onto a heat grid

use std::fmt;

use crate::error::{Error, Result};
use crate::raster::alloc_zeroed;

/// Absolute per-cell tolerance used by [`Stamp::almost_eq`].
pub const STAMP_TOLERANCE: f32 = 1e-6;

/// An immutable 2D contribution kernel.
///
/// Weights are stored row-major, `width * height` of them. Radial stamps are
/// centered: the middle cell carries the peak weight. A stamp holds data only,
/// so it can be shared read-only across any number of grids and threads.
///
/// # Example
///
/// ```ignore
/// use heatstamp_core::Stamp;
///
/// let stamp = Stamp::generate_radial(4)?;
/// assert_eq!(stamp.width(), 9);
/// assert_eq!(stamp.get(4, 4), Some(1.0));
/// ```
#[derive(Debug, Clone)]
pub struct Stamp {
    width: usize,
    height: usize,
    weights: Vec<f32>,
}

impl Stamp {
    /// The implicit single-cell stamp of weight 1.
    pub fn unit() -> Self {
        Self {
            width: 1,
            height: 1,
            weights: vec![1.0],
        }
    }

    /// Radial stamp with linear falloff.
    ///
    /// The stamp is `(2r+1) x (2r+1)`. With `t = distance / (r + 1)` the
    /// weight is `1 - t` for cells at most `r` away from the center, 0 beyond.
    pub fn generate_radial(radius: u32) -> Result<Self> {
        Self::generate(radius, true, |t| 1.0 - t)
    }

    /// Stamp with a caller-supplied falloff.
    ///
    /// `falloff` receives the normalized distance `t = distance / (r + 1)`
    /// and is evaluated once for every cell of the `(2r+1) x (2r+1)` square,
    /// corners included; negative results are clamped to 0. The function is
    /// only borrowed for this call.
    pub fn generate_nonlinear<F>(radius: u32, falloff: F) -> Result<Self>
    where
        F: Fn(f32) -> f32,
    {
        Self::generate(radius, false, falloff)
    }

    /// Fill the square; with `clip` set, cells farther than `radius` stay 0.
    fn generate<F>(radius: u32, clip: bool, falloff: F) -> Result<Self>
    where
        F: Fn(f32) -> f32,
    {
        if radius == 0 {
            return Err(Error::invalid_argument(
                "radius",
                radius,
                "stamp radius must be at least 1",
            ));
        }

        let r = radius as i64;
        let side = (2 * r + 1) as usize;
        let len = side.checked_mul(side).ok_or(Error::OutOfMemory { bytes: usize::MAX })?;
        let mut weights = alloc_zeroed(len)?;

        let r_sq = r * r;
        let scale = 1.0 / (radius as f32 + 1.0);
        for (i, w) in weights.iter_mut().enumerate() {
            let dy = (i / side) as i64 - r;
            let dx = (i % side) as i64 - r;
            let dist_sq = dx * dx + dy * dy;
            if clip && dist_sq > r_sq {
                continue;
            }
            let t = (dist_sq as f32).sqrt() * scale;
            *w = falloff(t).max(0.0);
        }

        tracing::debug!(radius, side, clip, "generated stamp");
        Ok(Self {
            width: side,
            height: side,
            weights,
        })
    }

    /// Build a stamp from raw row-major weights.
    pub fn load(width: usize, height: usize, data: &[f32]) -> Result<Self> {
        let expected = width.checked_mul(height).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            weights: data.to_vec(),
        })
    }

    /// Like [`Stamp::load`], taking ownership of the buffer.
    pub fn from_vec(width: usize, height: usize, data: Vec<f32>) -> Result<Self> {
        if width.checked_mul(height) != Some(data.len()) {
            return Err(Error::SizeMismatch {
                expected: width.saturating_mul(height),
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            weights: data,
        })
    }

    // Dimensions

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Dimensions as (width, height)
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    // Data access

    /// Row-major weights
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Weight at column `sx`, row `sy`
    pub fn get(&self, sx: usize, sy: usize) -> Option<f32> {
        if sx >= self.width || sy >= self.height {
            return None;
        }
        Some(self.weights[sy * self.width + sx])
    }

    /// Largest weight in the stamp (0 for an empty stamp).
    pub fn peak(&self) -> f32 {
        self.weights.iter().copied().fold(0.0, f32::max)
    }

    /// Whether any weight is negative; such stamps can lower grid cells.
    pub(crate) fn has_negative(&self) -> bool {
        self.weights.iter().any(|&w| w < 0.0)
    }

    // Comparison

    /// Same shape and every weight within [`STAMP_TOLERANCE`].
    pub fn almost_eq(&self, other: &Stamp) -> bool {
        self.width == other.width
            && self.height == other.height
            && almost_eq_slice(&self.weights, &other.weights)
    }
}

/// Bit-exact comparison: same shape and identical weight bits.
impl PartialEq for Stamp {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && bits_eq_slice(&self.weights, &other.weights)
    }
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.weights.chunks(self.width.max(1)) {
            let mut first = true;
            for w in row {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{w:.6}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub(crate) fn bits_eq_slice(a: &[f32], b: &[f32]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
}

pub(crate) fn almost_eq_slice(a: &[f32], b: &[f32]) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(x, y)| (x - y).abs() <= STAMP_TOLERANCE)
}
