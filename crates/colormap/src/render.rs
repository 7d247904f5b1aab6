//! Heat-grid-to-RGBA rendering using color schemes.

use heatstamp_core::{Error, HeatGrid, Result};

use crate::catalog::{default_scheme, scheme_by_name};
use crate::scheme::ColorScheme;

/// Parameters for rendering a heat grid.
#[derive(Debug, Clone, Copy)]
pub struct RenderParams<'a> {
    /// Color scheme to use.
    pub scheme: &'a ColorScheme,
    /// Heat at and above which cells get the hottest color. `None`
    /// normalizes by the grid maximum.
    pub saturation: Option<f32>,
}

impl<'a> RenderParams<'a> {
    /// Normalize by the grid maximum.
    pub fn new(scheme: &'a ColorScheme) -> Self {
        Self {
            scheme,
            saturation: None,
        }
    }

    /// Clamp heat at `saturation`.
    pub fn saturated(scheme: &'a ColorScheme, saturation: f32) -> Self {
        Self {
            scheme,
            saturation: Some(saturation),
        }
    }
}

impl RenderParams<'static> {
    /// Params for a predefined scheme identifier.
    pub fn by_name(name: &str, saturation: Option<f32>) -> Result<Self> {
        Ok(Self {
            scheme: scheme_by_name(name)?,
            saturation,
        })
    }
}

impl Default for RenderParams<'static> {
    fn default() -> Self {
        Self::new(default_scheme())
    }
}

/// Render with the default black-to-white scheme.
pub fn render_default(grid: &HeatGrid) -> Result<Vec<u8>> {
    render_with(grid, &RenderParams::default())
}

/// Render, normalizing every cell by the grid maximum.
pub fn render(grid: &HeatGrid, scheme: &ColorScheme) -> Result<Vec<u8>> {
    render_with(grid, &RenderParams::new(scheme))
}

/// Render, clamping heat at `saturation`.
///
/// Fails with `InvalidArgument` unless `saturation > 0`.
pub fn render_saturated(grid: &HeatGrid, scheme: &ColorScheme, saturation: f32) -> Result<Vec<u8>> {
    render_with(grid, &RenderParams::saturated(scheme, saturation))
}

/// Render into a freshly allocated buffer.
///
/// Returns `width * height * 4` bytes, row-major RGBA. A degenerate grid
/// renders to an empty buffer whatever the params.
pub fn render_with(grid: &HeatGrid, params: &RenderParams<'_>) -> Result<Vec<u8>> {
    if grid.is_degenerate() {
        return Ok(Vec::new());
    }
    check_saturation(params.saturation)?;

    let len = grid.len() * 4;
    let mut rgba = Vec::new();
    rgba.try_reserve_exact(len)
        .map_err(|_| Error::OutOfMemory { bytes: len })?;
    rgba.resize(len, 0);

    fill(grid, params, &mut rgba);
    Ok(rgba)
}

/// Render into a caller-provided buffer of exactly `width * height * 4` bytes.
pub fn render_into(grid: &HeatGrid, params: &RenderParams<'_>, out: &mut [u8]) -> Result<()> {
    if grid.is_degenerate() {
        return Ok(());
    }
    check_saturation(params.saturation)?;
    let expected = grid.len() * 4;
    if out.len() != expected {
        return Err(Error::SizeMismatch {
            expected,
            actual: out.len(),
        });
    }
    fill(grid, params, out);
    Ok(())
}

fn check_saturation(saturation: Option<f32>) -> Result<()> {
    match saturation {
        // NaN fails the comparison too
        Some(s) if !(s > 0.0) => Err(Error::invalid_argument(
            "saturation",
            s,
            "saturation must be greater than zero",
        )),
        _ => Ok(()),
    }
}

/// Normalization divisor, or `None` when every cell renders as `t = 0`.
///
/// A saturation above the grid maximum changes nothing, so saturated renders
/// divide by the smaller of the two.
fn divisor(grid_max: f32, saturation: Option<f32>) -> Option<f32> {
    if !(grid_max > 0.0) {
        return None;
    }
    Some(match saturation {
        Some(s) => s.min(grid_max),
        None => grid_max,
    })
}

fn fill(grid: &HeatGrid, params: &RenderParams<'_>, out: &mut [u8]) {
    let scheme = params.scheme;
    let Some(div) = divisor(grid.max(), params.saturation) else {
        let zero = scheme.evaluate(0.0).to_array();
        for px in out.chunks_exact_mut(4) {
            px.copy_from_slice(&zero);
        }
        return;
    };

    tracing::debug!(
        scheme = scheme.name(),
        width = grid.width(),
        height = grid.height(),
        divisor = div,
        "rendering heat grid"
    );

    for (px, v) in out.chunks_exact_mut(4).zip(grid.iter()) {
        let t = (v / div).clamp(0.0, 1.0);
        px.copy_from_slice(&scheme.evaluate(t).to_array());
    }
}
