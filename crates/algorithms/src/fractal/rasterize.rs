//! Normalization and grid rasterization
//!
//! Coordinates are min-max rescaled to the unit square per axis, mapped to
//! integer cells of an N x N grid, and thickened into a neighborhood so a
//! 1-pixel boundary stays 8-connected. A zero axis range is rejected as
//! degenerate instead of letting NaN reach the index computation.

use boxdim_core::raster::Neighborhood;
use boxdim_core::{Error, Raster, Result};
use geo_types::Coord;

/// Parameters for grid rasterization
#[derive(Debug, Clone)]
pub struct RasterizeParams {
    /// Grid resolution N (grid is N x N)
    pub resolution: usize,
    /// Thickening neighborhood applied around each plotted point
    pub neighborhood: Neighborhood,
}

impl Default for RasterizeParams {
    fn default() -> Self {
        Self {
            resolution: 2048,
            neighborhood: Neighborhood::Queen3x3,
        }
    }
}

/// Rescale each axis independently so min maps to 0.0 and max to 1.0.
///
/// Fails with [`Error::DegenerateAxis`] when an axis has zero range and with
/// [`Error::Algorithm`] when the bounds are not finite (NaN/inf input).
pub fn normalize(points: &[Coord<f64>]) -> Result<Vec<Coord<f64>>> {
    if points.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for p in points {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    if !(min_x.is_finite() && max_x.is_finite() && min_y.is_finite() && max_y.is_finite()) {
        return Err(Error::Algorithm(
            "Input contains non-finite coordinates".into(),
        ));
    }

    let range_x = max_x - min_x;
    let range_y = max_y - min_y;
    if range_x == 0.0 {
        return Err(Error::DegenerateAxis { axis: "x" });
    }
    if range_y == 0.0 {
        return Err(Error::DegenerateAxis { axis: "y" });
    }

    Ok(points
        .iter()
        .map(|p| Coord {
            x: (p.x - min_x) / range_x,
            y: (p.y - min_y) / range_y,
        })
        .collect())
}

/// Rasterize normalized points onto an N x N binary grid.
///
/// Each point maps to cell `(iy, ix)` with `ix = trunc(x * (N-1))` clamped to
/// `[0, N-1]` (y likewise, y is the row index), then every offset of
/// `params.neighborhood` is set to 1, with offsets clamped to the grid so
/// boundary points thicken only into the valid region.
///
/// Re-rasterizing the same points is a no-op: cells are a set union.
pub fn rasterize(points: &[Coord<f64>], params: &RasterizeParams) -> Result<Raster<u8>> {
    let n = params.resolution;
    if n == 0 {
        return Err(Error::InvalidParameter {
            name: "resolution",
            value: n.to_string(),
            reason: "grid resolution must be positive".into(),
        });
    }
    if points.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut grid: Raster<u8> = Raster::square(n);
    let scale = (n - 1) as f64;
    let max_index = (n - 1) as isize;
    let offsets = params.neighborhood.offsets();

    for p in points {
        let ix = ((p.x * scale) as isize).clamp(0, max_index);
        let iy = ((p.y * scale) as isize).clamp(0, max_index);

        for &(dr, dc) in &offsets {
            let row = (iy + dr).clamp(0, max_index) as usize;
            let col = (ix + dc).clamp(0, max_index) as usize;
            // In bounds by construction
            unsafe { grid.set_unchecked(row, col, 1) };
        }
    }

    Ok(grid)
}
