//! Multi-scale box counting
//!
//! Tiles the grid with non-overlapping k x k boxes anchored at (0, 0) and
//! counts boxes containing at least one filled cell. Trailing boxes keep
//! whatever cells remain when k does not divide the grid side; they are
//! counted, not skipped. Scales are independent, so counting runs in
//! parallel when the `parallel` feature is enabled.

use crate::maybe_rayon::*;
use boxdim_core::Raster;

/// Box count observed at one scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxCountSample {
    /// Box edge length k in cells
    pub size: usize,
    /// Number of boxes containing at least one filled cell
    pub count: usize,
}

/// Power-of-two scale set for a grid of side `n`: k = 2^i for i = 1..=floor(log2(n/4))
pub fn box_sizes(n: usize) -> Vec<usize> {
    let mut sizes = Vec::new();
    let mut k = 2usize;
    while k <= n / 4 {
        sizes.push(k);
        k *= 2;
    }
    sizes
}

/// Count boxes of edge length `k` containing at least one filled cell.
///
/// Returns 0 for `k == 0`; otherwise the count lies in `[0, ceil(n/k)^2]`.
pub fn box_count(grid: &Raster<u8>, k: usize) -> usize {
    if k == 0 {
        return 0;
    }

    let (rows, cols) = grid.shape();
    let mut count = 0usize;

    let mut r0 = 0;
    while r0 < rows {
        let r1 = (r0 + k).min(rows);
        let mut c0 = 0;
        while c0 < cols {
            let c1 = (c0 + k).min(cols);

            'scan: for row in r0..r1 {
                for col in c0..c1 {
                    // In bounds: row < rows, col < cols
                    if unsafe { grid.get_unchecked(row, col) } != 0 {
                        count += 1;
                        break 'scan;
                    }
                }
            }

            c0 += k;
        }
        r0 += k;
    }

    count
}

/// Count boxes at every scale, one [`BoxCountSample`] per scale in input order
pub fn box_counts(grid: &Raster<u8>, sizes: &[usize]) -> Vec<BoxCountSample> {
    sizes
        .to_vec()
        .into_par_iter()
        .map(|size| BoxCountSample {
            size,
            count: box_count(grid, size),
        })
        .collect()
}
