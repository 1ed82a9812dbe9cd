//! Log-log regression and dimension estimation
//!
//! Fits log(count) against log(box size) by ordinary least squares over the
//! accumulated-sums normal equations. The fractal dimension is the absolute
//! value of the fitted slope. Zero-count scales are dropped before taking
//! logarithms; fewer than two usable scales is an error, not a degraded fit.

use boxdim_core::{Error, Result};

use super::boxcount::BoxCountSample;

/// Slope and intercept of the log-log regression line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult {
    pub slope: f64,
    pub intercept: f64,
}

/// Outcome of the dimension estimation
#[derive(Debug, Clone)]
pub struct DimensionFit {
    /// (log(box size), log(count)) pairs that survived zero-count filtering
    pub log_points: Vec<(f64, f64)>,
    /// Fitted regression line
    pub fit: FitResult,
    /// Fractal dimension: |slope|
    pub dimension: f64,
}

/// Drop zero-count scales and take natural logarithms.
///
/// Fails with [`Error::InsufficientScales`] when fewer than 2 samples remain.
pub fn log_log_points(samples: &[BoxCountSample]) -> Result<Vec<(f64, f64)>> {
    let points: Vec<(f64, f64)> = samples
        .iter()
        .filter(|s| s.count > 0)
        .map(|s| ((s.size as f64).ln(), (s.count as f64).ln()))
        .collect();

    if points.len() < 2 {
        return Err(Error::InsufficientScales {
            available: points.len(),
        });
    }

    Ok(points)
}

/// Least-squares fit of a line y = slope * x + intercept.
///
/// Accumulates the normal-equation sums directly; a singular denominator
/// (all x identical) is rejected.
pub fn fit_line(points: &[(f64, f64)]) -> Result<FitResult> {
    let n = points.len() as f64;
    if points.len() < 2 {
        return Err(Error::InsufficientScales {
            available: points.len(),
        });
    }

    let mut sx = 0.0_f64;
    let mut sy = 0.0_f64;
    let mut sxx = 0.0_f64;
    let mut sxy = 0.0_f64;

    for &(x, y) in points {
        sx += x;
        sy += y;
        sxx += x * x;
        sxy += x * y;
    }

    let denom = n * sxx - sx * sx;
    if denom.abs() < 1e-14 {
        return Err(Error::Algorithm(
            "Least squares: singular system (identical box sizes?)".into(),
        ));
    }

    let slope = (n * sxy - sx * sy) / denom;
    let intercept = (sy - slope * sx) / n;

    Ok(FitResult { slope, intercept })
}

/// Estimate the fractal dimension from box-count samples.
///
/// Dimension = |slope| of the log-log fit.
pub fn estimate_dimension(samples: &[BoxCountSample]) -> Result<DimensionFit> {
    let log_points = log_log_points(samples)?;
    let fit = fit_line(&log_points)?;

    Ok(DimensionFit {
        dimension: fit.slope.abs(),
        log_points,
        fit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(pairs: &[(usize, usize)]) -> Vec<BoxCountSample> {
        pairs
            .iter()
            .map(|&(size, count)| BoxCountSample { size, count })
            .collect()
    }

    #[test]
    fn exact_inverse_law_gives_dimension_one() {
        // count = 1024 / k  =>  log(count) = log(1024) - log(k)
        let s = samples(&[(2, 512), (4, 256), (8, 128), (16, 64), (32, 32)]);
        let result = estimate_dimension(&s).unwrap();

        assert!((result.dimension - 1.0).abs() < 1e-12);
        assert!((result.fit.slope + 1.0).abs() < 1e-12);
        assert!((result.fit.intercept - 1024.0_f64.ln()).abs() < 1e-9);
    }

    #[test]
    fn inverse_square_law_gives_dimension_two() {
        // count = 4096 / k^2
        let s = samples(&[(2, 1024), (4, 256), (8, 64), (16, 16)]);
        let result = estimate_dimension(&s).unwrap();

        assert!((result.dimension - 2.0).abs() < 1e-12);
    }

    #[test]
    fn zero_count_scales_are_filtered() {
        let s = samples(&[(2, 512), (4, 256), (8, 128), (512, 0)]);
        let result = estimate_dimension(&s).unwrap();

        assert_eq!(result.log_points.len(), 3);
        assert!((result.dimension - 1.0).abs() < 1e-12);
    }

    #[test]
    fn too_few_nonzero_scales_fails() {
        let s = samples(&[(2, 100), (4, 0), (8, 0)]);
        match estimate_dimension(&s) {
            Err(Error::InsufficientScales { available }) => assert_eq!(available, 1),
            other => panic!("expected InsufficientScales, got {:?}", other),
        }

        let all_zero = samples(&[(2, 0), (4, 0)]);
        assert!(matches!(
            estimate_dimension(&all_zero),
            Err(Error::InsufficientScales { available: 0 })
        ));
    }

    #[test]
    fn identical_sizes_are_singular() {
        let s = samples(&[(4, 100), (4, 200)]);
        assert!(matches!(estimate_dimension(&s), Err(Error::Algorithm(_))));
    }

    #[test]
    fn fit_line_recovers_known_coefficients() {
        // y = 2.5x + 0.75, exact
        let points: Vec<(f64, f64)> = [0.0, 1.0, 2.0, 3.0]
            .iter()
            .map(|&x| (x, 2.5 * x + 0.75))
            .collect();
        let fit = fit_line(&points).unwrap();

        assert!((fit.slope - 2.5).abs() < 1e-12);
        assert!((fit.intercept - 0.75).abs() < 1e-12);
    }
}
