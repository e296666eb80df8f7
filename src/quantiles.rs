//! The fixed quantile grid shared by both hub submission formats.

use crate::interp::interp;

/// Quantile levels required by the hubs: 0.05 steps through the body of the
/// distribution, finer resolution in the tails.
pub const QUANTILE_LEVELS: [f64; 23] = [
    0.01, 0.025, 0.05, 0.1, 0.15, 0.2, 0.25, 0.3, 0.35, 0.4, 0.45, 0.5, 0.55, 0.6, 0.65, 0.7,
    0.75, 0.8, 0.85, 0.9, 0.95, 0.975, 0.99,
];

/// Reads the value at each of [`QUANTILE_LEVELS`] off a sampled CDF.
///
/// `cdf` carries the cumulative probability at each `actual`-scale anchor;
/// the interpolation runs with the CDF as the x-axis, so levels outside the
/// observed CDF range clamp to the boundary anchors.
pub fn extract_quantiles(cdf: &[f64], actual: &[f64]) -> Vec<f64> {
    interp(&QUANTILE_LEVELS, cdf, actual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Scaling;
    use crate::scaling::{internal_grid, to_actual_scale};
    use approx::assert_relative_eq;

    #[test]
    fn test_levels_are_sorted_and_distinct() {
        for pair in QUANTILE_LEVELS.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(QUANTILE_LEVELS.len(), 23);
    }

    #[test]
    fn test_identity_cdf_recovers_levels() {
        // CDF equal to the grid itself under unit linear scaling: the
        // quantile at level q is q, up to grid resolution.
        let grid = internal_grid();
        let scaling = Scaling {
            range_min: 0.0,
            range_max: 1.0,
            zero_point: None,
        };
        let actual = to_actual_scale(&grid, &scaling).unwrap();

        let quantiles = extract_quantiles(&grid, &actual);
        for (&level, &q) in QUANTILE_LEVELS.iter().zip(&quantiles) {
            assert_relative_eq!(q, level, epsilon = 1.0 / 200.0);
        }
    }

    #[test]
    fn test_levels_outside_cdf_range_clamp() {
        // CDF never drops below 0.10 nor reaches past 0.90
        let cdf = [0.1, 0.5, 0.9];
        let actual = [100.0, 200.0, 300.0];
        let quantiles = extract_quantiles(&cdf, &actual);
        assert_eq!(quantiles[0], 100.0); // level 0.01
        assert_eq!(quantiles[22], 300.0); // level 0.99
    }
}
