//! Conversion from the internal normalized `[0,1]` axis to actual values.

use anyhow::{Result, bail};

use crate::api::Scaling;

/// Number of equally spaced positions the API samples each CDF at.
pub const CDF_SAMPLES: usize = 201;

/// The normalized positions `0, 1/200, ..., 1` the CDF is sampled at.
pub fn internal_grid() -> Vec<f64> {
    (0..CDF_SAMPLES)
        .map(|i| i as f64 / (CDF_SAMPLES - 1) as f64)
        .collect()
}

/// Maps normalized positions in `[0,1]` onto the actual value domain.
///
/// With no `zero_point` the mapping is affine. With a `zero_point` the axis
/// is geometrically warped, anchored at that value (the inverse of a
/// log-uniform prior construction). The mapping is monotone in `x` and hits
/// the range bounds exactly at `x = 0` and `x = 1`.
///
/// Known limitation: when the derivative ratio is close to 1 (zero point
/// nearly equidistant from both bounds) the `(dr^x - 1)/(dr - 1)` form is
/// ill-conditioned and precision degrades.
pub fn to_actual_scale(x: &[f64], scaling: &Scaling) -> Result<Vec<f64>> {
    let Scaling {
        range_min,
        range_max,
        zero_point,
    } = *scaling;

    if range_max <= range_min {
        bail!("invalid scaling: range_max {range_max} <= range_min {range_min}");
    }
    let span = range_max - range_min;

    let actual = match zero_point {
        None => x.iter().map(|&v| range_min + span * v).collect(),
        Some(zp) => {
            if zp == range_min {
                bail!("invalid scaling: zero_point equals range_min {range_min}");
            }
            let dr = (range_max - zp) / (range_min - zp);
            x.iter()
                .map(|&v| range_min + span * (dr.powf(v) - 1.0) / (dr - 1.0))
                .collect()
        }
    };

    Ok(actual)
}
