//! 1-D linear interpolation primitives.
//!
//! [`interp`] clamps outside the observed range and backs the quantile
//! extractor. [`fill_linear`] extrapolates at the boundaries and backs the
//! RSV horizon gap-fill.

/// Piecewise-linear interpolation of each target against monotonically
/// non-decreasing `xs` with values `ys`.
///
/// Targets below `xs[0]` or above `xs[last]` clamp to the boundary values.
/// A target landing exactly on a tied run of `xs` resolves to the first
/// tied sample.
pub fn interp(targets: &[f64], xs: &[f64], ys: &[f64]) -> Vec<f64> {
    debug_assert_eq!(xs.len(), ys.len());
    targets.iter().map(|&t| interp_one(t, xs, ys)).collect()
}

fn interp_one(t: f64, xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len();
    if n == 0 {
        return f64::NAN;
    }
    if t <= xs[0] {
        return ys[0];
    }
    if t >= xs[n - 1] {
        return ys[n - 1];
    }

    // first sample >= t; in range because of the clamps above
    let hi = xs.partition_point(|&x| x < t);
    if xs[hi] == t {
        return ys[hi];
    }
    let lo = hi - 1;
    let frac = (t - xs[lo]) / (xs[hi] - xs[lo]);
    ys[lo] + frac * (ys[hi] - ys[lo])
}

/// Linear interpolation over an ordered axis with boundary extrapolation.
///
/// `known` holds `(x, y)` pairs sorted by `x`. Zero known points leaves
/// every target missing; a single known point fills a constant; two or more
/// interpolate between neighbors and extend the outermost segments past the
/// boundaries.
pub fn fill_linear(targets: &[f64], known: &[(f64, f64)]) -> Vec<Option<f64>> {
    match known.len() {
        0 => vec![None; targets.len()],
        1 => vec![Some(known[0].1); targets.len()],
        _ => targets
            .iter()
            .map(|&t| Some(extrapolate_one(t, known)))
            .collect(),
    }
}

fn extrapolate_one(t: f64, known: &[(f64, f64)]) -> f64 {
    let n = known.len();
    if t <= known[0].0 {
        return segment(t, known[0], known[1]);
    }
    if t >= known[n - 1].0 {
        return segment(t, known[n - 2], known[n - 1]);
    }

    let hi = known.partition_point(|&(x, _)| x < t);
    if known[hi].0 == t {
        return known[hi].1;
    }
    segment(t, known[hi - 1], known[hi])
}

fn segment(t: f64, (x0, y0): (f64, f64), (x1, y1): (f64, f64)) -> f64 {
    y0 + (t - x0) * (y1 - y0) / (x1 - x0)
}
