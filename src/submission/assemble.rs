//! Assembles extracted forecasts into the final submission tables.

use chrono::{Days, NaiveDate};

use super::types::{ExtractedForecast, FluRow, LOCATION, OUTPUT_TYPE, RsvRow};
use crate::interp::fill_linear;
use crate::quantiles::QUANTILE_LEVELS;

pub const FLU_TARGET: &str = "wk inc flu hosp";
pub const RSV_TARGET: &str = "inc hosp";
pub const RSV_AGE_GROUP: &str = "0-130";

/// Horizons the RSV hub accepts. Horizons 0 and 5 may be fetched but the
/// grid join drops them before the gap-fill ever sees them.
pub const RSV_GRID_HORIZONS: [i64; 4] = [1, 2, 3, 4];

/// Flu assembly: one row per extracted sub-question per quantile level, in
/// fetch order. No grid completion.
pub fn assemble_flu(reference_date: NaiveDate, forecasts: &[ExtractedForecast]) -> Vec<FluRow> {
    let mut rows = Vec::with_capacity(forecasts.len() * QUANTILE_LEVELS.len());
    for f in forecasts {
        for (&level, &value) in QUANTILE_LEVELS.iter().zip(&f.values) {
            rows.push(FluRow {
                reference_date,
                target: FLU_TARGET,
                horizon: f.horizon,
                target_end_date: f.target_end_date,
                location: LOCATION,
                output_type: OUTPUT_TYPE,
                output_type_id: level,
                value,
            });
        }
    }
    rows
}

/// RSV assembly: completes the fixed horizon 1..=4 grid, left-joining
/// extracted values on (horizon, target end date) and gap-filling each
/// quantile level across horizons with boundary extrapolation.
///
/// With no extracted horizon inside the grid, values stay missing and the
/// table is still emitted in full.
pub fn assemble_rsv(origin_date: NaiveDate, forecasts: &[ExtractedForecast]) -> Vec<RsvRow> {
    let grid_horizons: Vec<f64> = RSV_GRID_HORIZONS.iter().map(|&h| h as f64).collect();
    let mut rows = Vec::with_capacity(RSV_GRID_HORIZONS.len() * QUANTILE_LEVELS.len());

    for (li, &level) in QUANTILE_LEVELS.iter().enumerate() {
        let known: Vec<(f64, f64)> = RSV_GRID_HORIZONS
            .iter()
            .filter_map(|&h| {
                forecasts
                    .iter()
                    .find(|f| {
                        f.horizon == h && f.target_end_date == grid_end_date(origin_date, h)
                    })
                    .map(|f| (h as f64, f.values[li]))
            })
            .collect();

        let filled = fill_linear(&grid_horizons, &known);

        for (&h, value) in RSV_GRID_HORIZONS.iter().zip(filled) {
            rows.push(RsvRow {
                origin_date,
                horizon: h,
                target: RSV_TARGET,
                target_end_date: grid_end_date(origin_date, h),
                location: LOCATION,
                output_type: OUTPUT_TYPE,
                output_type_id: level,
                value,
                age_group: RSV_AGE_GROUP,
            });
        }
    }

    // deterministic output order: horizon ascending, then level ascending
    rows.sort_by(|a, b| {
        a.horizon
            .cmp(&b.horizon)
            .then(a.output_type_id.total_cmp(&b.output_type_id))
    });
    rows
}

/// Saturday ending forecast week `horizon`: six days past its Sunday start.
fn grid_end_date(origin_date: NaiveDate, horizon: i64) -> NaiveDate {
    origin_date + Days::new((7 * horizon - 1) as u64)
}
