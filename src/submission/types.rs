//! Row types for the two hub submission formats.
//!
//! Field order matters: the CSV writer emits columns in declaration order,
//! and each hub validates its column layout.

use chrono::NaiveDate;
use serde::Serialize;

pub const LOCATION: &str = "US";
pub const OUTPUT_TYPE: &str = "quantile";

/// Quantiles extracted from one sub-question, before any grid completion.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedForecast {
    pub horizon: i64,
    pub target_end_date: NaiveDate,
    /// One value per entry of
    /// [`QUANTILE_LEVELS`](crate::quantiles::QUANTILE_LEVELS), in order.
    pub values: Vec<f64>,
}

/// One row of a FluSight-style submission.
#[derive(Debug, Serialize)]
pub struct FluRow {
    pub reference_date: NaiveDate,
    pub target: &'static str,
    pub horizon: i64,
    pub target_end_date: NaiveDate,
    pub location: &'static str,
    pub output_type: &'static str,
    pub output_type_id: f64,
    pub value: f64,
}

/// One row of an RSV hub submission. `value` stays `None` (an empty CSV
/// field) when no fetched horizon could seed the gap-fill.
#[derive(Debug, Serialize)]
pub struct RsvRow {
    pub origin_date: NaiveDate,
    pub horizon: i64,
    pub target: &'static str,
    pub target_end_date: NaiveDate,
    pub location: &'static str,
    pub output_type: &'static str,
    pub output_type_id: f64,
    pub value: Option<f64>,
    pub age_group: &'static str,
}
