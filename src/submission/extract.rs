//! Turns raw API sub-questions into extracted quantile forecasts.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use tracing::warn;

use super::types::ExtractedForecast;
use crate::api::SubQuestion;
use crate::dates;
use crate::quantiles::extract_quantiles;
use crate::scaling::{CDF_SAMPLES, internal_grid, to_actual_scale};

/// Processes one sub-question into its quantile forecast.
///
/// Returns `Ok(None)` for the two recognized skip conditions: a horizon
/// outside `retained`, or no aggregated forecast yet (logged). Malformed
/// titles, scaling descriptors, and CDFs are errors carrying the title.
pub fn extract_forecast(
    sub: &SubQuestion,
    anchor: NaiveDate,
    day_offset: i64,
    retained: &[i64],
) -> Result<Option<ExtractedForecast>> {
    let target_end_date = dates::target_end_date(&sub.title)?;
    let horizon = dates::horizon(anchor, target_end_date, day_offset);

    if !retained.contains(&horizon) {
        return Ok(None);
    }

    let Some(cdf) = sub.latest_cdf() else {
        warn!(title = %sub.title, "no aggregated forecast, skipping");
        return Ok(None);
    };
    if cdf.len() != CDF_SAMPLES {
        bail!(
            "{:?}: expected {CDF_SAMPLES} CDF samples, got {}",
            sub.title,
            cdf.len()
        );
    }

    let actual = to_actual_scale(&internal_grid(), &sub.scaling)
        .with_context(|| format!("bad scaling on {:?}", sub.title))?;
    let values = extract_quantiles(cdf, &actual);

    Ok(Some(ExtractedForecast {
        horizon,
        target_end_date,
        values,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Aggregations, LatestAggregate, RecencyWeighted, Scaling};
    use crate::quantiles::QUANTILE_LEVELS;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn subquestion(title: &str, cdf: Option<Vec<f64>>) -> SubQuestion {
        SubQuestion {
            title: title.to_string(),
            scaling: Scaling {
                range_min: 0.0,
                range_max: 1.0,
                zero_point: None,
            },
            aggregations: Aggregations {
                recency_weighted: Some(RecencyWeighted {
                    latest: cdf.map(|forecast_values| LatestAggregate { forecast_values }),
                }),
            },
        }
    }

    fn identity_cdf() -> Vec<f64> {
        crate::scaling::internal_grid()
    }

    #[test]
    fn test_extracts_retained_horizon() {
        let sub = subquestion("week ending (November 30, 2024)?", Some(identity_cdf()));
        let f = extract_forecast(&sub, ymd(2024, 11, 23), 0, &[-1, 0, 1, 2, 3])
            .unwrap()
            .expect("should extract");

        assert_eq!(f.horizon, 1);
        assert_eq!(f.target_end_date, ymd(2024, 11, 30));
        assert_eq!(f.values.len(), QUANTILE_LEVELS.len());
    }

    #[test]
    fn test_out_of_range_horizon_is_silently_skipped() {
        let sub = subquestion("week ending (March 1, 2025)?", Some(identity_cdf()));
        let f = extract_forecast(&sub, ymd(2024, 11, 23), 0, &[-1, 0, 1, 2, 3]).unwrap();
        assert!(f.is_none());
    }

    #[test]
    fn test_missing_aggregate_is_skipped() {
        let sub = subquestion("week ending (November 30, 2024)?", None);
        let f = extract_forecast(&sub, ymd(2024, 11, 23), 0, &[0, 1, 2]).unwrap();
        assert!(f.is_none());
    }

    #[test]
    fn test_malformed_title_is_fatal() {
        let sub = subquestion("no date at all", Some(identity_cdf()));
        let err = extract_forecast(&sub, ymd(2024, 11, 23), 0, &[0]).unwrap_err();
        assert!(err.to_string().contains("no date at all"));
    }

    #[test]
    fn test_short_cdf_is_fatal() {
        let sub = subquestion("week ending (November 30, 2024)?", Some(vec![0.0, 1.0]));
        assert!(extract_forecast(&sub, ymd(2024, 11, 23), 0, &[1]).is_err());
    }
}
