//! Typed view of the Metaculus posts API response.
//!
//! Only the fields this tool reads are modeled; everything else in the
//! payload is dropped during deserialization.

use serde::Deserialize;

/// Top-level post payload for a question group.
#[derive(Debug, Deserialize)]
pub struct Post {
    pub group_of_questions: QuestionGroup,
}

#[derive(Debug, Deserialize)]
pub struct QuestionGroup {
    pub questions: Vec<SubQuestion>,
}

/// One forecasting target for a specific future week.
///
/// The title carries the target end date in a parenthetical, e.g.
/// `"... hospitalizations for the week ending (November 30, 2024)?"`.
#[derive(Debug, Deserialize)]
pub struct SubQuestion {
    pub title: String,
    pub scaling: Scaling,
    #[serde(default)]
    pub aggregations: Aggregations,
}

/// Mapping from the internal normalized axis to the actual value domain.
///
/// `zero_point` absent means the axis is linear; present means it is
/// geometrically warped, anchored at that value.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Scaling {
    pub range_min: f64,
    pub range_max: f64,
    #[serde(default)]
    pub zero_point: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Aggregations {
    #[serde(default)]
    pub recency_weighted: Option<RecencyWeighted>,
}

#[derive(Debug, Deserialize)]
pub struct RecencyWeighted {
    /// Null until at least one forecaster has predicted on the sub-question.
    #[serde(default)]
    pub latest: Option<LatestAggregate>,
}

#[derive(Debug, Deserialize)]
pub struct LatestAggregate {
    pub forecast_values: Vec<f64>,
}

impl SubQuestion {
    /// Returns the latest aggregated CDF, or `None` when nobody has
    /// forecast this sub-question yet.
    pub fn latest_cdf(&self) -> Option<&[f64]> {
        self.aggregations
            .recency_weighted
            .as_ref()?
            .latest
            .as_ref()
            .map(|l| l.forecast_values.as_slice())
    }
}
