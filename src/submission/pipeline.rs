//! The parameterized pipeline: fetch, align, extract, assemble, write.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use super::assemble::{assemble_flu, assemble_rsv};
use super::extract::extract_forecast;
use super::types::ExtractedForecast;
use crate::api::Post;
use crate::dates::{origin_sunday, reference_saturday};
use crate::fetch::{HttpClient, fetch_post};
use crate::output::write_table;

/// Which hub a run submits to. Carries everything that differs between the
/// two pipelines: question id, calendar rule, horizon filter, output shape,
/// and file layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hub {
    Flu,
    Rsv,
}

impl Hub {
    pub fn question_id(self) -> u64 {
        match self {
            Hub::Flu => 29507,
            Hub::Rsv => 30048,
        }
    }

    /// Week anchor all horizons are measured from: the reference Saturday
    /// for flu, the origin Sunday for RSV.
    pub fn anchor(self, today: NaiveDate) -> NaiveDate {
        match self {
            Hub::Flu => reference_saturday(today),
            Hub::Rsv => origin_sunday(today),
        }
    }

    fn day_offset(self) -> i64 {
        match self {
            Hub::Flu => 0,
            Hub::Rsv => 1,
        }
    }

    fn retained_horizons(self) -> &'static [i64] {
        match self {
            Hub::Flu => &[-1, 0, 1, 2, 3],
            Hub::Rsv => &[0, 1, 2, 3, 4, 5],
        }
    }

    /// Submission file path relative to the output directory. The casing of
    /// the model name differs between the hubs.
    pub fn output_path(self, anchor: NaiveDate) -> String {
        match self {
            Hub::Flu => format!("2024-25/flu/metac-cp/{anchor}-metaculus-cp.csv"),
            Hub::Rsv => format!("rsv/submissions/{anchor}-Metaculus-cp.csv"),
        }
    }
}

/// Runs one full submission pipeline for `hub`, anchored on `today` (the
/// submission due date). Returns the path of the written CSV.
pub async fn run<C: HttpClient>(
    client: &C,
    hub: Hub,
    today: NaiveDate,
    output_dir: &str,
) -> Result<String> {
    let question_id = hub.question_id();
    let anchor = hub.anchor(today);
    info!(?hub, question_id, %anchor, "starting submission run");

    let post = fetch_post(client, question_id)
        .await
        .with_context(|| format!("fetching question {question_id}"))?;

    let forecasts = extract_all(&post, hub, anchor)?;
    info!(
        subquestions = post.group_of_questions.questions.len(),
        extracted = forecasts.len(),
        "forecasts extracted"
    );

    let path = format!("{output_dir}/{}", hub.output_path(anchor));
    match hub {
        Hub::Flu => write_table(&path, &assemble_flu(anchor, &forecasts))?,
        Hub::Rsv => write_table(&path, &assemble_rsv(anchor, &forecasts))?,
    }

    info!(path = %path, "submission written");
    Ok(path)
}

/// Extracts every retained sub-question of a fetched post, surfacing
/// malformed ones as errors.
pub fn extract_all(post: &Post, hub: Hub, anchor: NaiveDate) -> Result<Vec<ExtractedForecast>> {
    let mut out = Vec::new();
    for sub in &post.group_of_questions.questions {
        if let Some(f) = extract_forecast(sub, anchor, hub.day_offset(), hub.retained_horizons())? {
            out.push(f);
        }
    }
    Ok(out)
}
