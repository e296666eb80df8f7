mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Context, Result};

use crate::api::Post;

const API_BASE: &str = "https://metaculus.com/api/posts";

/// Fetches a question-group post and deserializes the fields we use.
///
/// # Errors
///
/// Any transport failure, non-2xx status, or payload that does not match
/// the expected shape is fatal; there is no retry.
pub async fn fetch_post<C: HttpClient>(client: &C, question_id: u64) -> Result<Post> {
    let url = format!("{API_BASE}/{question_id}");
    let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client
        .execute(req)
        .await
        .with_context(|| format!("GET {url} failed"))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!("question {question_id}: API returned status {status}: {body}");
    }

    resp.json::<Post>()
        .await
        .with_context(|| format!("question {question_id}: unexpected response shape"))
}
