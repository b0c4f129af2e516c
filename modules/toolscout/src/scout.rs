use std::time::Duration;

use producthunt_client::PageFetcher;
use toolscout_common::error::Result;
use toolscout_common::{AiTool, ScrapeError, DEFAULT_LIMIT, DEFAULT_TIMEOUT_SECS, DEFAULT_TOPIC_SLUG};
use tracing::info;
use typed_builder::TypedBuilder;

use crate::builder::collect_candidates;
use crate::payload::locate_payload;
use crate::ranker::rank;

/// One extraction call. `html` short-circuits the fetch.
#[derive(Debug, Clone, TypedBuilder)]
pub struct ScrapeRequest {
    #[builder(default = DEFAULT_TOPIC_SLUG.to_string(), setter(into))]
    pub topic: String,
    #[builder(default = DEFAULT_LIMIT)]
    pub limit: i64,
    #[builder(default, setter(strip_option, into))]
    pub html: Option<String>,
    #[builder(default = Duration::from_secs(DEFAULT_TIMEOUT_SECS))]
    pub timeout: Duration,
}

impl Default for ScrapeRequest {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Top listings for a topic, fetching the page unless the request carries markup.
/// A non-positive limit returns nothing without fetching or parsing.
pub async fn extract_listings(
    fetcher: &dyn PageFetcher,
    request: &ScrapeRequest,
) -> Result<Vec<AiTool>> {
    let Some(limit) = positive_limit(request.limit) else {
        return Ok(Vec::new());
    };

    let fetched;
    let html = match &request.html {
        Some(html) => html.as_str(),
        None => {
            fetched = fetcher
                .fetch_topic_page(&request.topic, request.timeout)
                .await?;
            fetched.as_str()
        }
    };

    let tools = rank_listings(html, limit)?;
    info!(topic = request.topic.as_str(), count = tools.len(), "Extracted listings");
    Ok(tools)
}

/// Pure variant of [`extract_listings`] over markup already in hand.
pub fn extract_listings_from_html(html: &str, limit: i64) -> Result<Vec<AiTool>> {
    match positive_limit(limit) {
        Some(limit) => rank_listings(html, limit),
        None => Ok(Vec::new()),
    }
}

fn rank_listings(html: &str, limit: usize) -> Result<Vec<AiTool>> {
    let payload = locate_payload(html)?;
    let candidates = collect_candidates(&payload);
    if candidates.is_empty() {
        return Err(ScrapeError::NoListingsFound);
    }
    tracing::debug!(candidates = candidates.len(), limit, "Ranking candidates");
    Ok(rank(candidates, limit))
}

fn positive_limit(limit: i64) -> Option<usize> {
    if limit <= 0 {
        return None;
    }
    Some(usize::try_from(limit).unwrap_or(usize::MAX))
}
