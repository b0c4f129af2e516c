pub mod error;

pub use error::{ProductHuntError, Result};

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION};

pub const PRODUCT_HUNT_BASE_URL: &str = "https://www.producthunt.com";

const USER_AGENT: &str =
    "Mozilla/5.0 (compatible; ProductHuntScraper/1.0; +https://www.producthunt.com/)";
const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE_EN: &str = "en-US,en;q=0.8";

// --- PageFetcher trait ---

/// Source of raw topic page markup.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Return the page for `topic` as UTF-8 text. One attempt, no retries.
    async fn fetch_topic_page(&self, topic: &str, timeout: Duration) -> Result<String>;
}

// --- ProductHuntClient ---

pub struct ProductHuntClient {
    client: reqwest::Client,
    base_url: String,
}

impl ProductHuntClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(PRODUCT_HUNT_BASE_URL)
    }

    /// Point the client at another host, e.g. a mirror or a local test server.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_EN));
        headers.insert(CONNECTION, HeaderValue::from_static("close"));

        // gzip and brotli bodies are decoded by reqwest before we see them.
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn topic_url(&self, topic: &str) -> String {
        format!("{}/topics/{}", self.base_url, topic)
    }
}

#[async_trait]
impl PageFetcher for ProductHuntClient {
    async fn fetch_topic_page(&self, topic: &str, timeout: Duration) -> Result<String> {
        let url = self.topic_url(topic);
        tracing::info!(url = %url, timeout_secs = timeout.as_secs(), "Fetching topic page");

        let resp = self.client.get(&url).timeout(timeout).send().await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Topic page request failed");
            return Err(ProductHuntError::Api {
                status: status.as_u16(),
                url,
            });
        }

        let body = resp.bytes().await?;
        tracing::debug!(url = %url, bytes = body.len(), "Fetched topic page");

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
