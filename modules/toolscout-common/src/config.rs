use std::env;
use std::time::Duration;

use crate::error::{Result, ScrapeError};
use crate::{DEFAULT_LIMIT, DEFAULT_TIMEOUT_SECS, DEFAULT_TOPIC_SLUG, PRODUCT_HUNT_BASE_URL};

/// Scrape settings. Environment values are defaults; CLI flags override them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub topic: String,
    pub limit: i64,
    pub timeout_secs: u64,
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            topic: DEFAULT_TOPIC_SLUG.to_string(),
            limit: DEFAULT_LIMIT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            base_url: PRODUCT_HUNT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load from the process environment, after reading `.env` if one exists.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Unset or blank keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            topic: get("TOOLSCOUT_TOPIC").unwrap_or(defaults.topic),
            limit: match get("TOOLSCOUT_LIMIT") {
                Some(raw) => parse_number("TOOLSCOUT_LIMIT", &raw)?,
                None => defaults.limit,
            },
            timeout_secs: match get("TOOLSCOUT_TIMEOUT_SECS") {
                Some(raw) => parse_number("TOOLSCOUT_TIMEOUT_SECS", &raw)?,
                None => defaults.timeout_secs,
            },
            base_url: get("PRODUCT_HUNT_BASE_URL").unwrap_or(defaults.base_url),
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn log_redacted(&self) {
        tracing::info!(
            topic = self.topic.as_str(),
            limit = self.limit,
            timeout_secs = self.timeout_secs,
            base_url = self.base_url.as_str(),
            "Config loaded"
        );
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| ScrapeError::Config(format!("{key} must be a number, got {raw:?}")))
}
