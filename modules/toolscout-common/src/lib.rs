pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::ScrapeError;
pub use types::*;

pub use producthunt_client::PRODUCT_HUNT_BASE_URL;

pub const DEFAULT_TOPIC_SLUG: &str = "artificial-intelligence";
pub const DEFAULT_LIMIT: i64 = 5;
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
