pub mod builder;
pub mod makers;
pub mod output;
pub mod payload;
pub mod ranker;
pub mod scout;
pub mod walker;

pub use scout::{extract_listings, extract_listings_from_html, ScrapeRequest};
