use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProductHuntError>;

#[derive(Debug, Error)]
pub enum ProductHuntError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {url}")]
    Timeout { url: String },

    #[error("Failed to fetch {url}: HTTP status {status}")]
    Api { status: u16, url: String },
}

impl From<reqwest::Error> for ProductHuntError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return ProductHuntError::Timeout {
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            };
        }
        ProductHuntError::Network(err.to_string())
    }
}
