use producthunt_client::ProductHuntError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Everything that can end a single extraction call. None of these are retried.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error(transparent)]
    Transport(#[from] ProductHuntError),

    #[error("Could not locate __NEXT_DATA__ script tag within the HTML payload")]
    PayloadNotFound,

    #[error("Encountered malformed HTML when searching for __NEXT_DATA__ payload")]
    MalformedPayload,

    #[error("Failed to decode Product Hunt JSON payload: {0}")]
    PayloadDecode(String),

    #[error("No AI tools were found in the Product Hunt payload")]
    NoListingsFound,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ScrapeError {
    fn from(err: serde_json::Error) -> Self {
        ScrapeError::PayloadDecode(err.to_string())
    }
}
