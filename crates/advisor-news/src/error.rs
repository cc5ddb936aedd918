//! Error types for news retrieval

use thiserror::Error;

/// Result type alias for news operations
pub type Result<T> = std::result::Result<T, NewsError>;

/// News retrieval specific errors
#[derive(Debug, Error)]
pub enum NewsError {
    /// URL failed to parse
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Network or HTTP error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Page fetched but no article text could be extracted
    #[error("could not extract article content from {0}")]
    EmptyExtraction(String),
}

/// Convert NewsError into the shared pipeline error
impl From<NewsError> for advisor_core::Error {
    fn from(err: NewsError) -> Self {
        advisor_core::Error::News(err.to_string())
    }
}
