//! Error types shared across the pipeline

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for pipeline operations
///
/// Validation errors are the only errors the reproducible core raises
/// itself; the remaining variants wrap failures from the I/O-bound
/// collaborators (market data, article fetching, model inference).
#[derive(Error, Debug)]
pub enum Error {
    /// A caller violated a stage's input contract
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Market data retrieval failed
    #[error("market data error: {0}")]
    Market(String),

    /// Article retrieval or extraction failed
    #[error("news error: {0}")]
    News(String),

    /// Model inference failed
    #[error("inference error: {0}")]
    Inference(String),
}

/// Input contract violations
///
/// Each variant names the specific violated precondition. These are never
/// transient: they are not retried and propagate immediately, halting the
/// stage and the pipeline run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Article text was empty after whitespace normalization
    #[error("empty article")]
    EmptyArticle,

    /// Requested summary sentence count was not >= 1
    #[error("invalid sentence count")]
    InvalidSentenceCount,

    /// Recent return was NaN or infinite
    #[error("non-finite return")]
    NonFiniteReturn,

    /// Sentiment label was outside the closed POSITIVE/NEGATIVE/NEUTRAL set
    #[error("unknown sentiment label: {0}")]
    UnknownLabel(String),
}
