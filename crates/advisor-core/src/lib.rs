//! Core records and shared types for advisor-rs
//!
//! This crate defines the value records that flow through the pipeline
//! (market snapshot, article, summary, sentiment, decision), the closed
//! label/suggestion enums, and the validation error taxonomy shared by
//! every stage.

pub mod error;
pub mod logging;
pub mod record;
pub mod text;

pub use error::{Error, Result, ValidationError};
pub use logging::init_tracing;
pub use record::{
    Article, ArticleSource, Decision, MarketSnapshot, SentimentLabel, SentimentResult, Suggestion,
    Summary,
};
