//! Text analysis stages for advisor-rs
//!
//! Two stages live here: summarization (an extractive first-N-sentences
//! summarizer, plus an LLM-backed variant behind the same trait) and
//! sentiment classification (a deterministic keyword classifier, plus an
//! LLM-backed variant). The traits are the pipeline's seams; swapping a
//! variant never changes the pipeline contract.

pub mod llm;
pub mod segment;
pub mod sentiment;
pub mod summary;

pub use llm::{LlmClassifier, LlmSummarizer};
pub use segment::split_sentences;
pub use sentiment::{
    DEFAULT_NEUTRAL_MARGIN, KeywordClassifier, SentimentClassifier, label_from_score,
};
pub use summary::{DEFAULT_MAX_SENTENCES, ExtractiveSummarizer, Summarizer};
