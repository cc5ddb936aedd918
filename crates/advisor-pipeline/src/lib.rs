//! Pipeline composition for advisor-rs
//!
//! Invokes the five stages strictly in sequence: market snapshot, article
//! retrieval, summarization, sentiment classification, decision. Any stage
//! failure short-circuits the run; there is no retry, no caching, and no
//! state shared between runs.

pub mod pipeline;

pub use pipeline::{ArticleInput, Pipeline, PipelineBuilder, PipelineReport, PipelineRequest};
