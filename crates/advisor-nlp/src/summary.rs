//! Article summarization

use crate::segment::split_sentences;
use advisor_core::{Article, Result, Summary, ValidationError};
use async_trait::async_trait;
use tracing::debug;

/// Default number of sentences to keep
pub const DEFAULT_MAX_SENTENCES: usize = 5;

/// A summarizer turns an `Article` into a `Summary`
///
/// The trait is async so LLM-backed implementations fit behind it; the
/// extractive implementation never suspends.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize an article
    async fn summarize(&self, article: &Article) -> Result<Summary>;

    /// Get the summarizer name, recorded on every `Summary` it produces
    fn name(&self) -> &str;
}

/// Extractive summarizer: the first N sentences, verbatim
///
/// Deterministic and idempotent. If the article has fewer than N sentences
/// it returns all of them; that is not an error.
#[derive(Debug)]
pub struct ExtractiveSummarizer {
    max_sentences: usize,
}

impl ExtractiveSummarizer {
    /// Create a summarizer keeping at most `max_sentences` sentences
    ///
    /// Fails with a validation error when `max_sentences` is zero.
    pub fn new(max_sentences: usize) -> Result<Self> {
        if max_sentences == 0 {
            return Err(ValidationError::InvalidSentenceCount.into());
        }
        Ok(Self { max_sentences })
    }
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self {
            max_sentences: DEFAULT_MAX_SENTENCES,
        }
    }
}

#[async_trait]
impl Summarizer for ExtractiveSummarizer {
    async fn summarize(&self, article: &Article) -> Result<Summary> {
        let text = article.text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyArticle.into());
        }

        let sentences = split_sentences(text);
        debug!(title = %article.title, sentences = sentences.len(), "article segmented");

        let selected: Vec<String> = sentences
            .into_iter()
            .take(self.max_sentences)
            .collect();

        Ok(Summary::from_sentences(selected, self.name()))
    }

    fn name(&self) -> &str {
        "extractive-first-n"
    }
}
