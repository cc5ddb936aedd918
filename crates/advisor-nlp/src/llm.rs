//! LLM-backed summarizer and classifier variants
//!
//! These implement the same `Summarizer` and `SentimentClassifier` traits
//! as the deterministic variants; the pipeline cannot tell them apart.

use crate::segment::split_sentences;
use crate::sentiment::SentimentClassifier;
use crate::summary::Summarizer;
use advisor_core::{
    Article, Error, Result, SentimentLabel, SentimentResult, Summary, ValidationError, text,
};
use advisor_llm::{ChatMessage, ChatRequest, LlmProvider};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

const SUMMARY_SYSTEM_PROMPT: &str =
    "You summarize news articles. Reply with the summary sentences only, \
     no preamble and no bullet points.";

const SENTIMENT_SYSTEM_PROMPT: &str =
    "You classify the sentiment of financial news text. Reply with exactly \
     one word: POSITIVE, NEGATIVE, or NEUTRAL.";

/// Characters of input text sent to the model (truncated for speed)
const MAX_INPUT_CHARS: usize = 512;

/// Summarizer backed by a chat model
pub struct LlmSummarizer {
    provider: Arc<dyn LlmProvider>,
    model: String,
    max_sentences: usize,
}

impl std::fmt::Debug for LlmSummarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmSummarizer")
            .field("model", &self.model)
            .field("max_sentences", &self.max_sentences)
            .finish_non_exhaustive()
    }
}

impl LlmSummarizer {
    /// Create an LLM summarizer keeping at most `max_sentences` sentences
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        model: impl Into<String>,
        max_sentences: usize,
    ) -> Result<Self> {
        if max_sentences == 0 {
            return Err(ValidationError::InvalidSentenceCount.into());
        }
        Ok(Self {
            provider,
            model: model.into(),
            max_sentences,
        })
    }
}

#[async_trait]
impl Summarizer for LlmSummarizer {
    async fn summarize(&self, article: &Article) -> Result<Summary> {
        if article.text.trim().is_empty() {
            return Err(ValidationError::EmptyArticle.into());
        }

        let prompt = format!(
            "Summarize the following article in at most {} sentences.\n\nTitle: {}\n\n{}",
            self.max_sentences, article.title, article.text
        );
        let request = ChatRequest::builder(&self.model)
            .system(SUMMARY_SYSTEM_PROMPT)
            .add_message(ChatMessage::user(prompt))
            .max_tokens(512)
            .temperature(0.2)
            .build();

        let response = self
            .provider
            .complete(request)
            .await
            .map_err(|e| Error::Inference(e.to_string()))?;

        let sentences: Vec<String> = split_sentences(&text::normalize(&response.content))
            .into_iter()
            .take(self.max_sentences)
            .collect();
        if sentences.is_empty() {
            return Err(Error::Inference(
                "model returned no usable summary".to_string(),
            ));
        }

        debug!(sentences = sentences.len(), "llm summary produced");

        Ok(Summary::from_sentences(sentences, self.name()))
    }

    fn name(&self) -> &str {
        "llm-abstractive"
    }
}

/// Sentiment classifier backed by a chat model
pub struct LlmClassifier {
    provider: Arc<dyn LlmProvider>,
    model: String,
}

impl LlmClassifier {
    /// Create an LLM classifier
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }
}

#[async_trait]
impl SentimentClassifier for LlmClassifier {
    async fn classify(&self, input: &str) -> Result<SentimentResult> {
        let normalized = text::normalize(input);
        if normalized.is_empty() {
            return Ok(
                SentimentResult::new(SentimentLabel::Neutral, self.name()).with_confidence(0.0)
            );
        }

        // Truncate for speed; a demo classifier does not need the tail
        let excerpt: String = normalized.chars().take(MAX_INPUT_CHARS).collect();
        let request = ChatRequest::builder(&self.model)
            .system(SENTIMENT_SYSTEM_PROMPT)
            .add_message(ChatMessage::user(excerpt))
            .max_tokens(8)
            .temperature(0.0)
            .build();

        let response = self
            .provider
            .complete(request)
            .await
            .map_err(|e| Error::Inference(e.to_string()))?;

        // The model was asked for one word; anything unparseable is an
        // inference failure, not a caller contract violation
        let word = response
            .content
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .trim_matches(|c: char| !c.is_alphabetic());
        let label: SentimentLabel = word.parse().map_err(|_| {
            Error::Inference(format!("unexpected model output: {:?}", response.content))
        })?;

        Ok(SentimentResult::new(label, self.name()))
    }

    fn name(&self) -> &str {
        "llm-classifier"
    }
}
