//! Value records passed forward through the pipeline
//!
//! Each record is produced by exactly one stage, handed to the next, and
//! never mutated after construction. Constructors validate the invariants
//! a record carries; everything downstream can rely on them.

use crate::error::{Result, ValidationError};
use crate::text;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where an article came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ArticleSource {
    /// Fetched from a URL
    Url {
        /// The article URL
        url: String,
    },
    /// Pasted or typed in by hand
    Manual,
}

impl fmt::Display for ArticleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArticleSource::Url { url } => write!(f, "{url}"),
            ArticleSource::Manual => write!(f, "manual"),
        }
    }
}

/// Snapshot of recent market behavior for one ticker
///
/// `recent_return` is fractional: 0.02 means a 2% gain over the lookback
/// window. The constructor rejects non-finite values so every consumer
/// can assume a usable number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Ticker symbol the return was computed for
    pub ticker: String,
    /// Fractional return over the lookback window
    pub recent_return: f64,
}

impl MarketSnapshot {
    /// Create a snapshot, rejecting NaN and infinite returns
    pub fn new(ticker: impl Into<String>, recent_return: f64) -> Result<Self> {
        if !recent_return.is_finite() {
            return Err(ValidationError::NonFiniteReturn.into());
        }
        Ok(Self {
            ticker: ticker.into(),
            recent_return,
        })
    }
}

/// A news article ready for summarization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article headline
    pub title: String,
    /// Normalized body text, guaranteed non-empty
    pub text: String,
    /// Where the article came from
    pub source: ArticleSource,
}

impl Article {
    /// Create an article, normalizing whitespace and rejecting empty text
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        source: ArticleSource,
    ) -> Result<Self> {
        let text = text::normalize(&text.into());
        if text.is_empty() {
            return Err(ValidationError::EmptyArticle.into());
        }
        Ok(Self {
            title: text::normalize(&title.into()),
            text,
            source,
        })
    }
}

/// Extractive summary of an article
///
/// Sentences appear verbatim and in their original order; `text` is the
/// sentences joined with single spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences, original order preserved
    pub sentences: Vec<String>,
    /// Concatenated summary text
    pub text: String,
    /// Name of the summarizer that produced this summary
    pub method: String,
}

impl Summary {
    /// Build a summary from already-selected sentences
    pub fn from_sentences(sentences: Vec<String>, method: impl Into<String>) -> Self {
        let text = sentences.join(" ");
        Self {
            sentences,
            text,
            method: method.into(),
        }
    }
}

/// Closed set of sentiment polarities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Canonical uppercase form of the label
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = ValidationError;

    /// Parse a label, case-insensitively; anything outside the closed set
    /// is a validation error
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "POSITIVE" => Ok(SentimentLabel::Positive),
            "NEGATIVE" => Ok(SentimentLabel::Negative),
            "NEUTRAL" => Ok(SentimentLabel::Neutral),
            other => Err(ValidationError::UnknownLabel(other.to_string())),
        }
    }
}

/// Sentiment classification of a piece of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Polarity label
    pub label: SentimentLabel,
    /// Classifier confidence in [0, 1], when the classifier reports one
    pub confidence: Option<f64>,
    /// Name of the classifier that produced this result
    pub model: String,
}

impl SentimentResult {
    /// Create a result without a confidence score
    pub fn new(label: SentimentLabel, model: impl Into<String>) -> Self {
        Self {
            label,
            confidence: None,
            model: model.into(),
        }
    }

    /// Attach a confidence score, clamped to [0, 1]
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence.clamp(0.0, 1.0));
        self
    }
}

/// Closed set of suggestion outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suggestion {
    #[serde(rename = "buy bias")]
    BuyBias,
    #[serde(rename = "sell bias")]
    SellBias,
    #[serde(rename = "neutral/hold")]
    Hold,
}

impl Suggestion {
    /// The suggestion's fixed display string
    pub fn as_str(&self) -> &'static str {
        match self {
            Suggestion::BuyBias => "buy bias",
            Suggestion::SellBias => "sell bias",
            Suggestion::Hold => "neutral/hold",
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal record of a pipeline run
///
/// Carries the suggestion plus the two inputs it was derived from, so a
/// reader can audit how the rule fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Selected suggestion
    pub suggestion: Suggestion,
    /// Recent return the rule saw
    pub recent_return: f64,
    /// Sentiment label the rule saw
    pub label: SentimentLabel,
    /// Human-readable explanation of the outcome
    pub rationale: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_rejects_non_finite_return() {
        assert!(MarketSnapshot::new("SPY", 0.015).is_ok());
        assert!(MarketSnapshot::new("SPY", 0.0).is_ok());
        assert!(MarketSnapshot::new("SPY", f64::NAN).is_err());
        assert!(MarketSnapshot::new("SPY", f64::INFINITY).is_err());
        assert!(MarketSnapshot::new("SPY", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_article_normalizes_and_rejects_empty() {
        let article = Article::new(
            "  Markets \n rally ",
            "  Stocks  rose.\n\nVolume was high.  ",
            ArticleSource::Manual,
        )
        .unwrap();
        assert_eq!(article.title, "Markets rally");
        assert_eq!(article.text, "Stocks rose. Volume was high.");

        let err = Article::new("t", "   \n\t  ", ArticleSource::Manual).unwrap_err();
        assert_eq!(err.to_string(), "empty article");
    }

    #[test]
    fn test_summary_concatenates_sentences() {
        let summary = Summary::from_sentences(
            vec!["First one.".to_string(), "Second one.".to_string()],
            "extractive-first-n",
        );
        assert_eq!(summary.text, "First one. Second one.");
        assert_eq!(summary.sentences.len(), 2);
    }

    #[test]
    fn test_label_parsing_is_closed() {
        assert_eq!(
            "POSITIVE".parse::<SentimentLabel>().unwrap(),
            SentimentLabel::Positive
        );
        assert_eq!(
            "negative".parse::<SentimentLabel>().unwrap(),
            SentimentLabel::Negative
        );
        assert_eq!(
            " Neutral ".parse::<SentimentLabel>().unwrap(),
            SentimentLabel::Neutral
        );

        let err = "UNKNOWN".parse::<SentimentLabel>().unwrap_err();
        assert_eq!(err.to_string(), "unknown sentiment label: UNKNOWN");
    }

    #[test]
    fn test_confidence_is_clamped() {
        let result = SentimentResult::new(SentimentLabel::Positive, "test").with_confidence(1.7);
        assert_eq!(result.confidence, Some(1.0));
        let result = SentimentResult::new(SentimentLabel::Negative, "test").with_confidence(-0.2);
        assert_eq!(result.confidence, Some(0.0));
    }

    #[test]
    fn test_suggestion_strings_are_fixed() {
        assert_eq!(Suggestion::BuyBias.to_string(), "buy bias");
        assert_eq!(Suggestion::SellBias.to_string(), "sell bias");
        assert_eq!(Suggestion::Hold.to_string(), "neutral/hold");
    }

    #[test]
    fn test_label_serde_uses_uppercase() {
        let json = serde_json::to_string(&SentimentLabel::Positive).unwrap();
        assert_eq!(json, "\"POSITIVE\"");
        let back: SentimentLabel = serde_json::from_str("\"NEUTRAL\"").unwrap();
        assert_eq!(back, SentimentLabel::Neutral);
    }
}
