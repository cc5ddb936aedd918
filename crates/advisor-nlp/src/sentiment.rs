//! Sentiment classification

use advisor_core::{Result, SentimentLabel, SentimentResult, text};
use async_trait::async_trait;
use tracing::{info, warn};

/// Margin around a 0.5 probability treated as NEUTRAL
pub const DEFAULT_NEUTRAL_MARGIN: f64 = 0.1;

/// A sentiment classifier maps text to a `SentimentResult`
///
/// Classifiers can be expensive to construct (a loaded model, a configured
/// API client), so build one per process and inject it where the pipeline
/// needs it.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Classify a piece of text
    async fn classify(&self, text: &str) -> Result<SentimentResult>;

    /// Get the classifier name, recorded on every result it produces
    fn name(&self) -> &str;
}

/// Map a binary model output onto the three-value label set
///
/// Scores within `neutral_margin` of 0.5 are NEUTRAL; otherwise the raw
/// model label decides the direction (any label containing "NEG" is
/// NEGATIVE, everything else POSITIVE).
pub fn label_from_score(raw_label: &str, score: f64, neutral_margin: f64) -> SentimentLabel {
    if (score - 0.5).abs() <= neutral_margin {
        SentimentLabel::Neutral
    } else if raw_label.to_ascii_uppercase().contains("NEG") {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Positive
    }
}

const BULLISH: &[&str] = &[
    "gain", "gains", "gained", "rally", "rallied", "surge", "surged", "soar", "soared",
    "optimistic", "growth", "beat", "record", "profit", "profits", "strong", "upgrade",
    "bullish", "rose", "up",
];

const BEARISH: &[&str] = &[
    "loss", "losses", "fall", "fell", "drop", "dropped", "decline", "declined", "miss",
    "missed", "weak", "plunge", "plunged", "fear", "fears", "cut", "cuts", "downgrade",
    "bearish", "down",
];

/// Deterministic keyword-count classifier
///
/// Counts bullish versus bearish lexicon hits on word boundaries. The
/// majority side wins; a tie (including zero hits) is NEUTRAL. Confidence
/// is the majority share of all hits.
pub struct KeywordClassifier {}

impl KeywordClassifier {
    /// Create a new keyword classifier
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SentimentClassifier for KeywordClassifier {
    async fn classify(&self, input: &str) -> Result<SentimentResult> {
        let normalized = text::normalize(input);
        if normalized.is_empty() {
            warn!("empty text provided to sentiment classifier");
            return Ok(SentimentResult::new(SentimentLabel::Neutral, self.name())
                .with_confidence(0.0));
        }

        let lowered = normalized.to_lowercase();
        let mut bullish = 0usize;
        let mut bearish = 0usize;
        for token in lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            if BULLISH.contains(&token) {
                bullish += 1;
            } else if BEARISH.contains(&token) {
                bearish += 1;
            }
        }

        let total = bullish + bearish;
        let (label, confidence) = if total == 0 || bullish == bearish {
            (SentimentLabel::Neutral, 0.5)
        } else if bullish > bearish {
            (SentimentLabel::Positive, bullish as f64 / total as f64)
        } else {
            (SentimentLabel::Negative, bearish as f64 / total as f64)
        };

        info!(%label, confidence, bullish, bearish, "sentiment result");

        Ok(SentimentResult::new(label, self.name()).with_confidence(confidence))
    }

    fn name(&self) -> &str {
        "keyword-count"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_score_neutral_margin() {
        assert_eq!(
            label_from_score("POSITIVE", 0.55, DEFAULT_NEUTRAL_MARGIN),
            SentimentLabel::Neutral
        );
        assert_eq!(
            label_from_score("NEGATIVE", 0.45, DEFAULT_NEUTRAL_MARGIN),
            SentimentLabel::Neutral
        );
        // Exactly on the margin still counts as neutral
        assert_eq!(
            label_from_score("POSITIVE", 0.6, DEFAULT_NEUTRAL_MARGIN),
            SentimentLabel::Neutral
        );
    }

    #[test]
    fn test_label_from_score_direction() {
        assert_eq!(
            label_from_score("NEGATIVE", 0.95, DEFAULT_NEUTRAL_MARGIN),
            SentimentLabel::Negative
        );
        assert_eq!(
            label_from_score("neg", 0.95, DEFAULT_NEUTRAL_MARGIN),
            SentimentLabel::Negative
        );
        assert_eq!(
            label_from_score("POSITIVE", 0.95, DEFAULT_NEUTRAL_MARGIN),
            SentimentLabel::Positive
        );
        assert_eq!(
            label_from_score("LABEL_1", 0.95, DEFAULT_NEUTRAL_MARGIN),
            SentimentLabel::Positive
        );
    }

    #[tokio::test]
    async fn test_bullish_text_is_positive() {
        let classifier = KeywordClassifier::new();
        let result = classifier
            .classify("Stock rallied today. Analysts are optimistic.")
            .await
            .unwrap();
        assert_eq!(result.label, SentimentLabel::Positive);
        assert_eq!(result.confidence, Some(1.0));
        assert_eq!(result.model, "keyword-count");
    }

    #[tokio::test]
    async fn test_bearish_text_is_negative() {
        let classifier = KeywordClassifier::new();
        let result = classifier
            .classify("Shares plunged as losses mounted and fears grew.")
            .await
            .unwrap();
        assert_eq!(result.label, SentimentLabel::Negative);
    }

    #[tokio::test]
    async fn test_mixed_text_is_neutral() {
        let classifier = KeywordClassifier::new();
        let result = classifier
            .classify("Profits rose but fears of a decline remain, shares fell then gained.")
            .await
            .unwrap();
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.confidence, Some(0.5));
    }

    #[tokio::test]
    async fn test_no_hits_is_neutral() {
        let classifier = KeywordClassifier::new();
        let result = classifier
            .classify("The committee met on Tuesday.")
            .await
            .unwrap();
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.confidence, Some(0.5));
    }

    #[tokio::test]
    async fn test_empty_text_is_neutral_with_zero_confidence() {
        let classifier = KeywordClassifier::new();
        let result = classifier.classify("   ").await.unwrap();
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.confidence, Some(0.0));
    }

    #[tokio::test]
    async fn test_idempotent() {
        let classifier = KeywordClassifier::new();
        let a = classifier.classify("Stocks rallied.").await.unwrap();
        let b = classifier.classify("Stocks rallied.").await.unwrap();
        assert_eq!(a, b);
    }
}
