//! The decision rule

use advisor_core::{
    Decision, MarketSnapshot, Result, SentimentLabel, SentimentResult, Suggestion, ValidationError,
};
use tracing::info;

const DISCLAIMER: &str =
    "This is for educational purposes only and not real investment advice.";

/// A decision rule maps (market snapshot, sentiment) to a `Decision`
///
/// Implementations are pure and total: every finite return and every label
/// maps to exactly one suggestion.
pub trait DecisionRule: Send + Sync {
    /// Decide a suggestion from the two rationale inputs
    fn decide(&self, snapshot: &MarketSnapshot, sentiment: &SentimentResult) -> Result<Decision>;

    /// Get the rule name
    fn name(&self) -> &str;
}

/// Sign-agreement decision table
///
/// - POSITIVE sentiment and a non-negative return: buy bias.
/// - NEGATIVE sentiment and a negative return: sell bias.
/// - Everything else (NEUTRAL, or sentiment and return disagreeing in
///   direction): neutral/hold.
///
/// Sentiment confidence is carried on the input for audit but never read;
/// there are no magnitude thresholds.
pub struct SignDecisionRule {}

impl SignDecisionRule {
    /// Create the reference rule
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for SignDecisionRule {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionRule for SignDecisionRule {
    fn decide(&self, snapshot: &MarketSnapshot, sentiment: &SentimentResult) -> Result<Decision> {
        let recent_return = snapshot.recent_return;
        if !recent_return.is_finite() {
            return Err(ValidationError::NonFiniteReturn.into());
        }

        let label = sentiment.label;
        let pct = recent_return * 100.0;
        let (suggestion, rationale) = match label {
            SentimentLabel::Positive if recent_return >= 0.0 => (
                Suggestion::BuyBias,
                format!(
                    "The sentiment is positive and recent returns are non-negative \
                     (approx. {pct:.2}%). In this toy model, we interpret this as a \
                     bullish signal."
                ),
            ),
            SentimentLabel::Negative if recent_return < 0.0 => (
                Suggestion::SellBias,
                format!(
                    "The sentiment is negative and recent returns are negative \
                     (approx. {pct:.2}%). In this toy model, we interpret this as a \
                     bearish signal."
                ),
            ),
            _ => (
                Suggestion::Hold,
                format!(
                    "The sentiment ({label}) and recent returns (approx. {pct:.2}%) \
                     do not agree on a clear directional signal."
                ),
            ),
        };

        info!(%suggestion, %label, recent_return, "decision made");

        Ok(Decision {
            suggestion,
            recent_return,
            label,
            rationale: format!("{rationale} {DISCLAIMER}"),
        })
    }

    fn name(&self) -> &str {
        "sign-agreement"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(recent_return: f64) -> MarketSnapshot {
        MarketSnapshot {
            ticker: "SPY".to_string(),
            recent_return,
        }
    }

    fn sentiment(label: SentimentLabel) -> SentimentResult {
        SentimentResult::new(label, "test")
    }

    fn decide(recent_return: f64, label: SentimentLabel) -> Decision {
        SignDecisionRule::new()
            .decide(&snapshot(recent_return), &sentiment(label))
            .unwrap()
    }

    #[test]
    fn test_positive_and_gain_is_buy() {
        let decision = decide(1.5, SentimentLabel::Positive);
        assert_eq!(decision.suggestion, Suggestion::BuyBias);
        assert_eq!(decision.suggestion.to_string(), "buy bias");
        assert_eq!(decision.label, SentimentLabel::Positive);
        assert_eq!(decision.recent_return, 1.5);
    }

    #[test]
    fn test_negative_and_loss_is_sell() {
        let decision = decide(-2.0, SentimentLabel::Negative);
        assert_eq!(decision.suggestion, Suggestion::SellBias);
        assert_eq!(decision.suggestion.to_string(), "sell bias");
    }

    #[test]
    fn test_direction_mismatch_is_hold() {
        // Spec example: positive return, negative sentiment
        let decision = decide(0.3, SentimentLabel::Negative);
        assert_eq!(decision.suggestion, Suggestion::Hold);
        assert_eq!(decision.suggestion.to_string(), "neutral/hold");

        let decision = decide(-0.3, SentimentLabel::Positive);
        assert_eq!(decision.suggestion, Suggestion::Hold);
    }

    #[test]
    fn test_zero_return_counts_as_non_negative() {
        assert_eq!(
            decide(0.0, SentimentLabel::Positive).suggestion,
            Suggestion::BuyBias
        );
        // Zero is not negative, so negative sentiment at zero holds
        assert_eq!(
            decide(0.0, SentimentLabel::Negative).suggestion,
            Suggestion::Hold
        );
    }

    #[test]
    fn test_table_is_total() {
        // Every (sign, label) combination maps to exactly one suggestion
        for ret in [-1.0, 0.0, 1.0] {
            for label in [
                SentimentLabel::Positive,
                SentimentLabel::Negative,
                SentimentLabel::Neutral,
            ] {
                let decision = decide(ret, label);
                assert!(matches!(
                    decision.suggestion,
                    Suggestion::BuyBias | Suggestion::SellBias | Suggestion::Hold
                ));
            }
        }
    }

    #[test]
    fn test_neutral_always_holds() {
        for ret in [-5.0, 0.0, 5.0] {
            assert_eq!(decide(ret, SentimentLabel::Neutral).suggestion, Suggestion::Hold);
        }
    }

    #[test]
    fn test_non_finite_return_is_rejected() {
        let rule = SignDecisionRule::new();
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = rule
                .decide(&snapshot(bad), &sentiment(SentimentLabel::Positive))
                .unwrap_err();
            assert_eq!(err.to_string(), "non-finite return");
        }
    }

    #[test]
    fn test_idempotent() {
        let a = decide(0.02, SentimentLabel::Positive);
        let b = decide(0.02, SentimentLabel::Positive);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rationale_carries_disclaimer() {
        let decision = decide(0.02, SentimentLabel::Positive);
        assert!(decision.rationale.ends_with(DISCLAIMER));
    }
}
