//! Error types for market data operations

use thiserror::Error;

/// Result type alias for market data operations
pub type Result<T> = std::result::Result<T, MarketError>;

/// Market data specific errors
#[derive(Debug, Error)]
pub enum MarketError {
    /// Yahoo Finance API error
    #[error("Yahoo Finance error: {0}")]
    YahooFinance(String),

    /// No data returned for the requested symbol
    #[error("no data returned for {symbol} over {range}")]
    DataUnavailable {
        symbol: String,
        range: String,
    },

    /// History too short for the requested lookback window
    #[error("not enough history for {symbol}: {rows} rows for lookback {lookback}")]
    NotEnoughHistory {
        symbol: String,
        rows: usize,
        lookback: usize,
    },

    /// Unsupported history range string
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convert MarketError into the shared pipeline error
impl From<MarketError> for advisor_core::Error {
    fn from(err: MarketError) -> Self {
        advisor_core::Error::Market(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MarketError::DataUnavailable {
            symbol: "AAPL".to_string(),
            range: "1mo".to_string(),
        };
        assert_eq!(err.to_string(), "no data returned for AAPL over 1mo");

        let err = MarketError::NotEnoughHistory {
            symbol: "AAPL".to_string(),
            rows: 3,
            lookback: 5,
        };
        assert_eq!(
            err.to_string(),
            "not enough history for AAPL: 3 rows for lookback 5"
        );
    }

    #[test]
    fn test_error_conversion() {
        let market_err = MarketError::InvalidRange("2w".to_string());
        let core_err: advisor_core::Error = market_err.into();
        match core_err {
            advisor_core::Error::Market(msg) => assert!(msg.contains("invalid range")),
            other => panic!("expected Market variant, got {other:?}"),
        }
    }
}
