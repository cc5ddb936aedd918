//! Market data sources

use crate::error::{MarketError, Result};
use async_trait::async_trait;
use chrono::Utc;
use time::OffsetDateTime;
use tracing::debug;
use yahoo_finance_api as yahoo;

/// A source of historical close prices
///
/// Implementations return closing prices oldest-first so the return
/// calculation can slice the most recent window off the end.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch closing prices for `symbol` over `range` (e.g. "1mo"),
    /// oldest first
    async fn close_history(&self, symbol: &str, range: &str) -> Result<Vec<f64>>;

    /// Get the source name (e.g., "yahoo")
    fn name(&self) -> &str;
}

/// Translate a range string into a day count
pub(crate) fn range_days(range: &str) -> Result<i64> {
    match range {
        "5d" => Ok(5),
        "1mo" => Ok(30),
        "3mo" => Ok(90),
        "6mo" => Ok(180),
        "1y" => Ok(365),
        other => Err(MarketError::InvalidRange(other.to_string())),
    }
}

/// Yahoo Finance market data source
///
/// Convenient for demos because it does not require an API key.
pub struct YahooSource {}

impl YahooSource {
    /// Create a new Yahoo Finance source
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for YahooSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataSource for YahooSource {
    async fn close_history(&self, symbol: &str, range: &str) -> Result<Vec<f64>> {
        let provider =
            yahoo::YahooConnector::new().map_err(|e| MarketError::YahooFinance(e.to_string()))?;

        let end = Utc::now();
        let start = end - chrono::Duration::days(range_days(range)?);

        // Convert chrono DateTime to time OffsetDateTime
        let start_odt = OffsetDateTime::from_unix_timestamp(start.timestamp())
            .map_err(|e| MarketError::YahooFinance(format!("Invalid start timestamp: {e}")))?;
        let end_odt = OffsetDateTime::from_unix_timestamp(end.timestamp())
            .map_err(|e| MarketError::YahooFinance(format!("Invalid end timestamp: {e}")))?;

        let response = provider
            .get_quote_history(symbol, start_odt, end_odt)
            .await
            .map_err(|e| MarketError::YahooFinance(e.to_string()))?;

        let quotes = response
            .quotes()
            .map_err(|e| MarketError::YahooFinance(e.to_string()))?;

        if quotes.is_empty() {
            return Err(MarketError::DataUnavailable {
                symbol: symbol.to_string(),
                range: range.to_string(),
            });
        }

        debug!(symbol, range, rows = quotes.len(), "retrieved price history");

        Ok(quotes.iter().map(|q| q.close).collect())
    }

    fn name(&self) -> &str {
        "yahoo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_days() {
        assert_eq!(range_days("5d").unwrap(), 5);
        assert_eq!(range_days("1mo").unwrap(), 30);
        assert_eq!(range_days("1y").unwrap(), 365);
        assert!(range_days("2w").is_err());
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_close_history() {
        let source = YahooSource::new();
        let closes = source.close_history("AAPL", "1mo").await.unwrap();
        assert!(!closes.is_empty());
        assert!(closes.iter().all(|c| *c > 0.0));
    }
}
