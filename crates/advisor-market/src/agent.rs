//! Stock data agent: close history in, market snapshot out

use crate::config::MarketConfig;
use crate::error::MarketError;
use crate::returns::recent_return;
use crate::source::{MarketDataSource, YahooSource};
use advisor_core::MarketSnapshot;
use std::sync::Arc;
use tracing::info;

/// Agent responsible for producing a `MarketSnapshot` for a ticker
///
/// Fetches a close-price history from its `MarketDataSource` and computes
/// the fractional return over the configured lookback window. A non-finite
/// result (degenerate price data) is rejected as a validation error by the
/// `MarketSnapshot` constructor.
pub struct StockDataAgent {
    source: Arc<dyn MarketDataSource>,
    config: MarketConfig,
}

impl StockDataAgent {
    /// Create an agent over an explicit data source
    pub fn new(source: Arc<dyn MarketDataSource>, config: MarketConfig) -> Self {
        Self { source, config }
    }

    /// Create an agent backed by Yahoo Finance
    pub fn yahoo(config: MarketConfig) -> Self {
        Self::new(Arc::new(YahooSource::new()), config)
    }

    /// Fetch history and compute the snapshot for `ticker`
    pub async fn snapshot(&self, ticker: &str) -> advisor_core::Result<MarketSnapshot> {
        let closes = self
            .source
            .close_history(ticker, &self.config.range)
            .await
            .map_err(advisor_core::Error::from)?;

        let ret = recent_return(&closes, self.config.lookback).ok_or_else(|| {
            advisor_core::Error::from(MarketError::NotEnoughHistory {
                symbol: ticker.to_string(),
                rows: closes.len(),
                lookback: self.config.lookback,
            })
        })?;

        let snapshot = MarketSnapshot::new(ticker, ret)?;
        info!(
            ticker,
            recent_return = snapshot.recent_return,
            source = self.source.name(),
            "market snapshot ready"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use async_trait::async_trait;

    struct FixedSource {
        closes: Vec<f64>,
    }

    #[async_trait]
    impl MarketDataSource for FixedSource {
        async fn close_history(&self, _symbol: &str, _range: &str) -> Result<Vec<f64>> {
            Ok(self.closes.clone())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn agent_with(closes: Vec<f64>, lookback: usize) -> StockDataAgent {
        StockDataAgent::new(
            Arc::new(FixedSource { closes }),
            MarketConfig::default().with_lookback(lookback),
        )
    }

    #[tokio::test]
    async fn test_snapshot_computes_window_return() {
        let agent = agent_with(vec![90.0, 100.0, 101.0, 99.0, 102.0, 103.0, 105.0], 5);
        let snapshot = agent.snapshot("SPY").await.unwrap();
        assert_eq!(snapshot.ticker, "SPY");
        assert!((snapshot.recent_return - 0.05).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_snapshot_fails_on_short_history() {
        let agent = agent_with(vec![100.0, 101.0], 5);
        let err = agent.snapshot("SPY").await.unwrap_err();
        assert!(err.to_string().contains("not enough history"));
    }

    #[tokio::test]
    async fn test_snapshot_rejects_non_finite_return() {
        // Zero start price makes the return infinite
        let agent = agent_with(vec![0.0, 10.0], 1);
        let err = agent.snapshot("SPY").await.unwrap_err();
        assert_eq!(err.to_string(), "non-finite return");
    }
}
