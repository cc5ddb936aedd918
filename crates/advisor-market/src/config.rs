//! Configuration for market data retrieval

use crate::error::{MarketError, Result};
use crate::source::range_days;
use serde::{Deserialize, Serialize};

/// Configuration for the stock data stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    /// History range to fetch, e.g. "5d", "1mo", "3mo", "6mo", "1y"
    pub range: String,

    /// Number of trading rows to look back for the return calculation
    pub lookback: usize,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            range: "1mo".to_string(),
            lookback: 5,
        }
    }
}

impl MarketConfig {
    /// Override the history range
    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = range.into();
        self
    }

    /// Override the lookback window
    pub fn with_lookback(mut self, lookback: usize) -> Self {
        self.lookback = lookback;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.lookback == 0 {
            return Err(MarketError::Config(
                "lookback must be greater than 0".to_string(),
            ));
        }
        // Rejects unsupported range strings up front
        range_days(&self.range)?;
        Ok(())
    }
}
