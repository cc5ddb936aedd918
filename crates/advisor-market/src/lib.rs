//! Market data stage for advisor-rs
//!
//! Provides the StockDataAgent: fetches a close-price history for a ticker
//! and turns it into a `MarketSnapshot` carrying the fractional return over
//! a configurable lookback window.

pub mod agent;
pub mod config;
pub mod error;
pub mod returns;
pub mod source;

pub use agent::StockDataAgent;
pub use config::MarketConfig;
pub use error::{MarketError, Result};
pub use returns::recent_return;
pub use source::{MarketDataSource, YahooSource};
