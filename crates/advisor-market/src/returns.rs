//! Recent-return calculation over a close-price history

/// Compute a simple fractional return over a recent lookback window.
///
/// Uses the last `lookback + 1` closes: `(end - start) / start`. Returns
/// `None` when the history has fewer rows than that.
///
/// 0.02 means a 2% gain, -0.01 a 1% loss.
pub fn recent_return(closes: &[f64], lookback: usize) -> Option<f64> {
    if closes.len() < lookback + 1 {
        return None;
    }
    let window = &closes[closes.len() - (lookback + 1)..];
    let start = window[0];
    let end = window[window.len() - 1];
    Some((end - start) / start)
}
