// =============================================================================
// Moving Average Convergence / Divergence (MACD)
// =============================================================================
//
// MACD line  = EMA(fast) - EMA(slow)
// Signal     = EMA(signal_period) of the MACD line
// Histogram  = MACD - Signal
//
// All three lines inherit the EMA's no-warm-up property and are defined at
// every index of the input.

use crate::indicators::ema::ema_scan;
use crate::indicators::DerivedSeries;

/// The three MACD series, each aligned with the input.
#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub macd: DerivedSeries,
    pub signal: DerivedSeries,
    pub histogram: DerivedSeries,
}

/// Compute MACD over `closes` with the given EMA periods.
///
/// # Edge cases
/// - any period == 0, or empty input => all three series entirely `None`
pub fn calculate_macd(
    closes: &[f64],
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> MacdSeries {
    let n = closes.len();
    if n == 0 || fast == 0 || slow == 0 || signal_period == 0 {
        return MacdSeries {
            macd: vec![None; n],
            signal: vec![None; n],
            histogram: vec![None; n],
        };
    }

    let ema_fast = ema_scan(closes, fast);
    let ema_slow = ema_scan(closes, slow);

    let macd_line: Vec<f64> = ema_fast
        .iter()
        .zip(ema_slow.iter())
        .map(|(f, s)| f - s)
        .collect();
    let signal_line = ema_scan(&macd_line, signal_period);

    let histogram: Vec<f64> = macd_line
        .iter()
        .zip(signal_line.iter())
        .map(|(m, s)| m - s)
        .collect();

    MacdSeries {
        macd: macd_line.into_iter().map(Some).collect(),
        signal: signal_line.into_iter().map(Some).collect(),
        histogram: histogram.into_iter().map(Some).collect(),
    }
}
