// =============================================================================
// MA Crossover Detector — golden cross / death cross
// =============================================================================
//
// BUY  when MA5 crosses above MA20 (golden cross).
// SELL when MA5 crosses below MA20 (death cross).

use chrono::NaiveDate;

use crate::indicators::DerivedSeries;
use crate::signals::crossover::{crossed_above, crossed_below};
use crate::types::{SignalType, TradingSignal};

const CONFIDENCE: f64 = 0.7;

/// Scan the short/long moving averages for crossovers.
///
/// Emits at most one signal per index, in ascending date order. Indices where
/// either average is still undefined are skipped.
pub fn detect_ma_signals(
    dates: &[NaiveDate],
    closes: &[f64],
    ma_short: &DerivedSeries,
    ma_long: &DerivedSeries,
) -> Vec<TradingSignal> {
    let mut signals = Vec::new();

    for t in 1..closes.len() {
        if crossed_above(ma_short[t - 1], ma_long[t - 1], ma_short[t], ma_long[t]) {
            signals.push(TradingSignal {
                signal_type: SignalType::Buy,
                price: closes[t],
                date: dates[t],
                indicator_name: "MA golden cross".into(),
                confidence: CONFIDENCE,
                reason: "MA5 crossed above MA20, forming a golden cross".into(),
            });
        } else if crossed_below(ma_short[t - 1], ma_long[t - 1], ma_short[t], ma_long[t]) {
            signals.push(TradingSignal {
                signal_type: SignalType::Sell,
                price: closes[t],
                date: dates[t],
                indicator_name: "MA death cross".into(),
                confidence: CONFIDENCE,
                reason: "MA5 crossed below MA20, forming a death cross".into(),
            });
        }
    }

    signals
}
