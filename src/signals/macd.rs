// =============================================================================
// MACD Crossover Detector
// =============================================================================
//
// BUY  when the MACD line crosses above its signal line.
// SELL when the MACD line crosses below its signal line.

use chrono::NaiveDate;

use crate::indicators::macd::MacdSeries;
use crate::signals::crossover::{crossed_above, crossed_below};
use crate::types::{SignalType, TradingSignal};

const CONFIDENCE: f64 = 0.8;

/// Scan the MACD line against its signal line for crossovers.
pub fn detect_macd_signals(
    dates: &[NaiveDate],
    closes: &[f64],
    macd: &MacdSeries,
) -> Vec<TradingSignal> {
    let mut signals = Vec::new();

    for t in 1..closes.len() {
        if crossed_above(
            macd.macd[t - 1],
            macd.signal[t - 1],
            macd.macd[t],
            macd.signal[t],
        ) {
            signals.push(TradingSignal {
                signal_type: SignalType::Buy,
                price: closes[t],
                date: dates[t],
                indicator_name: "MACD golden cross".into(),
                confidence: CONFIDENCE,
                reason: "MACD line crossed above its signal line".into(),
            });
        } else if crossed_below(
            macd.macd[t - 1],
            macd.signal[t - 1],
            macd.macd[t],
            macd.signal[t],
        ) {
            signals.push(TradingSignal {
                signal_type: SignalType::Sell,
                price: closes[t],
                date: dates[t],
                indicator_name: "MACD death cross".into(),
                confidence: CONFIDENCE,
                reason: "MACD line crossed below its signal line".into(),
            });
        }
    }

    signals
}
