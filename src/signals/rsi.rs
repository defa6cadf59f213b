// =============================================================================
// RSI Threshold Detector
// =============================================================================
//
// BUY  when the RSI climbs back out of the oversold zone.
// SELL when the RSI falls back out of the overbought zone.
//
// Exits, not entries: sitting deep in either zone emits nothing — only the
// bar that leaves it does.

use chrono::NaiveDate;

use crate::indicators::DerivedSeries;
use crate::signals::crossover::{crossed_above, crossed_below};
use crate::types::{SignalType, TradingSignal};

const CONFIDENCE: f64 = 0.6;

/// Scan the RSI series for oversold rebounds and overbought pullbacks.
pub fn detect_rsi_signals(
    dates: &[NaiveDate],
    closes: &[f64],
    rsi: &DerivedSeries,
    oversold: f64,
    overbought: f64,
) -> Vec<TradingSignal> {
    let mut signals = Vec::new();

    for t in 1..closes.len() {
        if crossed_above(rsi[t - 1], Some(oversold), rsi[t], Some(oversold)) {
            signals.push(TradingSignal {
                signal_type: SignalType::Buy,
                price: closes[t],
                date: dates[t],
                indicator_name: "RSI rebound".into(),
                confidence: CONFIDENCE,
                reason: format!("RSI rebounded from the oversold zone ({oversold})"),
            });
        } else if crossed_below(rsi[t - 1], Some(overbought), rsi[t], Some(overbought)) {
            signals.push(TradingSignal {
                signal_type: SignalType::Sell,
                price: closes[t],
                date: dates[t],
                indicator_name: "RSI pullback".into(),
                confidence: CONFIDENCE,
                reason: format!("RSI fell back from the overbought zone ({overbought})"),
            });
        }
    }

    signals
}
