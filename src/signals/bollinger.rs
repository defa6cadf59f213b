// =============================================================================
// Bollinger Band Detector
// =============================================================================
//
// BUY  when the close rebounds up through the *previous* bar's lower band
//      after sitting at or below it.
// SELL when the close reaches the upper band.
//
// The SELL side is a touch test, not a crossing, so a sustained ride along
// the upper band emits on every qualifying bar. A zero-width band (flat
// window, zero deviation) carries no information and emits nothing —
// otherwise a perfectly flat series would "touch" its own band forever.

use chrono::NaiveDate;

use crate::indicators::bollinger::BollingerSeries;
use crate::types::{SignalType, TradingSignal};

const BUY_CONFIDENCE: f64 = 0.6;
const SELL_CONFIDENCE: f64 = 0.5;

/// Scan closes against the Bollinger envelope.
pub fn detect_bollinger_signals(
    dates: &[NaiveDate],
    closes: &[f64],
    bands: &BollingerSeries,
) -> Vec<TradingSignal> {
    let mut signals = Vec::new();

    for t in 1..closes.len() {
        let rebound = match bands.lower[t - 1] {
            Some(prev_lower) => closes[t - 1] <= prev_lower && closes[t] > prev_lower,
            None => false,
        };

        if rebound {
            signals.push(TradingSignal {
                signal_type: SignalType::Buy,
                price: closes[t],
                date: dates[t],
                indicator_name: "Bollinger rebound".into(),
                confidence: BUY_CONFIDENCE,
                reason: "price rebounded off the lower Bollinger band".into(),
            });
            continue;
        }

        if let (Some(upper), Some(lower)) = (bands.upper[t], bands.lower[t]) {
            if upper > lower && closes[t] >= upper {
                signals.push(TradingSignal {
                    signal_type: SignalType::Sell,
                    price: closes[t],
                    date: dates[t],
                    indicator_name: "Bollinger overbought".into(),
                    confidence: SELL_CONFIDENCE,
                    reason: "price touched the upper Bollinger band".into(),
                });
            }
        }
    }

    signals
}
