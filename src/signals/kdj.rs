// =============================================================================
// KDJ Detector — K-line threshold exits
// =============================================================================
//
// BUY  when the K line climbs back out of the oversold zone.
// SELL when the K line falls back out of the overbought zone.

use chrono::NaiveDate;

use crate::indicators::kdj::KdjSeries;
use crate::signals::crossover::{crossed_above, crossed_below};
use crate::types::{SignalType, TradingSignal};

const CONFIDENCE: f64 = 0.6;

/// Scan the K line for oversold rebounds and overbought pullbacks.
pub fn detect_kdj_signals(
    dates: &[NaiveDate],
    closes: &[f64],
    kdj: &KdjSeries,
    oversold: f64,
    overbought: f64,
) -> Vec<TradingSignal> {
    let mut signals = Vec::new();

    for t in 1..closes.len() {
        if crossed_above(kdj.k[t - 1], Some(oversold), kdj.k[t], Some(oversold)) {
            signals.push(TradingSignal {
                signal_type: SignalType::Buy,
                price: closes[t],
                date: dates[t],
                indicator_name: "KDJ rebound".into(),
                confidence: CONFIDENCE,
                reason: format!("K line rebounded from the oversold zone (below {oversold})"),
            });
        } else if crossed_below(kdj.k[t - 1], Some(overbought), kdj.k[t], Some(overbought)) {
            signals.push(TradingSignal {
                signal_type: SignalType::Sell,
                price: closes[t],
                date: dates[t],
                indicator_name: "KDJ pullback".into(),
                confidence: CONFIDENCE,
                reason: format!("K line fell back from the overbought zone (above {overbought})"),
            });
        }
    }

    signals
}
