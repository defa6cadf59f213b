// =============================================================================
// Recommendation Engine — count-based signal aggregation
// =============================================================================
//
// Takes the most recent signals from the merged date-descending list and
// reduces them to one action. One side has to outnumber the other by the
// configured ratio before the engine commits to BUY or SELL; anything less
// decisive is a HOLD. Stateless and pure — it operates on already-computed,
// in-memory data only.

use crate::types::{Recommendation, SignalType, TradingSignal};

/// Aggregate the `recent_window` most recent signals into a recommendation.
///
/// `merged` must already be sorted descending by date (see
/// [`crate::signals::merge_signals`]). Detectors never emit Hold/Wait, so the
/// tally is effectively buy + sell.
///
/// Confidence is `max(buy, sell) / (buy + sell)`, or a neutral 0.5 when no
/// signals were available at all.
pub fn recommend(
    merged: &[TradingSignal],
    recent_window: usize,
    decision_ratio: f64,
) -> Recommendation {
    let recent = &merged[..merged.len().min(recent_window)];

    let buy_count = recent
        .iter()
        .filter(|s| s.signal_type == SignalType::Buy)
        .count();
    let sell_count = recent
        .iter()
        .filter(|s| s.signal_type == SignalType::Sell)
        .count();

    let confidence = if buy_count + sell_count > 0 {
        buy_count.max(sell_count) as f64 / (buy_count + sell_count) as f64
    } else {
        0.5
    };

    let (action, reason) = if buy_count as f64 > decision_ratio * sell_count as f64 {
        (
            SignalType::Buy,
            format!("buy signals ({buy_count}) clearly outnumber sell signals ({sell_count})"),
        )
    } else if sell_count as f64 > decision_ratio * buy_count as f64 {
        (
            SignalType::Sell,
            format!("sell signals ({sell_count}) clearly outnumber buy signals ({buy_count})"),
        )
    } else {
        (
            SignalType::Hold,
            format!("signals balanced ({buy_count} buy / {sell_count} sell)"),
        )
    };

    Recommendation {
        action,
        confidence,
        reason,
        buy_count,
        sell_count,
        total_considered: recent.len(),
    }
}
