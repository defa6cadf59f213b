// =============================================================================
// Signals Module
// =============================================================================
//
// Crossover / threshold detectors over the derived indicator series. Each
// detector performs one forward pass comparing bar t-1 to bar t; it never
// looks further back than one bar, and silently skips any index where a
// compared value is undefined. Detectors emit only Buy and Sell — Hold and
// Wait exist solely at the aggregation layer.

pub mod bollinger;
pub mod crossover;
pub mod kdj;
pub mod ma;
pub mod macd;
pub mod rsi;

use crate::types::TradingSignal;

/// Merge per-detector signal lists for presentation: descending by date,
/// ties kept in detector evaluation order (the sort is stable and each
/// detector emits in ascending date order).
pub fn merge_signals(mut signals: Vec<TradingSignal>) -> Vec<TradingSignal> {
    signals.sort_by(|a, b| b.date.cmp(&a.date));
    signals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SignalType;
    use chrono::NaiveDate;

    fn signal(day: u32, name: &str) -> TradingSignal {
        TradingSignal {
            signal_type: SignalType::Buy,
            price: 10.0,
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            indicator_name: name.into(),
            confidence: 0.7,
            reason: "test".into(),
        }
    }

    #[test]
    fn merged_signals_descend_by_date() {
        let merged = merge_signals(vec![signal(3, "a"), signal(9, "b"), signal(5, "c")]);
        let days: Vec<u32> = merged
            .iter()
            .map(|s| {
                use chrono::Datelike;
                s.date.day()
            })
            .collect();
        assert_eq!(days, vec![9, 5, 3]);
    }

    #[test]
    fn same_date_keeps_insertion_order() {
        // Two detectors firing on the same bar: the one appended first must
        // stay first after the merge (stable sort).
        let merged = merge_signals(vec![
            signal(5, "ma"),
            signal(7, "ma"),
            signal(5, "macd"),
            signal(5, "rsi"),
        ]);
        let names: Vec<&str> = merged.iter().map(|s| s.indicator_name.as_str()).collect();
        assert_eq!(names, vec!["ma", "ma", "macd", "rsi"]);
    }
}
