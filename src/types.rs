// =============================================================================
// Shared types used across the signal engine
// =============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Discrete signal classification.
///
/// Detectors only ever emit `Buy` or `Sell`; `Hold` and `Wait` arise from
/// aggregation (no signals, or a balanced mix).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalType {
    Buy,
    Sell,
    Hold,
    Wait,
}

impl std::fmt::Display for SignalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
            Self::Hold => write!(f, "HOLD"),
            Self::Wait => write!(f, "WAIT"),
        }
    }
}

/// A single discrete trading signal emitted by one detector at one bar.
///
/// Immutable once created. The same bar may carry signals from several
/// detectors; each is an independent record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingSignal {
    pub signal_type: SignalType,
    /// Close price of the bar that triggered the signal.
    pub price: f64,
    pub date: NaiveDate,
    /// Which detector produced this signal, e.g. "MA golden cross".
    pub indicator_name: String,
    /// Fixed detector-specific weight in [0, 1] — relative trust, not a
    /// statistical probability.
    pub confidence: f64,
    pub reason: String,
}

/// The aggregated verdict over the most recent signals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: SignalType,
    /// max(buy, sell) / (buy + sell), or 0.5 when no signals were available.
    pub confidence: f64,
    pub reason: String,
    pub buy_count: usize,
    pub sell_count: usize,
    /// How many recent signals were actually considered (<= configured window).
    pub total_considered: usize,
}

/// Counts over the *full* merged signal list (not just the recent window).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignalSummary {
    pub total: usize,
    pub buy: usize,
    pub sell: usize,
}

impl SignalSummary {
    pub fn from_signals(signals: &[TradingSignal]) -> Self {
        let buy = signals
            .iter()
            .filter(|s| s.signal_type == SignalType::Buy)
            .count();
        let sell = signals
            .iter()
            .filter(|s| s.signal_type == SignalType::Sell)
            .count();
        Self {
            total: signals.len(),
            buy,
            sell,
        }
    }
}

/// First-to-last price movement over the analyzed range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesStats {
    pub trading_days: usize,
    pub current_price: f64,
    pub price_change: f64,
    pub price_change_pct: f64,
}
