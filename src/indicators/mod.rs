// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the derived series the engine
// computes from a validated OHLCV input. Every function returns a series
// aligned index-for-index with the input; entries before an indicator's
// minimum window are `None` — explicitly absent, never zero.

pub mod bollinger;
pub mod ema;
pub mod kdj;
pub mod ma;
pub mod macd;
pub mod rsi;
pub mod volume;

/// A named numeric sequence aligned with the input series. `None` marks an
/// undefined entry (warm-up prefix or degenerate value).
pub type DerivedSeries = Vec<Option<f64>>;
