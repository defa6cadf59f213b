// =============================================================================
// stock-signals — technical indicator and trading-signal engine
// =============================================================================
//
// Ingests a daily OHLCV series and produces derived indicator series
// (moving averages, MACD, RSI, Bollinger Bands, KDJ, volume), discrete
// crossover/threshold trading signals, and one aggregated recommendation.
//
// The engine is a pure value transform: data acquisition, symbol
// normalization, persistence and presentation all live with the host
// application. Feed it a validated series through [`analyze`], get back a
// result bundle of derived series, signals and one recommendation.
// =============================================================================

pub mod analyzer;
pub mod config;
pub mod indicators;
pub mod recommendation;
pub mod series;
pub mod signals;
pub mod types;

pub use analyzer::{analyze, AnalysisResult};
pub use config::AnalysisConfig;
pub use indicators::DerivedSeries;
pub use series::{Bar, OhlcvSeries, ValidationError};
pub use types::{Recommendation, SeriesStats, SignalSummary, SignalType, TradingSignal};
