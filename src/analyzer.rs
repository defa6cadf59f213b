// =============================================================================
// Analyzer — the engine pipeline
// =============================================================================
//
// One synchronous pass over a validated series:
//   1. Validate the input series (fail fast, before any computation)
//   2. Compute all derived indicator series (MA, EMA, MACD, RSI, Bollinger,
//      KDJ, volume)
//   3. Run every detector over its series
//   4. Merge signals (descending by date, stable ties)
//   5. Aggregate the most recent signals into a recommendation
//
// No I/O, no shared state, no retries: a run either completes over the full
// series or fails validation before computation begins.
// =============================================================================

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::AnalysisConfig;
use crate::indicators::bollinger::calculate_bollinger;
use crate::indicators::ema::calculate_ema;
use crate::indicators::kdj::calculate_kdj;
use crate::indicators::ma::calculate_ma;
use crate::indicators::macd::calculate_macd;
use crate::indicators::rsi::calculate_rsi;
use crate::indicators::volume::calculate_volume;
use crate::indicators::DerivedSeries;
use crate::recommendation::recommend;
use crate::series::{OhlcvSeries, ValidationError};
use crate::signals;
use crate::types::{Recommendation, SeriesStats, SignalSummary, TradingSignal};

/// Moving-average pair read by the MA crossover detector.
const MA_CROSS_SHORT: usize = 5;
const MA_CROSS_LONG: usize = 20;

/// Everything one analysis run produces. Created fresh per run; nothing is
/// mutated or carried across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Indicator name -> derived series aligned with the input. A `BTreeMap`
    /// keeps iteration and serialization order deterministic.
    pub indicators: BTreeMap<String, DerivedSeries>,
    /// All signals, descending by date, ties in detector evaluation order.
    pub signals: Vec<TradingSignal>,
    /// The most recent signals (at most the configured recent window).
    pub latest_signals: Vec<TradingSignal>,
    pub summary: SignalSummary,
    pub stats: SeriesStats,
    pub recommendation: Recommendation,
}

/// Run the full analysis pipeline over `series`.
///
/// The series is consumed read-only. Insufficient data is not an error: an
/// indicator that never warms up stays undefined, its detector stays silent,
/// and the result bundle is still returned (with a neutral HOLD when no
/// detector fired at all).
pub fn analyze(
    series: &OhlcvSeries,
    config: &AnalysisConfig,
) -> Result<AnalysisResult, ValidationError> {
    series.validate()?;

    let dates = series.dates();
    let closes = series.closes();
    let highs = series.highs();
    let lows = series.lows();
    let volumes = series.volumes();
    debug!(bars = series.len(), "series validated");

    // ── Indicators ───────────────────────────────────────────────────────
    let mut indicators: BTreeMap<String, DerivedSeries> = BTreeMap::new();

    for &period in &config.ma_periods {
        indicators.insert(format!("MA{period}"), calculate_ma(&closes, period));
    }

    let macd = calculate_macd(&closes, config.macd_fast, config.macd_slow, config.macd_signal);
    indicators.insert(
        format!("EMA{}", config.macd_fast),
        calculate_ema(&closes, config.macd_fast),
    );
    indicators.insert(
        format!("EMA{}", config.macd_slow),
        calculate_ema(&closes, config.macd_slow),
    );
    indicators.insert("MACD".into(), macd.macd.clone());
    indicators.insert("MACD_signal".into(), macd.signal.clone());
    indicators.insert("MACD_histogram".into(), macd.histogram.clone());

    let rsi = calculate_rsi(&closes, config.rsi_period);
    indicators.insert(format!("RSI{}", config.rsi_period), rsi.clone());

    let bands = calculate_bollinger(&closes, config.bollinger_period, config.bollinger_k);
    indicators.insert("BB_middle".into(), bands.middle.clone());
    indicators.insert("BB_upper".into(), bands.upper.clone());
    indicators.insert("BB_lower".into(), bands.lower.clone());
    indicators.insert("BB_bandwidth".into(), bands.bandwidth.clone());

    let kdj = calculate_kdj(&highs, &lows, &closes, config.kdj_period);
    indicators.insert("KDJ_K".into(), kdj.k.clone());
    indicators.insert("KDJ_D".into(), kdj.d.clone());
    indicators.insert("KDJ_J".into(), kdj.j.clone());

    let volume = calculate_volume(&volumes);
    indicators.insert("VOL_MA5".into(), volume.ma5);
    indicators.insert("VOL_MA10".into(), volume.ma10);
    indicators.insert("VOL_change_pct".into(), volume.change_pct);
    indicators.insert("VOL_ratio".into(), volume.ratio);

    debug!(indicators = indicators.len(), "derived series computed");

    // ── Detectors, in fixed evaluation order ─────────────────────────────
    let ma_short = calculate_ma(&closes, MA_CROSS_SHORT);
    let ma_long = calculate_ma(&closes, MA_CROSS_LONG);

    let mut all_signals = Vec::new();
    all_signals.extend(signals::ma::detect_ma_signals(
        &dates, &closes, &ma_short, &ma_long,
    ));
    all_signals.extend(signals::macd::detect_macd_signals(&dates, &closes, &macd));
    all_signals.extend(signals::rsi::detect_rsi_signals(
        &dates,
        &closes,
        &rsi,
        config.rsi_oversold,
        config.rsi_overbought,
    ));
    all_signals.extend(signals::bollinger::detect_bollinger_signals(
        &dates, &closes, &bands,
    ));
    all_signals.extend(signals::kdj::detect_kdj_signals(
        &dates,
        &closes,
        &kdj,
        config.kdj_oversold,
        config.kdj_overbought,
    ));

    let merged = signals::merge_signals(all_signals);
    let summary = SignalSummary::from_signals(&merged);
    let latest_signals: Vec<TradingSignal> = merged
        .iter()
        .take(config.recent_window)
        .cloned()
        .collect();

    // ── Recommendation ───────────────────────────────────────────────────
    let recommendation = recommend(&merged, config.recent_window, config.decision_ratio);

    let stats = series_stats(series);

    info!(
        bars = series.len(),
        signals = merged.len(),
        action = %recommendation.action,
        confidence = recommendation.confidence,
        "analysis complete"
    );

    Ok(AnalysisResult {
        indicators,
        signals: merged,
        latest_signals,
        summary,
        stats,
        recommendation,
    })
}

/// First-to-last price movement. The series is validated non-empty before
/// this is called.
fn series_stats(series: &OhlcvSeries) -> SeriesStats {
    let bars = series.bars();
    let first = bars[0].close;
    let last = bars[bars.len() - 1].close;
    SeriesStats {
        trading_days: bars.len(),
        current_price: last,
        price_change: last - first,
        price_change_pct: (last - first) / first * 100.0,
    }
}
