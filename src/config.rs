// =============================================================================
// Analysis Configuration — Tunable engine parameters with atomic save
// =============================================================================
//
// Every tunable constant of the engine lives here: indicator periods,
// detector thresholds and the recommendation decision policy. Hosts can load
// a JSON file, tweak fields and re-run without rebuilding.
//
// Persistence uses an atomic tmp + rename pattern to prevent corruption on
// crash. All fields carry `#[serde(default)]` so that adding new fields
// never breaks loading an older config file.
//
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_ma_periods() -> Vec<usize> {
    vec![5, 10, 20, 60]
}

fn default_macd_fast() -> usize {
    12
}

fn default_macd_slow() -> usize {
    26
}

fn default_macd_signal() -> usize {
    9
}

fn default_rsi_period() -> usize {
    14
}

fn default_rsi_oversold() -> f64 {
    30.0
}

fn default_rsi_overbought() -> f64 {
    70.0
}

fn default_bollinger_period() -> usize {
    20
}

fn default_bollinger_k() -> f64 {
    2.0
}

fn default_kdj_period() -> usize {
    9
}

fn default_kdj_oversold() -> f64 {
    20.0
}

fn default_kdj_overbought() -> f64 {
    80.0
}

fn default_recent_window() -> usize {
    10
}

fn default_decision_ratio() -> f64 {
    1.5
}

// =============================================================================
// AnalysisConfig
// =============================================================================

/// Tunable parameters for one analysis run.
///
/// Every field has a serde default so that older JSON files missing new
/// fields will still deserialise correctly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    // --- Indicator periods ---------------------------------------------------

    /// Simple moving-average windows computed into the result bundle.
    /// The MA crossover detector always reads the 5- and 20-bar averages.
    #[serde(default = "default_ma_periods")]
    pub ma_periods: Vec<usize>,

    /// MACD fast EMA period.
    #[serde(default = "default_macd_fast")]
    pub macd_fast: usize,

    /// MACD slow EMA period.
    #[serde(default = "default_macd_slow")]
    pub macd_slow: usize,

    /// MACD signal-line EMA period.
    #[serde(default = "default_macd_signal")]
    pub macd_signal: usize,

    /// RSI look-back (number of one-bar deltas averaged).
    #[serde(default = "default_rsi_period")]
    pub rsi_period: usize,

    /// Bollinger middle-band window.
    #[serde(default = "default_bollinger_period")]
    pub bollinger_period: usize,

    /// Bollinger band half-width in standard deviations.
    #[serde(default = "default_bollinger_k")]
    pub bollinger_k: f64,

    /// KDJ raw-stochastic look-back.
    #[serde(default = "default_kdj_period")]
    pub kdj_period: usize,

    // --- Detector thresholds -------------------------------------------------

    /// RSI level below which the market counts as oversold.
    #[serde(default = "default_rsi_oversold")]
    pub rsi_oversold: f64,

    /// RSI level above which the market counts as overbought.
    #[serde(default = "default_rsi_overbought")]
    pub rsi_overbought: f64,

    /// K level below which the market counts as oversold.
    #[serde(default = "default_kdj_oversold")]
    pub kdj_oversold: f64,

    /// K level above which the market counts as overbought.
    #[serde(default = "default_kdj_overbought")]
    pub kdj_overbought: f64,

    // --- Recommendation policy ----------------------------------------------

    /// How many of the most recent merged signals the recommendation
    /// considers.
    #[serde(default = "default_recent_window")]
    pub recent_window: usize,

    /// One side must outnumber the other by this ratio before the
    /// recommendation commits to BUY or SELL.
    #[serde(default = "default_decision_ratio")]
    pub decision_ratio: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ma_periods: default_ma_periods(),
            macd_fast: default_macd_fast(),
            macd_slow: default_macd_slow(),
            macd_signal: default_macd_signal(),
            rsi_period: default_rsi_period(),
            bollinger_period: default_bollinger_period(),
            bollinger_k: default_bollinger_k(),
            kdj_period: default_kdj_period(),
            rsi_oversold: default_rsi_oversold(),
            rsi_overbought: default_rsi_overbought(),
            kdj_oversold: default_kdj_oversold(),
            kdj_overbought: default_kdj_overbought(),
            recent_window: default_recent_window(),
            decision_ratio: default_decision_ratio(),
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read analysis config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse analysis config from {}", path.display()))?;

        info!(
            path = %path.display(),
            rsi_period = config.rsi_period,
            recent_window = config.recent_window,
            "analysis config loaded"
        );

        Ok(config)
    }

    /// Load from `path`, falling back to defaults (with a warning) when the
    /// file is missing or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            warn!(error = %e, "failed to load analysis config, using defaults");
            Self::default()
        })
    }

    /// Persist the current configuration to `path` using an atomic write
    /// (write to `.tmp`, then rename).
    ///
    /// This prevents corruption if the process crashes mid-write.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = serde_json::to_string_pretty(self)
            .context("failed to serialise analysis config to JSON")?;

        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp config to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp config to {}", path.display()))?;

        info!(path = %path.display(), "analysis config saved (atomic)");
        Ok(())
    }
}
