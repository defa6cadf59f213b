// =============================================================================
// OHLCV Series — input data model and validation
// =============================================================================
//
// The engine consumes one already-materialized daily OHLCV series per run.
// Validation happens exactly once, at this boundary; everything downstream
// can assume strictly ascending unique dates, positive finite prices and
// non-negative finite volumes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily price bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// The first data-model invariant a candidate series violates.
///
/// Raised before any indicator computation; never retried inside the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("series contains no bars")]
    EmptySeries,

    #[error("duplicate date {date} at index {index}")]
    DuplicateDate { index: usize, date: NaiveDate },

    #[error("non-ascending date {date} at index {index}")]
    NonAscendingDate { index: usize, date: NaiveDate },

    #[error("non-positive {field} {value} at index {index}")]
    NonPositivePrice {
        index: usize,
        field: &'static str,
        value: f64,
    },

    #[error("negative volume {value} at index {index}")]
    NegativeVolume { index: usize, value: f64 },

    #[error("non-finite {field} at index {index}")]
    NonFiniteValue { index: usize, field: &'static str },
}

/// An ordered daily OHLCV series, strictly ascending by date.
///
/// Owned by the caller and consumed read-only; the engine only ever produces
/// new derived data from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OhlcvSeries {
    bars: Vec<Bar>,
}

impl OhlcvSeries {
    /// Wrap a bar list without validating it. Call [`validate`] before
    /// handing the series to the engine.
    ///
    /// [`validate`]: OhlcvSeries::validate
    pub fn new(bars: Vec<Bar>) -> Self {
        Self { bars }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Column views. Derived-series computations work on these slices so the
    /// indicator functions stay independent of the bar layout.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.high).collect()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.low).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }

    /// Check every data-model invariant and report the first violation in
    /// scan order. Success returns the series unchanged; no side effects.
    ///
    /// Per-bar check order: date ordering against the previous bar, then
    /// open/high/low/close (finite, positive), then volume (finite,
    /// non-negative).
    pub fn validate(&self) -> Result<&Self, ValidationError> {
        if self.bars.is_empty() {
            return Err(ValidationError::EmptySeries);
        }

        let mut prev_date: Option<NaiveDate> = None;
        for (index, bar) in self.bars.iter().enumerate() {
            if let Some(prev) = prev_date {
                if bar.date == prev {
                    return Err(ValidationError::DuplicateDate {
                        index,
                        date: bar.date,
                    });
                }
                if bar.date < prev {
                    return Err(ValidationError::NonAscendingDate {
                        index,
                        date: bar.date,
                    });
                }
            }
            prev_date = Some(bar.date);

            let prices = [
                ("open", bar.open),
                ("high", bar.high),
                ("low", bar.low),
                ("close", bar.close),
            ];
            for (field, value) in prices {
                if !value.is_finite() {
                    return Err(ValidationError::NonFiniteValue { index, field });
                }
                if value <= 0.0 {
                    return Err(ValidationError::NonPositivePrice {
                        index,
                        field,
                        value,
                    });
                }
            }

            if !bar.volume.is_finite() {
                return Err(ValidationError::NonFiniteValue {
                    index,
                    field: "volume",
                });
            }
            if bar.volume < 0.0 {
                return Err(ValidationError::NegativeVolume {
                    index,
                    value: bar.volume,
                });
            }
        }

        Ok(self)
    }
}
