// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent prices, making it more responsive to new
// information than the Simple Moving Average.
//
// Formula:
//   alpha = 2 / (period + 1)
//   EMA_0 = value_0
//   EMA_t = value_t * alpha + EMA_{t-1} * (1 - alpha)
//
// Seeding with the first value (rather than an SMA warm-up) makes the
// recursion total: the EMA is defined at every index of the input.

use crate::indicators::DerivedSeries;

/// Raw recursive scan, used internally by MACD as well. Produces one value
/// per input entry.
pub(crate) fn ema_scan(values: &[f64], period: usize) -> Vec<f64> {
    if values.is_empty() || period == 0 {
        return Vec::new();
    }

    let alpha = 2.0 / (period as f64 + 1.0);

    let mut result = Vec::with_capacity(values.len());
    let mut prev = values[0];
    result.push(prev);

    for &value in &values[1..] {
        prev = value * alpha + prev * (1.0 - alpha);
        result.push(prev);
    }

    result
}

/// Compute the EMA series for `values` and look-back `period`.
///
/// Defined at every index (no warm-up gap), by design of the recursion.
///
/// # Edge cases
/// - `period == 0` => all entries `None` (alpha would exceed 1)
pub fn calculate_ema(values: &[f64], period: usize) -> DerivedSeries {
    if period == 0 {
        return vec![None; values.len()];
    }
    ema_scan(values, period).into_iter().map(Some).collect()
}
