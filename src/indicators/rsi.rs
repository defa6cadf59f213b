// =============================================================================
// Relative Strength Index (RSI) — simple-mean variant
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an asset is overbought or oversold.
//
// Step 1 — delta_t = close_t - close_{t-1}; gain = max(delta, 0),
//          loss = max(-delta, 0).
// Step 2 — avg_gain / avg_loss = simple trailing mean of gains / losses over
//          the last `period` deltas (running sums, O(n) total).
// Step 3 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//
// The delta at index 0 does not exist, so the first defined RSI sits at
// index `period`. Degenerate windows never produce a non-finite value:
// zero average loss saturates to 100, a fully flat window is neutral 50.

use crate::indicators::DerivedSeries;

/// Compute the RSI series for `closes` and `period`.
///
/// Indices below `period` are `None`; every defined value lies in [0, 100].
///
/// # Edge cases
/// - `period == 0` or `closes.len() < period + 1` => all entries `None`
/// - `avg_loss == 0` and `avg_gain > 0` => 100.0 (saturate)
/// - `avg_gain == avg_loss == 0` => 50.0 (neutral)
pub fn calculate_rsi(closes: &[f64], period: usize) -> DerivedSeries {
    let n = closes.len();
    let mut result = vec![None; n];
    if period == 0 || n < period + 1 {
        return result;
    }

    // Running window sums over the trailing `period` deltas. The delta at
    // index t is closes[t] - closes[t-1], so the window ending at index t
    // covers deltas at t-period+1 ..= t.
    let mut sum_gain = 0.0;
    let mut sum_loss = 0.0;

    for t in 1..n {
        let delta = closes[t] - closes[t - 1];
        sum_gain += delta.max(0.0);
        sum_loss += (-delta).max(0.0);

        if t > period {
            let old = closes[t - period] - closes[t - period - 1];
            sum_gain -= old.max(0.0);
            sum_loss -= (-old).max(0.0);
        }

        if t >= period {
            let avg_gain = sum_gain / period as f64;
            let avg_loss = sum_loss / period as f64;
            result[t] = Some(rsi_from_averages(avg_gain, avg_loss));
        }
    }

    result
}

/// Convert average gain / average loss into an RSI value in [0, 100].
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 && avg_gain == 0.0 {
        50.0 // No movement at all — neutral.
    } else if avg_loss == 0.0 {
        100.0 // All gains, no losses — saturate instead of dividing by zero.
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - 100.0 / (1.0 + rs)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsi_empty_input() {
        assert!(calculate_rsi(&[], 14).is_empty());
    }

    #[test]
    fn rsi_period_zero() {
        assert_eq!(calculate_rsi(&[1.0, 2.0, 3.0], 0), vec![None, None, None]);
    }

    #[test]
    fn rsi_insufficient_data_stays_undefined() {
        // Need period+1 closes (period deltas). 14 closes => 13 deltas < 14.
        let closes: Vec<f64> = (1..=14).map(|x| x as f64).collect();
        assert!(calculate_rsi(&closes, 14).iter().all(Option::is_none));
    }

    #[test]
    fn rsi_warm_up_boundary() {
        let closes: Vec<f64> = (1..=20).map(|x| x as f64).collect();
        let rsi = calculate_rsi(&closes, 14);
        assert!(rsi[13].is_none());
        assert!(rsi[14].is_some());
    }

    #[test]
    fn rsi_all_gains_saturates_at_100() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let rsi = calculate_rsi(&closes, 14);
        for v in rsi.iter().flatten() {
            assert!((v - 100.0).abs() < 1e-10, "expected 100.0, got {v}");
        }
    }

    #[test]
    fn rsi_all_losses_is_zero() {
        let closes: Vec<f64> = (1..=30).rev().map(|x| x as f64).collect();
        let rsi = calculate_rsi(&closes, 14);
        for v in rsi.iter().flatten() {
            assert!(v.abs() < 1e-10, "expected 0.0, got {v}");
        }
    }

    #[test]
    fn rsi_flat_market_is_neutral() {
        let rsi = calculate_rsi(&[100.0; 30], 14);
        for v in rsi.iter().flatten() {
            assert!((v - 50.0).abs() < 1e-10, "expected 50.0, got {v}");
        }
    }

    #[test]
    fn rsi_always_in_range() {
        let closes = vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08,
            45.89, 46.03, 44.18, 44.22, 44.57, 43.42, 42.66, 43.13,
        ];
        let rsi = calculate_rsi(&closes, 14);
        for v in rsi.iter().flatten() {
            assert!((0.0..=100.0).contains(v), "RSI {v} out of range");
        }
    }

    #[test]
    fn rsi_running_sums_match_naive_windows() {
        let closes: Vec<f64> = (0..40)
            .map(|x| 50.0 + (x as f64 * 1.3).sin() * 3.0)
            .collect();
        let period = 14;
        let rsi = calculate_rsi(&closes, period);
        for t in period..closes.len() {
            let mut gain = 0.0;
            let mut loss = 0.0;
            for i in (t - period + 1)..=t {
                let d = closes[i] - closes[i - 1];
                gain += d.max(0.0);
                loss += (-d).max(0.0);
            }
            let expected = rsi_from_averages(gain / period as f64, loss / period as f64);
            assert!((rsi[t].unwrap() - expected).abs() < 1e-9, "index {t}");
        }
    }
}
