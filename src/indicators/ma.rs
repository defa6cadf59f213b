// =============================================================================
// Simple Moving Average (MA)
// =============================================================================
//
// Arithmetic mean of the trailing `period` values. The scan keeps a running
// window sum instead of re-summing the window at every index, so the whole
// series costs O(n).

use crate::indicators::DerivedSeries;

/// Compute the trailing simple moving average for `values`.
///
/// The result has exactly `values.len()` entries; indices below
/// `period - 1` are `None`.
///
/// # Edge cases
/// - `period == 0` => all entries `None` (an empty window has no mean)
/// - `values.len() < period` => all entries `None`
pub fn calculate_ma(values: &[f64], period: usize) -> DerivedSeries {
    let mut result = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return result;
    }

    let mut window_sum = 0.0;
    for (i, &value) in values.iter().enumerate() {
        window_sum += value;
        if i >= period {
            window_sum -= values[i - period];
        }
        if i + 1 >= period {
            result[i] = Some(window_sum / period as f64);
        }
    }

    result
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ma_empty_input() {
        assert!(calculate_ma(&[], 5).is_empty());
    }

    #[test]
    fn ma_period_zero() {
        assert_eq!(calculate_ma(&[1.0, 2.0, 3.0], 0), vec![None, None, None]);
    }

    #[test]
    fn ma_insufficient_data_stays_undefined() {
        let ma = calculate_ma(&[1.0, 2.0], 5);
        assert_eq!(ma, vec![None, None]);
    }

    #[test]
    fn ma_warm_up_prefix_is_undefined() {
        let values: Vec<f64> = (1..=6).map(|x| x as f64).collect();
        let ma = calculate_ma(&values, 3);
        assert_eq!(ma.len(), 6);
        assert!(ma[0].is_none());
        assert!(ma[1].is_none());
        assert!(ma[2].is_some());
    }

    #[test]
    fn ma_known_values() {
        let values: Vec<f64> = (1..=6).map(|x| x as f64).collect();
        let ma = calculate_ma(&values, 3);
        // mean(1,2,3)=2, mean(2,3,4)=3, mean(3,4,5)=4, mean(4,5,6)=5
        for (i, expected) in [(2, 2.0), (3, 3.0), (4, 4.0), (5, 5.0)] {
            assert!((ma[i].unwrap() - expected).abs() < 1e-10);
        }
    }

    #[test]
    fn ma_matches_window_mean_everywhere() {
        let values: Vec<f64> = (0..40).map(|x| 100.0 + (x as f64 * 0.7).sin()).collect();
        let period = 7;
        let ma = calculate_ma(&values, period);
        for t in 0..values.len() {
            if t + 1 < period {
                assert!(ma[t].is_none());
            } else {
                let mean: f64 =
                    values[t + 1 - period..=t].iter().sum::<f64>() / period as f64;
                assert!((ma[t].unwrap() - mean).abs() < 1e-9, "index {t}");
            }
        }
    }
}
