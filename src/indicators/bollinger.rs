// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Middle band = MA(period) of close; upper / lower = middle +- k * sigma,
// where sigma is the trailing *sample* standard deviation (n-1 denominator)
// of close over the window. Bandwidth = (upper - lower) / middle.
//
// The scan keeps running sum and sum-of-squares so the whole series costs
// O(n). Wherever sigma is defined, upper >= middle >= lower holds for any
// k >= 0.

use crate::indicators::DerivedSeries;

/// The four Bollinger series, each aligned with the input.
#[derive(Debug, Clone)]
pub struct BollingerSeries {
    pub middle: DerivedSeries,
    pub upper: DerivedSeries,
    pub lower: DerivedSeries,
    pub bandwidth: DerivedSeries,
}

/// Compute Bollinger Bands over `closes`.
///
/// Indices below `period - 1` are `None` in all four series.
///
/// # Edge cases
/// - `period < 2` => everything `None` (sample deviation needs n-1 >= 1)
/// - flat window => sigma 0, all three bands collapse onto the middle and
///   bandwidth is 0 — defined, not an error
pub fn calculate_bollinger(closes: &[f64], period: usize, k: f64) -> BollingerSeries {
    let n = closes.len();
    let mut series = BollingerSeries {
        middle: vec![None; n],
        upper: vec![None; n],
        lower: vec![None; n],
        bandwidth: vec![None; n],
    };
    if period < 2 || n < period {
        return series;
    }

    let period_f = period as f64;
    let mut sum = 0.0;
    let mut sum_sq = 0.0;

    for (t, &close) in closes.iter().enumerate() {
        sum += close;
        sum_sq += close * close;
        if t >= period {
            let old = closes[t - period];
            sum -= old;
            sum_sq -= old * old;
        }
        if t + 1 < period {
            continue;
        }

        let middle = sum / period_f;
        // Sample variance via running sums; clamp against tiny negative
        // values from floating-point cancellation on near-constant windows.
        let variance = ((sum_sq - sum * sum / period_f) / (period_f - 1.0)).max(0.0);
        let std_dev = variance.sqrt();

        let upper = middle + k * std_dev;
        let lower = middle - k * std_dev;

        series.middle[t] = Some(middle);
        series.upper[t] = Some(upper);
        series.lower[t] = Some(lower);
        // Prices are validated positive, so middle > 0 here.
        series.bandwidth[t] = Some((upper - lower) / middle);
    }

    series
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bollinger_insufficient_data() {
        let bb = calculate_bollinger(&[1.0, 2.0, 3.0], 20, 2.0);
        assert!(bb.middle.iter().all(Option::is_none));
        assert!(bb.upper.iter().all(Option::is_none));
    }

    #[test]
    fn bollinger_warm_up_boundary() {
        let closes: Vec<f64> = (1..=25).map(|x| x as f64).collect();
        let bb = calculate_bollinger(&closes, 20, 2.0);
        assert!(bb.middle[18].is_none());
        assert!(bb.middle[19].is_some());
        assert_eq!(bb.middle.len(), 25);
    }

    #[test]
    fn band_ordering_invariant() {
        let closes: Vec<f64> = (0..50)
            .map(|x| 100.0 + (x as f64 * 0.9).sin() * 8.0)
            .collect();
        let bb = calculate_bollinger(&closes, 20, 2.0);
        for t in 0..closes.len() {
            if let (Some(u), Some(m), Some(l)) = (bb.upper[t], bb.middle[t], bb.lower[t]) {
                assert!(u >= m && m >= l, "index {t}: {u} >= {m} >= {l}");
            }
        }
    }

    #[test]
    fn bollinger_flat_window_collapses() {
        let bb = calculate_bollinger(&[100.0; 25], 20, 2.0);
        let t = 24;
        assert!((bb.middle[t].unwrap() - 100.0).abs() < 1e-10);
        assert!((bb.upper[t].unwrap() - 100.0).abs() < 1e-10);
        assert!((bb.lower[t].unwrap() - 100.0).abs() < 1e-10);
        assert!(bb.bandwidth[t].unwrap().abs() < 1e-10);
    }

    #[test]
    fn bollinger_matches_naive_sample_std() {
        let closes: Vec<f64> = (0..40)
            .map(|x| 50.0 + (x as f64 * 1.7).cos() * 4.0)
            .collect();
        let period = 20;
        let k = 2.0;
        let bb = calculate_bollinger(&closes, period, k);
        for t in (period - 1)..closes.len() {
            let window = &closes[t + 1 - period..=t];
            let mean: f64 = window.iter().sum::<f64>() / period as f64;
            let var: f64 = window.iter().map(|x| (x - mean).powi(2)).sum::<f64>()
                / (period as f64 - 1.0);
            let std = var.sqrt();
            assert!((bb.middle[t].unwrap() - mean).abs() < 1e-9, "mid {t}");
            assert!(
                (bb.upper[t].unwrap() - (mean + k * std)).abs() < 1e-8,
                "upper {t}"
            );
            assert!(
                (bb.lower[t].unwrap() - (mean - k * std)).abs() < 1e-8,
                "lower {t}"
            );
        }
    }

    #[test]
    fn bandwidth_is_normalised_width() {
        let closes: Vec<f64> = (0..30).map(|x| 10.0 + (x % 5) as f64).collect();
        let bb = calculate_bollinger(&closes, 20, 2.0);
        for t in 0..closes.len() {
            if let (Some(u), Some(l), Some(m), Some(w)) =
                (bb.upper[t], bb.lower[t], bb.middle[t], bb.bandwidth[t])
            {
                assert!((w - (u - l) / m).abs() < 1e-12);
            }
        }
    }
}
