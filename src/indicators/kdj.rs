// =============================================================================
// KDJ — stochastic oscillator family (K, D, J lines)
// =============================================================================
//
// RSV_t = (close_t - min(low, period)) / (max(high, period) - min(low, period)) * 100
// K     = recursive smoothing of RSV with alpha = 1/3 (center-of-mass 2)
// D     = the same smoothing applied to K
// J     = 3K - 2D
//
// A flat window (max high == min low) has no meaningful stochastic position:
// RSV is undefined at that index and the gap propagates through K, D and J.
// The previous K/D are NOT carried forward across such a gap — when RSV
// becomes defined again the smoothing re-seeds from it, the same way the
// recursion is initialised at the first defined index.

use crate::indicators::DerivedSeries;

/// Smoothing factor for the K and D recursions (center-of-mass 2).
const SMOOTHING_ALPHA: f64 = 1.0 / 3.0;

/// The three KDJ series, each aligned with the input.
#[derive(Debug, Clone)]
pub struct KdjSeries {
    pub k: DerivedSeries,
    pub d: DerivedSeries,
    pub j: DerivedSeries,
}

/// Compute KDJ over parallel high/low/close columns.
///
/// Indices below `period - 1` are `None`; so is any index whose trailing
/// window is completely flat.
///
/// # Edge cases
/// - `period == 0` or fewer bars than `period` => everything `None`
/// - zero high-low range => `None` at that index, no carry-forward
pub fn calculate_kdj(highs: &[f64], lows: &[f64], closes: &[f64], period: usize) -> KdjSeries {
    let n = closes.len();
    debug_assert_eq!(highs.len(), n);
    debug_assert_eq!(lows.len(), n);

    let mut series = KdjSeries {
        k: vec![None; n],
        d: vec![None; n],
        j: vec![None; n],
    };
    if period == 0 || n < period {
        return series;
    }

    let mut prev_k: Option<f64> = None;
    let mut prev_d: Option<f64> = None;

    for t in (period - 1)..n {
        let window = t + 1 - period..=t;
        let low_min = lows[window.clone()]
            .iter()
            .fold(f64::INFINITY, |acc, &v| acc.min(v));
        let high_max = highs[window]
            .iter()
            .fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));

        let range = high_max - low_min;
        if range == 0.0 {
            // Flat window: no stochastic position. Break the recursion so the
            // next defined RSV re-seeds K and D.
            prev_k = None;
            prev_d = None;
            continue;
        }

        let rsv = (closes[t] - low_min) / range * 100.0;

        let k = match prev_k {
            Some(pk) => SMOOTHING_ALPHA * rsv + (1.0 - SMOOTHING_ALPHA) * pk,
            None => rsv,
        };
        let d = match prev_d {
            Some(pd) => SMOOTHING_ALPHA * k + (1.0 - SMOOTHING_ALPHA) * pd,
            None => k,
        };

        series.k[t] = Some(k);
        series.d[t] = Some(d);
        series.j[t] = Some(3.0 * k - 2.0 * d);

        prev_k = Some(k);
        prev_d = Some(d);
    }

    series
}
