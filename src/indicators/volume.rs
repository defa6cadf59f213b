// =============================================================================
// Volume Indicators
// =============================================================================
//
// Trailing volume means plus two derived ratios:
//   VolChangePct_t = (volume_t / volume_{t-1} - 1) * 100
//   VolRatio_t     = volume_t / VolMA5_t
//
// Both ratios divide by observed data, and daily volume can legitimately be
// zero (suspended or illiquid sessions). A zero divisor makes the entry
// undefined — the engine never lets a division produce a non-finite value.

use crate::indicators::ma::calculate_ma;
use crate::indicators::DerivedSeries;

/// Window of the short volume mean (also the VolRatio denominator).
pub const VOL_MA_SHORT: usize = 5;
/// Window of the long volume mean.
pub const VOL_MA_LONG: usize = 10;

/// The volume-derived series, each aligned with the input.
#[derive(Debug, Clone)]
pub struct VolumeSeries {
    pub ma5: DerivedSeries,
    pub ma10: DerivedSeries,
    pub change_pct: DerivedSeries,
    pub ratio: DerivedSeries,
}

/// Compute the volume indicator family over the `volumes` column.
pub fn calculate_volume(volumes: &[f64]) -> VolumeSeries {
    let n = volumes.len();

    let ma5 = calculate_ma(volumes, VOL_MA_SHORT);
    let ma10 = calculate_ma(volumes, VOL_MA_LONG);

    let mut change_pct = vec![None; n];
    for t in 1..n {
        let prev = volumes[t - 1];
        if prev > 0.0 {
            change_pct[t] = Some((volumes[t] / prev - 1.0) * 100.0);
        }
    }

    let mut ratio = vec![None; n];
    for t in 0..n {
        if let Some(avg) = ma5[t] {
            if avg > 0.0 {
                ratio[t] = Some(volumes[t] / avg);
            }
        }
    }

    VolumeSeries {
        ma5,
        ma10,
        change_pct,
        ratio,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_empty_input() {
        let vol = calculate_volume(&[]);
        assert!(vol.ma5.is_empty());
        assert!(vol.ratio.is_empty());
    }

    #[test]
    fn volume_mas_have_expected_warm_up() {
        let volumes: Vec<f64> = (1..=12).map(|x| x as f64 * 100.0).collect();
        let vol = calculate_volume(&volumes);
        assert!(vol.ma5[3].is_none());
        assert!(vol.ma5[4].is_some());
        assert!(vol.ma10[8].is_none());
        assert!(vol.ma10[9].is_some());
    }

    #[test]
    fn change_pct_first_index_undefined() {
        let vol = calculate_volume(&[100.0, 150.0, 75.0]);
        assert!(vol.change_pct[0].is_none());
        assert!((vol.change_pct[1].unwrap() - 50.0).abs() < 1e-10);
        assert!((vol.change_pct[2].unwrap() - (-50.0)).abs() < 1e-10);
    }

    #[test]
    fn change_pct_across_zero_volume_is_undefined() {
        let vol = calculate_volume(&[100.0, 0.0, 50.0]);
        assert!((vol.change_pct[1].unwrap() - (-100.0)).abs() < 1e-10);
        // Divisor is the zero volume at index 1 — undefined, not infinite.
        assert!(vol.change_pct[2].is_none());
    }

    #[test]
    fn ratio_is_volume_over_short_mean() {
        let volumes = vec![100.0, 100.0, 100.0, 100.0, 200.0];
        let vol = calculate_volume(&volumes);
        // MA5 at index 4 = 120, ratio = 200 / 120
        assert!((vol.ratio[4].unwrap() - 200.0 / 120.0).abs() < 1e-10);
    }

    #[test]
    fn ratio_undefined_on_zero_mean() {
        let vol = calculate_volume(&[0.0; 8]);
        assert!(vol.ratio.iter().all(Option::is_none));
    }

    #[test]
    fn all_series_keep_input_length() {
        let volumes: Vec<f64> = (1..=7).map(|x| x as f64).collect();
        let vol = calculate_volume(&volumes);
        assert_eq!(vol.ma5.len(), 7);
        assert_eq!(vol.ma10.len(), 7);
        assert_eq!(vol.change_pct.len(), 7);
        assert_eq!(vol.ratio.len(), 7);
    }
}
