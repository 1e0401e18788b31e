//! Threshold estimation over durations and return periods.

use tracing::{debug, warn};

use pluvio_accumulate::rolling_sum;
use pluvio_catalog::{IdfTable, ReturnPeriod};
use pluvio_gev::{fit_lmoments, fit_mle, GevParams};
use pluvio_stats::{quantile_linear, sort_desc_nan_last};

use crate::config::{Method, ThresholdConfig};
use crate::error::ThresholdError;

/// Record length divisor for the candidate cap (whole years, truncated).
const DAYS_PER_YEAR: usize = 365;

/// Estimates the threshold table for one daily series.
///
/// For each duration, the daily series is accumulated into rolling
/// totals, sorted largest-first with NaN entries last, and capped to
/// the first `len / 365` values — one candidate per whole year of
/// record. Each return period's threshold then comes from that
/// candidate set via the configured [`Method`].
///
/// The year cap takes the N largest totals overall, not one maximum
/// per calendar year, so a few extreme years can contribute several
/// candidates each. Kept to match the established tables; a true
/// annual-maxima series would be the defensible alternative.
///
/// Cells that cannot be estimated (empty candidates, failed fits) are
/// NaN; estimation failures never abort the table.
///
/// # Errors
///
/// Returns [`ThresholdError`] only for configuration problems, never
/// for data that merely fits poorly.
pub fn estimate_thresholds(
    daily: &[f64],
    config: &ThresholdConfig,
) -> Result<IdfTable, ThresholdError> {
    config.validate()?;

    let num_years = daily.len() / DAYS_PER_YEAR;
    if num_years == 0 {
        warn!(
            n_days = daily.len(),
            "record shorter than one year; all cells will be missing"
        );
    }

    let mut table = IdfTable::new(
        config.durations().to_vec(),
        config.return_periods().to_vec(),
    )?;

    for &duration in config.durations() {
        let mut totals = rolling_sum(daily, duration.window_days())?;
        sort_desc_nan_last(&mut totals);
        totals.truncate(num_years);
        let candidates = totals;

        match config.method() {
            Method::Empirical => {
                for &rp in config.return_periods() {
                    table.set(duration, rp, empirical_threshold(&candidates, rp));
                }
            }
            Method::LMoments | Method::Mle => {
                // NaN candidates become zero-rainfall entries before the
                // fit, mirroring a fillna(0) on the ranked series.
                let filled: Vec<f64> = candidates
                    .iter()
                    .map(|&v| if v.is_nan() { 0.0 } else { v })
                    .collect();
                let fit = match config.method() {
                    Method::LMoments => fit_lmoments(&filled),
                    _ => fit_mle(&filled),
                };
                match fit {
                    Ok(params) => {
                        for &rp in config.return_periods() {
                            table.set(duration, rp, fitted_threshold(&params, rp));
                        }
                    }
                    Err(e) => {
                        debug!(
                            duration = %duration,
                            method = config.method().name(),
                            error = %e,
                            "distribution fit failed; row left missing"
                        );
                    }
                }
            }
        }
    }

    Ok(table)
}

/// Percentile threshold from the descending candidate set.
///
/// NaN if the set is empty or contains NaN — a ranked candidate list
/// with holes in it cannot support a percentile.
fn empirical_threshold(candidates_desc: &[f64], rp: ReturnPeriod) -> f64 {
    if candidates_desc.is_empty() || candidates_desc.iter().any(|v| v.is_nan()) {
        return f64::NAN;
    }
    let mut ascending = candidates_desc.to_vec();
    ascending.reverse();
    let p = rp.exceedance_probability();
    quantile_linear(&ascending, 1.0 - p)
}

/// Fitted-quantile threshold at cumulative probability `1 - 1/R`.
fn fitted_threshold(params: &GevParams, rp: ReturnPeriod) -> f64 {
    let p = rp.exceedance_probability();
    params.quantile(1.0 - p).unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pluvio_catalog::Duration;

    fn rp(years: u32) -> ReturnPeriod {
        ReturnPeriod::from_years(years).unwrap()
    }

    #[test]
    fn constant_series_empirical_threshold_is_the_constant() {
        // Historical-length record of 1.0 in/day: every 24-hr rolling
        // total is 1.0, so every return period's threshold is 1.0.
        let daily = vec![1.0; 20454];
        let config = ThresholdConfig::new().with_durations(vec![Duration::Hr24]);
        let table = estimate_thresholds(&daily, &config).unwrap();
        for &r in table.return_periods() {
            assert_relative_eq!(table.get(Duration::Hr24, r), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn constant_series_scales_with_window() {
        let daily = vec![1.0; 3650];
        let config = ThresholdConfig::new();
        let table = estimate_thresholds(&daily, &config).unwrap();
        for &d in table.durations() {
            assert_relative_eq!(
                table.get(d, rp(10)),
                d.window_days() as f64,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn empirical_monotone_in_return_period() {
        // Linearly increasing rainfall gives distinct order statistics.
        let daily: Vec<f64> = (0..7300).map(|i| (i % 400) as f64 * 0.01).collect();
        let config = ThresholdConfig::new().with_durations(vec![Duration::Hr24, Duration::Day7]);
        let table = estimate_thresholds(&daily, &config).unwrap();
        for &d in table.durations() {
            let mut prev = f64::NEG_INFINITY;
            for &r in table.return_periods() {
                let v = table.get(d, r);
                assert!(v >= prev, "threshold not monotone at {d}, RP {r}");
                prev = v;
            }
        }
    }

    #[test]
    fn thresholds_non_decreasing_in_duration() {
        let daily: Vec<f64> = (0..7300).map(|i| ((i * 37) % 100) as f64 * 0.02).collect();
        let table = estimate_thresholds(&daily, &ThresholdConfig::new()).unwrap();
        for &r in table.return_periods() {
            assert!(table.non_decreasing_in_duration(r));
        }
    }

    #[test]
    fn short_record_gives_all_nan() {
        let daily = vec![1.0; 200]; // under one year
        let table = estimate_thresholds(&daily, &ThresholdConfig::new()).unwrap();
        assert!(table.cells().all(|(_, _, v)| v.is_nan()));
    }

    #[test]
    fn all_nan_series_gives_all_nan() {
        let daily = vec![f64::NAN; 3650];
        let config = ThresholdConfig::new().with_durations(vec![Duration::Hr24]);
        let table = estimate_thresholds(&daily, &config).unwrap();
        assert!(table.cells().all(|(_, _, v)| v.is_nan()));
    }

    #[test]
    fn lmom_method_fills_table_on_clean_data() {
        // Varied but well-behaved rainfall; the GEV fit should succeed
        // for every duration.
        let daily: Vec<f64> = (0..36500)
            .map(|i| {
                let cycle = (i as f64 * 0.017).sin().abs();
                cycle * ((i % 89) as f64 * 0.05)
            })
            .collect();
        let config = ThresholdConfig::new().with_method(Method::LMoments);
        let table = estimate_thresholds(&daily, &config).unwrap();
        let n_missing = table.cells().filter(|(_, _, v)| v.is_nan()).count();
        assert_eq!(n_missing, 0, "expected no missing cells");
    }

    #[test]
    fn lmom_constant_series_leaves_row_missing() {
        // Constant totals give a degenerate fit; the row must be NaN,
        // not an error.
        let daily = vec![1.0; 3650];
        let config = ThresholdConfig::new()
            .with_durations(vec![Duration::Hr24])
            .with_method(Method::LMoments);
        let table = estimate_thresholds(&daily, &config).unwrap();
        assert!(table.cells().all(|(_, _, v)| v.is_nan()));
    }

    #[test]
    fn invalid_config_rejected() {
        let daily = vec![1.0; 365];
        let config = ThresholdConfig::new().with_durations(vec![]);
        assert!(matches!(
            estimate_thresholds(&daily, &config),
            Err(ThresholdError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn empirical_threshold_nan_on_holes() {
        let candidates = [3.0, 2.0, f64::NAN];
        assert!(empirical_threshold(&candidates, rp(10)).is_nan());
        assert!(empirical_threshold(&[], rp(10)).is_nan());
    }

    #[test]
    fn empirical_threshold_interpolates() {
        // Candidates 10..1 descending; RP 2 → p=0.5 → median = 5.5.
        let candidates: Vec<f64> = (1..=10).rev().map(|x| x as f64).collect();
        assert_relative_eq!(
            empirical_threshold(&candidates, rp(2)),
            5.5,
            epsilon = 1e-12
        );
    }
}
