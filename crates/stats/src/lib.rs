//! Statistical helper functions for the pluvio IDF pipeline.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Mean of the finite entries only, NaN if none are finite.
///
/// Matches numpy's `nanmean` for slices without infinities; entries
/// that are ±inf are also excluded here since a single corrupt cell
/// must not poison an ensemble average.
pub fn nanmean(data: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut n = 0usize;
    for &x in data {
        if x.is_finite() {
            sum += x;
            n += 1;
        }
    }
    if n == 0 {
        return f64::NAN;
    }
    sum / n as f64
}

/// Sample variance with N-1 denominator. Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Quantile by linear interpolation between order statistics — numpy's
/// default `percentile` interpolation (R type=7), with `p` in `[0, 1]`.
///
/// **Expects pre-sorted ascending input** (caller's responsibility).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_linear(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "quantile_linear: input must not be empty"
    );
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Sorts in place, largest first, with NaN entries moved to the end.
///
/// Mirrors a descending sort with `na_position='last'`: NaN entries
/// keep the slice length fixed but never outrank a finite value.
pub fn sort_desc_nan_last(data: &mut [f64]) {
    data.sort_by(|a, b| match (a.is_nan(), b.is_nan()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&data), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_nanmean_skips_nan() {
        let data = [1.0, f64::NAN, 3.0];
        assert_relative_eq!(nanmean(&data), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_nanmean_all_nan_is_nan() {
        assert!(nanmean(&[f64::NAN, f64::NAN]).is_nan());
        assert!(nanmean(&[]).is_nan());
    }

    #[test]
    fn test_nanmean_skips_inf() {
        let data = [1.0, f64::INFINITY, 3.0];
        assert_relative_eq!(nanmean(&data), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sd() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(sd(&data), 2.138090, epsilon = 1e-6);
    }

    #[test]
    fn test_sd_single() {
        assert_eq!(sd(&[5.0]), 0.0);
    }

    #[test]
    fn test_variance_basic() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(variance(&data), 4.571429, epsilon = 1e-4);
    }

    #[test]
    fn test_variance_empty() {
        assert_eq!(variance(&[]), 0.0);
    }

    #[test]
    fn test_quantile_linear_quartile() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(quantile_linear(&sorted, 0.25), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_quantile_linear_endpoints() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(quantile_linear(&sorted, 0.0), 1.0, epsilon = 1e-10);
        assert_relative_eq!(quantile_linear(&sorted, 1.0), 5.0, epsilon = 1e-10);
    }

    #[test]
    fn test_quantile_linear_interpolation() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        // p=0.1 → h=0.4, lo=0, hi=1 → 1 + 0.4*(2-1) = 1.4
        assert_relative_eq!(quantile_linear(&sorted, 0.1), 1.4, epsilon = 1e-10);
    }

    #[test]
    fn test_quantile_linear_numpy_crossvalidation() {
        // numpy: np.percentile(np.arange(1, 11), 30) = 3.7
        let sorted: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        assert_relative_eq!(quantile_linear(&sorted, 0.3), 3.7, epsilon = 1e-10);
    }

    #[test]
    #[should_panic(expected = "quantile_linear: input must not be empty")]
    fn test_quantile_linear_empty_panics() {
        quantile_linear(&[], 0.5);
    }

    #[test]
    fn test_sort_desc_nan_last() {
        let mut data = [0.5, f64::NAN, 2.0, 1.0, f64::NAN, 3.0];
        sort_desc_nan_last(&mut data);
        assert_eq!(&data[..4], &[3.0, 2.0, 1.0, 0.5]);
        assert!(data[4].is_nan());
        assert!(data[5].is_nan());
    }

    #[test]
    fn test_sort_desc_keeps_length() {
        let mut data = vec![f64::NAN; 5];
        sort_desc_nan_last(&mut data);
        assert_eq!(data.len(), 5);
        assert!(data.iter().all(|v| v.is_nan()));
    }
}
