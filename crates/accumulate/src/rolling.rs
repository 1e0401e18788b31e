//! Rolling-window sums over a daily series.

use crate::error::AccumulateError;

/// Computes trailing rolling sums of `window` days.
///
/// The output has the same length as `data` and stays on the daily
/// calendar: position `i` holds the sum of days `i - window + 1 ..= i`.
/// The first `window - 1` positions have no full trailing window and
/// are NaN. A NaN anywhere inside a window makes that position NaN —
/// these are sum-of-window semantics, not skip-missing, so a single
/// invalid day invalidates every total it participates in.
///
/// # Errors
///
/// Returns [`AccumulateError::ZeroWindow`] if `window` is zero.
pub fn rolling_sum(data: &[f64], window: usize) -> Result<Vec<f64>, AccumulateError> {
    if window == 0 {
        return Err(AccumulateError::ZeroWindow);
    }

    let mut out = vec![f64::NAN; data.len()];
    if data.len() < window {
        return Ok(out);
    }

    for i in (window - 1)..data.len() {
        // NaN inputs propagate through the sum on their own.
        let total: f64 = data[i + 1 - window..=i].iter().sum();
        out[i] = total;
    }

    Ok(out)
}
