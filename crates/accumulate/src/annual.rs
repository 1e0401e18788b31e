//! Calendar-year totals from a daily series.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::AccumulateError;

/// Sums a daily series into calendar-year totals.
///
/// Days are labeled from `start` on the real (leap-aware) calendar, so
/// a series beginning 1950-01-01 gets its first boundary at the end of
/// 1950. NaN days contribute zero — a year of entirely missing data
/// sums to 0.0, not NaN. That convention silently treats missing days
/// as dry and every consumer of these totals relies on it.
///
/// The output has one entry per distinct year spanned, which varies
/// with record length; see [`pad_with_nan`] for stacking outputs of
/// different lengths into one fixed-width table.
pub fn annual_totals(daily: &[f64], start: NaiveDate) -> Vec<f64> {
    let mut totals = Vec::new();
    if daily.is_empty() {
        return totals;
    }

    let mut current_year = start.year();
    let mut running = 0.0;
    for (i, &value) in daily.iter().enumerate() {
        let date = start
            .checked_add_days(Days::new(i as u64))
            .unwrap_or_else(|| panic!("date overflow at day offset {i}"));
        if date.year() != current_year {
            totals.push(running);
            running = 0.0;
            current_year = date.year();
        }
        if !value.is_nan() {
            running += value;
        }
    }
    totals.push(running);

    totals
}

/// Pads annual totals with trailing NaN entries to a fixed width.
///
/// Historical and future records span different year counts, so
/// stacking per-model totals into one table requires a common column
/// width (the study uses 100).
///
/// # Errors
///
/// Returns [`AccumulateError::PadWidthTooSmall`] if `values` already
/// exceeds `width`.
pub fn pad_with_nan(values: &[f64], width: usize) -> Result<Vec<f64>, AccumulateError> {
    if values.len() > width {
        return Err(AccumulateError::PadWidthTooSmall {
            width,
            len: values.len(),
        });
    }
    let mut out = values.to_vec();
    out.resize(width, f64::NAN);
    Ok(out)
}
