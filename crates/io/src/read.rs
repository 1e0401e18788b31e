//! Readers for daily series and reference curve files.

use std::path::Path;

use tracing::debug;

use pluvio_adjust::ReferenceCurve;
use pluvio_catalog::ReturnPeriod;

use crate::error::IoError;

/// Reads a daily precipitation series from a two-column CSV.
///
/// Expected format (with headers): `date,value`. The date column is
/// carried for human inspection only; position in the file defines the
/// day index. A blank value, `NA`, or `nan` reads as NaN, and so does
/// any negative depth, which the source datasets use as a
/// missing-value sentinel.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] for a missing file,
/// [`IoError::ParseValue`] for a value that is neither numeric nor a
/// recognized missing marker, and [`IoError::Csv`] for malformed CSV.
pub fn read_daily_series(path: &Path) -> Result<Vec<f64>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut series = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let raw = record.get(1).unwrap_or("").trim();
        series.push(parse_depth(raw, path, i + 2)?);
    }

    debug!(path = %path.display(), n_days = series.len(), "daily series read");
    Ok(series)
}

/// Reads a reference curve from a two-column CSV.
///
/// Expected format (with headers): `return_period,value`, one row per
/// return period in years.
///
/// # Errors
///
/// Returns [`IoError::InvalidReference`] when a return period is not in
/// the catalog or the rows do not form a valid curve, alongside the
/// usual file and parse errors.
pub fn read_reference_curve(path: &Path) -> Result<ReferenceCurve, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut return_periods = Vec::new();
    let mut values = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let line = i + 2;

        let rp_raw = record.get(0).unwrap_or("").trim();
        let years: u32 = rp_raw.parse().map_err(|_| IoError::ParseValue {
            path: path.to_path_buf(),
            line,
            value: rp_raw.to_string(),
        })?;
        let rp = ReturnPeriod::from_years(years).map_err(|e| IoError::InvalidReference {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let raw = record.get(1).unwrap_or("").trim();
        let value: f64 = raw.parse().map_err(|_| IoError::ParseValue {
            path: path.to_path_buf(),
            line,
            value: raw.to_string(),
        })?;

        return_periods.push(rp);
        values.push(value);
    }

    ReferenceCurve::new(return_periods, values).map_err(|e| IoError::InvalidReference {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Parses one depth field, mapping missing markers and negative
/// sentinels to NaN.
fn parse_depth(raw: &str, path: &Path, line: usize) -> Result<f64, IoError> {
    if raw.is_empty() || raw.eq_ignore_ascii_case("na") || raw.eq_ignore_ascii_case("nan") {
        return Ok(f64::NAN);
    }
    let value: f64 = raw.parse().map_err(|_| IoError::ParseValue {
        path: path.to_path_buf(),
        line,
        value: raw.to_string(),
    })?;
    if value < 0.0 {
        return Ok(f64::NAN);
    }
    Ok(value)
}
