//! Writers for threshold tables and annual-totals matrices.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use pluvio_catalog::IdfTable;

use crate::error::IoError;

/// Writes an IDF table as CSV: one row per duration, one column per
/// return period, NaN cells left empty.
///
/// # Errors
///
/// Returns [`IoError`] on filesystem or CSV failures.
pub fn write_table(path: &Path, table: &IdfTable) -> Result<(), IoError> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["duration".to_string()];
    header.extend(table.return_periods().iter().map(|rp| rp.to_string()));
    wtr.write_record(&header)?;

    for &duration in table.durations() {
        let mut record = vec![duration.label().to_string()];
        record.extend(table.row(duration).iter().map(|&v| format_cell(v)));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    debug!(path = %path.display(), "table written");
    Ok(())
}

/// Writes per-model annual totals as CSV: one row per model, one
/// column per padded year index, NaN cells left empty.
///
/// # Errors
///
/// Returns [`IoError`] on filesystem or CSV failures.
pub fn write_annual_totals(
    path: &Path,
    totals: &BTreeMap<String, Vec<f64>>,
) -> Result<(), IoError> {
    let mut wtr = csv::Writer::from_path(path)?;

    let width = totals.values().map(|v| v.len()).max().unwrap_or(0);
    let mut header = vec!["model".to_string()];
    header.extend((1..=width).map(|i| format!("year_{i}")));
    wtr.write_record(&header)?;

    for (model, values) in totals {
        let mut record = vec![model.clone()];
        record.extend(values.iter().map(|&v| format_cell(v)));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    debug!(path = %path.display(), n_models = totals.len(), "annual totals written");
    Ok(())
}

fn format_cell(v: f64) -> String {
    if v.is_nan() {
        String::new()
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pluvio_catalog::{Duration, ReturnPeriod};
    use tempfile::tempdir;

    #[test]
    fn table_round_trips_through_csv_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.csv");
        let mut table = IdfTable::from_fn(
            Duration::ALL.to_vec(),
            ReturnPeriod::ALL.to_vec(),
            |d, rp| d.window_days() as f64 * rp.years() as f64,
        )
        .unwrap();
        table.set(Duration::Day45, ReturnPeriod::ALL[0], f64::NAN);

        write_table(&path, &table).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), "duration,2,5,10,25,50,100");
        let first = lines.next().unwrap();
        assert!(first.starts_with("24-hr,2,5,10,"));
        // The NaN cell is an empty field on the 45-day row.
        let day45 = text.lines().find(|l| l.starts_with("45-day")).unwrap();
        assert!(day45.starts_with("45-day,,"));
    }

    #[test]
    fn annual_totals_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("annual.csv");
        let mut totals = BTreeMap::new();
        totals.insert("m1".to_string(), vec![365.0, 400.5, f64::NAN]);
        totals.insert("m2".to_string(), vec![123.0, f64::NAN, f64::NAN]);

        write_annual_totals(&path, &totals).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), "model,year_1,year_2,year_3");
        assert_eq!(lines.next().unwrap(), "m1,365,400.5,");
        assert_eq!(lines.next().unwrap(), "m2,123,,");
    }
}
