//! Filesystem-backed implementation of the pipeline's sink trait.

use std::path::{Path, PathBuf};

use tracing::info;

use pluvio_pipeline::{LocationResults, ProviderError, ResultSink};

use crate::write::{write_annual_totals, write_table};

/// Writes one location's results as a directory of CSV files.
///
/// Layout under the output directory:
///
/// ```text
/// {out}/{location}/thresholds_{scenario}_{model}.csv
/// {out}/{location}/factors_{scenario}_{model}.csv
/// {out}/{location}/annual_{scenario}.csv
/// {out}/{location}/mean_factors_{scenario}.csv
/// {out}/{location}/adjusted_{scenario}.csv
/// ```
#[derive(Debug, Clone)]
pub struct CsvSink {
    out_dir: PathBuf,
}

impl CsvSink {
    /// Creates a sink writing under `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// The output directory root.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

impl ResultSink for CsvSink {
    fn persist(&mut self, results: &LocationResults) -> Result<(), ProviderError> {
        let dir = self.out_dir.join(results.location());
        std::fs::create_dir_all(&dir)?;

        for (scenario, models) in results.thresholds() {
            for (model, table) in models {
                write_table(&dir.join(format!("thresholds_{scenario}_{model}.csv")), table)?;
            }
        }
        for (scenario, models) in results.change_factors() {
            for (model, table) in models {
                write_table(&dir.join(format!("factors_{scenario}_{model}.csv")), table)?;
            }
        }
        for (scenario, models) in results.annual_totals() {
            write_annual_totals(&dir.join(format!("annual_{scenario}.csv")), models)?;
        }
        for (scenario, table) in results.mean_factors() {
            write_table(&dir.join(format!("mean_factors_{scenario}.csv")), table)?;
        }
        for (scenario, table) in results.adjusted() {
            write_table(&dir.join(format!("adjusted_{scenario}.csv")), table)?;
        }

        info!(
            location = %results.location(),
            dir = %dir.display(),
            "location results written"
        );
        Ok(())
    }
}
