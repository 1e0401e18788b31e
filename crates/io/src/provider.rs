//! Filesystem-backed implementation of the pipeline's provider trait.

use std::path::{Path, PathBuf};

use pluvio_adjust::ReferenceCurve;
use pluvio_catalog::Scenario;
use pluvio_pipeline::{ProviderError, SeriesProvider};

use crate::read::{read_daily_series, read_reference_curve};

/// Reads daily series and reference curves from a CSV directory tree.
///
/// Layout under the root:
///
/// ```text
/// {root}/{scenario}/{model}/{location}.csv   daily series
/// {root}/reference/{location}.csv            reference curves
/// ```
#[derive(Debug, Clone)]
pub struct CsvProvider {
    root: PathBuf,
}

impl CsvProvider {
    /// Creates a provider rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory tree root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn series_path(&self, model: &str, scenario: Scenario, location: &str) -> PathBuf {
        self.root
            .join(scenario.as_str())
            .join(model)
            .join(format!("{location}.csv"))
    }

    fn reference_path(&self, location: &str) -> PathBuf {
        self.root.join("reference").join(format!("{location}.csv"))
    }
}

impl SeriesProvider for CsvProvider {
    fn daily_series(
        &self,
        model: &str,
        scenario: Scenario,
        location: &str,
    ) -> Result<Vec<f64>, ProviderError> {
        let path = self.series_path(model, scenario, location);
        Ok(read_daily_series(&path)?)
    }

    fn reference_curve(&self, location: &str) -> Result<ReferenceCurve, ProviderError> {
        let path = self.reference_path(location);
        Ok(read_reference_curve(&path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_layout() {
        let p = CsvProvider::new("/data");
        assert_eq!(
            p.series_path("ACCESS-1-0", Scenario::Rcp85, "site-a"),
            PathBuf::from("/data/rcp85/ACCESS-1-0/site-a.csv")
        );
        assert_eq!(
            p.reference_path("site-a"),
            PathBuf::from("/data/reference/site-a.csv")
        );
    }
}
