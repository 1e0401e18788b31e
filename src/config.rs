use std::path::PathBuf;

use serde::Deserialize;

/// The downscaled LOCA model ensemble processed by default.
const DEFAULT_MODELS: &[&str] = &[
    "ACCESS1-0",
    "ACCESS1-3",
    "CCSM4",
    "CESM1-BGC",
    "CESM1-CAM5",
    "CMCC-CM",
    "CMCC-CMS",
    "CNRM-CM5",
    "CSIRO-Mk3-6-0",
    "CanESM2",
    "EC-EARTH",
    "FGOALS-g2",
    "GFDL-CM3",
    "GFDL-ESM2G",
    "GFDL-ESM2M",
    "GISS-E2-R",
    "HadGEM2-AO",
    "HadGEM2-CC",
    "HadGEM2-ES",
    "IPSL-CM5A-LR",
    "IPSL-CM5A-MR",
    "MIROC-ESM",
    "MIROC-ESM-CHEM",
    "MIROC5",
    "MPI-ESM-LR",
    "MPI-ESM-MR",
    "MRI-CGCM3",
    "NorESM1-M",
    "bcc-csm1-1",
    "bcc-csm1-1-m",
    "inmcm4",
];

/// Top-level Pluvio configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluvioConfig {
    /// Climate models in the ensemble.
    #[serde(default = "default_models")]
    pub models: Vec<String>,

    /// Scenario names to process.
    #[serde(default = "default_scenarios")]
    pub scenarios: Vec<String>,

    /// Locations to process.
    #[serde(default)]
    pub locations: Vec<String>,

    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Threshold estimation settings.
    #[serde(default)]
    pub thresholds: ThresholdsToml,

    /// Annual-totals settings.
    #[serde(default)]
    pub annual: AnnualToml,
}

fn default_models() -> Vec<String> {
    DEFAULT_MODELS.iter().map(|m| m.to_string()).collect()
}

fn default_scenarios() -> Vec<String> {
    vec![
        "historical".to_string(),
        "rcp45".to_string(),
        "rcp85".to_string(),
    ]
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    /// Root of the CSV data tree.
    pub data_dir: Option<PathBuf>,
    /// Directory for result CSV trees.
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdsToml {
    /// Estimation method: `empirical`, `lmom`, or `mle`.
    #[serde(default = "default_method")]
    pub method: String,
}

impl Default for ThresholdsToml {
    fn default() -> Self {
        Self {
            method: default_method(),
        }
    }
}

fn default_method() -> String {
    "empirical".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnnualToml {
    /// Calendar date of day zero of historical series (YYYY-MM-DD).
    #[serde(default = "default_historical_start")]
    pub historical_start: String,
    /// Calendar date of day zero of future series (YYYY-MM-DD).
    #[serde(default = "default_future_start")]
    pub future_start: String,
    /// Padded width of the annual-totals matrix.
    #[serde(default = "default_pad_width")]
    pub pad_width: usize,
}

impl Default for AnnualToml {
    fn default() -> Self {
        Self {
            historical_start: default_historical_start(),
            future_start: default_future_start(),
            pad_width: default_pad_width(),
        }
    }
}

fn default_historical_start() -> String {
    "1950-01-01".to_string()
}

fn default_future_start() -> String {
    "2006-01-01".to_string()
}

fn default_pad_width() -> usize {
    100
}
