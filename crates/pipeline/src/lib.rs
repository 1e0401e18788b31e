//! End-to-end orchestration: daily series in, adjusted design curves out.
//!
//! The pipeline walks a (location × model × scenario) run matrix:
//!
//! 1. **Thresholds** per (model, scenario) series via `pluvio-thresholds`
//! 2. **Change factors** per model against its historical table
//! 3. **Ensemble mean** of the factors across surviving models
//! 4. **Adjustment** of the location's reference curve by the mean
//!
//! Data sources and sinks sit behind the [`SeriesProvider`] and
//! [`ResultSink`] traits so the same loop runs against CSV files in
//! production and in-memory fixtures in tests. Missing series degrade
//! the ensemble instead of aborting the run; every skip is logged and
//! counted in the [`PipelineSummary`].

mod config;
mod error;
mod provider;
mod result;
mod run;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use provider::{ProviderError, ResultSink, SeriesProvider};
pub use result::{LocationResults, PipelineSummary};
pub use run::run_pipeline;
