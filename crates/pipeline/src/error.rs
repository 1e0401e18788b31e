//! Error types for the pluvio-pipeline crate.

use pluvio_accumulate::AccumulateError;
use pluvio_adjust::AdjustError;
use pluvio_thresholds::ThresholdError;

use crate::provider::ProviderError;

/// Error type for all fallible operations in the pluvio-pipeline crate.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Returned when the pipeline configuration is unusable.
    #[error("invalid pipeline configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when persisting a location's results fails.
    #[error("failed to persist results for location {location}")]
    Sink {
        /// The location whose results could not be written.
        location: String,
        /// The sink's underlying error.
        #[source]
        source: ProviderError,
    },

    /// Threshold estimation failed for reasons other than poor data.
    #[error(transparent)]
    Threshold(#[from] ThresholdError),

    /// A factor or adjustment step failed.
    #[error(transparent)]
    Adjust(#[from] AdjustError),

    /// An accumulation step failed.
    #[error(transparent)]
    Accumulate(#[from] AccumulateError),
}
