//! Error types for the pluvio-thresholds crate.

use pluvio_accumulate::AccumulateError;
use pluvio_catalog::CatalogError;

/// Error type for all fallible operations in the pluvio-thresholds crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ThresholdError {
    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when an estimation-method name is not recognized.
    #[error("unknown estimation method: '{name}' (expected empirical, lmom, or mle)")]
    UnknownMethod {
        /// The unrecognized method name.
        name: String,
    },

    /// Wraps an error from the accumulation layer.
    #[error(transparent)]
    Accumulate(#[from] AccumulateError),

    /// Wraps an error from table construction.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
