//! Error types for the pluvio-adjust crate.

/// Error type for all fallible operations in the pluvio-adjust crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AdjustError {
    /// Returned when two tables do not share identical axes.
    #[error("table axis mismatch: {reason}")]
    AxisMismatch {
        /// Description of the mismatch.
        reason: String,
    },

    /// Returned when an ensemble operation receives no tables.
    #[error("ensemble is empty: at least one change-factor table is required")]
    EmptyEnsemble,

    /// Returned when the reference curve's return periods do not match
    /// the factor table's return-period axis.
    #[error(
        "reference curve return periods {got:?} do not match the catalog {expected:?}"
    )]
    ReferenceMismatch {
        /// Return periods on the factor table (years).
        expected: Vec<u32>,
        /// Return periods on the reference curve (years).
        got: Vec<u32>,
    },

    /// Returned when a reference curve is constructed with mismatched inputs.
    #[error("reference curve shape mismatch: {n_rps} return periods but {n_values} values")]
    ShapeMismatch {
        /// Number of return periods supplied.
        n_rps: usize,
        /// Number of values supplied.
        n_values: usize,
    },
}
