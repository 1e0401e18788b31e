//! Error types for the pluvio-gev crate.

/// Error type for all fallible operations in the pluvio-gev crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GevError {
    /// Returned when the sample is too short to fit three parameters.
    #[error("insufficient data: {n} values, need at least {min}")]
    InsufficientData {
        /// Number of values supplied.
        n: usize,
        /// Minimum number of values required.
        min: usize,
    },

    /// Returned when the sample has no usable spread (constant values
    /// or a vanishing second L-moment).
    #[error("degenerate sample: no usable spread for distribution fitting")]
    DegenerateSample,

    /// Returned when a fit produces parameters outside the valid domain.
    #[error("invalid parameters (loc={loc}, scale={scale}, shape={shape}): {reason}")]
    InvalidParams {
        /// Location estimate.
        loc: f64,
        /// Scale estimate.
        scale: f64,
        /// Shape estimate.
        shape: f64,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the likelihood optimization fails to converge.
    #[error("maximum-likelihood optimization failed to converge")]
    OptimizationFailed,

    /// Returned when a quantile is requested outside the open unit interval.
    #[error("probability {p} outside the open interval (0, 1)")]
    InvalidProbability {
        /// The offending probability.
        p: f64,
    },
}
