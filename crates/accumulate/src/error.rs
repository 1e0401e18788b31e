//! Error types for the pluvio-accumulate crate.

/// Error type for all fallible operations in the pluvio-accumulate crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AccumulateError {
    /// Returned when a rolling window length of zero is requested.
    #[error("rolling window length must be at least 1 day")]
    ZeroWindow,

    /// Returned when a pad width is smaller than the data to pad.
    #[error("pad width {width} is smaller than the {len} values to pad")]
    PadWidthTooSmall {
        /// Requested column width.
        width: usize,
        /// Number of values that need to fit.
        len: usize,
    },
}
