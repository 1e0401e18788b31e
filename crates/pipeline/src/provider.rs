//! Traits decoupling the pipeline from data sources and sinks.

use pluvio_adjust::ReferenceCurve;
use pluvio_catalog::Scenario;

use crate::result::LocationResults;

/// Boxed error for provider and sink implementations.
pub type ProviderError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Supplies daily precipitation series and reference curves.
///
/// Implementations read from whatever storage holds the downscaled
/// record (the shipped one reads CSV); the pipeline only sees slices
/// of daily depths with NaN marking missing days.
pub trait SeriesProvider {
    /// Returns the daily precipitation series for one model, scenario,
    /// and location.
    fn daily_series(
        &self,
        model: &str,
        scenario: Scenario,
        location: &str,
    ) -> Result<Vec<f64>, ProviderError>;

    /// Returns the authoritative baseline curve for one location.
    fn reference_curve(&self, location: &str) -> Result<ReferenceCurve, ProviderError>;
}

/// Receives one location's complete results.
///
/// The pipeline computes everything for a location before calling
/// [`persist`](ResultSink::persist) exactly once, so a failed location
/// never leaves partial output behind.
pub trait ResultSink {
    /// Persists one location's results.
    fn persist(&mut self, results: &LocationResults) -> Result<(), ProviderError>;
}
