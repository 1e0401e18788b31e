//! Configuration for threshold estimation.

use pluvio_catalog::{Duration, ReturnPeriod};

use crate::error::ThresholdError;

/// How the exceedance threshold is estimated from the candidate totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Percentile of the empirical candidate distribution.
    #[default]
    Empirical,
    /// GEV fitted by L-moments, threshold from the fitted quantile.
    LMoments,
    /// GEV fitted by maximum likelihood, threshold from the fitted quantile.
    Mle,
}

impl Method {
    /// Parses the method names used in configuration files.
    ///
    /// # Errors
    ///
    /// Returns [`ThresholdError::UnknownMethod`] for anything other
    /// than `empirical`, `lmom`, or `mle`.
    pub fn from_name(name: &str) -> Result<Self, ThresholdError> {
        match name {
            "empirical" => Ok(Method::Empirical),
            "lmom" => Ok(Method::LMoments),
            "mle" => Ok(Method::Mle),
            _ => Err(ThresholdError::UnknownMethod {
                name: name.to_string(),
            }),
        }
    }

    /// Returns the configuration-file name of this method.
    pub fn name(&self) -> &'static str {
        match self {
            Method::Empirical => "empirical",
            Method::LMoments => "lmom",
            Method::Mle => "mle",
        }
    }
}

/// Configuration for [`estimate_thresholds`](crate::estimate_thresholds).
///
/// Defaults to the full duration and return-period catalogs with the
/// empirical method.
///
/// # Example
///
/// ```
/// use pluvio_thresholds::{Method, ThresholdConfig};
///
/// let config = ThresholdConfig::new().with_method(Method::LMoments);
/// ```
#[derive(Debug, Clone)]
pub struct ThresholdConfig {
    durations: Vec<Duration>,
    return_periods: Vec<ReturnPeriod>,
    method: Method,
}

impl ThresholdConfig {
    /// Creates a configuration with the full catalogs and the
    /// empirical method.
    pub fn new() -> Self {
        Self {
            durations: Duration::ALL.to_vec(),
            return_periods: ReturnPeriod::ALL.to_vec(),
            method: Method::default(),
        }
    }

    /// Sets the durations to estimate (row axis of the output table).
    pub fn with_durations(mut self, durations: Vec<Duration>) -> Self {
        self.durations = durations;
        self
    }

    /// Sets the return periods to estimate (column axis of the output table).
    pub fn with_return_periods(mut self, return_periods: Vec<ReturnPeriod>) -> Self {
        self.return_periods = return_periods;
        self
    }

    /// Sets the estimation method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Returns the configured durations.
    pub fn durations(&self) -> &[Duration] {
        &self.durations
    }

    /// Returns the configured return periods.
    pub fn return_periods(&self) -> &[ReturnPeriod] {
        &self.return_periods
    }

    /// Returns the estimation method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        if self.durations.is_empty() {
            return Err(ThresholdError::InvalidConfig {
                reason: "durations must not be empty".to_string(),
            });
        }
        if self.return_periods.is_empty() {
            return Err(ThresholdError::InvalidConfig {
                reason: "return periods must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_full_catalogs() {
        let cfg = ThresholdConfig::new();
        assert_eq!(cfg.durations().len(), 10);
        assert_eq!(cfg.return_periods().len(), 6);
        assert_eq!(cfg.method(), Method::Empirical);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_chaining() {
        let cfg = ThresholdConfig::new()
            .with_durations(vec![Duration::Hr24, Duration::Day7])
            .with_method(Method::Mle);
        assert_eq!(cfg.durations(), &[Duration::Hr24, Duration::Day7]);
        assert_eq!(cfg.method(), Method::Mle);
    }

    #[test]
    fn validate_empty_axes() {
        assert!(ThresholdConfig::new()
            .with_durations(vec![])
            .validate()
            .is_err());
        assert!(ThresholdConfig::new()
            .with_return_periods(vec![])
            .validate()
            .is_err());
    }

    #[test]
    fn method_name_round_trip() {
        for m in [Method::Empirical, Method::LMoments, Method::Mle] {
            assert_eq!(Method::from_name(m.name()).unwrap(), m);
        }
    }

    #[test]
    fn method_rejects_unknown() {
        assert!(matches!(
            Method::from_name("bayes"),
            Err(ThresholdError::UnknownMethod { .. })
        ));
    }
}
