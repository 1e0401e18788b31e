//! Pipeline configuration.

use chrono::NaiveDate;

use pluvio_catalog::Scenario;
use pluvio_thresholds::ThresholdConfig;

use crate::error::PipelineError;

/// Default width of the padded annual-totals matrix.
const DEFAULT_ANNUAL_PAD_WIDTH: usize = 100;

/// Configuration for [`run_pipeline`](crate::run_pipeline).
///
/// Models, scenarios, and locations define the run matrix; threshold
/// estimation is delegated to the embedded [`ThresholdConfig`]. The
/// two start dates label day zero of a daily series when computing
/// calendar-year totals: historical records and future (RCP) records
/// begin on different calendar dates.
///
/// # Example
///
/// ```
/// use pluvio_pipeline::PipelineConfig;
///
/// let config = PipelineConfig::new()
///     .with_models(vec!["ACCESS-1-0".to_string()])
///     .with_locations(vec!["site-a".to_string()]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    models: Vec<String>,
    scenarios: Vec<Scenario>,
    locations: Vec<String>,
    thresholds: ThresholdConfig,
    historical_start: NaiveDate,
    future_start: NaiveDate,
    annual_pad_width: usize,
}

impl PipelineConfig {
    /// Creates a configuration with all scenarios, the default
    /// threshold settings, and no models or locations.
    pub fn new() -> Self {
        Self {
            models: Vec::new(),
            scenarios: Scenario::ALL.to_vec(),
            locations: Vec::new(),
            thresholds: ThresholdConfig::new(),
            // Day zero of the downscaled historical and future records.
            historical_start: NaiveDate::from_ymd_opt(1950, 1, 1).unwrap(),
            future_start: NaiveDate::from_ymd_opt(2006, 1, 1).unwrap(),
            annual_pad_width: DEFAULT_ANNUAL_PAD_WIDTH,
        }
    }

    /// Sets the climate models in the ensemble.
    pub fn with_models(mut self, models: Vec<String>) -> Self {
        self.models = models;
        self
    }

    /// Sets the scenarios to process.
    pub fn with_scenarios(mut self, scenarios: Vec<Scenario>) -> Self {
        self.scenarios = scenarios;
        self
    }

    /// Sets the locations to process.
    pub fn with_locations(mut self, locations: Vec<String>) -> Self {
        self.locations = locations;
        self
    }

    /// Sets the threshold estimation configuration.
    pub fn with_thresholds(mut self, thresholds: ThresholdConfig) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Sets the calendar date of the first day of historical series.
    pub fn with_historical_start(mut self, start: NaiveDate) -> Self {
        self.historical_start = start;
        self
    }

    /// Sets the calendar date of the first day of future (RCP) series.
    pub fn with_future_start(mut self, start: NaiveDate) -> Self {
        self.future_start = start;
        self
    }

    /// Sets the padded width of the annual-totals output.
    pub fn with_annual_pad_width(mut self, width: usize) -> Self {
        self.annual_pad_width = width;
        self
    }

    /// Returns the configured models.
    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Returns the configured scenarios.
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Returns the configured locations.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Returns the threshold configuration.
    pub fn thresholds(&self) -> &ThresholdConfig {
        &self.thresholds
    }

    /// Returns the calendar date of day zero for one scenario's records.
    pub fn annual_start(&self, scenario: Scenario) -> NaiveDate {
        if scenario.is_historical() {
            self.historical_start
        } else {
            self.future_start
        }
    }

    /// Returns the padded annual-totals width.
    pub fn annual_pad_width(&self) -> usize {
        self.annual_pad_width
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidConfig`] when the run matrix is
    /// empty, when the historical scenario is missing (change factors
    /// need a historical denominator), or when the pad width is zero.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.models.is_empty() {
            return Err(PipelineError::InvalidConfig {
                reason: "at least one model is required".to_string(),
            });
        }
        if self.locations.is_empty() {
            return Err(PipelineError::InvalidConfig {
                reason: "at least one location is required".to_string(),
            });
        }
        if !self.scenarios.contains(&Scenario::Historical) {
            return Err(PipelineError::InvalidConfig {
                reason: "scenarios must include historical".to_string(),
            });
        }
        if self.annual_pad_width == 0 {
            return Err(PipelineError::InvalidConfig {
                reason: "annual pad width must be at least 1".to_string(),
            });
        }
        self.thresholds.validate()?;
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> PipelineConfig {
        PipelineConfig::new()
            .with_models(vec!["m1".to_string()])
            .with_locations(vec!["loc".to_string()])
    }

    #[test]
    fn minimal_config_validates() {
        assert!(minimal().validate().is_ok());
    }

    #[test]
    fn empty_models_rejected() {
        let cfg = minimal().with_models(vec![]);
        assert!(matches!(
            cfg.validate(),
            Err(PipelineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn empty_locations_rejected() {
        let cfg = minimal().with_locations(vec![]);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn missing_historical_rejected() {
        let cfg = minimal().with_scenarios(vec![Scenario::Rcp45, Scenario::Rcp85]);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_pad_width_rejected() {
        let cfg = minimal().with_annual_pad_width(0);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn default_starts_match_the_record_periods() {
        let cfg = PipelineConfig::new();
        assert_eq!(
            cfg.annual_start(Scenario::Historical),
            NaiveDate::from_ymd_opt(1950, 1, 1).unwrap()
        );
        assert_eq!(
            cfg.annual_start(Scenario::Rcp45),
            NaiveDate::from_ymd_opt(2006, 1, 1).unwrap()
        );
        assert_eq!(
            cfg.annual_start(Scenario::Rcp85),
            NaiveDate::from_ymd_opt(2006, 1, 1).unwrap()
        );
        assert_eq!(cfg.annual_pad_width(), 100);
    }
}
