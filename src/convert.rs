//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;

use pluvio_catalog::Scenario;
use pluvio_pipeline::PipelineConfig;
use pluvio_thresholds::{Method, ThresholdConfig};

use crate::config::PluvioConfig;

/// Builds a [`ThresholdConfig`] from the TOML threshold section.
pub fn build_threshold_config(method: &str) -> Result<ThresholdConfig> {
    let method = Method::from_name(method)
        .with_context(|| format!("invalid threshold method {method:?}"))?;
    Ok(ThresholdConfig::new().with_method(method))
}

/// Builds a [`PipelineConfig`] from the full TOML configuration.
pub fn build_pipeline_config(config: &PluvioConfig) -> Result<PipelineConfig> {
    let scenarios: Vec<Scenario> = config
        .scenarios
        .iter()
        .map(|name| {
            Scenario::from_name(name).with_context(|| format!("invalid scenario {name:?}"))
        })
        .collect::<Result<_>>()?;

    let historical_start = parse_date(&config.annual.historical_start)?;
    let future_start = parse_date(&config.annual.future_start)?;

    if config.locations.is_empty() {
        bail!("no locations: set `locations` in the config file");
    }

    Ok(PipelineConfig::new()
        .with_models(config.models.clone())
        .with_scenarios(scenarios)
        .with_locations(config.locations.clone())
        .with_thresholds(build_threshold_config(&config.thresholds.method)?)
        .with_historical_start(historical_start)
        .with_future_start(future_start)
        .with_annual_pad_width(config.annual.pad_width))
}

fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .with_context(|| format!("invalid start date {text:?} (expected YYYY-MM-DD)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_config() -> PluvioConfig {
        let text = r#"
            locations = ["site-a"]
        "#;
        toml::from_str(text).unwrap()
    }

    #[test]
    fn builds_from_defaults() {
        let cfg = build_pipeline_config(&minimal_config()).unwrap();
        assert_eq!(cfg.models().len(), 31);
        assert_eq!(cfg.scenarios().len(), 3);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_unknown_scenario() {
        let mut config = minimal_config();
        config.scenarios = vec!["rcp60".to_string()];
        assert!(build_pipeline_config(&config).is_err());
    }

    #[test]
    fn rejects_bad_start_date() {
        let mut config = minimal_config();
        config.annual.future_start = "01/01/2006".to_string();
        assert!(build_pipeline_config(&config).is_err());
    }

    #[test]
    fn rejects_missing_locations() {
        let mut config = minimal_config();
        config.locations.clear();
        assert!(build_pipeline_config(&config).is_err());
    }

    #[test]
    fn rejects_unknown_method() {
        assert!(build_threshold_config("bayes").is_err());
        assert!(build_threshold_config("mle").is_ok());
    }
}
