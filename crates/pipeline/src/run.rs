//! The orchestration loop.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use pluvio_accumulate::{annual_totals, pad_with_nan};
use pluvio_adjust::{
    adjust_reference, change_factors, ensemble_mean, AdjustError, ReferenceCurve,
};
use pluvio_catalog::{IdfTable, Scenario};
use pluvio_thresholds::estimate_thresholds;

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::provider::{ResultSink, SeriesProvider};
use crate::result::{LocationResults, PipelineSummary};

/// Runs the full pipeline over every configured location.
///
/// Per location: fetch the reference curve, estimate thresholds for
/// every (model, scenario) series, derive per-model change factors
/// against the same model's historical table, average the factors
/// across the ensemble, and scale the reference curve by the mean
/// factors. All of a location's products are computed before its
/// single [`persist`](ResultSink::persist) call.
///
/// Missing data degrades rather than aborts: an unreadable series
/// skips that (model, scenario), a missing or mismatched reference
/// curve skips the whole location, and both are counted in the
/// returned [`PipelineSummary`]. Sink failures are fatal.
///
/// # Errors
///
/// Returns [`PipelineError`] on invalid configuration, on internal
/// axis inconsistencies, or when the sink rejects a write.
pub fn run_pipeline<P: SeriesProvider, S: ResultSink>(
    provider: &P,
    sink: &mut S,
    config: &PipelineConfig,
) -> Result<PipelineSummary, PipelineError> {
    config.validate()?;

    let mut summary = PipelineSummary::default();

    for location in config.locations() {
        info!(location = %location, "processing location");

        let reference = match provider.reference_curve(location) {
            Ok(curve) => curve,
            Err(e) => {
                warn!(
                    location = %location,
                    error = %e,
                    "reference curve unavailable; location skipped"
                );
                summary.record_location_skipped(location);
                continue;
            }
        };

        match process_location(provider, config, location, &reference, &mut summary)? {
            Some(results) => {
                sink.persist(&results).map_err(|e| PipelineError::Sink {
                    location: location.clone(),
                    source: e,
                })?;
                summary.record_processed();
                info!(location = %location, "results persisted");
            }
            None => summary.record_location_skipped(location),
        }
    }

    info!(
        processed = summary.locations_processed(),
        skipped = summary.locations_skipped().len(),
        series_skipped = summary.series_skipped(),
        "pipeline complete"
    );
    Ok(summary)
}

/// Computes every product for one location, or `None` when the
/// location cannot be completed.
fn process_location<P: SeriesProvider>(
    provider: &P,
    config: &PipelineConfig,
    location: &str,
    reference: &ReferenceCurve,
    summary: &mut PipelineSummary,
) -> Result<Option<LocationResults>, PipelineError> {
    let mut results = LocationResults::new(location.to_string(), reference.clone());

    // Historical pass first: these tables are the change-factor
    // denominators for every other scenario.
    let mut historical: BTreeMap<String, IdfTable> = BTreeMap::new();
    for model in config.models() {
        let daily = match provider.daily_series(model, Scenario::Historical, location) {
            Ok(series) => series,
            Err(e) => {
                warn!(
                    location = %location,
                    model = %model,
                    error = %e,
                    "historical series unavailable; model excluded"
                );
                summary.record_series_skipped();
                continue;
            }
        };
        let thresholds = estimate_thresholds(&daily, config.thresholds())?;
        // The historical scenario's factors are the table over itself,
        // unity wherever the threshold is finite and nonzero.
        let factors = change_factors(&thresholds, &thresholds)?;
        let annual = pad_with_nan(
            &annual_totals(&daily, config.annual_start(Scenario::Historical)),
            config.annual_pad_width(),
        )?;
        historical.insert(model.clone(), thresholds.clone());
        results.insert_model(Scenario::Historical, model, thresholds, factors, annual);
    }

    if historical.is_empty() {
        warn!(location = %location, "no historical series at all; location skipped");
        return Ok(None);
    }

    for &scenario in config.scenarios().iter().filter(|s| !s.is_historical()) {
        for model in config.models() {
            let Some(hist) = historical.get(model) else {
                // Already counted when the historical fetch failed.
                debug!(
                    location = %location,
                    model = %model,
                    scenario = %scenario,
                    "no historical denominator; model excluded from scenario"
                );
                continue;
            };
            let daily = match provider.daily_series(model, scenario, location) {
                Ok(series) => series,
                Err(e) => {
                    warn!(
                        location = %location,
                        model = %model,
                        scenario = %scenario,
                        error = %e,
                        "series unavailable; model excluded from scenario"
                    );
                    summary.record_series_skipped();
                    continue;
                }
            };
            let thresholds = estimate_thresholds(&daily, config.thresholds())?;
            let factors = change_factors(&thresholds, hist)?;
            let annual = pad_with_nan(
                &annual_totals(&daily, config.annual_start(scenario)),
                config.annual_pad_width(),
            )?;
            results.insert_model(scenario, model, thresholds, factors, annual);
        }
    }

    for &scenario in config.scenarios() {
        let tables: Vec<IdfTable> = match results.change_factors().get(&scenario) {
            Some(models) => models.values().cloned().collect(),
            None => Vec::new(),
        };
        if tables.is_empty() {
            warn!(
                location = %location,
                scenario = %scenario,
                "no surviving models; scenario has no ensemble products"
            );
            continue;
        }
        let mean = ensemble_mean(&tables)?;
        let adjusted = match adjust_reference(reference, &mean) {
            Ok(table) => table,
            Err(e @ AdjustError::ReferenceMismatch { .. }) => {
                warn!(
                    location = %location,
                    error = %e,
                    "reference curve does not match the catalog; location skipped"
                );
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        results.insert_ensemble(scenario, mean, adjusted);
    }

    Ok(Some(results))
}
