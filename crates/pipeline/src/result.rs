//! Result containers for pipeline output.

use std::collections::BTreeMap;

use pluvio_adjust::ReferenceCurve;
use pluvio_catalog::{IdfTable, Scenario};

/// Everything computed for one location.
///
/// Per-model products (thresholds, change factors, annual totals) are
/// keyed by scenario then model name; ensemble products (mean factors,
/// adjusted curves) are keyed by scenario alone.
#[derive(Debug, Clone)]
pub struct LocationResults {
    location: String,
    reference: ReferenceCurve,
    thresholds: BTreeMap<Scenario, BTreeMap<String, IdfTable>>,
    change_factors: BTreeMap<Scenario, BTreeMap<String, IdfTable>>,
    annual_totals: BTreeMap<Scenario, BTreeMap<String, Vec<f64>>>,
    mean_factors: BTreeMap<Scenario, IdfTable>,
    adjusted: BTreeMap<Scenario, IdfTable>,
}

impl LocationResults {
    pub(crate) fn new(location: String, reference: ReferenceCurve) -> Self {
        Self {
            location,
            reference,
            thresholds: BTreeMap::new(),
            change_factors: BTreeMap::new(),
            annual_totals: BTreeMap::new(),
            mean_factors: BTreeMap::new(),
            adjusted: BTreeMap::new(),
        }
    }

    pub(crate) fn insert_model(
        &mut self,
        scenario: Scenario,
        model: &str,
        thresholds: IdfTable,
        factors: IdfTable,
        annual: Vec<f64>,
    ) {
        self.thresholds
            .entry(scenario)
            .or_default()
            .insert(model.to_string(), thresholds);
        self.change_factors
            .entry(scenario)
            .or_default()
            .insert(model.to_string(), factors);
        self.annual_totals
            .entry(scenario)
            .or_default()
            .insert(model.to_string(), annual);
    }

    pub(crate) fn insert_ensemble(
        &mut self,
        scenario: Scenario,
        mean_factors: IdfTable,
        adjusted: IdfTable,
    ) {
        self.mean_factors.insert(scenario, mean_factors);
        self.adjusted.insert(scenario, adjusted);
    }

    /// The location these results belong to.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// The baseline curve the adjustments were applied to.
    pub fn reference(&self) -> &ReferenceCurve {
        &self.reference
    }

    /// Per-model threshold tables, by scenario then model.
    pub fn thresholds(&self) -> &BTreeMap<Scenario, BTreeMap<String, IdfTable>> {
        &self.thresholds
    }

    /// Per-model change-factor tables, by scenario then model.
    pub fn change_factors(&self) -> &BTreeMap<Scenario, BTreeMap<String, IdfTable>> {
        &self.change_factors
    }

    /// Per-model padded annual totals, by scenario then model.
    pub fn annual_totals(&self) -> &BTreeMap<Scenario, BTreeMap<String, Vec<f64>>> {
        &self.annual_totals
    }

    /// Ensemble-mean change factors, by scenario.
    pub fn mean_factors(&self) -> &BTreeMap<Scenario, IdfTable> {
        &self.mean_factors
    }

    /// Adjusted design curves, by scenario.
    pub fn adjusted(&self) -> &BTreeMap<Scenario, IdfTable> {
        &self.adjusted
    }
}

/// Counts reported after a pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PipelineSummary {
    locations_processed: usize,
    locations_skipped: Vec<String>,
    series_skipped: usize,
}

impl PipelineSummary {
    pub(crate) fn record_processed(&mut self) {
        self.locations_processed += 1;
    }

    pub(crate) fn record_location_skipped(&mut self, location: &str) {
        self.locations_skipped.push(location.to_string());
    }

    pub(crate) fn record_series_skipped(&mut self) {
        self.series_skipped += 1;
    }

    /// Number of locations whose results were persisted.
    pub fn locations_processed(&self) -> usize {
        self.locations_processed
    }

    /// Locations skipped entirely (missing or mismatched reference,
    /// no usable ensemble).
    pub fn locations_skipped(&self) -> &[String] {
        &self.locations_skipped
    }

    /// Number of (model, scenario) series skipped for missing data.
    pub fn series_skipped(&self) -> usize {
        self.series_skipped
    }
}
