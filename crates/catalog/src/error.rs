//! Error types for the pluvio-catalog crate.

/// Error type for catalog lookups and table construction.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    /// Returned when a duration label is not in the catalog.
    #[error("unknown duration label: '{label}'")]
    UnknownDuration {
        /// The unrecognized label.
        label: String,
    },

    /// Returned when a return period is not in the catalog.
    #[error("unknown return period: {years} years")]
    UnknownReturnPeriod {
        /// The unrecognized return period in years.
        years: u32,
    },

    /// Returned when a scenario name is not recognized.
    #[error("unknown scenario: '{name}'")]
    UnknownScenario {
        /// The unrecognized scenario name.
        name: String,
    },

    /// Returned when a table would be built with an empty axis.
    #[error("table axis must not be empty: {axis}")]
    EmptyAxis {
        /// Which axis was empty ("durations" or "return periods").
        axis: &'static str,
    },
}
