//! Emission scenarios for the downscaled model ensemble.

use crate::error::CatalogError;

/// An emission scenario under which a model's daily series was produced.
///
/// `Historical` is the reference class (1950–2005 record); the RCP
/// scenarios are the future class (2006–2099 record) whose thresholds
/// are expressed as change factors against the historical tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scenario {
    /// Historical simulation period.
    Historical,
    /// RCP 4.5 stabilization scenario.
    Rcp45,
    /// RCP 8.5 high-emission scenario.
    Rcp85,
}

impl Scenario {
    /// All scenarios, historical first.
    pub const ALL: [Scenario; 3] = [Scenario::Historical, Scenario::Rcp45, Scenario::Rcp85];

    /// Returns the lowercase scenario name used in configs and paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Historical => "historical",
            Scenario::Rcp45 => "rcp45",
            Scenario::Rcp85 => "rcp85",
        }
    }

    /// Parses a scenario name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownScenario`] for unrecognized names.
    pub fn from_name(name: &str) -> Result<Self, CatalogError> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.as_str() == name)
            .ok_or_else(|| CatalogError::UnknownScenario {
                name: name.to_string(),
            })
    }

    /// Whether this is the historical reference scenario.
    pub fn is_historical(&self) -> bool {
        matches!(self, Scenario::Historical)
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
