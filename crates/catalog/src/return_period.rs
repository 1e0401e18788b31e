//! Return-period catalog.

use crate::error::CatalogError;

/// A recurrence interval in years from the fixed IDF catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReturnPeriod(u32);

impl ReturnPeriod {
    /// The full catalog, in ascending order.
    pub const ALL: [ReturnPeriod; 6] = [
        ReturnPeriod(2),
        ReturnPeriod(5),
        ReturnPeriod(10),
        ReturnPeriod(25),
        ReturnPeriod(50),
        ReturnPeriod(100),
    ];

    /// Looks up a return period in the catalog by its year count.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownReturnPeriod`] for values outside
    /// the catalog.
    pub fn from_years(years: u32) -> Result<Self, CatalogError> {
        Self::ALL
            .iter()
            .copied()
            .find(|rp| rp.0 == years)
            .ok_or(CatalogError::UnknownReturnPeriod { years })
    }

    /// Returns the recurrence interval in years.
    pub fn years(&self) -> u32 {
        self.0
    }

    /// Annual exceedance probability for this return period.
    ///
    /// Spelled out as 365.25 / (years * 365.25): the return period in
    /// years converts to days and back, matching how the thresholds are
    /// derived from daily records.
    pub fn exceedance_probability(&self) -> f64 {
        let n_days = self.0 as f64 * 365.25;
        365.25 / n_days
    }
}

impl std::fmt::Display for ReturnPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
