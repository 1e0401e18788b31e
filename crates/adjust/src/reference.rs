//! Authoritative baseline design curves and their scenario adjustment.

use pluvio_catalog::{IdfTable, ReturnPeriod};

use crate::error::AdjustError;

/// A design-storm baseline indexed by return period (Atlas 14 style),
/// independent of any climate model.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceCurve {
    return_periods: Vec<ReturnPeriod>,
    values: Vec<f64>,
}

impl ReferenceCurve {
    /// Creates a reference curve from parallel return-period and value
    /// slices.
    ///
    /// # Errors
    ///
    /// Returns [`AdjustError::ShapeMismatch`] when the slices differ in
    /// length.
    pub fn new(
        return_periods: Vec<ReturnPeriod>,
        values: Vec<f64>,
    ) -> Result<Self, AdjustError> {
        if return_periods.len() != values.len() {
            return Err(AdjustError::ShapeMismatch {
                n_rps: return_periods.len(),
                n_values: values.len(),
            });
        }
        Ok(Self {
            return_periods,
            values,
        })
    }

    /// The return-period axis.
    pub fn return_periods(&self) -> &[ReturnPeriod] {
        &self.return_periods
    }

    /// The baseline value for one return period, if present.
    pub fn get(&self, rp: ReturnPeriod) -> Option<f64> {
        self.return_periods
            .iter()
            .position(|&r| r == rp)
            .map(|i| self.values[i])
    }
}

/// Scales a reference curve by an ensemble-mean factor table.
///
/// The curve is indexed by return period only, so it broadcasts down
/// the duration axis: `adjusted[d][rp] = reference[rp] * factor[d][rp]`.
/// A NaN mean factor leaves the adjusted cell NaN; the baseline is
/// never passed through where the ensemble had nothing to say.
///
/// # Errors
///
/// Returns [`AdjustError::ReferenceMismatch`] when the curve's
/// return-period set differs from the factor table's column axis. That
/// failure is fatal for the whole call; there is no partial adjustment.
pub fn adjust_reference(
    reference: &ReferenceCurve,
    mean_factors: &IdfTable,
) -> Result<IdfTable, AdjustError> {
    if reference.return_periods() != mean_factors.return_periods() {
        return Err(AdjustError::ReferenceMismatch {
            expected: mean_factors
                .return_periods()
                .iter()
                .map(|rp| rp.years())
                .collect(),
            got: reference
                .return_periods()
                .iter()
                .map(|rp| rp.years())
                .collect(),
        });
    }

    IdfTable::from_fn(
        mean_factors.durations().to_vec(),
        mean_factors.return_periods().to_vec(),
        |d, rp| {
            let factor = mean_factors.get(d, rp);
            // get() cannot miss here: the axes were just checked equal.
            let base = reference.get(rp).unwrap_or(f64::NAN);
            base * factor
        },
    )
    .map_err(|e| AdjustError::AxisMismatch {
        reason: e.to_string(),
    })
}
