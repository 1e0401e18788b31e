//! Per-model change factors: scenario thresholds over historical thresholds.

use pluvio_catalog::IdfTable;

use crate::error::AdjustError;

/// Computes the elementwise ratio of a scenario threshold table to the
/// historical table for the same model.
///
/// A cell is NaN when either input is non-finite or the historical
/// denominator is zero; division never raises. Applying this to the
/// historical table against itself yields 1.0 wherever the threshold
/// is finite and nonzero, which is how the historical scenario's
/// factors are produced.
///
/// # Errors
///
/// Returns [`AdjustError::AxisMismatch`] when the two tables do not
/// share identical axes in identical order.
pub fn change_factors(
    scenario: &IdfTable,
    historical: &IdfTable,
) -> Result<IdfTable, AdjustError> {
    if !scenario.same_axes(historical) {
        return Err(AdjustError::AxisMismatch {
            reason: "scenario and historical tables must share duration and \
                     return-period axes"
                .to_string(),
        });
    }

    IdfTable::from_fn(
        scenario.durations().to_vec(),
        scenario.return_periods().to_vec(),
        |d, rp| {
            let num = scenario.get(d, rp);
            let den = historical.get(d, rp);
            if !num.is_finite() || !den.is_finite() || den == 0.0 {
                f64::NAN
            } else {
                num / den
            }
        },
    )
    .map_err(|e| AdjustError::AxisMismatch {
        reason: e.to_string(),
    })
}
