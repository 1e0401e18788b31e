//! Across-model aggregation of change-factor tables.

use pluvio_catalog::IdfTable;
use pluvio_stats::nanmean;

use crate::error::AdjustError;

/// Averages change factors across the model ensemble, cell by cell,
/// ignoring NaN entries.
///
/// A cell where every model is NaN stays NaN rather than being
/// replaced by a neutral factor.
///
/// # Errors
///
/// Returns [`AdjustError::EmptyEnsemble`] for an empty slice and
/// [`AdjustError::AxisMismatch`] when the tables disagree on axes.
pub fn ensemble_mean(tables: &[IdfTable]) -> Result<IdfTable, AdjustError> {
    let first = tables.first().ok_or(AdjustError::EmptyEnsemble)?;
    for t in &tables[1..] {
        if !t.same_axes(first) {
            return Err(AdjustError::AxisMismatch {
                reason: "all ensemble members must share duration and \
                         return-period axes"
                    .to_string(),
            });
        }
    }

    IdfTable::from_fn(
        first.durations().to_vec(),
        first.return_periods().to_vec(),
        |d, rp| {
            let cell_values: Vec<f64> = tables.iter().map(|t| t.get(d, rp)).collect();
            nanmean(&cell_values)
        },
    )
    .map_err(|e| AdjustError::AxisMismatch {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pluvio_catalog::{Duration, ReturnPeriod};

    fn table_of(value: f64) -> IdfTable {
        IdfTable::from_fn(
            Duration::ALL.to_vec(),
            ReturnPeriod::ALL.to_vec(),
            |_, _| value,
        )
        .unwrap()
    }

    #[test]
    fn mean_of_finite_members() {
        let tables = vec![table_of(1.0), table_of(2.0), table_of(3.0)];
        let mean = ensemble_mean(&tables).unwrap();
        assert!(mean.cells().all(|(_, _, v)| (v - 2.0).abs() < 1e-12));
    }

    #[test]
    fn nan_members_are_ignored_per_cell() {
        let rp = ReturnPeriod::ALL[2];
        let mut a = table_of(1.0);
        let b = table_of(3.0);
        a.set(Duration::Day7, rp, f64::NAN);
        let mean = ensemble_mean(&[a, b]).unwrap();
        // Cell with one NaN member: mean of the remaining member.
        assert_relative_eq!(mean.get(Duration::Day7, rp), 3.0, epsilon = 1e-12);
        // Other cells average both members.
        assert_relative_eq!(mean.get(Duration::Hr24, rp), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn all_nan_cell_stays_nan() {
        let rp = ReturnPeriod::ALL[0];
        let mut a = table_of(1.0);
        let mut b = table_of(2.0);
        a.set(Duration::Day45, rp, f64::NAN);
        b.set(Duration::Day45, rp, f64::NAN);
        let mean = ensemble_mean(&[a, b]).unwrap();
        assert!(mean.get(Duration::Day45, rp).is_nan());
    }

    #[test]
    fn single_member_passes_through() {
        let mean = ensemble_mean(&[table_of(1.7)]).unwrap();
        assert!(mean.cells().all(|(_, _, v)| (v - 1.7).abs() < 1e-12));
    }

    #[test]
    fn empty_ensemble_rejected() {
        assert!(matches!(
            ensemble_mean(&[]),
            Err(AdjustError::EmptyEnsemble)
        ));
    }

    #[test]
    fn axis_mismatch_rejected() {
        let a = table_of(1.0);
        let b = IdfTable::from_fn(
            vec![Duration::Hr24],
            ReturnPeriod::ALL.to_vec(),
            |_, _| 1.0,
        )
        .unwrap();
        assert!(matches!(
            ensemble_mean(&[a, b]),
            Err(AdjustError::AxisMismatch { .. })
        ));
    }
}
