//! The duration × return-period table shared across the workspace.

use crate::duration::Duration;
use crate::error::CatalogError;
use crate::return_period::ReturnPeriod;

/// A row-major `duration × return-period` table of `f64` values.
///
/// NaN marks a cell whose value is missing or could not be estimated;
/// it propagates through arithmetic rather than raising. The same
/// container holds threshold tables, change-factor tables, ensemble
/// means, and adjusted IDF curves.
#[derive(Debug, Clone, PartialEq)]
pub struct IdfTable {
    durations: Vec<Duration>,
    return_periods: Vec<ReturnPeriod>,
    values: Vec<f64>,
}

impl IdfTable {
    /// Creates a table filled with NaN.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyAxis`] if either axis is empty.
    pub fn new(
        durations: Vec<Duration>,
        return_periods: Vec<ReturnPeriod>,
    ) -> Result<Self, CatalogError> {
        if durations.is_empty() {
            return Err(CatalogError::EmptyAxis { axis: "durations" });
        }
        if return_periods.is_empty() {
            return Err(CatalogError::EmptyAxis {
                axis: "return periods",
            });
        }
        let n = durations.len() * return_periods.len();
        Ok(Self {
            durations,
            return_periods,
            values: vec![f64::NAN; n],
        })
    }

    /// Builds a table by evaluating `f` at every cell.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyAxis`] if either axis is empty.
    pub fn from_fn(
        durations: Vec<Duration>,
        return_periods: Vec<ReturnPeriod>,
        mut f: impl FnMut(Duration, ReturnPeriod) -> f64,
    ) -> Result<Self, CatalogError> {
        let mut table = Self::new(durations, return_periods)?;
        for di in 0..table.durations.len() {
            for ri in 0..table.return_periods.len() {
                let v = f(table.durations[di], table.return_periods[ri]);
                table.values[di * table.return_periods.len() + ri] = v;
            }
        }
        Ok(table)
    }

    /// The duration axis, in row order.
    pub fn durations(&self) -> &[Duration] {
        &self.durations
    }

    /// The return-period axis, in column order.
    pub fn return_periods(&self) -> &[ReturnPeriod] {
        &self.return_periods
    }

    fn index(&self, duration: Duration, rp: ReturnPeriod) -> usize {
        let di = self
            .durations
            .iter()
            .position(|&d| d == duration)
            .unwrap_or_else(|| panic!("duration {duration} not on table axis"));
        let ri = self
            .return_periods
            .iter()
            .position(|&r| r == rp)
            .unwrap_or_else(|| panic!("return period {rp} not on table axis"));
        di * self.return_periods.len() + ri
    }

    /// Returns the cell value.
    ///
    /// # Panics
    ///
    /// Panics if `duration` or `rp` is not on the table's axes.
    pub fn get(&self, duration: Duration, rp: ReturnPeriod) -> f64 {
        self.values[self.index(duration, rp)]
    }

    /// Sets the cell value.
    ///
    /// # Panics
    ///
    /// Panics if `duration` or `rp` is not on the table's axes.
    pub fn set(&mut self, duration: Duration, rp: ReturnPeriod, value: f64) {
        let i = self.index(duration, rp);
        self.values[i] = value;
    }

    /// Returns the row of values for one duration.
    ///
    /// # Panics
    ///
    /// Panics if `duration` is not on the table's axis.
    pub fn row(&self, duration: Duration) -> &[f64] {
        let di = self
            .durations
            .iter()
            .position(|&d| d == duration)
            .unwrap_or_else(|| panic!("duration {duration} not on table axis"));
        let w = self.return_periods.len();
        &self.values[di * w..(di + 1) * w]
    }

    /// Iterates over `(duration, return period, value)` triples in
    /// row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Duration, ReturnPeriod, f64)> + '_ {
        let w = self.return_periods.len();
        self.values.iter().enumerate().map(move |(i, &v)| {
            let d = self.durations[i / w];
            let rp = self.return_periods[i % w];
            (d, rp, v)
        })
    }

    /// `true` if `other` has identical axes in identical order.
    pub fn same_axes(&self, other: &IdfTable) -> bool {
        self.durations == other.durations && self.return_periods == other.return_periods
    }

    /// Diagnostic check: values for `rp` are non-decreasing down the
    /// duration axis once NaN cells are skipped.
    ///
    /// Longer accumulation windows cannot produce a smaller extreme
    /// total in well-formed data, so a violation here usually means a
    /// corrupted input record. Advisory only; nothing enforces it.
    ///
    /// # Panics
    ///
    /// Panics if `rp` is not on the table's axis.
    pub fn non_decreasing_in_duration(&self, rp: ReturnPeriod) -> bool {
        let mut prev = f64::NEG_INFINITY;
        for &d in &self.durations {
            let v = self.get(d, rp);
            if v.is_nan() {
                continue;
            }
            if v < prev {
                return false;
            }
            prev = v;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn full_table() -> IdfTable {
        IdfTable::new(Duration::ALL.to_vec(), ReturnPeriod::ALL.to_vec()).unwrap()
    }

    #[test]
    fn new_starts_all_nan() {
        let t = full_table();
        assert!(t.cells().all(|(_, _, v)| v.is_nan()));
        assert_eq!(t.cells().count(), 60);
    }

    #[test]
    fn empty_axis_rejected() {
        assert!(matches!(
            IdfTable::new(vec![], ReturnPeriod::ALL.to_vec()),
            Err(CatalogError::EmptyAxis { axis: "durations" })
        ));
        assert!(IdfTable::new(Duration::ALL.to_vec(), vec![]).is_err());
    }

    #[test]
    fn set_get_round_trip() {
        let mut t = full_table();
        let rp10 = ReturnPeriod::from_years(10).unwrap();
        t.set(Duration::Day7, rp10, 3.25);
        assert_relative_eq!(t.get(Duration::Day7, rp10), 3.25);
        // Neighbors untouched
        assert!(t.get(Duration::Day4, rp10).is_nan());
    }

    #[test]
    fn from_fn_fills_every_cell() {
        let t = IdfTable::from_fn(
            Duration::ALL.to_vec(),
            ReturnPeriod::ALL.to_vec(),
            |d, rp| d.window_days() as f64 * rp.years() as f64,
        )
        .unwrap();
        let rp100 = ReturnPeriod::from_years(100).unwrap();
        assert_relative_eq!(t.get(Duration::Day60, rp100), 6000.0);
        assert_relative_eq!(t.get(Duration::Hr24, ReturnPeriod::ALL[0]), 2.0);
    }

    #[test]
    fn row_matches_cells() {
        let t = IdfTable::from_fn(
            Duration::ALL.to_vec(),
            ReturnPeriod::ALL.to_vec(),
            |d, rp| d.window_days() as f64 + rp.years() as f64,
        )
        .unwrap();
        let row = t.row(Duration::Day10);
        assert_eq!(row.len(), 6);
        assert_relative_eq!(row[0], 12.0); // 10 + 2
        assert_relative_eq!(row[5], 110.0); // 10 + 100
    }

    #[test]
    #[should_panic(expected = "not on table axis")]
    fn get_off_axis_panics() {
        let t = IdfTable::new(vec![Duration::Hr24], ReturnPeriod::ALL.to_vec()).unwrap();
        t.get(Duration::Day60, ReturnPeriod::ALL[0]);
    }

    #[test]
    fn same_axes_detects_mismatch() {
        let a = full_table();
        let b = full_table();
        let c = IdfTable::new(vec![Duration::Hr24], ReturnPeriod::ALL.to_vec()).unwrap();
        assert!(a.same_axes(&b));
        assert!(!a.same_axes(&c));
    }

    #[test]
    fn monotone_check_skips_nan() {
        let mut t = full_table();
        let rp = ReturnPeriod::from_years(2).unwrap();
        t.set(Duration::Hr24, rp, 1.0);
        t.set(Duration::Day7, rp, 2.0);
        t.set(Duration::Day60, rp, 5.0);
        // NaN gaps between set cells are ignored
        assert!(t.non_decreasing_in_duration(rp));
        t.set(Duration::Day30, rp, 0.5);
        assert!(!t.non_decreasing_in_duration(rp));
    }
}
