//! # pluvio-accumulate
//!
//! Time accumulation over daily precipitation series.
//!
//! Two operations, both NaN-aware:
//!
//! - [`rolling_sum`] — trailing multi-day totals on the daily calendar,
//!   feeding the per-duration threshold estimation;
//! - [`annual_totals`] — calendar-year sums used as a bias diagnostic,
//!   with [`pad_with_nan`] to stack variable-length records.
//!
//! The two treat missing days differently on purpose: a rolling window
//! containing a NaN is NaN (an extreme total with a hole in it is not
//! trustworthy), while annual totals count NaN days as zero rainfall
//! (the diagnostic tolerates gaps).

mod annual;
mod error;
mod rolling;

pub use annual::{annual_totals, pad_with_nan};
pub use error::AccumulateError;
pub use rolling::rolling_sum;
