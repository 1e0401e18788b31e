//! Precipitation threshold estimation across durations and return periods.
//!
//! Given a daily precipitation series, this crate computes one threshold
//! per (duration, return period) cell:
//!
//! 1. **Accumulate**: rolling sums at each catalog duration
//! 2. **Rank**: sort the sums descending and keep the largest
//!    `record_length / 365` values as extreme-event candidates
//! 3. **Estimate**: map each return period's annual exceedance
//!    probability to a threshold, either empirically (linear-interpolated
//!    percentile) or through a fitted GEV distribution (L-moments or
//!    maximum likelihood)
//!
//! Cells that cannot be estimated come back NaN; a failed distribution
//! fit blanks the whole duration row rather than aborting the table.

mod config;
mod error;
mod estimate;

pub use config::{Method, ThresholdConfig};
pub use error::ThresholdError;
pub use estimate::estimate_thresholds;
