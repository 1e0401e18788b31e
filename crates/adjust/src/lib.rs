//! Change factors, ensemble aggregation, and reference-curve adjustment.
//!
//! This crate turns per-model threshold tables into design-curve
//! adjustments for a location:
//!
//! 1. **Factor**: divide each scenario table by the same model's
//!    historical table (elementwise, NaN-safe)
//! 2. **Aggregate**: average the factors across the model ensemble,
//!    cell by cell, ignoring NaN members
//! 3. **Adjust**: scale an authoritative reference curve (indexed by
//!    return period only) by the mean factors, broadcasting down the
//!    duration axis
//!
//! NaN marks absence throughout and is never replaced by a neutral
//! value: an all-NaN ensemble cell stays NaN in the adjusted table.

mod change_factor;
mod ensemble;
mod error;
mod reference;

pub use change_factor::change_factors;
pub use ensemble::ensemble_mean;
pub use error::AdjustError;
pub use reference::{ReferenceCurve, adjust_reference};
