//! # pluvio-gev
//!
//! Generalized Extreme Value distribution for annual-exceedance
//! precipitation statistics.
//!
//! Provides a validated parameter type ([`GevParams`]) with quantile,
//! CDF, and log-density, and two estimators:
//!
//! - [`fit_lmoments`] — Hosking's L-moment method, robust for the
//!   short samples that block-maxima analysis produces;
//! - [`fit_mle`] — maximum likelihood via Nelder-Mead, for
//!   cross-checking the L-moment tables.
//!
//! Shape sign follows the Hosking / scipy `genextreme` convention:
//! positive shape bounds the upper tail, negative shape is heavy.
//!
//! Both fits fail loudly (with [`GevError`]) rather than returning
//! garbage parameters; callers estimating whole tables are expected to
//! catch the error and mark the affected cell missing.

mod error;
mod lmom;
mod mle;
mod params;

pub use error::GevError;
pub use lmom::fit_lmoments;
pub use mle::fit_mle;
pub use params::GevParams;
