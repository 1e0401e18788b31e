//! # pluvio-catalog
//!
//! Fixed catalogs and shared containers for the pluvio IDF pipeline.
//!
//! The IDF analysis runs over three categorical axes that must agree
//! exactly across every component: accumulation durations, return
//! periods, and emission scenarios. This crate is the single source of
//! truth for all three, plus the [`IdfTable`] container every stage
//! reads and writes.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `duration` | Accumulation durations and window lengths |
//! | `return_period` | Return periods and exceedance probabilities |
//! | `scenario` | Emission scenarios (historical / RCP 4.5 / RCP 8.5) |
//! | `table` | Duration × return-period value table |
//! | `error` | Error types |

mod duration;
mod error;
mod return_period;
mod scenario;
mod table;

pub use duration::Duration;
pub use error::CatalogError;
pub use return_period::ReturnPeriod;
pub use scenario::Scenario;
pub use table::IdfTable;
