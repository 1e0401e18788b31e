//! CSV reading and writing for daily series, reference curves, and
//! result tables.
//!
//! [`CsvProvider`] and [`CsvSink`] plug the filesystem into the
//! pipeline's provider and sink traits; the free functions underneath
//! them are exposed for tools that work with individual files.

mod error;
mod provider;
mod read;
mod sink;
mod write;

pub use error::IoError;
pub use provider::CsvProvider;
pub use read::{read_daily_series, read_reference_curve};
pub use sink::CsvSink;
pub use write::{write_annual_totals, write_table};
