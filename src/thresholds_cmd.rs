use anyhow::{Context, Result};
use tracing::info;

use pluvio_io::{read_daily_series, write_table};
use pluvio_thresholds::estimate_thresholds;

use crate::cli::ThresholdsArgs;
use crate::convert;

/// Estimate a threshold table for a single daily series.
pub fn run(args: ThresholdsArgs) -> Result<()> {
    let config = convert::build_threshold_config(&args.method)?;

    let daily = read_daily_series(&args.input)
        .with_context(|| format!("failed to read series: {}", args.input.display()))?;
    info!(path = %args.input.display(), n_days = daily.len(), "series read");

    let table = estimate_thresholds(&daily, &config).context("threshold estimation failed")?;

    let n_total = table.cells().count();
    let n_missing = table.cells().filter(|(_, _, v)| v.is_nan()).count();
    if n_missing > 0 {
        eprintln!("Warning: {n_missing} of {n_total} cells could not be estimated");
    }

    write_table(&args.output, &table)
        .with_context(|| format!("failed to write table: {}", args.output.display()))?;
    info!(path = %args.output.display(), "threshold table written");

    Ok(())
}
