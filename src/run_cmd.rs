use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use pluvio_io::{CsvProvider, CsvSink};
use pluvio_pipeline::run_pipeline;

use crate::cli::RunArgs;
use crate::config::PluvioConfig;
use crate::convert;

/// Run the full pipeline over every configured location.
pub fn run(args: RunArgs) -> Result<()> {
    let text = fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config: {}", args.config.display()))?;
    let mut config: PluvioConfig =
        toml::from_str(&text).with_context(|| format!("invalid config: {}", args.config.display()))?;

    if let Some(dir) = args.data_dir {
        config.io.data_dir = Some(dir);
    }
    if let Some(dir) = args.output_dir {
        config.io.output_dir = Some(dir);
    }

    let data_dir = config.io.data_dir.clone().ok_or_else(|| {
        anyhow::anyhow!("no data directory: set [io].data_dir in config or use --data-dir")
    })?;
    let output_dir = config.io.output_dir.clone().ok_or_else(|| {
        anyhow::anyhow!("no output directory: set [io].output_dir in config or use --output-dir")
    })?;

    let pipeline_config = convert::build_pipeline_config(&config)?;

    info!(
        data = %data_dir.display(),
        out = %output_dir.display(),
        n_models = pipeline_config.models().len(),
        n_locations = pipeline_config.locations().len(),
        "starting pipeline"
    );

    let provider = CsvProvider::new(data_dir);
    let mut sink = CsvSink::new(output_dir);
    let summary = run_pipeline(&provider, &mut sink, &pipeline_config)
        .context("pipeline failed")?;

    info!(
        processed = summary.locations_processed(),
        skipped = summary.locations_skipped().len(),
        series_skipped = summary.series_skipped(),
        "pipeline finished"
    );
    if !summary.locations_skipped().is_empty() {
        eprintln!(
            "Warning: {} location(s) skipped: {}",
            summary.locations_skipped().len(),
            summary.locations_skipped().join(", ")
        );
    }

    Ok(())
}
