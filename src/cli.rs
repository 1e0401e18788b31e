use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Pluvio precipitation threshold engine.
#[derive(Parser)]
#[command(
    name = "pluvio",
    version,
    about = "IDF threshold estimation and design-curve adjustment"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the full pipeline over every configured location.
    Run(RunArgs),
    /// Estimate a threshold table for a single daily series.
    Thresholds(ThresholdsArgs),
}

/// Arguments for the `run` subcommand.
#[derive(clap::Args)]
pub struct RunArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "pluvio.toml")]
    pub config: PathBuf,

    /// Override data directory from config.
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Override output directory from config.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Arguments for the `thresholds` subcommand.
#[derive(clap::Args)]
pub struct ThresholdsArgs {
    /// Path to a daily series CSV (date,value).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the threshold table CSV.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Estimation method: empirical, lmom, or mle.
    #[arg(short, long, default_value = "empirical")]
    pub method: String,
}
