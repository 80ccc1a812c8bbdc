use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// kvote exact k-nearest-neighbor classifier.
#[derive(Parser)]
#[command(
    name = "kvote",
    version,
    about = "Exact k-nearest-neighbor classification with partitioned parallel scans"
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
    /// Time one sequential and one partitioned classification of a synthetic query.
    Bench(BenchArgs),
    /// Time the partitioned classifier over a range of worker counts.
    Sweep(SweepArgs),
}

/// Data and classifier settings shared by all subcommands.
///
/// Each flag overrides the corresponding value of the TOML configuration.
#[derive(clap::Args, Debug)]
pub struct DataArgs {
    /// Path to TOML configuration file (defaults apply if `kvote.toml` is absent).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of training points to generate.
    #[arg(long)]
    pub points: Option<usize>,

    /// Number of features per point.
    #[arg(long)]
    pub features: Option<usize>,

    /// Half-width of the uniform noise added to each feature.
    #[arg(long)]
    pub noise: Option<f64>,

    /// Number of nearest neighbors that vote.
    #[arg(short = 'k', long)]
    pub k: Option<usize>,

    /// Minkowski distance exponent.
    #[arg(long)]
    pub exponent: Option<u32>,

    /// Override the RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `bench` subcommand.
#[derive(clap::Args, Debug)]
pub struct BenchArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Number of partition workers.
    #[arg(short, long)]
    pub workers: Option<usize>,
}

/// Arguments for the `sweep` subcommand.
#[derive(clap::Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Largest worker count to time (defaults to available parallelism).
    #[arg(long)]
    pub max_workers: Option<usize>,

    /// Timed runs per worker count; the fastest is reported.
    #[arg(short, long, default_value_t = 3)]
    pub repeats: usize,
}
