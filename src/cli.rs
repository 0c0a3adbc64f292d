use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Navchain Markov navigation analysis.
#[derive(Parser)]
#[command(
    name = "navchain",
    version,
    about = "Markov navigation analysis for application user flows"
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
    /// Propagate a navigation model and report visitation probabilities.
    Analyze(AnalyzeArgs),
    /// Sample a day-activity curve.
    Daily(DailyArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Path to the model TOML file.
    #[arg(short, long, default_value = "navchain.toml")]
    pub config: PathBuf,

    /// Override the iteration count from the model file.
    #[arg(short = 'n', long)]
    pub iterations: Option<usize>,

    /// Print the report as JSON instead of tables.
    #[arg(long)]
    pub json: bool,

    /// Also print the transition matrix.
    #[arg(long)]
    pub show_matrix: bool,

    /// Also print the per-step history.
    #[arg(long)]
    pub show_history: bool,
}

/// Arguments for the `daily` subcommand.
#[derive(clap::Args)]
pub struct DailyArgs {
    /// Built-in profile: `normal` or `weekend`.
    #[arg(short, long, default_value = "normal")]
    pub preset: String,

    /// Extra time-zone offset in hours; repeat for several zones.
    #[arg(long = "time-shift", visible_alias = "tz", allow_negative_numbers = true)]
    pub time_shifts: Vec<f64>,

    /// Number of sample points over the day.
    #[arg(short, long, default_value_t = 500)]
    pub resolution: usize,

    /// Print the curve as JSON instead of an hourly table.
    #[arg(long)]
    pub json: bool,
}
