//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Compound Growth - monthly compounding projections with saved history.
#[derive(Parser, Debug)]
#[command(name = "compound-growth")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON settings file
    #[arg(long, global = true, env = "COMPOUND_GROWTH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the saved-history file location
    #[arg(long, global = true, env = "COMPOUND_GROWTH_HISTORY")]
    pub history_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Project a balance from command-line values
    Calc(CalcArgs),

    /// Answer a JSON request body read from a file or stdin
    Request(RequestArgs),

    /// Simulate a multi-period plan from a JSON file
    Plan(PlanArgs),

    /// Show saved histories
    History(HistoryArgs),
}

/// Arguments for `compound-growth calc`
#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Starting balance
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub principal: f64,

    /// Annual interest rate in percent
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub rate: f64,

    /// Duration in whole years
    #[arg(long, default_value_t = 0)]
    pub years: u32,

    /// Amount added at the start of every month
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub monthly: f64,

    /// Append the resulting history to the history file
    #[arg(long)]
    pub save: bool,

    /// Also print a contributed-vs-earned summary
    #[arg(long)]
    pub summary: bool,
}

/// Arguments for `compound-growth request`
#[derive(Args, Debug)]
pub struct RequestArgs {
    /// File holding the request body (stdin when omitted)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Append the resulting history to the history file
    #[arg(long)]
    pub save: bool,
}

/// Arguments for `compound-growth plan`
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// File holding a JSON array of periods
    #[arg(long)]
    pub file: PathBuf,
}

/// Arguments for `compound-growth history`
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Print only the number of saved histories
    #[arg(long)]
    pub count: bool,
}
