//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod search;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tradewinds - multi-hop trade route profit search.
#[derive(Parser, Debug)]
#[command(name = "tradewinds")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search for the most profitable trade routes
    Search(SearchArgs),

    /// Validate configuration and summarize the trading-post graph
    Check(CheckArgs),
}

/// Arguments for the `search` subcommand.
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Path to the JSON price list
    #[arg(short, long, default_value = "prices.json")]
    pub prices: PathBuf,

    /// Override the configured origin post
    #[arg(long)]
    pub origin: Option<String>,

    /// Override the configured destination post
    #[arg(long)]
    pub destination: Option<String>,

    /// Override the configured hop limit
    #[arg(long)]
    pub max_hops: Option<i64>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Show at most N ranked paths
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Emit machine-readable JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Path to the JSON price list
    #[arg(short, long, default_value = "prices.json")]
    pub prices: PathBuf,

    /// Print every port with its outgoing routes
    #[arg(long)]
    pub verbose: bool,
}
