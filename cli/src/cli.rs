use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;

#[derive(Debug, Parser)]
#[clap(
    name = "gbce",
    version,
    about = "Global Beverage Corporation Exchange ticker"
)]
pub struct Cli {
    /// Number of random trades to run
    #[clap(long)]
    pub trades: Option<usize>,

    /// Base pause between ticker lines, in milliseconds
    #[clap(long)]
    pub pause_ms: Option<u64>,

    /// Lookback for volume weighted prices, in seconds
    #[clap(long)]
    pub window_secs: Option<u64>,

    /// Seed for reproducible trade generation
    #[clap(long)]
    pub seed: Option<u64>,

    /// JSON catalog of stocks to list instead of the sample data
    #[clap(long)]
    pub stocks: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[clap(long)]
    pub json_logs: bool,
}

/// Flags given on the command line win over the environment.
pub(crate) fn apply_cli(mut cfg: AppConfig, cli: &Cli) -> AppConfig {
    if let Some(trades) = cli.trades {
        cfg.trades = trades;
    }
    if let Some(pause_ms) = cli.pause_ms {
        cfg.pause_ms = pause_ms;
    }
    if let Some(window_secs) = cli.window_secs {
        cfg.window_secs = window_secs;
    }
    if cli.seed.is_some() {
        cfg.seed = cli.seed;
    }
    if cli.stocks.is_some() {
        cfg.catalog = cli.stocks.clone();
    }
    if cli.json_logs {
        cfg.json_logs = true;
    }
    cfg
}
