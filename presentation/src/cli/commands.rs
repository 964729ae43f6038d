//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the batch report
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full per-order report
    Full,
    /// Counts only
    Summary,
    /// JSON output
    Json,
}

impl OutputFormat {
    /// Map to the domain-level format value
    pub fn to_domain(self) -> ordersnap_domain::OutputFormat {
        match self {
            OutputFormat::Full => ordersnap_domain::OutputFormat::Full,
            OutputFormat::Summary => ordersnap_domain::OutputFormat::Summary,
            OutputFormat::Json => ordersnap_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for ordersnap
#[derive(Parser, Debug)]
#[command(name = "ordersnap")]
#[command(author, version, about = "Fetch order snapshots from three upstreams under a concurrency cap")]
#[command(long_about = r#"
ordersnap assembles a snapshot for every order in a batch by querying three
simulated upstream services (order, payment, shipment) concurrently, under
a global concurrency cap and a per-call timeout.

A slow or failing lookup never sinks the batch: it is recorded as an error
entry on the affected snapshot and the remaining lookups proceed. Press
Ctrl-C to cancel the whole batch; a cancelled batch returns no results.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./ordersnap.toml    Project-level config
3. ~/.config/ordersnap/config.toml   Global config

Example:
  ordersnap
  ordersnap --count 20 --concurrency 5 --timeout-ms 1000
  ordersnap -o json --quiet
"#)]
pub struct Cli {
    /// Number of demo orders to generate
    #[arg(short = 'n', long, value_name = "N")]
    pub count: Option<usize>,

    /// Maximum orders processed concurrently
    #[arg(short = 'c', long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Per-lookup timeout in milliseconds
    #[arg(short = 't', long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Output format (falls back to the config file value, then full)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
