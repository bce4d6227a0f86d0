use crate::io::ExportLayout;
use crate::strategy::{FailurePolicy, MergeConfig};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Merge bank statement CSV exports into one ordered CSV
#[derive(Parser, Debug)]
#[command(name = "statement-merger")]
#[command(about = "Merge bank statement CSV exports into one ordered CSV", long_about = None)]
pub struct CliArgs {
    /// Statement CSV files, merged in the order given
    #[arg(
        value_name = "INPUT",
        required = true,
        help = "Statement CSV files named like <prefix>_<Name><last4>.csv"
    )]
    pub inputs: Vec<PathBuf>,

    /// How statement files are read
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "async",
        help = "Reading strategy: 'sync' for std::fs or 'async' for tokio"
    )]
    pub strategy: StrategyType,

    /// Output column layout
    #[arg(
        long = "layout",
        value_name = "LAYOUT",
        default_value = "enriched",
        help = "Output layout: 'enriched' (Name,Last 4,...) or 'basic' (Account,...)"
    )]
    pub layout: ExportLayout,

    /// Reaction to a statement that cannot be processed
    #[arg(
        long = "on-error",
        value_name = "POLICY",
        default_value = "fail-fast",
        help = "'fail-fast' aborts the whole merge, 'skip' drops only the failing file"
    )]
    pub on_error: FailurePolicy,

    /// Directory the dated output file is written to
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Directory for combined_statements_<YYYY-MM-DD>.csv"
    )]
    pub output_dir: PathBuf,

    /// Write the combined CSV to stdout instead of a file
    #[arg(long = "stdout", help = "Write the combined CSV to stdout instead of a file")]
    pub stdout: bool,

    /// Print a preview table of the merged transactions to stderr
    #[arg(long = "preview", help = "Print a preview table to stderr")]
    pub preview: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level (off, error, warn, info, debug, trace); RUST_LOG takes precedence"
    )]
    pub log_level: LevelFilter,
}

/// Available reading strategies
#[derive(Clone, Debug, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a MergeConfig from CLI arguments
    pub fn to_merge_config(&self) -> MergeConfig {
        MergeConfig::new(self.on_error, self.layout)
    }
}
