// CLI module
// Command-line interface, argument parsing and logging setup

mod args;

pub use args::{CliArgs, StrategyType};

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, missing inputs, or `--help`), clap
/// displays an error message or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise only this crate logs, at `level`.
/// Logs go to stderr so they never mix with CSV written to stdout.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
