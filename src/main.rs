//! Statement Merger CLI
//!
//! Command-line interface for merging bank statement CSV exports.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- stmt_Checking1234.csv stmt_Savings5678.csv
//! cargo run -- --output-dir ~/Downloads stmt_*.csv
//! cargo run -- --stdout --layout basic stmt_*.csv > merged.csv
//! cargo run -- --on-error skip --preview stmt_*.csv
//! ```
//!
//! The program reads every input in the order given, merges the recognized
//! transactions, and writes `combined_statements_<YYYY-MM-DD>.csv` to the
//! output directory (or the CSV text to stdout with `--stdout`). When no
//! transactions were found nothing is written.
//!
//! # Exit Codes
//!
//! - 0: Success (including the nothing-to-export case)
//! - 1: Error (unreadable input, malformed record, export failure, etc.)

use chrono::Local;
use statement_merger::cli;
use statement_merger::io::{export_to_dir, export_to_writer, write_preview};
use statement_merger::strategy;
use statement_merger::MergeError;
use std::process;

fn run(args: &cli::CliArgs) -> Result<(), MergeError> {
    let config = args.to_merge_config();
    let strategy = strategy::create_strategy(args.strategy.clone());

    let result = strategy.merge(&args.inputs, &config)?;

    for failure in &result.skipped {
        eprintln!("Skipped {}: {}", failure.file, failure.error);
    }

    if args.preview {
        write_preview(&result.transactions, &mut std::io::stderr())?;
    }

    if args.stdout {
        export_to_writer(&result.transactions, config.layout, &mut std::io::stdout())?;
    } else if let Some(path) = export_to_dir(
        &result.transactions,
        &args.output_dir,
        config.layout,
        Local::now().date_naive(),
    )? {
        eprintln!(
            "Merged {} transactions from {} files into {}",
            result.transactions.len(),
            result.files_merged,
            path.display()
        );
    }

    Ok(())
}

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();
    cli::init_logger(args.log_level);

    if let Err(e) = run(&args) {
        tracing::error!(error = %e, "Merge failed");
        eprintln!("Error processing files: {}", e);
        process::exit(1);
    }
}
