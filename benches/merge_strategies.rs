//! Benchmark suite for the merge pipeline
//!
//! Compares the synchronous and asynchronous strategies on generated
//! statements, and measures extraction and ordering on their own, using the
//! divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Statements are generated into a temp dir: `FILES` accounts with `ROWS`
//! recognized lines each, interleaved with header and summary lines, dates
//! shuffled so the sort has work to do.

use statement_merger::cli::StrategyType;
use statement_merger::core::{extract_records, sort_transactions};
use statement_merger::strategy::{create_strategy, MergeConfig};
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const FILES: usize = 8;
const ROWS: usize = 2_000;

fn main() {
    divan::main();
}

fn statement_text(seed: usize) -> String {
    let mut text = String::from("Account Type,Posted Date,Ref,Check,Description,Credit,Debit\n");
    for row in 0..ROWS {
        let day = (row * 7 + seed) % 28 + 1;
        let month = (row * 3 + seed) % 12 + 1;
        if row % 50 == 0 {
            let _ = writeln!(text, "SUMMARY,{:02}/{:02}/2024,,,Running balance,,", month, day);
        }
        let _ = writeln!(
            text,
            "CHK_SAV_LOC_IRA,{:02}/{:02}/2024,,,POS  PURCHASE   STORE {}  ,,-{}.{:02}",
            month,
            day,
            row,
            row % 300,
            row % 100
        );
    }
    text
}

fn write_statements() -> (TempDir, Vec<PathBuf>) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let inputs = (0..FILES)
        .map(|i| {
            let path = dir.path().join(format!("stmt_Account{:04}.csv", (FILES - i) * 1111));
            fs::write(&path, statement_text(i)).expect("Failed to write statement");
            path
        })
        .collect();
    (dir, inputs)
}

/// Benchmark the synchronous strategy end to end
#[divan::bench]
fn sync_strategy(bencher: divan::Bencher) {
    let (_dir, inputs) = write_statements();
    let strategy = create_strategy(StrategyType::Sync);

    bencher.bench(|| {
        strategy
            .merge(&inputs, &MergeConfig::default())
            .expect("Merge failed")
    });
}

/// Benchmark the asynchronous strategy end to end
#[divan::bench]
fn async_strategy(bencher: divan::Bencher) {
    let (_dir, inputs) = write_statements();
    let strategy = create_strategy(StrategyType::Async);

    bencher.bench(|| {
        strategy
            .merge(&inputs, &MergeConfig::default())
            .expect("Merge failed")
    });
}

/// Benchmark extraction of a single statement
#[divan::bench]
fn extract_single_statement(bencher: divan::Bencher) {
    let text = statement_text(0);

    bencher.bench(|| extract_records(divan::black_box(&text)).expect("Extraction failed"));
}

/// Benchmark ordering of one statement's transactions
#[divan::bench]
fn sort_single_statement(bencher: divan::Bencher) {
    let transactions = extract_records(&statement_text(3)).expect("Extraction failed");

    bencher
        .with_inputs(|| transactions.clone())
        .bench_local_values(|mut transactions| {
            sort_transactions(&mut transactions);
            transactions
        });
}
