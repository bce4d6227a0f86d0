//! Statement Merger Library
//! # Overview
//!
//! This library merges bank statement CSV exports into one ordered transaction
//! list and re-exports it as a single CSV, reading files either synchronously
//! or through tokio.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (AccountInfo, Transaction, MergeError, etc.)
//! - [`cli`] - CLI arguments parsing and logging setup
//! - [`core`] - Pipeline components:
//!   - [`core::extractor`] - Recognition of `CHK_SAV_LOC_IRA` lines and field extraction
//!   - [`core::normalizer`] - Description/amount cleanup and amount column resolution
//!   - [`core::merge`] - Accumulation and ordering across files
//! - [`io`] - Statement readers, CSV export and the preview table
//! - [`strategy`] - Sync and async merge pipelines behind one trait
//!
//! # Ordering
//!
//! The merged list is ordered by the account's last four digits (as a
//! number), then by date. Records tied on both keep file order, then line
//! order. Missing or non-numeric account digits and unparseable dates sort
//! last.
//!
//! # Known Limitations
//!
//! - Input lines are split on every comma; a description containing a comma
//!   shifts the fields after it.
//! - Exported descriptions are always quoted, but quotes inside them are not
//!   escaped.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use crate::core::{extract_statement, sort_transactions, MergeEngine, RECORD_TYPE};
pub use io::{export_to_dir, write_transactions_csv, ExportLayout};
pub use strategy::{create_strategy, FailurePolicy, MergeConfig, MergeStrategy};
pub use types::{AccountInfo, FileFailure, MergeError, MergeResult, StatementFile, Transaction};
