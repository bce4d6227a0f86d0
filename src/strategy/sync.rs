//! Synchronous merge strategy
//!
//! Reads each statement with `std::fs`, one after the other, and feeds it to
//! the batch accumulator.
//!
//! # Examples
//!
//! ```no_run
//! use statement_merger::strategy::{MergeConfig, MergeStrategy, SyncMergeStrategy};
//! use std::path::PathBuf;
//!
//! let inputs = vec![PathBuf::from("statement_Checking1234.csv")];
//! let result = SyncMergeStrategy
//!     .merge(&inputs, &MergeConfig::default())
//!     .expect("Merge failed");
//! println!("{} transactions", result.transactions.len());
//! ```

use crate::io::sync_reader::read_statement;
use crate::strategy::{Batch, MergeConfig, MergeStrategy};
use crate::types::{MergeError, MergeResult};
use std::path::PathBuf;

/// Synchronous merge strategy
#[derive(Debug, Clone, Copy)]
pub struct SyncMergeStrategy;

impl MergeStrategy for SyncMergeStrategy {
    fn merge(&self, inputs: &[PathBuf], config: &MergeConfig) -> Result<MergeResult, MergeError> {
        let mut batch = Batch::new(config.failure_policy);

        for path in inputs {
            batch.accept(path, read_statement(path))?;
        }

        Ok(batch.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::FailurePolicy;
    use std::fs;
    use tempfile::TempDir;

    /// Helper function to write a statement into a temp dir
    fn write_statement(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).expect("Failed to write statement");
        path
    }

    #[test]
    fn test_sync_strategy_merges_and_orders() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let savings = write_statement(
            &dir,
            "stmt_Savings0002.csv",
            "CHK_SAV_LOC_IRA,2024-01-01,,,Interest,0.10,\n",
        );
        let checking = write_statement(
            &dir,
            "stmt_Checking0001.csv",
            "Header line\nCHK_SAV_LOC_IRA,2024-03-01,,,Rent,,-900.00\n",
        );

        let result = SyncMergeStrategy
            .merge(&[savings, checking], &MergeConfig::default())
            .unwrap();

        assert_eq!(result.files_merged, 2);
        let last4s: Vec<&str> = result.transactions.iter().map(|t| t.last4.as_str()).collect();
        assert_eq!(last4s, vec!["0001", "0002"]);
        assert_eq!(result.transactions[0].name, "Checking");
        assert_eq!(result.transactions[0].amount, "-900.00");
    }

    #[test]
    fn test_sync_strategy_no_inputs() {
        let result = SyncMergeStrategy.merge(&[], &MergeConfig::default()).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.files_merged, 0);
    }

    #[test]
    fn test_sync_strategy_fail_fast_on_missing_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let good = write_statement(
            &dir,
            "stmt_Checking0001.csv",
            "CHK_SAV_LOC_IRA,2024-03-01,,,Rent,,-900.00\n",
        );

        let result = SyncMergeStrategy.merge(
            &[good, dir.path().join("missing.csv")],
            &MergeConfig::default(),
        );

        assert!(matches!(result, Err(MergeError::FileNotFound { .. })));
    }

    #[test]
    fn test_sync_strategy_skip_policy() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let bad = write_statement(&dir, "stmt_Bad0003.csv", "CHK_SAV_LOC_IRA,2024-03-01\n");
        let good = write_statement(
            &dir,
            "stmt_Checking0001.csv",
            "CHK_SAV_LOC_IRA,2024-03-01,,,Rent,,-900.00\n",
        );
        let config = MergeConfig {
            failure_policy: FailurePolicy::Skip,
            ..MergeConfig::default()
        };

        let result = SyncMergeStrategy.merge(&[bad.clone(), good], &config).unwrap();

        assert_eq!(result.transactions.len(), 1);
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].file, bad.display().to_string());
        assert!(matches!(
            result.skipped[0].error,
            MergeError::MalformedRecord { line: 1, fields: 2, .. }
        ));
    }

    #[test]
    fn test_sync_strategy_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SyncMergeStrategy>();
    }
}
