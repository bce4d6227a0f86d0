//! Merge strategy module
//!
//! This module defines the Strategy pattern for the complete merge pipeline:
//! reading every selected statement, extracting its transactions and feeding
//! them to a [`MergeEngine`]. Strategies differ only in how files are read
//! (blocking or through tokio); both read one file at a time in selection
//! order, so the accumulator is never shared.

use crate::cli::StrategyType;
use crate::core::{extract_statement, MergeEngine};
use crate::io::ExportLayout;
use crate::types::{FileFailure, MergeError, MergeResult, StatementFile};
use clap::ValueEnum;
use std::path::{Path, PathBuf};

pub mod r#async;
pub mod sync;

pub use self::r#async::AsyncMergeStrategy;
pub use sync::SyncMergeStrategy;

/// What a batch does when one of its files cannot be processed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FailurePolicy {
    /// Abort the whole merge and discard everything merged so far
    #[default]
    FailFast,
    /// Drop only the failing file, report it and keep going
    Skip,
}

/// Configuration for one merge invocation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeConfig {
    /// Reaction to a file that fails to read or extract
    pub failure_policy: FailurePolicy,
    /// Column layout used when the result is exported
    pub layout: ExportLayout,
}

impl MergeConfig {
    pub fn new(failure_policy: FailurePolicy, layout: ExportLayout) -> Self {
        Self {
            failure_policy,
            layout,
        }
    }
}

/// Merge strategy trait for complete merge pipelines
pub trait MergeStrategy: Send + Sync {
    /// Merge the statements at `inputs` into one ordered result
    ///
    /// Files are processed in the order given. An empty `inputs` slice
    /// yields an empty result.
    ///
    /// # Errors
    ///
    /// Under [`FailurePolicy::FailFast`] the first file that cannot be read
    /// or contains a malformed record aborts the merge and its error is
    /// returned; nothing merged before it survives. Under
    /// [`FailurePolicy::Skip`] such files are listed in
    /// [`MergeResult::skipped`] instead. Strategy setup failures (e.g. the
    /// async runtime) are always returned.
    fn merge(&self, inputs: &[PathBuf], config: &MergeConfig) -> Result<MergeResult, MergeError>;
}

/// Create a merge strategy based on the specified strategy type
pub fn create_strategy(strategy_type: StrategyType) -> Box<dyn MergeStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncMergeStrategy),
        StrategyType::Async => Box::new(AsyncMergeStrategy),
    }
}

/// Accumulation state of one merge run, shared by both strategies
#[derive(Debug)]
pub(crate) struct Batch {
    engine: MergeEngine,
    skipped: Vec<FileFailure>,
    policy: FailurePolicy,
}

impl Batch {
    pub(crate) fn new(policy: FailurePolicy) -> Self {
        Self {
            engine: MergeEngine::new(),
            skipped: Vec::new(),
            policy,
        }
    }

    /// Extract and accumulate one file, applying the failure policy
    pub(crate) fn accept(
        &mut self,
        path: &Path,
        read: Result<StatementFile, MergeError>,
    ) -> Result<(), MergeError> {
        match read.and_then(|file| extract_statement(&file)) {
            Ok(transactions) => {
                tracing::debug!(
                    file = %path.display(),
                    transactions = transactions.len(),
                    "Merged statement"
                );
                self.engine.add_file(transactions);
                Ok(())
            }
            Err(error) => match self.policy {
                FailurePolicy::FailFast => Err(error),
                FailurePolicy::Skip => {
                    tracing::warn!(file = %path.display(), %error, "Skipping statement");
                    self.skipped.push(FileFailure {
                        file: path.display().to_string(),
                        error,
                    });
                    Ok(())
                }
            },
        }
    }

    pub(crate) fn finish(self) -> MergeResult {
        let mut result = self.engine.finish();
        result.skipped = self.skipped;
        tracing::debug!(
            files = result.files_merged,
            skipped = result.skipped.len(),
            transactions = result.transactions.len(),
            "Merge complete"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn good(name: &str, line: &str) -> Result<StatementFile, MergeError> {
        Ok(StatementFile::new(name, line))
    }

    #[test]
    fn test_batch_fail_fast_returns_first_error() {
        let mut batch = Batch::new(FailurePolicy::FailFast);
        batch
            .accept(
                Path::new("a_Checking0001.csv"),
                good("a_Checking0001.csv", "CHK_SAV_LOC_IRA,01/01/2024,,,A,,1"),
            )
            .unwrap();

        let result = batch.accept(
            Path::new("b_Checking0002.csv"),
            good("b_Checking0002.csv", "CHK_SAV_LOC_IRA,01/01/2024"),
        );

        assert_eq!(
            result,
            Err(MergeError::malformed_record("b_Checking0002.csv", 1, 2))
        );
    }

    #[test]
    fn test_batch_skip_records_failure_and_keeps_others() {
        let mut batch = Batch::new(FailurePolicy::Skip);
        batch
            .accept(
                Path::new("missing.csv"),
                Err(MergeError::FileNotFound {
                    path: "missing.csv".to_string(),
                }),
            )
            .unwrap();
        batch
            .accept(
                Path::new("a_Checking0001.csv"),
                good("a_Checking0001.csv", "CHK_SAV_LOC_IRA,01/01/2024,,,A,,1"),
            )
            .unwrap();

        let result = batch.finish();

        assert_eq!(result.files_merged, 1);
        assert_eq!(result.transactions.len(), 1);
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].file, "missing.csv");
    }

    #[test]
    fn test_merge_config_default() {
        let config = MergeConfig::default();
        assert_eq!(config.failure_policy, FailurePolicy::FailFast);
        assert_eq!(config.layout, ExportLayout::Enriched);
    }
}
