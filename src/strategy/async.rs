//! Asynchronous merge strategy
//!
//! Reads statements through `tokio::fs` on a current-thread runtime. Each
//! read is awaited before the next one starts, so files are merged in
//! selection order exactly like the synchronous strategy; there is no
//! concurrent access to the accumulator and no locking.

use crate::io::async_reader::read_statement;
use crate::strategy::{Batch, MergeConfig, MergeStrategy};
use crate::types::{MergeError, MergeResult};
use std::path::PathBuf;

/// Asynchronous merge strategy
#[derive(Debug, Clone, Copy)]
pub struct AsyncMergeStrategy;

impl AsyncMergeStrategy {
    /// Merge from within an existing tokio runtime
    pub async fn merge_async(
        &self,
        inputs: &[PathBuf],
        config: &MergeConfig,
    ) -> Result<MergeResult, MergeError> {
        let mut batch = Batch::new(config.failure_policy);

        for path in inputs {
            let read = read_statement(path).await;
            batch.accept(path, read)?;
        }

        Ok(batch.finish())
    }
}

impl MergeStrategy for AsyncMergeStrategy {
    fn merge(&self, inputs: &[PathBuf], config: &MergeConfig) -> Result<MergeResult, MergeError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .map_err(|e| MergeError::Runtime {
                message: format!("Failed to create tokio runtime: {}", e),
            })?;

        runtime.block_on(self.merge_async(inputs, config))
    }
}
