//! Asynchronous statement reader
//!
//! Same contract as [`sync_reader`](crate::io::sync_reader), using
//! `tokio::fs` so reads can be awaited from the async strategy.

use crate::io::sync_reader::{decode_statement, file_name_of};
use crate::types::{MergeError, StatementFile};
use std::path::Path;

/// Read one statement file asynchronously
///
/// # Errors
///
/// * [`MergeError::FileNotFound`] if `path` does not exist
/// * [`MergeError::Io`] for any other read failure
pub async fn read_statement(path: &Path) -> Result<StatementFile, MergeError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| MergeError::from_read(path, e))?;
    Ok(StatementFile::new(
        file_name_of(path),
        decode_statement(path, &bytes),
    ))
}
