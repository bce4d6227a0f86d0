//! Error types for the statement merger
//!
//! This module defines all error types that can occur while reading, merging
//! and exporting statements. Errors are designed to be descriptive and
//! user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **Record Errors**: A recognized record line without enough fields
//! - **Export Errors**: The combined CSV could not be written
//! - **Runtime Errors**: The async runtime could not be started
//!
//! Unresolvable account identities, files without recognized records and
//! empty exports are not errors.

use thiserror::Error;

/// Main error type for the statement merger
///
/// Any of these aborts the file being processed. Whether it also aborts the
/// whole batch is decided by the caller's [`FailurePolicy`](crate::strategy::FailurePolicy).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MergeError {
    /// Input file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// A `CHK_SAV_LOC_IRA` line has fewer fields than extraction needs
    ///
    /// This indicates a schema mismatch, so the whole file is rejected
    /// rather than salvaging the lines that did parse.
    #[error("Malformed record in {file} at line {line}: expected at least 5 fields, found {fields}")]
    MalformedRecord {
        /// Name of the file containing the record
        file: String,
        /// 1-based line number in the source text
        line: usize,
        /// Number of comma-separated fields found on the line
        fields: usize,
    },

    /// Writing the combined CSV failed
    #[error("Export failed: {message}")]
    Export {
        /// Description of the failure
        message: String,
    },

    /// The async runtime could not be created
    #[error("Runtime error: {message}")]
    Runtime {
        /// Description of the failure
        message: String,
    },
}

// Conversion from io::Error to MergeError
impl From<std::io::Error> for MergeError {
    fn from(error: std::io::Error) -> Self {
        MergeError::Io {
            message: error.to_string(),
        }
    }
}

impl MergeError {
    /// Create a MalformedRecord error
    pub fn malformed_record(file: &str, line: usize, fields: usize) -> Self {
        MergeError::MalformedRecord {
            file: file.to_string(),
            line,
            fields,
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &std::path::Path) -> Self {
        MergeError::FileNotFound {
            path: path.display().to_string(),
        }
    }

    /// Map an error from opening or reading `path`
    ///
    /// `NotFound` becomes [`MergeError::FileNotFound`]; anything else keeps
    /// the path in the I/O message.
    pub fn from_read(path: &std::path::Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::file_not_found(path)
        } else {
            MergeError::Io {
                message: format!("Failed to read '{}': {}", path.display(), error),
            }
        }
    }

    /// Create an Export error
    pub fn export(message: impl Into<String>) -> Self {
        MergeError::Export {
            message: message.into(),
        }
    }
}
