//! Transaction-related types for the statement merger
//!
//! This module defines the merged transaction record, the raw statement
//! file it is read from, and the result object the merge pipeline returns.

use super::account::AccountInfo;
use super::error::MergeError;

/// One transaction extracted from a recognized statement line
///
/// All fields are kept as text. `date` and `amount` are the raw tokens from
/// the source so consumers can interpret them however they need; only
/// `description` is normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Account display name, from the statement filename
    pub name: String,

    /// Last four digits of the account, from the statement filename
    pub last4: String,

    /// Raw date token (e.g. `03/01/2024`)
    pub date: String,

    /// Description with trailing whitespace stripped and runs collapsed
    pub description: String,

    /// Raw amount text, sign preserved (e.g. `-15.00`)
    pub amount: String,
}

impl Transaction {
    /// Create a transaction for `account` from already normalized fields
    pub fn new(
        account: &AccountInfo,
        date: impl Into<String>,
        description: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Transaction {
            name: account.name.clone(),
            last4: account.last4.clone(),
            date: date.into(),
            description: description.into(),
            amount: amount.into(),
        }
    }
}

/// A statement file as handed over by a reader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementFile {
    /// File name (final path component) used to resolve the account
    pub name: String,

    /// Entire file content
    pub content: String,
}

impl StatementFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        StatementFile {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// A file left out of the merge because it could not be processed
#[derive(Debug, Clone, PartialEq)]
pub struct FileFailure {
    /// Input path or file name
    pub file: String,

    /// Why the file was rejected
    pub error: MergeError,
}

/// Outcome of one merge invocation
///
/// Built fresh on every run; nothing is carried over between invocations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeResult {
    /// All transactions in merge order
    pub transactions: Vec<Transaction>,

    /// Number of files whose transactions were merged
    pub files_merged: usize,

    /// Files dropped under the skip policy, in input order
    pub skipped: Vec<FileFailure>,
}

impl MergeResult {
    /// True when there is nothing to export
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
