//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account identity and its resolution from filenames
//! - `transaction`: Transactions, statement files and merge results
//! - `error`: Error types for the statement merger

pub mod account;
pub mod error;
pub mod transaction;

pub use account::AccountInfo;
pub use error::MergeError;
pub use transaction::{FileFailure, MergeResult, StatementFile, Transaction};
