//! Record extraction from statement text
//!
//! A statement export mixes several sections (headers, balances, other
//! record types). Only lines whose first field is [`RECORD_TYPE`] are
//! transactions; everything else is dropped silently.
//!
//! # Record Layout
//!
//! ```text
//! CHK_SAV_LOC_IRA,<date>,<..>,<..>,<description>,<amount?>,<amount?>
//!       0            1     2    3        4           5         6
//! ```
//!
//! Input fields are split on every comma; quoting is not supported, so a
//! description containing a comma shifts the columns after it.

use crate::core::normalizer::{normalize_description, resolve_amount};
use crate::types::{AccountInfo, MergeError, StatementFile, Transaction};

/// First field of every recognized transaction line
pub const RECORD_TYPE: &str = "CHK_SAV_LOC_IRA";

const DATE_FIELD: usize = 1;
const DESCRIPTION_FIELD: usize = 4;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Extract the transactions of one statement file
///
/// The account identity is resolved from the file name and attached to
/// every transaction.
///
/// # Errors
///
/// Returns [`MergeError::MalformedRecord`] for the first recognized line
/// that has no description field. Nothing from the file is returned in that
/// case.
pub fn extract_statement(file: &StatementFile) -> Result<Vec<Transaction>, MergeError> {
    let account = AccountInfo::from_file_name(&file.name);
    extract_transactions(&file.content, &account, &file.name)
}

/// Extract transactions from raw text for a known account
///
/// `source` names the file in error messages. A leading byte-order mark is
/// dropped, then lines are split on `\n`, trimmed, and empty lines skipped;
/// source order is preserved.
pub fn extract_transactions(
    content: &str,
    account: &AccountInfo,
    source: &str,
) -> Result<Vec<Transaction>, MergeError> {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    let mut transactions = Vec::new();

    for (index, line) in content.split('\n').enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields[0] != RECORD_TYPE {
            continue;
        }

        let Some(raw_description) = fields.get(DESCRIPTION_FIELD) else {
            return Err(MergeError::malformed_record(source, index + 1, fields.len()));
        };

        transactions.push(Transaction::new(
            account,
            fields[DATE_FIELD],
            normalize_description(raw_description),
            resolve_amount(&fields),
        ));
    }

    Ok(transactions)
}

/// Extract transactions without account identity
///
/// This is the plain variant for content that did not come from a named
/// file; `name` and `last4` are left empty.
pub fn extract_records(content: &str) -> Result<Vec<Transaction>, MergeError> {
    extract_transactions(content, &AccountInfo::default(), "<input>")
}
