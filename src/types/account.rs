//! Account identity types for the statement merger
//!
//! Statements carry no account column of their own; the account is encoded
//! in the export's filename as `<anything>_<Name><last4>.csv`. This module
//! resolves that suffix into an [`AccountInfo`].

use regex::Regex;
use std::sync::LazyLock;

/// Last underscore-delimited segment right before a literal `.csv`
static SEGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([^_]+)\.csv$").expect("valid segment regex"));

/// Trailing run of four ASCII digits
static LAST4_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{4})$").expect("valid last4 regex"));

/// Account identity derived from a statement filename
///
/// Shared by every transaction read from the same file. Both fields are
/// empty when the filename does not follow the naming convention.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountInfo {
    /// Display name of the account (e.g. "Checking")
    pub name: String,

    /// Last four digits of the account number, or empty
    pub last4: String,
}

impl AccountInfo {
    /// Create an AccountInfo from its parts
    pub fn new(name: impl Into<String>, last4: impl Into<String>) -> Self {
        AccountInfo {
            name: name.into(),
            last4: last4.into(),
        }
    }

    /// Resolve the account identity from a statement filename
    ///
    /// Looks for `_<segment>.csv` at the end of the name. A trailing run of
    /// four digits in the segment becomes `last4` and is removed from the
    /// segment (first occurrence only); the trimmed rest becomes `name`.
    /// Never fails: unrecognized names resolve to empty fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use statement_merger::types::AccountInfo;
    ///
    /// let info = AccountInfo::from_file_name("statement_Checking1234.csv");
    /// assert_eq!(info, AccountInfo::new("Checking", "1234"));
    ///
    /// let info = AccountInfo::from_file_name("statement.csv");
    /// assert_eq!(info, AccountInfo::default());
    /// ```
    pub fn from_file_name(file_name: &str) -> Self {
        let Some(segment) = SEGMENT_RE
            .captures(file_name)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
        else {
            return AccountInfo::default();
        };

        match LAST4_RE.captures(segment).and_then(|caps| caps.get(1)) {
            Some(digits) => {
                let last4 = digits.as_str();
                AccountInfo::new(segment.replacen(last4, "", 1).trim(), last4)
            }
            None => AccountInfo::new(segment.trim(), ""),
        }
    }
}
