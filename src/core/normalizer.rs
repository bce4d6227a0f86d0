//! Field normalization for extracted statement records
//!
//! All functions are pure (no I/O) for easy testing.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid whitespace regex"));

/// Column probed first for the amount
pub const PRIMARY_AMOUNT_FIELD: usize = 6;

/// Column used when the primary amount column is empty or missing
pub const FALLBACK_AMOUNT_FIELD: usize = 5;

/// Clean a raw description
///
/// Strips trailing whitespace, then collapses every run of two or more
/// whitespace characters into a single space. Leading whitespace is not
/// stripped, only collapsed.
///
/// # Examples
///
/// ```
/// use statement_merger::core::normalizer::normalize_description;
///
/// assert_eq!(normalize_description("Grocery   Store   "), "Grocery Store");
/// ```
pub fn normalize_description(raw: &str) -> String {
    WHITESPACE_RUN_RE
        .replace_all(raw.trim_end(), " ")
        .into_owned()
}

/// Clean a raw amount
///
/// Only surrounding whitespace is removed. Signs, thousands separators and
/// decimals are left exactly as the bank wrote them.
pub fn normalize_amount(raw: &str) -> String {
    raw.trim().to_string()
}

/// Pick the amount out of a split record
///
/// Depending on the transaction subtype the bank writes the amount into
/// field 6 or field 5. Precedence:
///
/// 1. field 6, if present and not blank
/// 2. field 5, if present and not blank
/// 3. the empty string
///
/// The chosen value is passed through [`normalize_amount`].
pub fn resolve_amount(fields: &[&str]) -> String {
    [PRIMARY_AMOUNT_FIELD, FALLBACK_AMOUNT_FIELD]
        .iter()
        .filter_map(|&index| fields.get(index))
        .map(|value| normalize_amount(value))
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}
