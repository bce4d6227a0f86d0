//! Merge and ordering of transactions from many statements
//!
//! # Ordering
//!
//! Transactions are sorted by two keys:
//!
//! 1. `last4` as an unsigned integer, ascending. An empty or non-numeric
//!    `last4` sorts after every numeric one.
//! 2. `date` as a calendar date, ascending. A date none of the
//!    [`DATE_FORMATS`] can parse sorts after every valid date.
//!
//! The sort is stable, so records tied on both keys stay in insertion order
//! (file order, then line order). Duplicates are kept.

use crate::types::{MergeResult, Transaction};
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Date formats accepted for the secondary sort key, tried in order
pub const DATE_FORMATS: [&str; 4] = ["%m/%d/%Y", "%Y-%m-%d", "%Y/%m/%d", "%m-%d-%Y"];

/// Parse a raw date token, `None` when no accepted format matches
///
/// The year must be written with four digits; `%Y` alone would read
/// `03/01/24` as the year 24.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if !has_four_digit_year(raw) {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

fn has_four_digit_year(raw: &str) -> bool {
    raw.split(['/', '-'])
        .any(|part| part.len() == 4 && part.bytes().all(|b| b.is_ascii_digit()))
}

/// Parse a `last4` value as the primary sort key
pub fn parse_last4(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Sort key of a single transaction
///
/// `None` components compare greater than any `Some`, which places
/// unparseable values last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub last4: Option<u32>,
    pub date: Option<NaiveDate>,
}

impl SortKey {
    pub fn of(transaction: &Transaction) -> Self {
        SortKey {
            last4: parse_last4(&transaction.last4),
            date: parse_date(&transaction.date),
        }
    }
}

fn none_last<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        none_last(&self.last4, &other.last4).then_with(|| none_last(&self.date, &other.date))
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort transactions in place by account then date
///
/// Keys are parsed once per transaction rather than on every comparison.
pub fn sort_transactions(transactions: &mut Vec<Transaction>) {
    let mut keyed: Vec<(SortKey, Transaction)> = transactions
        .drain(..)
        .map(|transaction| (SortKey::of(&transaction), transaction))
        .collect();

    // Vec::sort_by is stable
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    transactions.extend(keyed.into_iter().map(|(_, transaction)| transaction));
}

/// Accumulates per-file transaction lists for one merge invocation
///
/// Files must be added in selection order; [`MergeEngine::finish`] applies
/// the ordering and hands back the result. A new engine is created for each
/// merge, so nothing leaks between runs.
#[derive(Debug, Default)]
pub struct MergeEngine {
    transactions: Vec<Transaction>,
    files_merged: usize,
}

impl MergeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the transactions of one file
    ///
    /// A file without recognized records still counts as merged.
    pub fn add_file(&mut self, transactions: Vec<Transaction>) {
        self.transactions.extend(transactions);
        self.files_merged += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sort everything accumulated and produce the merge result
    pub fn finish(self) -> MergeResult {
        let mut transactions = self.transactions;
        sort_transactions(&mut transactions);

        MergeResult {
            transactions,
            files_merged: self.files_merged,
            skipped: Vec::new(),
        }
    }
}
