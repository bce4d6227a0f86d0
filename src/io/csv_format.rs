//! CSV format handling for the combined statement
//!
//! This module centralizes all CSV format concerns, providing:
//! - The output layouts and their header rows
//! - Serialization of merged transactions
//! - Reading a combined file back into transactions
//!
//! All functions are pure (no file system access) for easy testing.
//!
//! # Quoting
//!
//! The description column is always wrapped in double quotes because bank
//! descriptions may contain commas. No other column is quoted, and quotes
//! inside a description are written as-is (not doubled).

use crate::core::RECORD_TYPE;
use crate::types::{MergeError, Transaction};
use clap::ValueEnum;
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use serde::Deserialize;
use std::io::{Read, Write};

/// Column layout of the combined CSV
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportLayout {
    /// Name, Last 4, Date, Description, Amount
    #[default]
    Enriched,
    /// Account, Date, Description, Amount (no account identity columns)
    Basic,
}

impl ExportLayout {
    /// Header row for this layout
    pub fn header(self) -> &'static [&'static str] {
        match self {
            ExportLayout::Enriched => &["Name", "Last 4", "Date", "Description", "Amount"],
            ExportLayout::Basic => &["Account", "Date", "Description", "Amount"],
        }
    }

    fn row(self, transaction: &Transaction) -> Vec<String> {
        let description = format!("\"{}\"", transaction.description);
        match self {
            ExportLayout::Enriched => vec![
                transaction.name.clone(),
                transaction.last4.clone(),
                transaction.date.clone(),
                description,
                transaction.amount.clone(),
            ],
            ExportLayout::Basic => vec![
                RECORD_TYPE.to_string(),
                transaction.date.clone(),
                description,
                transaction.amount.clone(),
            ],
        }
    }
}

/// Write transactions as CSV text
///
/// Writes the layout's header followed by one row per transaction, in the
/// order given. An empty slice produces just the header; callers that want
/// the empty-export no-op check for emptiness first.
///
/// # Arguments
///
/// * `transactions` - Ordered transactions to write
/// * `layout` - Column layout
/// * `output` - Destination writer
pub fn write_transactions_csv(
    transactions: &[Transaction],
    layout: ExportLayout,
    output: &mut dyn Write,
) -> Result<(), MergeError> {
    // Quoting is applied by hand to the description only
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(output);

    writer
        .write_record(layout.header())
        .map_err(|e| MergeError::export(format!("Failed to write CSV header: {}", e)))?;

    for transaction in transactions {
        writer
            .write_record(layout.row(transaction))
            .map_err(|e| MergeError::export(format!("Failed to write transaction record: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| MergeError::export(format!("Failed to flush output: {}", e)))?;

    Ok(())
}

/// Render transactions to a CSV string
pub fn transactions_to_csv_string(
    transactions: &[Transaction],
    layout: ExportLayout,
) -> Result<String, MergeError> {
    let mut buffer = Vec::new();
    write_transactions_csv(transactions, layout, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| MergeError::export(e.to_string()))
}

/// One row of an enriched combined file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CombinedRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Last 4")]
    pub last4: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Amount")]
    pub amount: String,
}

impl From<CombinedRecord> for Transaction {
    fn from(record: CombinedRecord) -> Self {
        Transaction {
            name: record.name,
            last4: record.last4,
            date: record.date,
            description: record.description,
            amount: record.amount,
        }
    }
}

/// Read a combined file written with [`ExportLayout::Enriched`]
///
/// Standard CSV quoting applies on this side, so the quoted description is
/// unwrapped. Useful to check an export without re-running the merge.
pub fn read_combined_csv<R: Read>(input: R) -> Result<Vec<Transaction>, MergeError> {
    let mut reader = ReaderBuilder::new().from_reader(input);

    reader
        .deserialize::<CombinedRecord>()
        .map(|result| {
            result.map(Transaction::from).map_err(|e| MergeError::Io {
                message: format!("Failed to read combined CSV: {}", e),
            })
        })
        .collect()
}
