//! Writing the combined statement to its destination
//!
//! Exporting an empty merge result is a no-op: no file is created and
//! nothing is written.

use crate::io::csv_format::{write_transactions_csv, ExportLayout};
use crate::types::{MergeError, Transaction};
use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Prefix of every combined statement file name
pub const EXPORT_FILE_PREFIX: &str = "combined_statements";

/// File name for an export made on `date`
///
/// ```
/// use chrono::NaiveDate;
/// use statement_merger::io::export::export_file_name;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// assert_eq!(export_file_name(date), "combined_statements_2024-03-09.csv");
/// ```
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{}_{}.csv", EXPORT_FILE_PREFIX, date.format("%Y-%m-%d"))
}

/// Write the combined CSV into `dir`
///
/// # Returns
///
/// * `Ok(Some(path))` - the file that was written
/// * `Ok(None)` - nothing to export, no file created
/// * `Err(MergeError)` - the file could not be created or written
pub fn export_to_dir(
    transactions: &[Transaction],
    dir: &Path,
    layout: ExportLayout,
    date: NaiveDate,
) -> Result<Option<PathBuf>, MergeError> {
    if transactions.is_empty() {
        tracing::info!("No transactions to export");
        return Ok(None);
    }

    let path = dir.join(export_file_name(date));
    let file = File::create(&path).map_err(|e| {
        MergeError::export(format!("Failed to create '{}': {}", path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    write_transactions_csv(transactions, layout, &mut writer)?;
    writer
        .flush()
        .map_err(|e| MergeError::export(format!("Failed to flush '{}': {}", path.display(), e)))?;

    tracing::info!(
        path = %path.display(),
        rows = transactions.len(),
        "Exported combined statement"
    );
    Ok(Some(path))
}

/// Write the combined CSV to an arbitrary writer
///
/// Returns `false` without writing anything when there are no transactions.
pub fn export_to_writer(
    transactions: &[Transaction],
    layout: ExportLayout,
    output: &mut dyn Write,
) -> Result<bool, MergeError> {
    if transactions.is_empty() {
        return Ok(false);
    }
    write_transactions_csv(transactions, layout, output)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::csv_format::read_combined_csv;
    use crate::types::AccountInfo;
    use std::fs;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![Transaction::new(
            &AccountInfo::new("Checking", "1234"),
            "12/30/2024",
            "Payroll",
            "1500.00",
        )]
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name(date()), "combined_statements_2024-12-31.csv");
    }

    #[test]
    fn test_export_to_dir_writes_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");

        let path = export_to_dir(&sample(), dir.path(), ExportLayout::Enriched, date())
            .unwrap()
            .expect("a file should be written");

        assert_eq!(path, dir.path().join("combined_statements_2024-12-31.csv"));
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "Name,Last 4,Date,Description,Amount\nChecking,1234,12/30/2024,\"Payroll\",1500.00\n"
        );
        assert_eq!(read_combined_csv(written.as_bytes()).unwrap(), sample());
    }

    #[test]
    fn test_export_empty_is_noop() {
        let dir = TempDir::new().expect("Failed to create temp dir");

        let result = export_to_dir(&[], dir.path(), ExportLayout::Enriched, date()).unwrap();

        assert_eq!(result, None);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_export_to_missing_dir_fails() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let missing = dir.path().join("does-not-exist");

        let result = export_to_dir(&sample(), &missing, ExportLayout::Enriched, date());

        assert!(matches!(result, Err(MergeError::Export { .. })));
    }

    #[test]
    fn test_export_to_writer() {
        let mut output = Vec::new();
        assert!(export_to_writer(&sample(), ExportLayout::Basic, &mut output).unwrap());
        assert!(String::from_utf8(output).unwrap().starts_with("Account,Date"));

        let mut output = Vec::new();
        assert!(!export_to_writer(&[], ExportLayout::Basic, &mut output).unwrap());
        assert!(output.is_empty());
    }
}
