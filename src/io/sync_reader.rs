//! Synchronous statement reader
//!
//! Reads each statement fully into memory with `std::fs`. Statements are
//! small enough that streaming is not worth it, and extraction needs the
//! whole text anyway to fail a file as a unit.
//!
//! ```no_run
//! use statement_merger::io::sync_reader::read_statement;
//! use std::path::Path;
//!
//! let file = read_statement(Path::new("statement_Checking1234.csv")).unwrap();
//! println!("{} bytes from {}", file.content.len(), file.name);
//! ```

use crate::types::{MergeError, StatementFile};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Final path component, or the whole path when it has none
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Decode raw statement bytes as UTF-8
///
/// Byte sequences that are not valid UTF-8 (Latin-1 or Windows-1252
/// exports) become U+FFFD instead of failing the file.
pub fn decode_statement(path: &Path, bytes: &[u8]) -> String {
    let content = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = content {
        tracing::warn!(
            path = %path.display(),
            "Statement is not valid UTF-8, undecodable bytes replaced"
        );
    }
    content.into_owned()
}

/// Read one statement file
///
/// # Errors
///
/// * [`MergeError::FileNotFound`] if `path` does not exist
/// * [`MergeError::Io`] for any other read failure
pub fn read_statement(path: &Path) -> Result<StatementFile, MergeError> {
    let bytes = fs::read(path).map_err(|e| MergeError::from_read(path, e))?;
    Ok(StatementFile::new(
        file_name_of(path),
        decode_statement(path, &bytes),
    ))
}
