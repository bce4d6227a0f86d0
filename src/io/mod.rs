//! I/O module
//!
//! Handles statement input and combined output.
//!
//! # Components
//!
//! - `csv_format` - CSV layouts, serialization and reading back combined files
//! - `export` - Dated output file naming and the empty-export no-op
//! - `sync_reader` - Blocking statement reader
//! - `async_reader` - Tokio statement reader
//! - `preview` - Text table with currency formatted amounts

pub mod async_reader;
pub mod csv_format;
pub mod export;
pub mod preview;
pub mod sync_reader;

pub use csv_format::{read_combined_csv, write_transactions_csv, ExportLayout};
pub use export::{export_file_name, export_to_dir, export_to_writer};
pub use preview::{format_amount, write_preview};
