//! Core pipeline module
//!
//! This module contains the statement processing components:
//! - `extractor` - Recognizes transaction lines and pulls out their fields
//! - `normalizer` - Whitespace cleanup and amount column resolution
//! - `merge` - Accumulation and deterministic ordering across files

pub mod extractor;
pub mod merge;
pub mod normalizer;

pub use extractor::{extract_records, extract_statement, extract_transactions, RECORD_TYPE};
pub use merge::{sort_transactions, MergeEngine, SortKey};
pub use normalizer::{normalize_amount, normalize_description, resolve_amount};
