//! I/O module
//!
//! Handles CSV import and export.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, export serialization)
//! - `sync_reader` - Streaming import reader with iterator interface

pub mod csv_format;
pub mod sync_reader;

pub use csv_format::{convert_csv_record, write_transactions_csv, CsvRecord, EXPORT_FILE_NAME};
pub use sync_reader::SyncReader;
