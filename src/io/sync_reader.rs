//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over transaction drafts from an import file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding
//! `Result<TransactionDraft, LedgerError>` for each CSV row:
//!
//! ```no_run
//! use budget_ledger::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("transactions.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(draft) => println!("Importing: {:?}", draft),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual row errors are yielded as Err variants carrying the line number

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{LedgerError, TransactionDraft};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Synchronous CSV reader
///
/// Reads one row at a time; memory use does not grow with the file size.
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    headers: StringRecord,
    record: StringRecord,
}

impl SyncReader {
    /// Open an import file and read its header row
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (missing trailing fields become empty)
    ///
    /// # Errors
    ///
    /// - `FileNotFound` if the path does not exist
    /// - `IoError` for any other open failure
    /// - `ParseError` if the header row cannot be read
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LedgerError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => LedgerError::from(e),
        })?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(file);
        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
        })
    }
}

/// Attach the physical line of the failing row to an error
fn at_line(error: LedgerError, line: Option<u64>) -> LedgerError {
    match error {
        LedgerError::ParseError {
            line: found,
            message,
        } => LedgerError::ParseError {
            line: line.or(found),
            message,
        },
        other => LedgerError::ParseError {
            line,
            message: other.to_string(),
        },
    }
}

impl Iterator for SyncReader {
    type Item = Result<TransactionDraft, LedgerError>;

    /// Get the next draft from the file
    ///
    /// Errors carry the line the row starts on in the file, the header being
    /// line 1. Quoted fields spanning several lines are accounted for.
    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                let line = self.record.position().map(|pos| pos.line());
                Some(
                    self.record
                        .deserialize::<CsvRecord>(Some(&self.headers))
                        .map_err(LedgerError::from)
                        .and_then(convert_csv_record)
                        .map_err(|e| at_line(e, line)),
                )
            }
            Err(e) => Some(Err(LedgerError::from(e))),
        }
    }
}
