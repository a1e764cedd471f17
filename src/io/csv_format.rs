//! CSV format handling for transaction import and export
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for import deserialization
//! - Conversion from CSV records to transaction drafts
//! - Export serialization with localized header and labels
//!
//! All functions are pure (no file-system access) for easy testing.

use crate::types::{LedgerError, Language, Transaction, TransactionDraft, TransactionKind};
use serde::Deserialize;
use std::io::Write;

/// File name used when exporting to a directory
pub const EXPORT_FILE_NAME: &str = "budget-transactions.csv";

/// CSV record structure for import
///
/// Matches the import CSV format with columns: type, amount, category, description, date.
/// Every field is kept as text so that validation happens in one place,
/// [`TransactionDraft::validate`].
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    #[serde(rename = "type")]
    pub tx_type: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
}

/// Convert a CsvRecord to a TransactionDraft
///
/// Only the transaction type is parsed here; the remaining fields are checked
/// when the draft is added to a ledger.
///
/// # Errors
///
/// Returns `InvalidTransactionType` if the type is neither income nor expense.
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<TransactionDraft, LedgerError> {
    let kind: TransactionKind = csv_record.tx_type.parse()?;

    Ok(TransactionDraft {
        kind,
        amount: csv_record.amount,
        category: csv_record.category,
        description: csv_record.description,
        date: csv_record.date,
    })
}

/// Write transactions in export format
///
/// Writes a localized header row `Date,Type,Category,Description,Amount`
/// followed by one row per transaction in insertion order. Rows are joined by
/// `\n` with no terminator after the last one. Fields that contain the
/// delimiter, quotes or line breaks are quoted; all others are written as is.
///
/// # Arguments
///
/// * `transactions` - Transactions to export
/// * `language` - Language for the header, kind and category labels
/// * `output` - Writer receiving the CSV text
pub fn write_transactions_csv(
    transactions: &[Transaction],
    language: Language,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(language.export_header())?;

    for tx in transactions {
        writer.write_record(&[
            tx.date.format("%Y-%m-%d").to_string(),
            tx.kind.label(language).to_string(),
            tx.category.label(language).to_string(),
            tx.description.clone(),
            tx.amount.normalize().to_string(),
        ])?;
    }

    let mut buffer = writer
        .into_inner()
        .map_err(|e| LedgerError::from(e.into_error()))?;

    // The writer terminates every record; drop the one after the last row
    if buffer.last() == Some(&b'\n') {
        buffer.pop();
    }

    output.write_all(&buffer)?;
    output.flush()?;

    Ok(())
}
