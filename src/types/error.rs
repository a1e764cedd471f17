//! Error types for the budget ledger
//!
//! This module defines all error types that can occur while recording, importing
//! and exporting transactions.
//!
//! # Error Categories
//!
//! - **Validation Errors**: Missing fields, malformed or negative amounts, unknown categories
//! - **Lookup Errors**: Update/delete of an unknown transaction, duplicate ids in seed data
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **CSV Parsing Errors**: Malformed CSV rows on import
//!
//! Degenerate arithmetic (a zero budget limit, zero total expense) is not an error:
//! the aggregator reports those cases explicitly in its output.

use super::transaction::{TransactionId, TransactionKind, MAX_AMOUNT, MAX_AMOUNT_SCALE};
use thiserror::Error;

/// Main error type for the budget ledger
///
/// Every failing operation leaves the ledger untouched, so all variants are
/// recoverable from the caller's point of view.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// A required draft field was empty
    #[error("Missing required field '{field}'")]
    MissingField {
        /// Name of the empty field
        field: String,
    },

    /// Amount did not parse as a decimal number
    #[error("Invalid amount '{amount}'")]
    InvalidAmount {
        /// The raw amount input
        amount: String,
    },

    /// Amount parsed but is below zero
    #[error("Amount '{amount}' must not be negative")]
    NegativeAmount {
        /// The raw amount input
        amount: String,
    },

    /// Amount is above the ceiling or carries too many decimal places
    #[error("Amount '{amount}' is out of range, at most {max} with {max_scale} decimal places")]
    AmountOutOfRange {
        /// The raw amount input
        amount: String,
        /// Largest accepted amount
        max: String,
        /// Most decimal places accepted
        max_scale: u32,
    },

    /// Date is not an ISO 8601 calendar date
    #[error("Invalid date '{date}', expected YYYY-MM-DD")]
    InvalidDate {
        /// The raw date input
        date: String,
    },

    /// Category is unknown or not allowed for the transaction kind
    #[error("Invalid {kind} category '{category}'")]
    InvalidCategory {
        /// The raw category input
        category: String,
        /// Kind the category was checked against
        kind: TransactionKind,
    },

    /// Transaction type is neither income nor expense
    #[error("Invalid transaction type '{tx_type}'")]
    InvalidTransactionType {
        /// The raw type input
        tx_type: String,
    },

    /// Budget limit must be strictly positive
    #[error("Invalid budget limit '{limit}', must be greater than zero")]
    InvalidBudgetLimit {
        /// The rejected limit
        limit: String,
    },

    /// Currency is not a three-letter ISO 4217 code
    #[error("Invalid currency code '{code}'")]
    InvalidCurrency {
        /// The rejected code
        code: String,
    },

    /// No transaction carries the requested id
    #[error("Transaction {id} not found for {operation}")]
    TransactionNotFound {
        /// Transaction id that was not found
        id: TransactionId,
        /// Operation that failed
        operation: String,
    },

    /// Two seed transactions share an id
    #[error("Duplicate transaction ID {id}")]
    DuplicateTransaction {
        /// Transaction id that is duplicated
        id: TransactionId,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// Recoverable on import: the malformed row is skipped.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create a MissingField error
    pub fn missing_field(field: &str) -> Self {
        LedgerError::MissingField {
            field: field.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str) -> Self {
        LedgerError::InvalidAmount {
            amount: amount.to_string(),
        }
    }

    /// Create a NegativeAmount error
    pub fn negative_amount(amount: &str) -> Self {
        LedgerError::NegativeAmount {
            amount: amount.to_string(),
        }
    }

    /// Create an AmountOutOfRange error against the accepted amount limits
    pub fn amount_out_of_range(amount: &str) -> Self {
        LedgerError::AmountOutOfRange {
            amount: amount.to_string(),
            max: MAX_AMOUNT.to_string(),
            max_scale: MAX_AMOUNT_SCALE,
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(date: &str) -> Self {
        LedgerError::InvalidDate {
            date: date.to_string(),
        }
    }

    /// Create an InvalidCategory error
    pub fn invalid_category(category: &str, kind: TransactionKind) -> Self {
        LedgerError::InvalidCategory {
            category: category.to_string(),
            kind,
        }
    }

    /// Create an InvalidTransactionType error
    pub fn invalid_transaction_type(tx_type: &str) -> Self {
        LedgerError::InvalidTransactionType {
            tx_type: tx_type.to_string(),
        }
    }

    /// Create a TransactionNotFound error
    pub fn transaction_not_found(id: TransactionId, operation: &str) -> Self {
        LedgerError::TransactionNotFound {
            id,
            operation: operation.to_string(),
        }
    }

    /// Create a DuplicateTransaction error
    pub fn duplicate_transaction(id: TransactionId) -> Self {
        LedgerError::DuplicateTransaction { id }
    }

    /// Whether this error was raised by draft validation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LedgerError::MissingField { .. }
                | LedgerError::InvalidAmount { .. }
                | LedgerError::NegativeAmount { .. }
                | LedgerError::AmountOutOfRange { .. }
                | LedgerError::InvalidDate { .. }
                | LedgerError::InvalidCategory { .. }
                | LedgerError::InvalidTransactionType { .. }
        )
    }
}
