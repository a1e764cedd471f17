//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Transaction kinds, categories, drafts and identifiers
//! - `profile`: User profile and currency code
//! - `language`: Display languages for labels
//! - `error`: Error types for the ledger

pub mod error;
pub mod language;
pub mod profile;
pub mod transaction;

pub use error::LedgerError;
pub use language::Language;
pub use profile::{CurrencyCode, UserProfile};
pub use transaction::{
    Category, Transaction, TransactionDraft, TransactionFields, TransactionId, TransactionKind,
};
