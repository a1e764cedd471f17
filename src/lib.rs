//! Budget Ledger Library
//! # Overview
//!
//! This library records income and expense transactions for a single user,
//! derives the figures a budgeting dashboard displays, and exports the
//! collection as CSV.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, TransactionDraft, UserProfile, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Transaction collection and add/update/delete
//!   - [`core::aggregator`] - Totals, balance, budget usage, category breakdown
//!   - [`core::trend`] - Monthly income/expense series
//! - [`io`] - CSV import and export
//! - [`format`] - Currency and percentage display
//! - [`dashboard`] - Session state container and text rendering
//!
//! # Derived Figures
//!
//! - **Total income / total expense**: sums per transaction kind
//! - **Balance**: income minus expense, may be negative
//! - **Budget usage**: expense as a percentage of the budget limit
//! - **Budget status**: caution above 70%, warning above 90%
//! - **Category breakdown**: expense sums and shares per category
//!
//! Every figure is recomputed from the full collection after each change.

// Module declarations
pub mod cli;
pub mod core;
pub mod dashboard;
pub mod format;
pub mod io;
pub mod logging;
pub mod sample;
pub mod types;

pub use self::core::{BudgetStatus, CategoryShare, Ledger, LedgerSummary};
pub use dashboard::Dashboard;
pub use io::write_transactions_csv;
pub use types::{
    Category, CurrencyCode, Language, LedgerError, Transaction, TransactionDraft, TransactionId,
    TransactionKind, UserProfile,
};
