//! Sample session data
//!
//! A profile and six transactions for a fresh dashboard, so the summary and
//! charts have something to show before the user records anything.

use crate::core::{ClockIds, Ledger};
use crate::types::{
    CurrencyCode, LedgerError, Transaction, TransactionDraft, TransactionKind, UserProfile,
};
use rust_decimal::Decimal;

const SAMPLE_ROWS: [(TransactionKind, &str, &str, &str, &str); 6] = [
    (TransactionKind::Income, "5000", "Salary", "Monthly salary", "2025-06-01"),
    (TransactionKind::Expense, "1200", "Groceries", "Weekly shopping", "2025-06-02"),
    (TransactionKind::Expense, "800", "Transport", "Transit card top-up", "2025-06-03"),
    (TransactionKind::Income, "2500", "Freelance", "Web design project", "2025-06-04"),
    (TransactionKind::Expense, "450", "Entertainment", "Cinema and dinner", "2025-06-05"),
    (TransactionKind::Expense, "1100", "Bills", "Electricity + water + internet", "2025-06-06"),
];

/// Default budget limit of the sample profile
pub const SAMPLE_BUDGET_LIMIT: Decimal = Decimal::from_parts(10000, 0, 0, false, 0);

/// The sample profile
pub fn sample_profile(currency: CurrencyCode) -> Result<UserProfile, LedgerError> {
    UserProfile::new("Demo User", "demo@example.com", SAMPLE_BUDGET_LIMIT, currency)
}

/// The sample transactions with ids 1 through 6
pub fn sample_transactions() -> Result<Vec<Transaction>, LedgerError> {
    SAMPLE_ROWS
        .iter()
        .zip(1..)
        .map(|(&(kind, amount, category, description, date), id)| {
            TransactionDraft::new(kind, amount, category, description, date)
                .validate()
                .map(|fields| fields.into_transaction(id))
        })
        .collect()
}

/// A ledger holding the sample transactions
pub fn sample_ledger() -> Result<Ledger, LedgerError> {
    Ledger::from_transactions(sample_transactions()?, ClockIds::new())
}
