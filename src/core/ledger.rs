//! Transaction collection and its CRUD contract
//!
//! The `Ledger` owns the session's transactions in insertion order. Every
//! mutation validates first and only then touches the collection, so a failed
//! add, update or delete leaves the ledger exactly as it was.
//!
//! # Identifiers
//!
//! New transactions receive ids from the ledger's [`IdGenerator`]. Ids already
//! in the collection (for example from seed data) are skipped, keeping ids unique.
//! Updates preserve the original id.

use crate::core::aggregator::LedgerSummary;
use crate::core::traits::{ClockIds, IdGenerator};
use crate::types::{LedgerError, Transaction, TransactionDraft, TransactionId};
use rust_decimal::Decimal;
use std::collections::HashSet;
use tracing::debug;

/// In-memory transaction collection
#[derive(Debug, Clone)]
pub struct Ledger<G = ClockIds> {
    /// Transactions in insertion order
    transactions: Vec<Transaction>,
    ids: G,
}

impl Ledger<ClockIds> {
    /// Create an empty ledger with clock-derived ids
    pub fn new() -> Self {
        Self::with_id_generator(ClockIds::new())
    }
}

impl Default for Ledger<ClockIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> Ledger<G> {
    /// Create an empty ledger drawing ids from `ids`
    pub fn with_id_generator(ids: G) -> Self {
        Ledger {
            transactions: Vec::new(),
            ids,
        }
    }

    /// Create a ledger pre-populated with already validated transactions
    ///
    /// # Errors
    ///
    /// Returns `DuplicateTransaction` if two transactions share an id.
    pub fn from_transactions(transactions: Vec<Transaction>, ids: G) -> Result<Self, LedgerError> {
        let mut seen = HashSet::with_capacity(transactions.len());
        for tx in &transactions {
            if !seen.insert(tx.id) {
                return Err(LedgerError::duplicate_transaction(tx.id));
            }
        }

        Ok(Ledger { transactions, ids })
    }

    /// Validate a draft and append it as a new transaction
    ///
    /// # Returns
    ///
    /// The id assigned to the new transaction
    ///
    /// # Errors
    ///
    /// Any validation error from [`TransactionDraft::validate`]; the ledger is
    /// unchanged in that case.
    pub fn add(&mut self, draft: &TransactionDraft) -> Result<TransactionId, LedgerError> {
        let fields = draft.validate()?;

        let mut id = self.ids.next_id();
        while self.contains(id) {
            id = self.ids.next_id();
        }

        debug!(id, kind = %fields.kind, amount = %fields.amount, "adding transaction");
        self.transactions.push(fields.into_transaction(id));
        Ok(id)
    }

    /// Replace every field of transaction `id` except the id itself
    ///
    /// # Errors
    ///
    /// - `TransactionNotFound` if no transaction has that id
    /// - Any validation error from the draft
    pub fn update(&mut self, id: TransactionId, draft: &TransactionDraft) -> Result<(), LedgerError> {
        let index = self
            .position(id)
            .ok_or_else(|| LedgerError::transaction_not_found(id, "update"))?;
        let fields = draft.validate()?;

        debug!(id, kind = %fields.kind, amount = %fields.amount, "updating transaction");
        self.transactions[index] = fields.into_transaction(id);
        Ok(())
    }

    /// Remove transaction `id`
    ///
    /// # Returns
    ///
    /// The removed transaction
    ///
    /// # Errors
    ///
    /// Returns `TransactionNotFound` if no transaction has that id.
    pub fn delete(&mut self, id: TransactionId) -> Result<Transaction, LedgerError> {
        let index = self
            .position(id)
            .ok_or_else(|| LedgerError::transaction_not_found(id, "delete"))?;

        debug!(id, "deleting transaction");
        Ok(self.transactions.remove(index))
    }

    /// Prefilled draft for editing transaction `id`
    pub fn draft_for(&self, id: TransactionId) -> Result<TransactionDraft, LedgerError> {
        self.get(id)
            .map(TransactionDraft::from)
            .ok_or_else(|| LedgerError::transaction_not_found(id, "edit"))
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.id == id)
    }

    pub fn contains(&self, id: TransactionId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Transactions in display order, most recently added first
    pub fn newest_first(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().rev()
    }

    /// Derived metrics for the current state
    pub fn summary(&self, budget_limit: Decimal) -> LedgerSummary {
        LedgerSummary::compute(&self.transactions, budget_limit)
    }

    fn position(&self, id: TransactionId) -> Option<usize> {
        self.transactions.iter().position(|tx| tx.id == id)
    }
}
