//! Core traits for transaction id assignment
//!
//! The ledger asks an [`IdGenerator`] for a fresh id on every add. Sessions use
//! the clock-derived [`ClockIds`]; tests and imports that need reproducible ids
//! use [`SequentialIds`].

use crate::types::TransactionId;
use chrono::Utc;

/// Source of new transaction ids
///
/// Implementations must be strictly increasing across calls so that the ledger
/// can skip past ids already in use without looping forever.
pub trait IdGenerator {
    /// Produce the next id
    fn next_id(&mut self) -> TransactionId;
}

/// Monotonic ids derived from the wall clock (milliseconds since the Unix epoch)
///
/// Two adds within the same millisecond, or a clock that steps backwards,
/// still get increasing ids: the generator never returns less than `last + 1`.
#[derive(Debug, Clone, Default)]
pub struct ClockIds {
    last: TransactionId,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for ClockIds {
    fn next_id(&mut self) -> TransactionId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let id = now.max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}

/// Plain counter starting at a given value
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: TransactionId,
}

impl SequentialIds {
    /// Start counting at `first`
    pub fn starting_at(first: TransactionId) -> Self {
        SequentialIds { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> TransactionId {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }
}
