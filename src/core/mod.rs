//! Core business logic module
//!
//! This module contains the ledger components:
//! - `traits` - Id generation abstraction and its implementations
//! - `ledger` - Transaction collection and CRUD contract
//! - `aggregator` - Totals, balance, budget usage and category breakdown
//! - `trend` - Monthly income/expense series

pub mod aggregator;
pub mod ledger;
pub mod traits;
pub mod trend;

pub use aggregator::{BudgetStatus, CategoryShare, LedgerSummary};
pub use ledger::Ledger;
pub use traits::{ClockIds, IdGenerator, SequentialIds};
pub use trend::{monthly_trend, MonthlyPoint};
