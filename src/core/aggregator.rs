//! Ledger aggregation
//!
//! Every derived value the dashboard displays is computed here from a slice of
//! transactions and the profile's budget limit. Nothing is cached: the summary
//! is recomputed in full after each mutation.
//!
//! # Degenerate inputs
//!
//! - A zero budget limit makes budget usage undefined (`None`), never NaN.
//! - With zero total expense every category share is reported as 0%.
//! - Usage too large to represent saturates to `Decimal::MAX`.
//!
//! Amounts are capped at ingestion (`MAX_AMOUNT`), so sums are exact; the
//! saturating additions only matter for transactions built by hand.

use crate::types::{Category, Transaction, TransactionKind};
use rust_decimal::{Decimal, RoundingStrategy};

/// Usage strictly above this percentage selects the caution state
pub const CAUTION_THRESHOLD: Decimal = Decimal::from_parts(70, 0, 0, false, 0);

/// Usage strictly above this percentage raises the warning flag
pub const WARNING_THRESHOLD: Decimal = Decimal::from_parts(90, 0, 0, false, 0);

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Display state derived from budget usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// Usage at or below 70%, or undefined
    Normal,
    /// Usage above 70%
    Caution,
    /// Usage above 90%
    Warning,
}

impl BudgetStatus {
    /// Classify a usage percentage
    pub fn classify(usage: Option<Decimal>) -> Self {
        match usage {
            Some(usage) if usage > WARNING_THRESHOLD => BudgetStatus::Warning,
            Some(usage) if usage > CAUTION_THRESHOLD => BudgetStatus::Caution,
            _ => BudgetStatus::Normal,
        }
    }
}

/// One row of the category breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryShare {
    pub category: Category,
    /// Sum of expense amounts in this category
    pub total: Decimal,
    /// Share of total expense, rounded to one decimal place
    pub percentage: Decimal,
}

/// All derived metrics for one state of the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
    /// `None` when the budget limit is zero
    pub budget_usage: Option<Decimal>,
    pub status: BudgetStatus,
    /// Expense categories in order of first occurrence
    pub categories: Vec<CategoryShare>,
}

impl LedgerSummary {
    /// Compute every metric from scratch
    pub fn compute(transactions: &[Transaction], budget_limit: Decimal) -> Self {
        let total_income = total_income(transactions);
        let total_expense = total_expense(transactions);
        let budget_usage = budget_usage_percent(total_expense, budget_limit);

        LedgerSummary {
            total_income,
            total_expense,
            balance: total_income.saturating_sub(total_expense),
            budget_usage,
            status: BudgetStatus::classify(budget_usage),
            categories: category_breakdown(transactions),
        }
    }

    /// True when usage exceeds the warning threshold
    pub fn threshold_exceeded(&self) -> bool {
        self.status == BudgetStatus::Warning
    }

    /// Whether expenses exceed income
    pub fn is_overdrawn(&self) -> bool {
        self.balance < Decimal::ZERO
    }

    /// Usage clamped to `0..=100`, for progress bars
    pub fn progress_fill(&self) -> Decimal {
        self.budget_usage
            .unwrap_or(Decimal::ZERO)
            .clamp(Decimal::ZERO, ONE_HUNDRED)
    }
}

fn sum_kind(transactions: &[Transaction], kind: TransactionKind) -> Decimal {
    transactions
        .iter()
        .filter(|tx| tx.kind == kind)
        .fold(Decimal::ZERO, |acc, tx| acc.saturating_add(tx.amount))
}

/// Sum of all income amounts
pub fn total_income(transactions: &[Transaction]) -> Decimal {
    sum_kind(transactions, TransactionKind::Income)
}

/// Sum of all expense amounts
pub fn total_expense(transactions: &[Transaction]) -> Decimal {
    sum_kind(transactions, TransactionKind::Expense)
}

/// `expense / budget_limit * 100`, or `None` when the limit is zero
///
/// A ratio too large for `Decimal` saturates to `Decimal::MAX`, which still
/// classifies as over the warning threshold.
pub fn budget_usage_percent(total_expense: Decimal, budget_limit: Decimal) -> Option<Decimal> {
    if budget_limit.is_zero() {
        return None;
    }
    let usage = total_expense
        .checked_div(budget_limit)
        .and_then(|ratio| ratio.checked_mul(ONE_HUNDRED))
        .unwrap_or(Decimal::MAX);
    Some(usage)
}

/// Group expenses by category with each group's share of total expense
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryShare> {
    let mut groups: Vec<(Category, Decimal)> = Vec::new();

    for tx in transactions
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Expense)
    {
        match groups.iter_mut().find(|(category, _)| *category == tx.category) {
            Some((_, total)) => *total = total.saturating_add(tx.amount),
            None => groups.push((tx.category, tx.amount)),
        }
    }

    let total_expense = groups
        .iter()
        .fold(Decimal::ZERO, |acc, (_, total)| acc.saturating_add(*total));

    groups
        .into_iter()
        .map(|(category, total)| CategoryShare {
            category,
            total,
            percentage: share_percent(total, total_expense),
        })
        .collect()
}

fn share_percent(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    (part / whole * ONE_HUNDRED).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}
