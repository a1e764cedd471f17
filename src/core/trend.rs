//! Monthly income/expense trend
//!
//! The trend is a fixed illustrative series for January through May, followed
//! by the current month built from the live totals.

use crate::core::aggregator::LedgerSummary;
use chrono::Month;
use rust_decimal::Decimal;

/// One point of the trend chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyPoint {
    pub month: Month,
    pub income: Decimal,
    pub expense: Decimal,
}

const HISTORY: [(Month, i64, i64); 5] = [
    (Month::January, 4500, 3200),
    (Month::February, 4800, 3600),
    (Month::March, 5200, 4100),
    (Month::April, 4900, 3800),
    (Month::May, 5100, 4200),
];

/// Month whose values come from the live ledger
pub const CURRENT_MONTH: Month = Month::June;

/// Build the six-point series ending with the current totals
pub fn monthly_trend(summary: &LedgerSummary) -> Vec<MonthlyPoint> {
    HISTORY
        .iter()
        .map(|&(month, income, expense)| MonthlyPoint {
            month,
            income: Decimal::from(income),
            expense: Decimal::from(expense),
        })
        .chain(std::iter::once(MonthlyPoint {
            month: CURRENT_MONTH,
            income: summary.total_income,
            expense: summary.total_expense,
        }))
        .collect()
}
