//! User profile types
//!
//! The profile is read-only for the ledger: it supplies the budget limit used
//! by the aggregator and the currency used for display.

use super::error::LedgerError;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// ISO 4217 currency code, stored upper-case
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CurrencyCode {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(LedgerError::InvalidCurrency {
                code: s.to_string(),
            });
        }
        Ok(CurrencyCode(code.to_ascii_uppercase()))
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The user the ledger belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    budget_limit: Decimal,
    pub currency: CurrencyCode,
}

impl UserProfile {
    /// Create a profile
    ///
    /// # Errors
    ///
    /// Returns `InvalidBudgetLimit` unless `budget_limit` is greater than zero.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        budget_limit: Decimal,
        currency: CurrencyCode,
    ) -> Result<Self, LedgerError> {
        if budget_limit <= Decimal::ZERO {
            return Err(LedgerError::InvalidBudgetLimit {
                limit: budget_limit.to_string(),
            });
        }

        Ok(UserProfile {
            name: name.into(),
            email: email.into(),
            budget_limit,
            currency,
        })
    }

    /// Monthly expense ceiling, always positive
    pub fn budget_limit(&self) -> Decimal {
        self.budget_limit
    }
}
