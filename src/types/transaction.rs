//! Transaction-related types for the budget ledger
//!
//! This module defines transaction kinds, the fixed category lists, validated
//! transactions, and the raw drafts they are built from.

use super::error::LedgerError;
use super::language::Language;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transaction identifier
///
/// Assigned from a monotonic, clock-derived source on creation.
pub type TransactionId = u64;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in
    Income,

    /// Money going out, counted against the budget limit
    Expense,
}

impl TransactionKind {
    /// Localized label used in the export file and dashboard
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (TransactionKind::Income, Language::English) => "Income",
            (TransactionKind::Expense, Language::English) => "Expense",
            (TransactionKind::Income, Language::Turkish) => "Gelir",
            (TransactionKind::Expense, Language::Turkish) => "Gider",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => f.write_str("income"),
            TransactionKind::Expense => f.write_str("expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "gelir" => Ok(TransactionKind::Income),
            "expense" | "gider" => Ok(TransactionKind::Expense),
            _ => Err(LedgerError::invalid_transaction_type(s)),
        }
    }
}

/// Transaction category
///
/// Each kind draws from its own fixed list; `Other` is shared by both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Salary,
    Freelance,
    Investment,
    Groceries,
    Transport,
    Bills,
    Entertainment,
    Health,
    Clothing,
    Education,
    Other,
}

const INCOME_CATEGORIES: [Category; 4] = [
    Category::Salary,
    Category::Freelance,
    Category::Investment,
    Category::Other,
];

const EXPENSE_CATEGORIES: [Category; 8] = [
    Category::Groceries,
    Category::Transport,
    Category::Bills,
    Category::Entertainment,
    Category::Health,
    Category::Clothing,
    Category::Education,
    Category::Other,
];

impl Category {
    /// Categories a transaction of `kind` may use, in form display order
    pub fn for_kind(kind: TransactionKind) -> &'static [Category] {
        match kind {
            TransactionKind::Income => &INCOME_CATEGORIES,
            TransactionKind::Expense => &EXPENSE_CATEGORIES,
        }
    }

    /// Localized label
    pub fn label(self, language: Language) -> &'static str {
        match language {
            Language::English => match self {
                Category::Salary => "Salary",
                Category::Freelance => "Freelance",
                Category::Investment => "Investment",
                Category::Groceries => "Groceries",
                Category::Transport => "Transport",
                Category::Bills => "Bills",
                Category::Entertainment => "Entertainment",
                Category::Health => "Health",
                Category::Clothing => "Clothing",
                Category::Education => "Education",
                Category::Other => "Other",
            },
            Language::Turkish => match self {
                Category::Salary => "Maaş",
                Category::Freelance => "Freelance",
                Category::Investment => "Yatırım",
                Category::Groceries => "Market",
                Category::Transport => "Ulaşım",
                Category::Bills => "Faturalar",
                Category::Entertainment => "Eğlence",
                Category::Health => "Sağlık",
                Category::Clothing => "Giyim",
                Category::Education => "Eğitim",
                Category::Other => "Diğer",
            },
        }
    }

    /// Parse a category label for the given kind
    ///
    /// Accepts the English or Turkish label, ignoring case and surrounding
    /// whitespace. Labels outside the kind's list are rejected.
    pub fn parse(kind: TransactionKind, input: &str) -> Result<Category, LedgerError> {
        let wanted = input.trim().to_lowercase();
        if wanted.is_empty() {
            return Err(LedgerError::missing_field("category"));
        }

        Category::for_kind(kind)
            .iter()
            .copied()
            .find(|category| {
                [Language::English, Language::Turkish]
                    .iter()
                    .any(|&language| category.label(language).to_lowercase() == wanted)
            })
            .ok_or_else(|| LedgerError::invalid_category(input, kind))
    }
}

/// A recorded, validated transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Unique identifier, preserved across edits
    pub id: TransactionId,

    /// Income or expense
    pub kind: TransactionKind,

    /// Non-negative amount in the profile's currency
    pub amount: Decimal,

    /// Category from the kind's fixed list
    pub category: Category,

    /// Free-text label, never empty
    pub description: String,

    /// Calendar date, no time component
    pub date: NaiveDate,
}

/// Validated transaction fields, everything except the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionFields {
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub category: Category,
    pub description: String,
    pub date: NaiveDate,
}

impl TransactionFields {
    /// Attach an id to produce a full transaction
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            kind: self.kind,
            amount: self.amount,
            category: self.category,
            description: self.description,
            date: self.date,
        }
    }
}

/// Raw transaction input as typed into a form or read from an import row
///
/// Every field except the kind is an unparsed string. Nothing reaches the
/// ledger without going through [`TransactionDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub amount: String,
    pub category: String,
    pub description: String,
    pub date: String,
}

impl TransactionDraft {
    /// Create an empty draft of the given kind dated `date`
    ///
    /// Mirrors a freshly opened entry form.
    pub fn blank(kind: TransactionKind, date: NaiveDate) -> Self {
        TransactionDraft {
            kind,
            amount: String::new(),
            category: String::new(),
            description: String::new(),
            date: date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Convenience constructor from borrowed strings
    pub fn new(
        kind: TransactionKind,
        amount: &str,
        category: &str,
        description: &str,
        date: &str,
    ) -> Self {
        TransactionDraft {
            kind,
            amount: amount.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            date: date.to_string(),
        }
    }

    /// Parse and validate every field
    ///
    /// # Errors
    ///
    /// - `MissingField` if any of amount, category, description or date is blank
    /// - `InvalidAmount` if the amount is not a decimal number
    /// - `NegativeAmount` if the amount is below zero
    /// - `InvalidCategory` if the category is not in the kind's list
    /// - `InvalidDate` if the date is not `YYYY-MM-DD`
    pub fn validate(&self) -> Result<TransactionFields, LedgerError> {
        let amount = parse_amount(&self.amount)?;
        let category = Category::parse(self.kind, &self.category)?;

        let description = self.description.trim();
        if description.is_empty() {
            return Err(LedgerError::missing_field("description"));
        }

        let date = parse_date(&self.date)?;

        Ok(TransactionFields {
            kind: self.kind,
            amount,
            category,
            description: description.to_string(),
            date,
        })
    }
}

impl From<&Transaction> for TransactionDraft {
    /// Prefill a draft from an existing transaction (edit flow)
    fn from(tx: &Transaction) -> Self {
        TransactionDraft {
            kind: tx.kind,
            amount: tx.amount.normalize().to_string(),
            category: tx.category.label(Language::English).to_string(),
            description: tx.description.clone(),
            date: tx.date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Largest accepted transaction amount, 10^15
///
/// With at most [`MAX_AMOUNT_SCALE`] decimal places, sums over any realistic
/// number of transactions stay exact in `Decimal`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Most decimal places accepted in an amount, ignoring trailing zeros
pub const MAX_AMOUNT_SCALE: u32 = 6;

/// Parse a non-negative decimal amount within [`MAX_AMOUNT`] and [`MAX_AMOUNT_SCALE`]
pub fn parse_amount(input: &str) -> Result<Decimal, LedgerError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::missing_field("amount"));
    }

    let amount = Decimal::from_str(trimmed).map_err(|_| LedgerError::invalid_amount(input))?;
    if amount < Decimal::ZERO {
        return Err(LedgerError::negative_amount(input));
    }
    if amount > MAX_AMOUNT || amount.normalize().scale() > MAX_AMOUNT_SCALE {
        return Err(LedgerError::amount_out_of_range(input));
    }

    Ok(amount)
}

/// Parse an ISO 8601 calendar date
pub fn parse_date(input: &str) -> Result<NaiveDate, LedgerError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::missing_field("date"));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| LedgerError::invalid_date(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn draft(amount: &str, category: &str, description: &str, date: &str) -> TransactionDraft {
        TransactionDraft::new(TransactionKind::Expense, amount, category, description, date)
    }

    #[test]
    fn test_validate_accepts_complete_draft() {
        let fields = draft("1200", "Groceries", "Weekly shopping", "2025-06-02")
            .validate()
            .unwrap();

        assert_eq!(fields.kind, TransactionKind::Expense);
        assert_eq!(fields.amount, Decimal::new(1200, 0));
        assert_eq!(fields.category, Category::Groceries);
        assert_eq!(fields.description, "Weekly shopping");
        assert_eq!(fields.date, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
    }

    #[rstest]
    #[case::negative("-50", "Groceries", "x", "2025-06-02", LedgerError::negative_amount("-50"))]
    #[case::not_a_number("abc", "Groceries", "x", "2025-06-02", LedgerError::invalid_amount("abc"))]
    #[case::nan("NaN", "Groceries", "x", "2025-06-02", LedgerError::invalid_amount("NaN"))]
    #[case::empty_amount("  ", "Groceries", "x", "2025-06-02", LedgerError::missing_field("amount"))]
    #[case::decimal_max(
        "79228162514264337593543950335",
        "Groceries",
        "x",
        "2025-06-02",
        LedgerError::amount_out_of_range("79228162514264337593543950335")
    )]
    #[case::above_ceiling(
        "1000000000000000.01",
        "Groceries",
        "x",
        "2025-06-02",
        LedgerError::amount_out_of_range("1000000000000000.01")
    )]
    #[case::too_many_places(
        "0.0000001",
        "Groceries",
        "x",
        "2025-06-02",
        LedgerError::amount_out_of_range("0.0000001")
    )]
    #[case::empty_category("10", "", "x", "2025-06-02", LedgerError::missing_field("category"))]
    #[case::wrong_kind_category(
        "10",
        "Salary",
        "x",
        "2025-06-02",
        LedgerError::invalid_category("Salary", TransactionKind::Expense)
    )]
    #[case::empty_description("10", "Bills", " ", "2025-06-02", LedgerError::missing_field("description"))]
    #[case::empty_date("10", "Bills", "x", "", LedgerError::missing_field("date"))]
    #[case::bad_date("10", "Bills", "x", "02/06/2025", LedgerError::invalid_date("02/06/2025"))]
    fn test_validate_rejects(
        #[case] amount: &str,
        #[case] category: &str,
        #[case] description: &str,
        #[case] date: &str,
        #[case] expected: LedgerError,
    ) {
        assert_eq!(
            draft(amount, category, description, date).validate(),
            Err(expected)
        );
    }

    #[rstest]
    #[case("  100.0  ", Decimal::new(1000, 1))]
    #[case("0", Decimal::ZERO)]
    #[case("12.3456", Decimal::new(123456, 4))]
    #[case("1000000000000000", MAX_AMOUNT)]
    #[case("0.1000000", Decimal::new(1000000, 7))]
    fn test_parse_amount(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(parse_amount(input).unwrap(), expected);
    }

    #[rstest]
    #[case(TransactionKind::Expense, "market", Category::Groceries)]
    #[case(TransactionKind::Expense, "TRANSPORT", Category::Transport)]
    #[case(TransactionKind::Expense, "Diğer", Category::Other)]
    #[case(TransactionKind::Income, "Maaş", Category::Salary)]
    #[case(TransactionKind::Income, " other ", Category::Other)]
    fn test_category_parse_accepts_both_languages(
        #[case] kind: TransactionKind,
        #[case] input: &str,
        #[case] expected: Category,
    ) {
        assert_eq!(Category::parse(kind, input).unwrap(), expected);
    }

    #[test]
    fn test_category_lists_match_kinds() {
        assert_eq!(Category::for_kind(TransactionKind::Income).len(), 4);
        assert_eq!(Category::for_kind(TransactionKind::Expense).len(), 8);
        assert!(Category::parse(TransactionKind::Income, "Groceries").is_err());
    }

    #[rstest]
    #[case("income", TransactionKind::Income)]
    #[case("EXPENSE", TransactionKind::Expense)]
    #[case("Gider", TransactionKind::Expense)]
    fn test_kind_from_str(#[case] input: &str, #[case] expected: TransactionKind) {
        assert_eq!(input.parse::<TransactionKind>().unwrap(), expected);
    }

    #[test]
    fn test_kind_from_str_rejects_unknown() {
        assert_eq!(
            "transfer".parse::<TransactionKind>(),
            Err(LedgerError::invalid_transaction_type("transfer"))
        );
    }

    #[test]
    fn test_draft_prefill_round_trips_through_validate() {
        let tx = Transaction {
            id: 42,
            kind: TransactionKind::Income,
            amount: Decimal::new(25000, 1),
            category: Category::Freelance,
            description: "Web design project".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 4).unwrap(),
        };

        let draft = TransactionDraft::from(&tx);
        assert_eq!(draft.amount, "2500");
        assert_eq!(draft.date, "2025-06-04");
        assert_eq!(draft.validate().unwrap().into_transaction(42), tx);
    }

    #[test]
    fn test_blank_draft_is_dated_and_invalid() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let draft = TransactionDraft::blank(TransactionKind::Expense, today);
        assert_eq!(draft.date, "2025-06-10");
        assert_eq!(draft.validate(), Err(LedgerError::missing_field("amount")));
    }
}
