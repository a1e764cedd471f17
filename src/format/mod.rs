//! Display formatting
//!
//! Currency and percentage rendering for the dashboard. Symbols, minor units
//! and separators depend on the currency code and the display language.

use crate::types::{CurrencyCode, Language};
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal and grouping separators for a language
pub fn separators(language: Language) -> (char, char) {
    match language {
        Language::English => ('.', ','),
        Language::Turkish => (',', '.'),
    }
}

/// Symbol written before the amount
pub fn symbol_for(code: &CurrencyCode) -> String {
    match code.as_str() {
        "TRY" => "₺".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        other => format!("{other} "),
    }
}

/// Number of decimal places shown for a currency
pub fn minor_units_for(code: &CurrencyCode) -> u32 {
    match code.as_str() {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Format a plain number with fixed precision and digit grouping
pub fn format_number(value: Decimal, precision: u32, language: Language) -> String {
    let (decimal_separator, grouping_separator) = separators(language);
    let rounded =
        value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    let body = format!("{:.*}", precision as usize, rounded.abs());

    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };

    let mut formatted = group_digits(int_part, grouping_separator);
    if let Some(frac_part) = frac_part {
        formatted.push(decimal_separator);
        formatted.push_str(frac_part);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        formatted.insert(0, '-');
    }
    formatted
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Format a monetary amount, e.g. `₺5.000,00` or `-$1,200.50`
pub fn format_currency(amount: Decimal, code: &CurrencyCode, language: Language) -> String {
    let body = format_number(amount.abs(), minor_units_for(code), language);
    // Amounts that round to zero are shown unsigned
    let negative =
        amount.is_sign_negative() && body.chars().any(|c| c.is_ascii_digit() && c != '0');

    let sign = if negative { "-" } else { "" };
    format!("{sign}{}{body}", symbol_for(code))
}

/// Format a percentage with one decimal place (`20.0%`, `%20,0`), or `n/a` when undefined
pub fn format_percent(value: Option<Decimal>, language: Language) -> String {
    match value {
        Some(value) => {
            let number = format_number(value, 1, language);
            match language {
                Language::English => format!("{number}%"),
                Language::Turkish => format!("%{number}"),
            }
        }
        None => "n/a".to_string(),
    }
}
