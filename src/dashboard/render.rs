//! Plain-text rendering of the dashboard

use super::Dashboard;
use crate::core::{BudgetStatus, IdGenerator};
use crate::format::{format_currency, format_percent};
use crate::types::{Language, LedgerError, TransactionKind};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::io::Write;

const BAR_WIDTH: usize = 20;

struct Captions {
    title: &'static str,
    income: &'static str,
    expense: &'static str,
    balance: &'static str,
    overdrawn: &'static str,
    usage: &'static str,
    caution: &'static str,
    warning: &'static str,
    categories: &'static str,
    no_expenses: &'static str,
    trend: &'static str,
    recent: &'static str,
    no_transactions: &'static str,
}

fn captions(language: Language) -> Captions {
    match language {
        Language::English => Captions {
            title: "Budget Ledger",
            income: "Total income",
            expense: "Total expense",
            balance: "Balance",
            overdrawn: "overdrawn",
            usage: "Budget usage",
            caution: "Approaching budget limit",
            warning: "Budget limit exceeded!",
            categories: "Expenses by category",
            no_expenses: "No expenses recorded",
            trend: "Monthly trend (income / expense)",
            recent: "Recent transactions",
            no_transactions: "No transactions yet",
        },
        Language::Turkish => Captions {
            title: "Bütçe Yönetimi",
            income: "Toplam Gelir",
            expense: "Toplam Gider",
            balance: "Kalan Bakiye",
            overdrawn: "eksi bakiye",
            usage: "Bütçe Kullanımı",
            caution: "Bütçe limitine yaklaşılıyor",
            warning: "Bütçe limiti aşılıyor!",
            categories: "Kategori Dağılımı",
            no_expenses: "Henüz gider yok",
            trend: "Aylık Trend (gelir / gider)",
            recent: "Son İşlemler",
            no_transactions: "Henüz işlem yok",
        },
    }
}

fn progress_bar(fill: Decimal) -> String {
    let filled = (fill / Decimal::from(100 / BAR_WIDTH))
        .floor()
        .to_usize()
        .unwrap_or(0)
        .min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

pub(super) fn render_dashboard<G: IdGenerator>(
    dashboard: &Dashboard<G>,
    out: &mut dyn Write,
) -> Result<(), LedgerError> {
    let language = dashboard.language();
    let profile = dashboard.profile();
    let currency = &profile.currency;
    let text = captions(language);
    let money = |amount: Decimal| format_currency(amount, currency, language);
    let summary = dashboard.summary();

    writeln!(out, "{}: {} <{}>", text.title, profile.name, profile.email)?;
    writeln!(out)?;

    writeln!(out, "{:<18}{}", text.income, money(summary.total_income))?;
    writeln!(out, "{:<18}{}", text.expense, money(summary.total_expense))?;
    if summary.is_overdrawn() {
        writeln!(
            out,
            "{:<18}{} ({})",
            text.balance,
            money(summary.balance),
            text.overdrawn
        )?;
    } else {
        writeln!(out, "{:<18}{}", text.balance, money(summary.balance))?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "{:<18}{} / {}  {}",
        text.usage,
        money(summary.total_expense),
        money(profile.budget_limit()),
        format_percent(summary.budget_usage, language)
    )?;
    writeln!(out, "{:<18}{}", "", progress_bar(summary.progress_fill()))?;
    match summary.status {
        BudgetStatus::Warning => writeln!(out, "{:<18}{}", "", text.warning)?,
        BudgetStatus::Caution => writeln!(out, "{:<18}{}", "", text.caution)?,
        BudgetStatus::Normal => {}
    }
    writeln!(out)?;

    writeln!(out, "{}", text.categories)?;
    if summary.categories.is_empty() {
        writeln!(out, "  {}", text.no_expenses)?;
    }
    for share in &summary.categories {
        writeln!(
            out,
            "  {:<16}{:>16}  {}",
            share.category.label(language),
            money(share.total),
            format_percent(Some(share.percentage), language)
        )?;
    }
    writeln!(out)?;

    writeln!(out, "{}", text.trend)?;
    for point in dashboard.trend() {
        writeln!(
            out,
            "  {:<16}{:>16}{:>16}",
            language.month_label(point.month),
            money(point.income),
            money(point.expense)
        )?;
    }
    writeln!(out)?;

    writeln!(out, "{}", text.recent)?;
    if dashboard.ledger().is_empty() {
        writeln!(out, "  {}", text.no_transactions)?;
    }
    for tx in dashboard.ledger().newest_first() {
        let sign = match tx.kind {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        };
        writeln!(
            out,
            "  {}  {:<8}{:<16}{:<32}{}{}",
            tx.date.format("%Y-%m-%d"),
            tx.kind.label(language),
            tx.category.label(language),
            tx.description,
            sign,
            money(tx.amount)
        )?;
    }

    out.flush()?;
    Ok(())
}
