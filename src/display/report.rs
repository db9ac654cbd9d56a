//! Report formatting for terminal output
//!
//! Monthly settlement tables rendered with `tabled`.

use rust_decimal::Decimal;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::Money;
use crate::settlement::{CombinedMonthlyTotals, PersonMonthlyTotals};

/// Format a ratio (0.6) as a percentage ("60.0%")
pub fn format_percentage(ratio: Decimal) -> String {
    let pct = (ratio * Decimal::ONE_HUNDRED).round_dp(1);
    format!("{:.1}%", pct)
}

/// Describe a debt in words
pub fn format_debt(person: &PersonMonthlyTotals, currency_symbol: &str) -> String {
    let amount = person.debt.abs().format_with_symbol(currency_symbol);
    if person.debt.is_positive() {
        format!("owes {} {}", person.owner.partner(), amount)
    } else if person.debt.is_negative() {
        format!("is owed {}", amount)
    } else {
        "settled".to_string()
    }
}

#[derive(Tabled)]
struct OverviewRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Lorenzo Debt")]
    lorenzo_debt: String,
    #[tabled(rename = "Maria Debt")]
    maria_debt: String,
}

/// One row per month, newest first, as passed in
pub fn format_month_overview(report: &[CombinedMonthlyTotals], currency_symbol: &str) -> String {
    if report.is_empty() {
        return "No transactions found.".to_string();
    }

    let money = |m: Money| m.format_with_symbol(currency_symbol);
    let rows = report.iter().map(|month| OverviewRow {
        month: month.month.to_string(),
        income: money(month.total_income),
        spent: money(month.grand_total),
        lorenzo_debt: money(month.lorenzo.debt),
        maria_debt: money(month.maria.debt),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "")]
    label: &'static str,
    #[tabled(rename = "Lorenzo")]
    lorenzo: String,
    #[tabled(rename = "Maria")]
    maria: String,
    #[tabled(rename = "Total")]
    total: String,
}

/// Side-by-side breakdown of both owners for one month
pub fn format_month_breakdown(totals: &CombinedMonthlyTotals, currency_symbol: &str) -> String {
    let money = |m: Money| m.format_with_symbol(currency_symbol);
    let (l, m) = (&totals.lorenzo, &totals.maria);

    let row = |label: &'static str, lorenzo: Money, maria: Money, total: Option<Money>| {
        BreakdownRow {
            label,
            lorenzo: money(lorenzo),
            maria: money(maria),
            total: total.map(money).unwrap_or_default(),
        }
    };

    let rows = vec![
        row("Income", l.income, m.income, Some(totals.total_income)),
        BreakdownRow {
            label: "Share",
            lorenzo: format_percentage(l.share_percent),
            maria: format_percentage(m.share_percent),
            total: String::new(),
        },
        row(
            "Split 50/50 paid",
            l.split_5050_paid,
            m.split_5050_paid,
            Some(totals.total_split_5050),
        ),
        row("Split 50/50 portion", l.split_5050_portion, m.split_5050_portion, None),
        row("Household paid", l.household_paid, m.household_paid, Some(totals.total_household)),
        row("Household portion", l.household_portion, m.household_portion, None),
        row(
            "Paid for partner",
            l.paid_for_partner,
            m.paid_for_partner,
            Some(totals.total_paid_for_partner),
        ),
        row("Covered by partner", l.partner_paid_for_me, m.partner_paid_for_me, None),
        row("Personal", l.personal, m.personal, Some(totals.total_personal)),
        row("Credit", l.credit, m.credit, Some(totals.total_credit)),
        row("Settlement", l.settlement, m.settlement, Some(totals.total_settlement)),
        row("Total", l.total, m.total, Some(totals.grand_total)),
        row("Debt", l.debt, m.debt, None),
    ];

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(1..), Alignment::right());

    format!(
        "{}\n{}\nLorenzo {}\nMaria {}\n",
        totals.month.long_name(),
        table,
        format_debt(l, currency_symbol),
        format_debt(m, currency_symbol)
    )
}
