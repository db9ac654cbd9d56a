//! Transaction display formatting
//!
//! Register-style listing used by the search command.

use crate::models::{Money, Transaction};

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, currency_symbol: &str) -> String {
    let category = txn.category.map(|c| c.label()).unwrap_or("-");

    format!(
        "{} {:<8} {:<24} {:<17} {:<14} {:>14}",
        txn.date.format("%Y-%m-%d"),
        txn.owner.name(),
        truncate(&txn.description, 24),
        txn.expense_type.label(),
        truncate(category, 14),
        txn.amount.format_with_symbol(currency_symbol)
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register<'a, I>(transactions: I, currency_symbol: &str) -> String
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut output = String::new();
    let mut count = 0;
    let mut total = Money::zero();

    for txn in transactions {
        if count == 0 {
            output.push_str(&format!(
                "{:<10} {:<8} {:<24} {:<17} {:<14} {:>14}\n",
                "Date", "Owner", "Description", "Type", "Category", "Amount"
            ));
            output.push_str(&"-".repeat(92));
            output.push('\n');
        }
        output.push_str(&format_transaction_row(txn, currency_symbol));
        output.push('\n');
        count += 1;
        total += txn.amount;
    }

    if count == 0 {
        return "No transactions found.\n".to_string();
    }

    output.push_str(&"-".repeat(92));
    output.push('\n');
    output.push_str(&format!(
        "{:<77} {:>14}\n",
        format!("{} transaction(s)", count),
        total.format_with_symbol(currency_symbol)
    ));

    output
}

/// Pad or shorten a string to exactly `max_len` characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
