//! Settlement engine
//!
//! Turns a flat transaction history into per-month reports of who paid what
//! and who owes whom. Data flows one way:
//!
//! transactions → month buckets → per-owner totals → combined totals → report
//!
//! Everything here is pure: nothing is cached and no input is mutated, so the
//! functions can be called from any thread on a shared slice.

pub mod combined;
pub mod grouping;
pub mod person;
pub mod shares;
mod totals;

pub use combined::{calculate_combined_monthly_totals, CombinedMonthlyTotals};
pub use grouping::group_by_month;
pub use person::{calculate_person_monthly_totals, PersonMonthlyTotals};
pub use shares::{calculate_shares, IncomeShares};

use crate::models::{MonthKey, Transaction};

/// Compute totals for every month that has transactions, newest month first
pub fn calculate_all_monthly_totals(transactions: &[Transaction]) -> Vec<CombinedMonthlyTotals> {
    let grouped = group_by_month(transactions);

    tracing::debug!(
        transactions = transactions.len(),
        months = grouped.len(),
        "computing monthly totals"
    );

    grouped
        .iter()
        .rev()
        .map(|(month, month_transactions)| {
            calculate_combined_monthly_totals(month_transactions, *month)
        })
        .collect()
}

/// Compute totals for a single month, or `None` when it has no transactions
pub fn calculate_month_totals(
    transactions: &[Transaction],
    month: MonthKey,
) -> Option<CombinedMonthlyTotals> {
    let month_transactions: Vec<&Transaction> = transactions
        .iter()
        .filter(|txn| txn.month_key() == month)
        .collect();

    if month_transactions.is_empty() {
        return None;
    }

    Some(calculate_combined_monthly_totals(&month_transactions, month))
}
