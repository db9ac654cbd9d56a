//! CSV export of transactions and monthly totals

use std::io::Write;

use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;
use crate::settlement::CombinedMonthlyTotals;

/// Header written by [`write_transactions_csv`]; re-importable as-is
pub const TRANSACTION_HEADER: [&str; 6] =
    ["Owner", "Description", "Amount", "Type", "Date", "Category"];

/// Write transactions in the ledger CSV layout
///
/// Amounts keep their full precision; dates use `date_format` (strftime).
pub fn write_transactions_csv<W: Write>(
    writer: W,
    transactions: &[Transaction],
    date_format: &str,
) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(TRANSACTION_HEADER)?;

    for txn in transactions {
        let amount = txn.amount.amount().to_string();
        let date = txn.date.format(date_format).to_string();
        csv_writer.write_record([
            txn.owner.name(),
            txn.description.as_str(),
            amount.as_str(),
            txn.expense_type.label(),
            date.as_str(),
            txn.category.map(|c| c.label()).unwrap_or(""),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))
}

#[derive(Debug, Serialize)]
struct MonthlyTotalsRow {
    #[serde(rename = "Month")]
    month: String,
    #[serde(rename = "Owner")]
    owner: &'static str,
    #[serde(rename = "Income")]
    income: String,
    #[serde(rename = "Share")]
    share: String,
    #[serde(rename = "Split 50/50 Paid")]
    split_5050_paid: String,
    #[serde(rename = "Split 50/50 Portion")]
    split_5050_portion: String,
    #[serde(rename = "Household Paid")]
    household_paid: String,
    #[serde(rename = "Household Portion")]
    household_portion: String,
    #[serde(rename = "Paid for Partner")]
    paid_for_partner: String,
    #[serde(rename = "Personal")]
    personal: String,
    #[serde(rename = "Credit")]
    credit: String,
    #[serde(rename = "Settlement")]
    settlement: String,
    #[serde(rename = "Total")]
    total: String,
    #[serde(rename = "Debt")]
    debt: String,
}

/// Write one row per month and owner
pub fn write_monthly_totals_csv<W: Write>(
    writer: W,
    report: &[CombinedMonthlyTotals],
) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for month in report {
        for person in month.people() {
            csv_writer.serialize(MonthlyTotalsRow {
                month: month.month.to_string(),
                owner: person.owner.name(),
                income: person.income.to_string(),
                share: format!("{:.4}", person.share_percent),
                split_5050_paid: person.split_5050_paid.to_string(),
                split_5050_portion: person.split_5050_portion.to_string(),
                household_paid: person.household_paid.to_string(),
                household_portion: person.household_portion.to_string(),
                paid_for_partner: person.paid_for_partner.to_string(),
                personal: person.personal.to_string(),
                credit: person.credit.to_string(),
                settlement: person.settlement.to_string(),
                total: person.total.to_string(),
                debt: person.debt.to_string(),
            })?;
        }
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))
}
