//! Month bucketing of a transaction history

use std::collections::BTreeMap;

use crate::models::{MonthKey, Transaction};

/// Partition transactions by calendar month
///
/// Each bucket keeps the relative order of the input slice. Months without
/// transactions have no bucket.
pub fn group_by_month(transactions: &[Transaction]) -> BTreeMap<MonthKey, Vec<&Transaction>> {
    let mut groups: BTreeMap<MonthKey, Vec<&Transaction>> = BTreeMap::new();

    for txn in transactions {
        groups.entry(txn.month_key()).or_default().push(txn);
    }

    groups
}
