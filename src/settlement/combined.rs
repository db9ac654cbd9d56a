//! Month-wide totals across both owners

use std::borrow::Borrow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::person::{calculate_person_monthly_totals, PersonMonthlyTotals};
use super::totals::{merge_category_totals, TypeTotals};
use crate::models::{Category, Money, MonthKey, Owner, Transaction};

/// Totals for one month, with both owners' breakdowns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedMonthlyTotals {
    pub month: MonthKey,
    pub total_income: Money,
    pub total_credit: Money,
    pub total_split_5050: Money,
    pub total_paid_for_partner: Money,
    pub total_household: Money,
    pub total_personal: Money,
    pub total_settlement: Money,
    /// Split, paid-for-partner, household and personal spend; never income,
    /// credit or settlement
    pub grand_total: Money,
    #[serde(default)]
    pub category_totals: BTreeMap<Category, Money>,
    pub lorenzo: PersonMonthlyTotals,
    pub maria: PersonMonthlyTotals,
}

impl CombinedMonthlyTotals {
    /// Breakdown of the given owner
    pub fn person(&self, owner: Owner) -> &PersonMonthlyTotals {
        match owner {
            Owner::Lorenzo => &self.lorenzo,
            Owner::Maria => &self.maria,
        }
    }

    /// Both breakdowns in reporting order
    pub fn people(&self) -> [&PersonMonthlyTotals; 2] {
        [&self.lorenzo, &self.maria]
    }

    /// Spend without a category
    pub fn uncategorized(&self) -> Money {
        self.grand_total - self.category_totals.values().sum::<Money>()
    }
}

/// Compute combined totals from a single month of transactions
pub fn calculate_combined_monthly_totals<T: Borrow<Transaction>>(
    month_transactions: &[T],
    month: MonthKey,
) -> CombinedMonthlyTotals {
    let lorenzo = calculate_person_monthly_totals(month_transactions, Owner::Lorenzo, month);
    let maria = calculate_person_monthly_totals(month_transactions, Owner::Maria, month);

    let totals = TypeTotals::for_all(month_transactions);

    let mut category_totals = lorenzo.category_totals.clone();
    merge_category_totals(&mut category_totals, &maria.category_totals);

    CombinedMonthlyTotals {
        month,
        total_income: totals.income,
        total_credit: totals.credit,
        total_split_5050: totals.split_5050,
        total_paid_for_partner: totals.paid_for_partner,
        total_household: totals.household,
        total_personal: totals.personal,
        total_settlement: totals.settlement,
        grand_total: totals.spend(),
        category_totals,
        lorenzo,
        maria,
    }
}
