//! One owner's monthly breakdown and debt

use std::borrow::Borrow;
use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::shares::{IncomeShares, HALF};
use super::totals::{category_totals, TypeTotals};
use crate::models::{Category, Money, MonthKey, Owner, Transaction};

/// Monthly figures for a single owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonMonthlyTotals {
    pub owner: Owner,
    pub month: MonthKey,
    pub income: Money,
    /// Fraction of the combined income, 0.0 to 1.0
    pub share_percent: Decimal,
    pub credit: Money,
    /// Paid by this owner toward even-split expenses
    pub split_5050_paid: Money,
    /// This owner's fair half of all even-split expenses
    pub split_5050_portion: Money,
    /// Paid by this owner covering the partner's personal costs
    pub paid_for_partner: Money,
    /// Paid by the partner covering this owner's personal costs
    #[serde(default)]
    pub partner_paid_for_me: Money,
    /// Paid by this owner toward household expenses
    pub household_paid: Money,
    /// This owner's income-proportional part of all household expenses
    pub household_portion: Money,
    pub personal: Money,
    /// Settlement transfers made by this owner
    pub settlement: Money,
    /// Spend paid by this owner: split, household, paid for partner and personal
    pub total: Money,
    /// Positive when this owner owes the partner
    pub debt: Money,
    #[serde(default)]
    pub category_totals: BTreeMap<Category, Money>,
}

impl PersonMonthlyTotals {
    /// What the owner owes in fair shares plus what the partner covered for them
    pub fn should_pay(&self) -> Money {
        self.split_5050_portion + self.household_portion + self.partner_paid_for_me
    }

    /// What the owner paid toward shared costs and on the partner's behalf
    pub fn actually_paid(&self) -> Money {
        self.split_5050_paid + self.household_paid + self.paid_for_partner
    }

    pub fn owes_partner(&self) -> bool {
        self.debt.is_positive()
    }
}

/// Compute one owner's totals from a single month of transactions
///
/// `month_transactions` should all fall inside `month`; the function does not
/// filter by date.
pub fn calculate_person_monthly_totals<T: Borrow<Transaction>>(
    month_transactions: &[T],
    owner: Owner,
    month: MonthKey,
) -> PersonMonthlyTotals {
    let partner = owner.partner();

    let mine = TypeTotals::for_owner(month_transactions, owner);
    let theirs = TypeTotals::for_owner(month_transactions, partner);
    let whole_month = mine + theirs;

    let share_percent = match owner {
        Owner::Lorenzo => IncomeShares::from_incomes(mine.income, theirs.income),
        Owner::Maria => IncomeShares::from_incomes(theirs.income, mine.income),
    }
    .for_owner(owner);

    // Even-split costs are halved regardless of income.
    let split_5050_portion = whole_month.split_5050.scale(HALF);
    let household_portion = whole_month.household.scale(share_percent);
    let category_totals = category_totals(
        month_transactions
            .iter()
            .map(Borrow::borrow)
            .filter(|txn| txn.owner == owner),
    );

    let mut totals = PersonMonthlyTotals {
        owner,
        month,
        income: mine.income,
        share_percent,
        credit: mine.credit,
        split_5050_paid: mine.split_5050,
        split_5050_portion,
        paid_for_partner: mine.paid_for_partner,
        partner_paid_for_me: theirs.paid_for_partner,
        household_paid: mine.household,
        household_portion,
        personal: mine.personal,
        settlement: mine.settlement,
        total: mine.spend(),
        debt: Money::zero(),
        category_totals,
    };
    totals.debt = totals.should_pay() - totals.actually_paid() - totals.settlement;
    totals
}
