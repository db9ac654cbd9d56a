//! Per-expense-type accumulation shared by the monthly aggregators

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::ops::Add;

use crate::models::{Category, ExpenseType, Money, Owner, Transaction};

/// Sum of amounts for every expense type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TypeTotals {
    pub income: Money,
    pub household: Money,
    pub split_5050: Money,
    pub personal: Money,
    pub paid_for_partner: Money,
    pub credit: Money,
    pub settlement: Money,
}

impl TypeTotals {
    /// Totals of the transactions belonging to `owner`
    pub fn for_owner<T: Borrow<Transaction>>(transactions: &[T], owner: Owner) -> Self {
        Self::collect(
            transactions
                .iter()
                .map(Borrow::borrow)
                .filter(|txn| txn.owner == owner),
        )
    }

    /// Totals across both owners
    pub fn for_all<T: Borrow<Transaction>>(transactions: &[T]) -> Self {
        Self::collect(transactions.iter().map(Borrow::borrow))
    }

    fn collect<'a>(transactions: impl Iterator<Item = &'a Transaction>) -> Self {
        let mut totals = Self::default();
        for txn in transactions {
            *totals.slot_mut(txn.expense_type) += txn.amount;
        }
        totals
    }

    fn slot_mut(&mut self, expense_type: ExpenseType) -> &mut Money {
        match expense_type {
            ExpenseType::Income => &mut self.income,
            ExpenseType::Household => &mut self.household,
            ExpenseType::Split5050 => &mut self.split_5050,
            ExpenseType::Personal => &mut self.personal,
            ExpenseType::PaidForPartner => &mut self.paid_for_partner,
            ExpenseType::Credit => &mut self.credit,
            ExpenseType::Settlement => &mut self.settlement,
        }
    }

    /// Everything that counts as spend; income, credit and settlement are not spend
    pub fn spend(&self) -> Money {
        self.split_5050 + self.household + self.paid_for_partner + self.personal
    }
}

impl Add for TypeTotals {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            income: self.income + other.income,
            household: self.household + other.household,
            split_5050: self.split_5050 + other.split_5050,
            personal: self.personal + other.personal,
            paid_for_partner: self.paid_for_partner + other.paid_for_partner,
            credit: self.credit + other.credit,
            settlement: self.settlement + other.settlement,
        }
    }
}

/// Sum spend per category; uncategorized and non-spend transactions are ignored
pub(crate) fn category_totals<'a>(
    transactions: impl Iterator<Item = &'a Transaction>,
) -> BTreeMap<Category, Money> {
    let mut totals = BTreeMap::new();
    for txn in transactions.filter(|txn| txn.expense_type.is_spend()) {
        if let Some(category) = txn.category {
            *totals.entry(category).or_insert_with(Money::zero) += txn.amount;
        }
    }
    totals
}

/// Add every entry of `other` into `into`
pub(crate) fn merge_category_totals(
    into: &mut BTreeMap<Category, Money>,
    other: &BTreeMap<Category, Money>,
) {
    for (category, amount) in other {
        *into.entry(*category).or_insert_with(Money::zero) += *amount;
    }
}
