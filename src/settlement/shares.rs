//! Income share calculation
//!
//! Household costs are split in proportion to each owner's income for the
//! month. With no combined income the split falls back to half each.

use std::borrow::Borrow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::totals::TypeTotals;
use crate::models::{Money, Owner, Transaction};

/// One half, the even split ratio
pub const HALF: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Each owner's fraction of the combined monthly income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeShares {
    pub lorenzo: Decimal,
    pub maria: Decimal,
}

impl IncomeShares {
    /// The neutral 50/50 split
    pub const EVEN: IncomeShares = IncomeShares {
        lorenzo: HALF,
        maria: HALF,
    };

    /// Derive shares from the two owners' income sums
    pub fn from_incomes(lorenzo_income: Money, maria_income: Money) -> Self {
        let combined = (lorenzo_income + maria_income).amount();
        if combined.is_zero() {
            return Self::EVEN;
        }

        // Only a pathological mix of signed incomes can overflow here.
        match (
            lorenzo_income.amount().checked_div(combined),
            maria_income.amount().checked_div(combined),
        ) {
            (Some(lorenzo), Some(maria)) => Self { lorenzo, maria },
            _ => Self::EVEN,
        }
    }

    /// Share of the given owner
    pub fn for_owner(&self, owner: Owner) -> Decimal {
        match owner {
            Owner::Lorenzo => self.lorenzo,
            Owner::Maria => self.maria,
        }
    }
}

/// Compute both owners' income shares for one month of transactions
pub fn calculate_shares<T: Borrow<Transaction>>(month_transactions: &[T]) -> IncomeShares {
    IncomeShares::from_incomes(
        TypeTotals::for_owner(month_transactions, Owner::Lorenzo).income,
        TypeTotals::for_owner(month_transactions, Owner::Maria).income,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseType;
    use chrono::NaiveDate;

    fn income(owner: Owner, units: i64) -> Transaction {
        Transaction::new(
            owner,
            "Salary",
            Money::from_units(units),
            ExpenseType::Income,
            NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
        )
    }

    fn assert_sums_to_one(shares: IncomeShares) {
        let diff = (shares.lorenzo + shares.maria - Decimal::ONE).abs();
        assert!(diff < Decimal::new(1, 20), "shares sum off by {}", diff);
    }

    #[test]
    fn test_half_constant() {
        assert_eq!(HALF, Decimal::new(5, 1));
    }

    #[test]
    fn test_equal_incomes() {
        let shares = calculate_shares(&[income(Owner::Lorenzo, 1000), income(Owner::Maria, 1000)]);
        assert_eq!(shares.lorenzo, HALF);
        assert_eq!(shares.maria, HALF);
    }

    #[test]
    fn test_proportional_incomes() {
        let shares = calculate_shares(&[income(Owner::Lorenzo, 600), income(Owner::Maria, 400)]);
        assert_eq!(shares.for_owner(Owner::Lorenzo), Decimal::new(6, 1));
        assert_eq!(shares.for_owner(Owner::Maria), Decimal::new(4, 1));
    }

    #[test]
    fn test_no_income_falls_back_to_even() {
        let shares = calculate_shares::<Transaction>(&[]);
        assert_eq!(shares, IncomeShares::EVEN);

        let spend_only = [Transaction::new(
            Owner::Maria,
            "Rent",
            Money::from_units(900),
            ExpenseType::Household,
            NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
        )];
        assert_eq!(calculate_shares(&spend_only), IncomeShares::EVEN);
    }

    #[test]
    fn test_single_earner_takes_everything() {
        let shares = calculate_shares(&[income(Owner::Maria, 3000)]);
        assert_eq!(shares.lorenzo, Decimal::ZERO);
        assert_eq!(shares.maria, Decimal::ONE);
    }

    #[test]
    fn test_shares_sum_to_one() {
        for (l, m) in [(1, 2), (1000, 3), (7, 13), (0, 5), (0, 0), (12345, 67890)] {
            let shares = calculate_shares(&[income(Owner::Lorenzo, l), income(Owner::Maria, m)]);
            assert_sums_to_one(shares);
        }
    }

    #[test]
    fn test_works_with_borrowed_transactions() {
        let owned = vec![income(Owner::Lorenzo, 300), income(Owner::Maria, 100)];
        let borrowed: Vec<&Transaction> = owned.iter().collect();
        assert_eq!(calculate_shares(&borrowed), calculate_shares(&owned));
    }
}
