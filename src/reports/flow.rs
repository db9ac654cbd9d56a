//! Spending flow
//!
//! Breaks one month's spend into links from income to each category, plus an
//! "Other" link for spend without a category.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Category, Money, MonthKey};
use crate::settlement::CombinedMonthlyTotals;

/// Where a flow link ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowTarget {
    Category(Category),
    Other,
}

impl fmt::Display for FlowTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowTarget::Category(category) => write!(f, "{}", category),
            FlowTarget::Other => write!(f, "Other"),
        }
    }
}

/// One income → target link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowLink {
    pub target: FlowTarget,
    pub amount: Money,
}

/// Spending flow for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpendingFlow {
    pub month: MonthKey,
    /// Combined income of both owners
    pub income: Money,
    /// Combined spend the links add up to
    pub grand_total: Money,
    /// Links sorted by amount, largest first
    pub links: Vec<FlowLink>,
}

impl SpendingFlow {
    /// Build the flow from a month's combined totals
    pub fn from_month(totals: &CombinedMonthlyTotals) -> Self {
        let mut links: Vec<FlowLink> = totals
            .category_totals
            .iter()
            .filter(|(_, amount)| amount.is_positive())
            .map(|(category, amount)| FlowLink {
                target: FlowTarget::Category(*category),
                amount: *amount,
            })
            .collect();

        let uncategorized = totals.uncategorized();
        if uncategorized.is_positive() {
            links.push(FlowLink {
                target: FlowTarget::Other,
                amount: uncategorized,
            });
        }

        links.sort_by(|a, b| b.amount.cmp(&a.amount));

        Self {
            month: totals.month,
            income: totals.total_income,
            grand_total: totals.grand_total,
            links,
        }
    }

    /// Percentage of the month's spend carried by a link
    pub fn percentage(&self, link: &FlowLink) -> Decimal {
        link.amount
            .amount()
            .checked_div(self.grand_total.amount())
            .map(|ratio| ratio * Decimal::ONE_HUNDRED)
            .unwrap_or(Decimal::ZERO)
    }

    /// Format the flow for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Spending Flow: {}\n", self.month.long_name()));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Income: {}\n",
            self.income.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "Spent:  {}\n\n",
            self.grand_total.format_with_symbol(currency_symbol)
        ));

        if self.links.is_empty() {
            output.push_str("No spending this month.\n");
            return output;
        }

        output.push_str(&format!("{:<24} {:>14} {:>8}\n", "Target", "Amount", "%"));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for link in &self.links {
            output.push_str(&format!(
                "{:<24} {:>14} {:>7.1}%\n",
                link.target.to_string(),
                link.amount.format_with_symbol(currency_symbol),
                self.percentage(link).round_dp(1)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseType, Owner, Transaction};
    use crate::settlement::calculate_combined_monthly_totals;
    use chrono::NaiveDate;

    fn month_totals(transactions: &[Transaction]) -> CombinedMonthlyTotals {
        calculate_combined_monthly_totals(transactions, MonthKey::new(2025, 2).unwrap())
    }

    fn spend(owner: Owner, units: i64, category: Option<Category>) -> Transaction {
        let txn = Transaction::new(
            owner,
            "spend",
            Money::from_units(units),
            ExpenseType::Split5050,
            NaiveDate::from_ymd_opt(2025, 3, 8).unwrap(),
        );
        match category {
            Some(category) => txn.with_category(category),
            None => txn,
        }
    }

    #[test]
    fn test_links_sorted_with_other() {
        let totals = month_totals(&[
            spend(Owner::Lorenzo, 50, Some(Category::Transport)),
            spend(Owner::Maria, 200, Some(Category::Groceries)),
            spend(Owner::Maria, 80, None),
            spend(Owner::Lorenzo, 30, Some(Category::Groceries)),
        ]);
        let flow = SpendingFlow::from_month(&totals);

        let targets: Vec<FlowTarget> = flow.links.iter().map(|l| l.target).collect();
        assert_eq!(
            targets,
            vec![
                FlowTarget::Category(Category::Groceries),
                FlowTarget::Other,
                FlowTarget::Category(Category::Transport),
            ]
        );
        assert_eq!(flow.links[0].amount, Money::from_units(230));
        assert_eq!(flow.links[1].amount, Money::from_units(80));

        let linked: Money = flow.links.iter().map(|l| l.amount).sum();
        assert_eq!(linked, flow.grand_total);
    }

    #[test]
    fn test_no_other_link_when_fully_categorized() {
        let totals = month_totals(&[spend(Owner::Maria, 40, Some(Category::Health))]);
        let flow = SpendingFlow::from_month(&totals);
        assert_eq!(flow.links.len(), 1);
        assert_eq!(flow.percentage(&flow.links[0]), Decimal::ONE_HUNDRED);
    }

    #[test]
    fn test_income_only_month_has_no_links() {
        let income = Transaction::new(
            Owner::Lorenzo,
            "salary",
            Money::from_units(1000),
            ExpenseType::Income,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        );
        let flow = SpendingFlow::from_month(&month_totals(&[income]));
        assert!(flow.links.is_empty());
        assert_eq!(flow.income, Money::from_units(1000));
        assert!(flow.format_terminal("R$").contains("No spending this month."));
    }

    #[test]
    fn test_format_terminal() {
        let totals = month_totals(&[spend(Owner::Maria, 40, Some(Category::Health))]);
        let text = SpendingFlow::from_month(&totals).format_terminal("R$");
        assert!(text.starts_with("Spending Flow: March 2025"));
        assert!(text.contains("Health"));
        assert!(text.contains("R$40.00"));
        assert!(text.contains("100.0%"));
    }
}
