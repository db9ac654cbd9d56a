//! Expense types: the financial role a transaction plays in the settlement

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The financial role of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExpenseType {
    /// Money earned; drives the income share
    Income,
    /// Shared cost split in proportion to income
    Household,
    /// Shared cost split evenly
    #[serde(rename = "Split 50/50")]
    Split5050,
    /// Cost borne by the payer alone
    Personal,
    /// Personal cost of the partner, paid by this owner
    #[serde(rename = "Paid for Partner")]
    PaidForPartner,
    /// Refunds and other reimbursement-like inflows
    Credit,
    /// Transfer to the partner that settles outstanding debt
    Settlement,
}

impl ExpenseType {
    pub const ALL: [ExpenseType; 7] = [
        ExpenseType::Income,
        ExpenseType::Household,
        ExpenseType::Split5050,
        ExpenseType::Personal,
        ExpenseType::PaidForPartner,
        ExpenseType::Credit,
        ExpenseType::Settlement,
    ];

    /// English label used in reports and exports
    pub const fn label(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Household => "Household",
            Self::Split5050 => "Split 50/50",
            Self::Personal => "Personal",
            Self::PaidForPartner => "Paid for Partner",
            Self::Credit => "Credit",
            Self::Settlement => "Settlement",
        }
    }

    /// Label used by the Portuguese spreadsheet
    pub const fn portuguese_label(self) -> &'static str {
        match self {
            Self::Income => "Renda",
            Self::Household => "Despesa Familiar",
            Self::Split5050 => "Despesa 50/50",
            Self::Personal => "Despesa Pessoal",
            Self::PaidForPartner => "Pagou para o outro",
            Self::Credit => "Credito",
            Self::Settlement => "Quitacao",
        }
    }

    /// Whether this type counts toward spend totals and the grand total
    pub const fn is_spend(self) -> bool {
        match self {
            Self::Household | Self::Split5050 | Self::Personal | Self::PaidForPartner => true,
            Self::Income | Self::Credit | Self::Settlement => false,
        }
    }
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExpenseType {
    type Err = ExpenseTypeParseError;

    /// Accepts the Portuguese spreadsheet labels first, then the English ones
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ExpenseType::ALL
            .into_iter()
            .find(|t| t.portuguese_label() == s)
            .or_else(|| ExpenseType::ALL.into_iter().find(|t| t.label() == s))
            .ok_or_else(|| ExpenseTypeParseError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseTypeParseError(pub String);

impl fmt::Display for ExpenseTypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown expense type '{}'", self.0)
    }
}

impl std::error::Error for ExpenseTypeParseError {}
