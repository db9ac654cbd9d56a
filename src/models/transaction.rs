//! Transaction model
//!
//! A transaction is an immutable record of money moving for one owner. The
//! amount is always a magnitude; its direction follows from the expense type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::expense_type::ExpenseType;
use super::ids::TransactionId;
use super::month::MonthKey;
use super::money::Money;
use super::owner::Owner;

/// A validated money movement belonging to one owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Who paid or received the money
    pub owner: Owner,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Magnitude of the movement
    pub amount: Money,

    /// Role of the movement in the settlement
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,

    /// Day the movement happened
    pub date: NaiveDate,

    /// Optional reporting category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Transaction {
    /// Create a new uncategorized transaction with a fresh ID
    pub fn new(
        owner: Owner,
        description: impl Into<String>,
        amount: Money,
        expense_type: ExpenseType,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            owner,
            description: description.into(),
            amount,
            expense_type,
            date,
            category: None,
        }
    }

    /// Set the reporting category
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// The calendar month this transaction belongs to
    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }
}

/// Transaction fields before an ID has been assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub owner: Owner,
    pub description: String,
    pub amount: Money,
    pub expense_type: ExpenseType,
    pub date: NaiveDate,
    pub category: Option<Category>,
}

impl NewTransaction {
    /// Assign a fresh ID
    pub fn into_transaction(self) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            owner: self.owner,
            description: self.description,
            amount: self.amount,
            expense_type: self.expense_type,
            date: self.date,
            category: self.category,
        }
    }
}
