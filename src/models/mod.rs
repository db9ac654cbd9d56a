//! Core data models for duo-ledger
//!
//! Transactions and the closed enumerations that classify them, plus the
//! money and month value types the settlement engine computes with.

pub mod category;
pub mod expense_type;
pub mod ids;
pub mod money;
pub mod month;
pub mod owner;
pub mod transaction;

pub use category::Category;
pub use expense_type::ExpenseType;
pub use ids::TransactionId;
pub use money::Money;
pub use month::MonthKey;
pub use owner::Owner;
pub use transaction::{NewTransaction, Transaction};
