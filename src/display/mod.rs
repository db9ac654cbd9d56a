//! Display formatting for terminal output
//!
//! Settlement tables for the report commands and a register view for
//! transaction searches.

pub mod report;
pub mod transaction;

pub use report::{format_debt, format_month_breakdown, format_month_overview, format_percentage};
pub use transaction::{format_transaction_register, format_transaction_row};
