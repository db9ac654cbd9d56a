//! duo-ledger - shared household finances for two owners
//!
//! Reads a household transaction ledger and settles it month by month:
//! each owner's income share, what they paid toward shared costs, what their
//! fair portion was, and the resulting debt between them.
//!
//! # Architecture
//!
//! - `models`: owners, expense types, categories, money, months, transactions
//! - `settlement`: the pure calculation engine (grouping, shares, totals)
//! - `import`: CSV ingestion with per-row validation
//! - `ledger`: in-memory transaction collection with search
//! - `reports`: derived views such as the spending flow
//! - `export`: CSV, JSON and YAML writers
//! - `display`: terminal tables
//! - `config`: paths and settings
//! - `cli`: command handlers for the `duo` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use duo_ledger::import::parse_csv_file;
//! use duo_ledger::settlement::calculate_all_monthly_totals;
//!
//! let parsed = parse_csv_file("casa.csv".as_ref())?;
//! for month in calculate_all_monthly_totals(&parsed.transactions) {
//!     println!("{}: Lorenzo debt {}", month.month, month.lorenzo.debt);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod reports;
pub mod settlement;

pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
