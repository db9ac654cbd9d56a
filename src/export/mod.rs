//! Export module
//!
//! - CSV: transactions (re-importable) and per-owner monthly totals
//! - JSON: machine-readable monthly report
//! - YAML: human-readable monthly report

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{write_monthly_totals_csv, write_transactions_csv, TRANSACTION_HEADER};
pub use self::json::{export_report_json, ReportExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_report_yaml;
