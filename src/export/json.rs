//! JSON export of the monthly report

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::settlement::CombinedMonthlyTotals;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Monthly report wrapped with export metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Number of transactions the report was computed from
    pub transaction_count: usize,

    /// Monthly totals, newest month first
    pub months: Vec<CombinedMonthlyTotals>,
}

impl ReportExport {
    pub fn new(months: Vec<CombinedMonthlyTotals>, transaction_count: usize) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transaction_count,
            months,
        }
    }
}

/// Write the report as pretty-printed JSON
pub fn export_report_json<W: Write>(writer: &mut W, export: &ReportExport) -> LedgerResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)?;
    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseType, Money, Owner, Transaction};
    use crate::settlement::calculate_all_monthly_totals;
    use chrono::NaiveDate;

    #[test]
    fn test_export_round_trip() {
        let transactions = vec![Transaction::new(
            Owner::Maria,
            "Rent",
            Money::from_units(1500),
            ExpenseType::Household,
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        )];
        let export = ReportExport::new(calculate_all_monthly_totals(&transactions), 1);

        let mut out = Vec::new();
        export_report_json(&mut out, &export).unwrap();

        let parsed: ReportExport = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, export);
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.months.len(), 1);
        assert_eq!(parsed.months[0].maria.household_paid, Money::from_units(1500));
    }
}
