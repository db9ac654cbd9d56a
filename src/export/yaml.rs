//! YAML export of the monthly report

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::ReportExport;

/// Write the report as YAML with a short comment header
pub fn export_report_yaml<W: Write>(writer: &mut W, export: &ReportExport) -> LedgerResult<()> {
    writeln!(writer, "# duo-ledger monthly report")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", export.app_version))
        .and_then(|_| writeln!(writer))
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export)?;
    Ok(())
}
