//! CLI command for normalizing a ledger CSV

use std::io::Write;
use std::path::PathBuf;

use super::{load_ledger, open_output};
use crate::config::Settings;
use crate::error::LedgerResult;
use crate::export::write_transactions_csv;

/// Handle `duo export`: rewrite the ledger with canonical headers and formats
pub fn handle_export_command(
    settings: &Settings,
    file: Option<PathBuf>,
    output: Option<PathBuf>,
) -> LedgerResult<()> {
    let ledger = load_ledger(file, settings)?;

    let mut writer = open_output(output.as_deref())?;
    write_transactions_csv(&mut writer, ledger.transactions(), &settings.export_date_format)?;
    writer.flush()?;

    if let Some(path) = output {
        println!("Exported {} transactions to: {}", ledger.len(), path.display());
    }

    Ok(())
}
