//! CLI command for searching transactions by description

use std::path::PathBuf;

use super::load_ledger;
use crate::config::Settings;
use crate::display::format_transaction_register;
use crate::error::LedgerResult;

/// Handle `duo search`: matching transactions, newest first
pub fn handle_search_command(
    settings: &Settings,
    query: &str,
    file: Option<PathBuf>,
) -> LedgerResult<()> {
    let mut ledger = load_ledger(file, settings)?;
    ledger.set_search_query(query);

    let matches = ledger.filtered();
    tracing::debug!(query, matches = matches.len(), "searched ledger");

    print!(
        "{}",
        format_transaction_register(matches, &settings.currency_symbol)
    );
    Ok(())
}
