//! CLI command handlers
//!
//! Bridges the clap argument parsing in the binary with the ledger, the
//! settlement engine and the renderers.

pub mod config;
pub mod export;
pub mod report;
pub mod search;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::import::parse_csv_file;
use crate::ledger::Ledger;
use crate::models::MonthKey;

pub use config::{handle_config_command, ConfigUpdate};
pub use export::handle_export_command;
pub use report::{handle_flow_command, handle_month_command, handle_report_command, ReportFormat};
pub use search::handle_search_command;

/// Resolve the ledger path, falling back to the configured default
pub fn resolve_ledger_path(file: Option<PathBuf>, settings: &Settings) -> LedgerResult<PathBuf> {
    file.or_else(|| settings.default_ledger.clone()).ok_or_else(|| {
        LedgerError::Config(
            "No ledger file given. Pass a CSV path or set one with 'duo config --default-ledger'"
                .into(),
        )
    })
}

/// Read a ledger CSV, reporting rejected rows on stderr
pub fn load_ledger(file: Option<PathBuf>, settings: &Settings) -> LedgerResult<Ledger> {
    let path = resolve_ledger_path(file, settings)?;
    let result = parse_csv_file(&path)?;

    for error in &result.errors {
        eprintln!("{}", error);
    }
    if result.skipped > 0 {
        eprintln!("Skipped {} row(s) from {}", result.skipped, path.display());
    }

    Ok(Ledger::from_transactions(result.transactions))
}

/// Parse a `YYYY-MM` argument
pub fn parse_month_arg(value: &str) -> LedgerResult<MonthKey> {
    value
        .parse::<MonthKey>()
        .map_err(|e| LedgerError::Validation(e.to_string()))
}

/// Writer for command output: the given file, or stdout
pub fn open_output(output: Option<&Path>) -> LedgerResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
