//! CSV ingestion
//!
//! Reads the household spreadsheet export (Portuguese or English headers)
//! into validated transactions. Rows that fail validation are skipped and
//! reported, so the settlement engine only ever sees well-formed input.

pub mod fields;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

pub use fields::{parse_date, ColumnMap};

const EMPTY_FILE_MESSAGE: &str = "CSV file is empty or has no data rows";

/// Outcome of parsing a ledger CSV
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    /// Transactions that passed validation, in file order
    pub transactions: Vec<Transaction>,
    /// One message per rejected row, or a single file-level message
    pub errors: Vec<String>,
    /// Rows not turned into transactions (blank or invalid)
    pub skipped: usize,
}

impl ParseResult {
    fn failed(message: impl Into<String>) -> Self {
        Self {
            transactions: Vec::new(),
            errors: vec![message.into()],
            skipped: 0,
        }
    }

    /// Check if any row or the file itself was rejected
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse ledger CSV content from any reader
///
/// Only I/O-level failures on the header are returned as `Err`; everything
/// else is reported inside the [`ParseResult`].
pub fn parse_csv<R: Read>(reader: R) -> LedgerResult<ParseResult> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    let mut rows = csv_reader.records();

    let header = match rows.next() {
        Some(header) => header?,
        None => return Ok(ParseResult::failed(EMPTY_FILE_MESSAGE)),
    };

    let columns = match ColumnMap::from_header(&header) {
        Ok(columns) => columns,
        Err(message) => return Ok(ParseResult::failed(message)),
    };

    let mut result = ParseResult::default();
    let mut data_rows = 0;

    for (idx, row) in rows.enumerate() {
        data_rows += 1;
        let fallback_row_number = idx + 2;

        let outcome = match row {
            Ok(record) if is_blank(&record) => {
                result.skipped += 1;
                continue;
            }
            Ok(record) => {
                let row_number = record
                    .position()
                    .map(|pos| pos.line() as usize)
                    .unwrap_or(fallback_row_number);
                columns
                    .parse_record(&record)
                    .map_err(|message| (row_number, message))
            }
            Err(err) => Err((fallback_row_number, format!("Unreadable row: {}", err))),
        };

        match outcome {
            Ok(new_transaction) => result.transactions.push(new_transaction.into_transaction()),
            Err((row_number, message)) => {
                tracing::debug!(row = row_number, %message, "skipping CSV row");
                result.errors.push(format!("Row {}: {}", row_number, message));
                result.skipped += 1;
            }
        }
    }

    if data_rows == 0 {
        return Ok(ParseResult::failed(EMPTY_FILE_MESSAGE));
    }

    tracing::info!(
        imported = result.transactions.len(),
        skipped = result.skipped,
        "parsed ledger CSV"
    );

    Ok(result)
}

/// Parse a ledger CSV file from disk
pub fn parse_csv_file(path: &Path) -> LedgerResult<ParseResult> {
    let file = File::open(path).map_err(|e| {
        LedgerError::Import(format!("Failed to open {}: {}", path.display(), e))
    })?;
    parse_csv(file)
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}
