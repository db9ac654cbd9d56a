//! CLI commands for settlement reports

use std::io::Write;
use std::path::PathBuf;

use clap::ValueEnum;

use super::{load_ledger, open_output, parse_month_arg};
use crate::config::Settings;
use crate::display::{format_month_breakdown, format_month_overview};
use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_report_json, export_report_yaml, write_monthly_totals_csv, ReportExport};
use crate::ledger::Ledger;
use crate::models::MonthKey;
use crate::reports::SpendingFlow;
use crate::settlement::{calculate_month_totals, CombinedMonthlyTotals};

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Terminal table
    #[default]
    Table,
    /// One row per month and owner
    Csv,
    /// Machine-readable report
    Json,
    /// Human-readable report
    Yaml,
}

/// Handle `duo report`
pub fn handle_report_command(
    settings: &Settings,
    file: Option<PathBuf>,
    month: Option<String>,
    format: ReportFormat,
    output: Option<PathBuf>,
) -> LedgerResult<()> {
    let ledger = load_ledger(file, settings)?;

    let report = match month {
        Some(month) => vec![month_totals(&ledger, parse_month_arg(&month)?)?],
        None => ledger.monthly_totals(),
    };
    tracing::info!(months = report.len(), ?format, "rendering report");

    let mut writer = open_output(output.as_deref())?;
    match format {
        ReportFormat::Table => {
            let text = match report.as_slice() {
                [single] => format_month_breakdown(single, &settings.currency_symbol),
                months => format_month_overview(months, &settings.currency_symbol),
            };
            writeln!(writer, "{}", text)?;
        }
        ReportFormat::Csv => write_monthly_totals_csv(&mut writer, &report)?,
        ReportFormat::Json => {
            export_report_json(&mut writer, &ReportExport::new(report, ledger.len()))?
        }
        ReportFormat::Yaml => {
            export_report_yaml(&mut writer, &ReportExport::new(report, ledger.len()))?
        }
    }
    writer.flush()?;

    if let Some(path) = output {
        println!("Report written to: {}", path.display());
    }

    Ok(())
}

/// Handle `duo month`: both owners side by side for one month
pub fn handle_month_command(
    settings: &Settings,
    file: Option<PathBuf>,
    month: &str,
) -> LedgerResult<()> {
    let ledger = load_ledger(file, settings)?;
    let totals = month_totals(&ledger, parse_month_arg(month)?)?;

    println!("{}", format_month_breakdown(&totals, &settings.currency_symbol));
    Ok(())
}

/// Handle `duo flow`: where one month's spending went
pub fn handle_flow_command(
    settings: &Settings,
    file: Option<PathBuf>,
    month: &str,
) -> LedgerResult<()> {
    let ledger = load_ledger(file, settings)?;
    let totals = month_totals(&ledger, parse_month_arg(month)?)?;

    let flow = SpendingFlow::from_month(&totals);
    print!("{}", flow.format_terminal(&settings.currency_symbol));
    Ok(())
}

fn month_totals(ledger: &Ledger, month: MonthKey) -> LedgerResult<CombinedMonthlyTotals> {
    calculate_month_totals(ledger.transactions(), month)
        .ok_or_else(|| LedgerError::month_not_found(month.to_string()))
}
