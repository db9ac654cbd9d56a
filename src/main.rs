use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use duo_ledger::cli::{
    handle_config_command, handle_export_command, handle_flow_command, handle_month_command,
    handle_report_command, handle_search_command, ConfigUpdate, ReportFormat,
};
use duo_ledger::config::{LedgerPaths, Settings};
use duo_ledger::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "duo",
    version,
    about = "Settle shared household expenses between Lorenzo and Maria",
    long_about = "duo reads a household ledger CSV and works out, month by month, \
                  what each owner paid, what their fair share was and who owes whom."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly settlement report, newest month first
    Report {
        /// Ledger CSV (defaults to the configured ledger)
        file: Option<PathBuf>,

        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Table)]
        format: ReportFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Both owners side by side for one month
    Month {
        /// Ledger CSV (defaults to the configured ledger)
        file: Option<PathBuf>,

        /// Month to show (YYYY-MM)
        #[arg(short, long)]
        month: String,
    },

    /// Where one month's spending went, by category
    Flow {
        /// Ledger CSV (defaults to the configured ledger)
        file: Option<PathBuf>,

        /// Month to show (YYYY-MM)
        #[arg(short, long)]
        month: String,
    },

    /// Find transactions by description
    Search {
        /// Text to look for (case-insensitive)
        query: String,

        /// Ledger CSV (defaults to the configured ledger)
        file: Option<PathBuf>,
    },

    /// Rewrite the ledger with English headers and uniform formats
    Export {
        /// Ledger CSV (defaults to the configured ledger)
        file: Option<PathBuf>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config {
        /// Ledger CSV to use when no file is given
        #[arg(long)]
        default_ledger: Option<PathBuf>,

        /// Currency symbol for displayed amounts
        #[arg(long)]
        currency: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = LedgerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Report {
            file,
            month,
            format,
            output,
        } => handle_report_command(&settings, file, month, format, output)?,
        Commands::Month { file, month } => handle_month_command(&settings, file, &month)?,
        Commands::Flow { file, month } => handle_flow_command(&settings, file, &month)?,
        Commands::Search { query, file } => handle_search_command(&settings, &query, file)?,
        Commands::Export { file, output } => handle_export_command(&settings, file, output)?,
        Commands::Config {
            default_ledger,
            currency,
        } => handle_config_command(
            &paths,
            &mut settings,
            ConfigUpdate {
                default_ledger,
                currency_symbol: currency,
            },
        )?,
    }

    Ok(())
}
