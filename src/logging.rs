//! Tracing setup for the `duo` binary

use std::io::IsTerminal;
use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Crate log level for a `-v` count: warn, info, then debug
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "duo_ledger=warn",
        1 => "duo_ledger=info",
        _ => "duo_ledger=debug",
    }
}

/// Colour codes only when stderr is a terminal
pub fn stderr_supports_ansi() -> bool {
    std::io::stderr().is_terminal()
}

/// Install the global subscriber, writing to stderr
///
/// `RUST_LOG` wins over the verbosity flag when set. Later calls are no-ops.
pub fn init_tracing(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(stderr_supports_ansi())
            .try_init();
    });
}
