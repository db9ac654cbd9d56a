//! Configuration module for duo-ledger
//!
//! - Platform path resolution with an environment override
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::{LedgerPaths, LEDGER_DIR_ENV};
pub use settings::Settings;
