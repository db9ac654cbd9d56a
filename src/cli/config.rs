//! CLI command for viewing and updating settings

use std::path::PathBuf;

use crate::config::{LedgerPaths, Settings};
use crate::error::LedgerResult;

/// Settings changes requested on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    pub default_ledger: Option<PathBuf>,
    pub currency_symbol: Option<String>,
}

impl ConfigUpdate {
    pub fn is_empty(&self) -> bool {
        self.default_ledger.is_none() && self.currency_symbol.is_none()
    }

    /// Apply to `settings`; returns whether anything changed
    pub fn apply(self, settings: &mut Settings) -> bool {
        let mut changed = false;
        if let Some(path) = self.default_ledger {
            settings.default_ledger = Some(path);
            changed = true;
        }
        if let Some(symbol) = self.currency_symbol {
            settings.currency_symbol = symbol;
            changed = true;
        }
        changed
    }
}

/// Handle `duo config`
pub fn handle_config_command(
    paths: &LedgerPaths,
    settings: &mut Settings,
    update: ConfigUpdate,
) -> LedgerResult<()> {
    if update.apply(settings) {
        settings.save(paths)?;
        tracing::info!(path = %paths.settings_file().display(), "saved settings");
        println!("Settings saved to: {}", paths.settings_file().display());
        println!();
    }

    print!("{}", format_config(paths, settings));
    Ok(())
}

fn format_config(paths: &LedgerPaths, settings: &Settings) -> String {
    let default_ledger = settings
        .default_ledger
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not set)".to_string());

    let mut output = String::new();
    output.push_str("duo-ledger Configuration\n");
    output.push_str("========================\n");
    output.push_str(&format!("Config directory: {}\n", paths.base_dir().display()));
    output.push_str(&format!("Settings file:    {}\n", paths.settings_file().display()));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  Currency symbol:    {}\n", settings.currency_symbol));
    output.push_str(&format!("  Default ledger:     {}\n", default_ledger));
    output.push_str(&format!("  Export date format: {}\n", settings.export_date_format));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_update_saves_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        let update = ConfigUpdate {
            default_ledger: Some(PathBuf::from("/data/casa.csv")),
            currency_symbol: None,
        };
        handle_config_command(&paths, &mut settings, update).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_ledger, Some(PathBuf::from("/data/casa.csv")));
        assert_eq!(loaded.currency_symbol, "R$");
    }

    #[test]
    fn test_empty_update_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        assert!(ConfigUpdate::default().is_empty());
        handle_config_command(&paths, &mut settings, ConfigUpdate::default()).unwrap();
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_format_config() {
        let paths = LedgerPaths::with_base_dir(PathBuf::from("/tmp/duo"));
        let text = format_config(&paths, &Settings::default());
        assert!(text.contains("Currency symbol:    R$"));
        assert!(text.contains("Default ledger:     (not set)"));
    }
}
