//! Config CLI commands
//!
//! Shows where Budget Brain keeps its files and updates the persisted
//! display settings.

use clap::Subcommand;
use std::path::PathBuf;

use crate::config::logging::LOG_FILE;
use crate::config::paths::BudgetPaths;
use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::models::Currency;

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Show current configuration and paths
    Show,

    /// Set the currency amounts are displayed in
    SetCurrency {
        /// Currency code (INR, USD, GBP, EUR)
        currency: Currency,
    },

    /// Set the directory exported PDFs are saved to
    SetExportDir {
        /// Target directory
        dir: PathBuf,
    },
}

/// Handle a config command; no subcommand shows the configuration
pub fn handle_config_command(
    paths: &BudgetPaths,
    settings: &mut Settings,
    cmd: Option<ConfigCommands>,
) -> BudgetResult<()> {
    match cmd.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => {
            print!("{}", format_config(paths, settings));
        }
        ConfigCommands::SetCurrency { currency } => {
            settings.currency = currency;
            settings.save(paths)?;
            println!("Currency set to {} ({})", currency, currency.symbol());
        }
        ConfigCommands::SetExportDir { dir } => {
            settings.export_dir = Some(dir.clone());
            settings.save(paths)?;
            println!("Export directory set to {}", dir.display());
        }
    }

    Ok(())
}

/// Format paths and settings for display
pub fn format_config(paths: &BudgetPaths, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str("Budget Brain Configuration\n");
    output.push_str("==========================\n");
    output.push_str(&format!("Config directory: {}\n", paths.base_dir().display()));
    output.push_str(&format!("Settings file:    {}\n", paths.settings_file().display()));
    output.push_str(&format!(
        "Log file:         {}\n",
        paths.log_dir().join(LOG_FILE).display()
    ));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!(
        "  Currency:         {} ({}, {})\n",
        settings.currency,
        settings.currency.symbol(),
        settings.currency.locale()
    ));
    output.push_str(&format!(
        "  Export directory: {}\n",
        settings.export_dir().display()
    ));
    output
}
