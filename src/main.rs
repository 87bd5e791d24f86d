use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_brain::cli::{
    handle_calc_command, handle_config_command, handle_export_command, CalcArgs, ConfigCommands,
    ExportArgs,
};
use budget_brain::config::logging::{init_tracing, LogTarget};
use budget_brain::config::{paths::BudgetPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "budget-brain",
    author = "Kaylee Beyene",
    version,
    about = "Terminal budgeting calculator",
    long_about = "Budget Brain splits your monthly income into a fixed-ratio spending plan \
                  (housing, food, transportation, savings, investment, entertainment, \
                  remaining) and can save the breakdown as a one-page PDF."
)]
struct Cli {
    /// Log debug output (command-line mode logs to stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Calculate a budget and print it
    Calc(CalcArgs),

    /// Calculate a budget and save it as budget-breakdown.pdf
    Export(ExportArgs),

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let level = if cli.verbose { "debug" } else { "warn" };

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            paths.ensure_directories()?;
            let tui_level = if cli.verbose { "debug" } else { "info" };
            init_tracing(LogTarget::File(&paths.log_dir()), tui_level)?;
            budget_brain::tui::run_tui(&paths, settings)?;
        }
        Commands::Calc(args) => {
            init_tracing(LogTarget::Stderr, level)?;
            handle_calc_command(&settings, args)?;
        }
        Commands::Export(args) => {
            init_tracing(LogTarget::Stderr, level)?;
            handle_export_command(&settings, args)?;
        }
        Commands::Config { command } => {
            init_tracing(LogTarget::Stderr, level)?;
            handle_config_command(&paths, &mut settings, command)?;
        }
    }

    Ok(())
}
