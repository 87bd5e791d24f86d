//! Export CLI command
//!
//! Computes a budget and saves the results panel as `budget-breakdown.pdf`
//! without opening the interactive interface.

use chrono::Local;
use clap::Args;
use std::path::PathBuf;
use tracing::warn;

use crate::cli::calc::{BudgetArgs, NOT_READY_NOTICE};
use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::export::capture::{DEFAULT_CAPTURE_COLUMNS, MAX_CAPTURE_COLUMNS};
use crate::tui::views::results::MIN_PANEL_WIDTH;
use crate::export::{export_region, generated_subtitle, BufferCapture, PageComposer};

/// Arguments of the export command
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub budget: BudgetArgs,

    /// Directory to write the PDF to (defaults to the configured export directory)
    #[arg(short, long, env = "BUDGET_BRAIN_EXPORT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Width of the captured panel in terminal columns
    #[arg(
        long,
        default_value_t = DEFAULT_CAPTURE_COLUMNS,
        value_parser = clap::value_parser!(u16).range(MIN_PANEL_WIDTH as i64..=MAX_CAPTURE_COLUMNS as i64)
    )]
    pub columns: u16,
}

/// Handle the export command
pub fn handle_export_command(settings: &Settings, args: ExportArgs) -> BudgetResult<()> {
    let Some(region) = args.budget.results_region(settings) else {
        println!("{}", NOT_READY_NOTICE);
        return Ok(());
    };

    let output_dir = args.output_dir.unwrap_or_else(|| settings.export_dir());
    let capture = BufferCapture::new()
        .columns(args.columns)
        .subtitle(generated_subtitle(Local::now()));

    let path = export_region(&region, &capture, &PageComposer::default(), &output_dir)
        .inspect_err(|e| warn!(error = %e, "export failed"))?;

    println!("Saved budget breakdown to {}", path.display());
    Ok(())
}
