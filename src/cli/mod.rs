//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the allocator and export layers.

pub mod calc;
pub mod config;
pub mod export;

pub use calc::{handle_calc_command, BudgetArgs, CalcArgs, OutputFormat};
pub use config::{handle_config_command, ConfigCommands};
pub use export::{handle_export_command, ExportArgs};
