//! Display formatting for terminal output
//!
//! Turns computed budgets into plain text tables for the CLI.

pub mod budget;

pub use budget::{format_budget, format_category_table, format_summary};
