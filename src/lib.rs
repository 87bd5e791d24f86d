//! Budget Brain - terminal budgeting calculator
//!
//! This library provides the core functionality for the Budget Brain
//! application. It turns a monthly salary and loan payment into a fixed-ratio
//! spending plan, renders it in a terminal interface, and exports the results
//! panel as a single-page PDF.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Input record, allocation, categories, currency formatting
//! - `services`: The allocator
//! - `presenter`: View state and the data behind every results widget
//! - `export`: PDF snapshot plus JSON, YAML, and CSV reports
//! - `config`: Paths, settings, and logging
//! - `cli` / `display`: Non-interactive commands and their text output
//! - `tui`: The interactive interface
//!
//! # Example
//!
//! ```rust
//! use budget_brain::models::{Currency, FinancialInput};
//! use budget_brain::presenter::BudgetView;
//!
//! let mut view = BudgetView::with_input(FinancialInput::new(5000.0, 800.0, 5.5));
//! assert!(view.compute());
//!
//! let region = view.results_region(Currency::Usd).unwrap();
//! assert_eq!(region.allocation.housing, 885.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod presenter;
pub mod services;
pub mod tui;

pub use error::BudgetError;
