//! Terminal User Interface module
//!
//! This module provides the interactive calculator using ratatui: an input
//! form, the results panel, toast notifications, and a help dialog.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
