//! Configuration module for Budget Brain
//!
//! This module provides configuration management including:
//! - Platform path resolution with an environment override
//! - User settings persistence
//! - Tracing setup

pub mod logging;
pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::Settings;
