//! Custom error types for Budget Brain
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Budget Brain operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Input that cannot be turned into a number
    #[error("Validation error: {0}")]
    Validation(String),

    /// The results region could not be captured into a raster
    #[error("Capture error: {0}")]
    Capture(String),

    /// The PDF document could not be composed or written
    #[error("Export error: {0}")]
    Export(String),

    /// An export was requested while another one is still running
    #[error("An export is already in progress")]
    ExportInProgress,
}

impl BudgetError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came out of the export path
    pub fn is_export_failure(&self) -> bool {
        matches!(self, Self::Capture(_) | Self::Export(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Budget Brain operations
pub type BudgetResult<T> = Result<T, BudgetError>;
