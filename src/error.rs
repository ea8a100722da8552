//! Custom error types for Smart Budget
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Columns every imported CSV file must carry, in export order
pub const REQUIRED_COLUMNS: [&str; 4] = ["Date", "Category", "Amount", "Note"];

/// The main error type for Smart Budget operations
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

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// CSV import was rejected
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// CSV export failed
    #[error("Export error: {0}")]
    Export(String),
}

impl BudgetError {
    /// Check if this error came from a rejected import
    pub fn is_import(&self) -> bool {
        matches!(self, Self::Import(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Reasons a CSV import is rejected as a whole
///
/// Any of these leaves the ledger untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// Neither the `;` nor the `,` attempt could read the text
    #[error("could not read CSV: {0}")]
    Unreadable(String),

    /// One or more required header columns are absent
    #[error(
        "CSV must have columns: {} (missing: {})",
        REQUIRED_COLUMNS.join(", "),
        .missing.join(", ")
    )]
    MissingColumns { missing: Vec<String> },

    /// An `Amount` cell does not hold a number
    #[error("row {row}: could not read amount '{value}'")]
    InvalidAmount { row: usize, value: String },

    /// Adding this row would push the ledger's absolute total past what cents can hold
    #[error("row {row}: amount '{value}' puts the ledger total out of range")]
    AmountOutOfRange { row: usize, value: String },

    /// The source file could not be read
    #[error("failed to read {}: {message}", .path.display())]
    File { path: PathBuf, message: String },
}

// Implement From traits for common error types

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

impl From<csv::Error> for BudgetError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for Smart Budget operations
pub type BudgetResult<T> = Result<T, BudgetError>;
