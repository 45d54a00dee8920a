//! Error types for the deadline calculator.

use thiserror::Error;

/// Main error type for deadline computation.
#[derive(Debug, Error)]
pub enum PrazoError {
    /// Invalid date format.
    #[error("Invalid date: '{0}'. Expected YYYY-MM-DD (e.g., 2024-03-01)")]
    InvalidDate(String),

    /// Non-positive day count.
    #[error("Invalid day count: {0}. Deadlines require at least 1 day")]
    InvalidDayCount(i64),

    /// Unknown counting regime.
    #[error("Invalid regime: '{0}'. Expected 'uteis' or 'corridos'")]
    InvalidRegime(String),

    /// Date arithmetic overflowed the supported calendar range.
    #[error("Date out of range: {0} plus {1} days exceeds the supported calendar")]
    DateOutOfRange(chrono::NaiveDate, i64),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for deadline operations.
pub type Result<T> = std::result::Result<T, PrazoError>;
