//! Error types for stat-table ingestion.

use thiserror::Error;

/// Result type for stats feed operations
pub type Result<T> = std::result::Result<T, StatsError>;

/// Errors that abort a table load outright. Individual unreadable rows are
/// skipped with a warning instead.
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("stat table is missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
