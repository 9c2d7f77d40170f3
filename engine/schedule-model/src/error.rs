//! Error types for the schedule model.

use thiserror::Error;

/// Result type for schedule model operations
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors that abort schedule loading outright.
///
/// Malformed individual rows never land here; they become
/// [`AnomalyReport`](crate::AnomalyReport)s and the load continues.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("schedule header has {found} columns, expected at least {expected}")]
    MalformedHeader { found: usize, expected: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
