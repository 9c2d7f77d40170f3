//! Error types for roster parsing.

use thiserror::Error;

/// Result type for roster loading operations
pub type Result<T> = std::result::Result<T, RosterError>;

/// Errors that abort a roster load outright. Rows that merely fail the
/// descriptor grammar become [`RosterAnomaly`](crate::RosterAnomaly)s.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why one roster row failed the descriptor grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty player descriptor")]
    EmptyDescriptor,

    #[error("no recognizable position prefix: {token}")]
    BadPosition { token: String },

    #[error("descriptor has a position but no name")]
    MissingName,

    #[error("unknown FCHL team code: {code}")]
    UnknownTeam { code: String },
}
