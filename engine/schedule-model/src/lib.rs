//! NHL Schedule Model
//!
//! Parses the raw game log into normalized [`GameRecord`]s and derives the
//! facts the projection engine runs on: per-team completed/remaining game
//! counts and per-goalie start/win/shutout tallies.

pub mod error;
pub mod facts;
pub mod parser;
pub mod teams;
pub mod types;

pub use error::{Result, ScheduleError};
pub use facts::{GoalieFacts, ScheduleFacts, TeamScheduleFacts};
pub use parser::{parse_schedule, Schedule};
pub use teams::team_abbreviation;
pub use types::{AnomalyKind, AnomalyReport, GameRecord, GameStatus};
