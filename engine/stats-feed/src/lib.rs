//! Stats Feed
//!
//! Loads the externally curated season-to-date skater and goalie tables into
//! name-indexed [`StatTable`]s. The feed ships per-situation splits; this
//! crate defensively keeps only the "all situations" slice, since every
//! downstream rate depends on that slice alone.
//!
//! Goalie wins and shutouts are deliberately absent here — those are always
//! derived from the schedule, not trusted from this source.

pub mod error;
pub mod loader;
pub mod models;
pub mod table;

pub use error::{Result, StatsError};
pub use loader::{load_goalies, load_skaters};
pub use models::{GoalieRecord, SkaterRecord, StatRow};
pub use table::{GoalieTable, SkaterTable, StatTable};
