//! Projection Engine
//!
//! Extrapolates season-to-date rates over each team's remaining schedule and
//! aggregates the result into projected FCHL standings. A projection run is a
//! pure function of its input snapshot: same roster, tables, schedule facts,
//! threshold, and baselines always produce the same result set.

pub mod engine;
pub mod projector;
pub mod scoring;
pub mod standings;

pub use engine::{run, ProjectionInput, ProjectionRun};
pub use projector::{
    project_goalie, project_goalie_rates, project_skater, project_skater_rates,
    GoalieProjection, ProjectedPlayer, SkaterProjection,
};
pub use standings::{compute_standings, default_baselines, TeamStandingProjection};

#[cfg(test)]
mod tests;
