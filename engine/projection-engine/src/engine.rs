//! One-shot projection runs.

use std::collections::HashMap;

use tracing::{info, warn};

use player_resolver::{FchlTeam, NameResolver, Position, Resolution, RosterEntry};
use schedule_model::ScheduleFacts;
use stats_feed::{GoalieTable, SkaterTable, StatRow, StatTable};

use crate::projector::{project_goalie, project_skater, ProjectedPlayer};
use crate::standings::{compute_standings, TeamStandingProjection};

/// Everything one projection run reads. Assembled by the host per
/// invocation; the engine holds no state across runs.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionInput<'a> {
    pub roster: &'a [RosterEntry],
    pub skaters: &'a SkaterTable,
    pub goalies: &'a GoalieTable,
    pub schedule: &'a ScheduleFacts,
    /// Similarity threshold for name resolution, 0–100
    pub threshold: u8,
    /// Current league points per team, owned and edited by the host
    pub baselines: &'a HashMap<FchlTeam, i64>,
}

/// A fresh, immutable projection result set.
#[derive(Debug, Clone)]
pub struct ProjectionRun {
    pub players: Vec<ProjectedPlayer>,
    pub standings: Vec<TeamStandingProjection>,
    /// Roster names no stat record matched, verbatim, for the host's
    /// diagnostics view
    pub unmatched: Vec<String>,
}

/// Resolve and project every roster slot, then aggregate standings.
///
/// Goalies resolve against the goalie table, skaters against the skater
/// table. An unmatched entry still occupies its slot with zero production.
pub fn run(input: &ProjectionInput) -> ProjectionRun {
    let resolver = NameResolver::new(input.threshold);

    let mut players = Vec::with_capacity(input.roster.len());
    let mut unmatched = Vec::new();
    for entry in input.roster {
        let player = match entry.position {
            Position::Goalie => {
                let record = lookup(&resolver, &entry.name, input.goalies);
                project_goalie(entry, record, input.schedule)
            }
            Position::Forward | Position::Defense => {
                let record = lookup(&resolver, &entry.name, input.skaters);
                project_skater(entry, record, input.schedule)
            }
        };
        if !player.matched {
            warn!(name = %entry.name, team = %entry.fchl_team, "no stat record matched");
            unmatched.push(entry.name.clone());
        }
        players.push(player);
    }

    let standings = compute_standings(&players, input.baselines);
    info!(
        players = players.len(),
        unmatched = unmatched.len(),
        "projection run complete"
    );

    ProjectionRun {
        players,
        standings,
        unmatched,
    }
}

fn lookup<'t, T: StatRow>(
    resolver: &NameResolver,
    name: &str,
    table: &'t StatTable<T>,
) -> Option<&'t T> {
    // Exact key hit skips the fuzzy pass entirely.
    if let Some(record) = table.get(name) {
        return Some(record);
    }
    match resolver.resolve(name, table.names()) {
        Resolution::Match { name: matched, .. } => table.get(&matched),
        Resolution::NoMatch => None,
    }
}
