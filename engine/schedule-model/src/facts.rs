//! Facts derived from the parsed game log.
//!
//! Goalie tallies are keyed by goalie name alone, never by team, so a goalie
//! traded mid-season keeps one accumulating record across team codes.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::types::GameRecord;

/// Completed/remaining game counts for one NHL team.
///
/// For every team, `completed + remaining` equals the number of valid game
/// rows mentioning that team; anomalous rows land in neither bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeamScheduleFacts {
    pub completed: u32,
    pub remaining: u32,
}

/// Schedule-derived tallies for one goalie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GoalieFacts {
    /// Game rows naming this goalie, played or scheduled. Schedule presence,
    /// independent of outcome.
    pub starts: u32,
    /// Final games where this goalie's side scored strictly more
    pub wins: u32,
    /// Final games this goalie started with the opponent held to 0
    pub shutouts: u32,
}

/// All derived schedule facts for one projection run.
#[derive(Debug, Clone, Default)]
pub struct ScheduleFacts {
    teams: HashMap<String, TeamScheduleFacts>,
    goalies: HashMap<String, GoalieFacts>,
}

impl ScheduleFacts {
    /// Accumulate facts over parsed game records.
    pub fn derive(games: &[GameRecord]) -> Self {
        let mut facts = ScheduleFacts::default();
        for game in games {
            if game.status.is_final() {
                facts.team_entry(&game.visitor).completed += 1;
                facts.team_entry(&game.home).completed += 1;

                // The parser guarantees final games carry both scores.
                let (Some(v_score), Some(h_score)) = (game.visitor_score, game.home_score)
                else {
                    debug!(?game, "final game without scores reached derivation");
                    continue;
                };

                if let Some(goalie) = &game.visitor_goalie {
                    let entry = facts.goalie_entry(goalie);
                    entry.starts += 1;
                    if v_score > h_score {
                        entry.wins += 1;
                    }
                    if h_score == 0 {
                        entry.shutouts += 1;
                    }
                }
                if let Some(goalie) = &game.home_goalie {
                    let entry = facts.goalie_entry(goalie);
                    entry.starts += 1;
                    if h_score > v_score {
                        entry.wins += 1;
                    }
                    if v_score == 0 {
                        entry.shutouts += 1;
                    }
                }
            } else {
                facts.team_entry(&game.visitor).remaining += 1;
                facts.team_entry(&game.home).remaining += 1;

                // A named goalie on an unplayed row still counts as a start:
                // start share is schedule presence, not outcome.
                for goalie in [&game.visitor_goalie, &game.home_goalie].into_iter().flatten() {
                    facts.goalie_entry(goalie).starts += 1;
                }
            }
        }
        facts
    }

    /// Per-team counts, zero-filled for teams the log never mentions.
    pub fn team(&self, team: &str) -> TeamScheduleFacts {
        self.teams.get(team).copied().unwrap_or_default()
    }

    pub fn completed_games(&self, team: &str) -> u32 {
        self.team(team).completed
    }

    pub fn remaining_games(&self, team: &str) -> u32 {
        self.team(team).remaining
    }

    /// Per-goalie tallies, zero-filled for goalies the log never names.
    pub fn goalie(&self, name: &str) -> GoalieFacts {
        self.goalies.get(name).copied().unwrap_or_default()
    }

    fn team_entry(&mut self, team: &str) -> &mut TeamScheduleFacts {
        self.teams.entry(team.to_string()).or_default()
    }

    fn goalie_entry(&mut self, name: &str) -> &mut GoalieFacts {
        self.goalies.entry(name.to_string()).or_default()
    }
}
