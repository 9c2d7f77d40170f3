//! Per-player rate projection.
//!
//! Rates are linear extrapolations: season-to-date per-game production held
//! constant over the remaining schedule. Goalie playing time is modeled as a
//! stationary start share — the historical fraction of the team's completed
//! games the goalie started is assumed to hold for the rest of the season.
//! Degenerate denominators (zero games played, zero completed team games,
//! zero starts) produce a zero projection, never an error: one bad record
//! must not abort the run.

use serde::Serialize;

use player_resolver::{FchlTeam, Position, RosterEntry};
use schedule_model::{GoalieFacts, ScheduleFacts};
use stats_feed::{GoalieRecord, SkaterRecord};

use crate::scoring::{ASSIST_PTS, GOAL_PTS, SHUTOUT_PTS, WIN_PTS};

/// One roster slot with its projected remaining production.
///
/// Immutable snapshot; a new projection run produces a new set. Unmatched
/// entries keep `matched == false`, zero production, and an empty NHL team.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectedPlayer {
    pub name: String,
    pub position: Position,
    pub fchl_team: FchlTeam,
    /// NHL team abbreviation from the resolved stat record
    pub nhl_team: String,
    pub proj_goals: f64,
    pub proj_assists: f64,
    pub proj_wins: f64,
    pub proj_shutouts: f64,
    /// Fantasy points over the remaining schedule
    pub proj_points: f64,
    /// Whether a stat record resolved above the similarity threshold
    pub matched: bool,
}

impl ProjectedPlayer {
    fn unresolved(entry: &RosterEntry) -> Self {
        Self {
            name: entry.name.clone(),
            position: entry.position,
            fchl_team: entry.fchl_team,
            nhl_team: String::new(),
            proj_goals: 0.0,
            proj_assists: 0.0,
            proj_wins: 0.0,
            proj_shutouts: 0.0,
            proj_points: 0.0,
            matched: false,
        }
    }
}

/// Skater production extrapolated over a remaining-game count.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SkaterProjection {
    pub goals: f64,
    pub assists: f64,
    pub points: f64,
}

/// Extrapolate a skater's per-game rates. Zero games played yields the
/// all-zero projection.
pub fn project_skater_rates(record: &SkaterRecord, remaining_games: u32) -> SkaterProjection {
    if record.games_played == 0 {
        return SkaterProjection::default();
    }
    let games = f64::from(record.games_played);
    let goals = record.goals / games * f64::from(remaining_games);
    let assists = record.assists() / games * f64::from(remaining_games);
    SkaterProjection {
        goals,
        assists,
        points: goals * GOAL_PTS + assists * ASSIST_PTS,
    }
}

/// Goalie production extrapolated over a remaining-game count.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GoalieProjection {
    pub wins: f64,
    pub shutouts: f64,
    pub points: f64,
}

/// Extrapolate a goalie's schedule-derived rates.
///
/// `start share = starts / completed team games`, projected over the team's
/// remaining games; win and shutout rates are per historical start. Zero
/// completed games or zero starts yield the all-zero projection.
pub fn project_goalie_rates(
    facts: GoalieFacts,
    team_completed: u32,
    team_remaining: u32,
) -> GoalieProjection {
    if team_completed == 0 || facts.starts == 0 {
        return GoalieProjection::default();
    }
    let start_share = f64::from(facts.starts) / f64::from(team_completed);
    let projected_starts = start_share * f64::from(team_remaining);
    let per_start = f64::from(facts.starts.max(1));
    let wins = f64::from(facts.wins) / per_start * projected_starts;
    let shutouts = f64::from(facts.shutouts) / per_start * projected_starts;
    GoalieProjection {
        wins,
        shutouts,
        points: wins * WIN_PTS + shutouts * SHUTOUT_PTS,
    }
}

/// Project one skater roster slot. `record` is `None` for unmatched entries.
pub fn project_skater(
    entry: &RosterEntry,
    record: Option<&SkaterRecord>,
    schedule: &ScheduleFacts,
) -> ProjectedPlayer {
    let Some(record) = record else {
        return ProjectedPlayer::unresolved(entry);
    };

    let remaining = schedule.remaining_games(&record.team);
    let projection = project_skater_rates(record, remaining);
    ProjectedPlayer {
        nhl_team: record.team.clone(),
        proj_goals: projection.goals,
        proj_assists: projection.assists,
        proj_points: projection.points,
        matched: true,
        ..ProjectedPlayer::unresolved(entry)
    }
}

/// Project one goalie roster slot. `record` is `None` for unmatched entries.
pub fn project_goalie(
    entry: &RosterEntry,
    record: Option<&GoalieRecord>,
    schedule: &ScheduleFacts,
) -> ProjectedPlayer {
    let Some(record) = record else {
        return ProjectedPlayer::unresolved(entry);
    };

    // The game log spells goalies its own way; when the stats spelling never
    // appears there, fall back to the roster spelling.
    let mut facts = schedule.goalie(&record.name);
    if facts.starts == 0 {
        facts = schedule.goalie(&entry.name);
    }

    let team = schedule.team(&record.team);
    let projection = project_goalie_rates(facts, team.completed, team.remaining);
    ProjectedPlayer {
        nhl_team: record.team.clone(),
        proj_wins: projection.wins,
        proj_shutouts: projection.shutouts,
        proj_points: projection.points,
        matched: true,
        ..ProjectedPlayer::unresolved(entry)
    }
}
