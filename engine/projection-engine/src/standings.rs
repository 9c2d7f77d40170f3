//! Standings aggregation.

use std::collections::HashMap;

use serde::Serialize;

use player_resolver::FchlTeam;

use crate::projector::ProjectedPlayer;

/// One FCHL team's projected finish.
#[derive(Debug, Clone, Serialize)]
pub struct TeamStandingProjection {
    pub team: FchlTeam,
    /// User-editable baseline, read per run and never mutated here
    pub current_points: i64,
    /// Summed projected fantasy points across the team's roster
    pub projected_remaining: f64,
    pub projected_total: f64,
}

/// League-table baselines at the time the predictor was built.
pub fn default_baselines() -> HashMap<FchlTeam, i64> {
    HashMap::from([
        (FchlTeam::Bot, 828),
        (FchlTeam::Gvr, 878),
        (FchlTeam::Lpt, 907),
        (FchlTeam::Mac, 819),
        (FchlTeam::Srl, 829),
        (FchlTeam::Zsk, 858),
    ])
}

/// Sum projected points per FCHL team and add the supplied baselines.
///
/// Every team in the closed set gets a row, roster or not. Ordered by
/// descending projected total; ties break by team code so display order is
/// reproducible.
pub fn compute_standings(
    players: &[ProjectedPlayer],
    baselines: &HashMap<FchlTeam, i64>,
) -> Vec<TeamStandingProjection> {
    let mut remaining: HashMap<FchlTeam, f64> = HashMap::new();
    for player in players {
        *remaining.entry(player.fchl_team).or_default() += player.proj_points;
    }

    let mut standings: Vec<TeamStandingProjection> = FchlTeam::ALL
        .iter()
        .map(|&team| {
            let current_points = baselines.get(&team).copied().unwrap_or(0);
            let projected_remaining = remaining.get(&team).copied().unwrap_or(0.0);
            TeamStandingProjection {
                team,
                current_points,
                projected_remaining,
                projected_total: current_points as f64 + projected_remaining,
            }
        })
        .collect();

    standings.sort_by(|a, b| {
        b.projected_total
            .total_cmp(&a.projected_total)
            .then_with(|| a.team.cmp(&b.team))
    });
    standings
}
