//! Scenario tests for the projection engine.

use std::collections::HashMap;

use player_resolver::{FchlTeam, Position, RosterEntry};
use schedule_model::{GameRecord, GameStatus, GoalieFacts, ScheduleFacts};
use stats_feed::{GoalieRecord, GoalieTable, SkaterRecord, SkaterTable, StatTable};

use crate::engine::{run, ProjectionInput};
use crate::projector::{project_goalie_rates, project_skater_rates};
use crate::standings::{compute_standings, default_baselines};
use crate::ProjectedPlayer;

fn skater_record(name: &str, team: &str, gp: u32, goals: f64, a1: f64, a2: f64) -> SkaterRecord {
    SkaterRecord {
        name: name.to_string(),
        team: team.to_string(),
        situation: Some("all".to_string()),
        games_played: gp,
        goals,
        primary_assists: a1,
        secondary_assists: a2,
    }
}

fn goalie_record(name: &str, team: &str, gp: u32) -> GoalieRecord {
    GoalieRecord {
        name: name.to_string(),
        team: team.to_string(),
        situation: Some("all".to_string()),
        games_played: gp,
    }
}

fn roster_entry(name: &str, position: Position, team: FchlTeam) -> RosterEntry {
    RosterEntry {
        raw: format!("{} {name}", position.letter()),
        name: name.to_string(),
        position,
        fchl_team: team,
    }
}

fn final_game(
    visitor: &str,
    v_score: u32,
    home: &str,
    h_score: u32,
    visitor_goalie: Option<&str>,
    home_goalie: Option<&str>,
) -> GameRecord {
    GameRecord {
        date: None,
        visitor: visitor.to_string(),
        visitor_score: Some(v_score),
        home: home.to_string(),
        home_score: Some(h_score),
        status: GameStatus::Regulation,
        visitor_goalie: visitor_goalie.map(str::to_string),
        home_goalie: home_goalie.map(str::to_string),
    }
}

fn scheduled_game(visitor: &str, home: &str) -> GameRecord {
    GameRecord {
        date: None,
        visitor: visitor.to_string(),
        visitor_score: None,
        home: home.to_string(),
        home_score: None,
        status: GameStatus::Scheduled,
        visitor_goalie: None,
        home_goalie: None,
    }
}

mod skater_tests {
    use super::*;

    #[test]
    fn test_projection_matches_hand_computed_rates() {
        let record = skater_record("Artemi Panarin", "NYR", 10, 5.0, 3.0, 2.0);
        let projection = project_skater_rates(&record, 10);
        assert_eq!(projection.goals, 5.0);
        assert_eq!(projection.assists, 5.0);
        assert_eq!(projection.points, 10.0);
    }

    #[test]
    fn test_projection_is_linear_in_remaining_games() {
        let record = skater_record("Artemi Panarin", "NYR", 7, 4.0, 2.0, 3.0);
        let single = project_skater_rates(&record, 10);
        let double = project_skater_rates(&record, 20);
        assert_eq!(double.goals, single.goals * 2.0);
        assert_eq!(double.assists, single.assists * 2.0);
        assert_eq!(double.points, single.points * 2.0);
    }

    #[test]
    fn test_zero_games_played_projects_zero() {
        let record = skater_record("Healthy Scratch", "NYR", 0, 0.0, 0.0, 0.0);
        let projection = project_skater_rates(&record, 50);
        assert_eq!(projection.points, 0.0);
        assert_eq!(projection.goals, 0.0);
        assert_eq!(projection.assists, 0.0);
    }
}

mod goalie_tests {
    use super::*;

    #[test]
    fn test_projection_scales_by_start_share() {
        // 20 of 40 completed games started, 40 remaining: 20 projected
        // starts; 10 wins and 2 shutouts over 20 starts carry forward.
        let facts = GoalieFacts {
            starts: 20,
            wins: 10,
            shutouts: 2,
        };
        let projection = project_goalie_rates(facts, 40, 40);
        assert_eq!(projection.wins, 10.0);
        assert_eq!(projection.shutouts, 2.0);
        assert_eq!(projection.points, 10.0 * 2.0 + 2.0 * 3.0);
    }

    #[test]
    fn test_zero_completed_team_games_projects_zero() {
        let facts = GoalieFacts {
            starts: 5,
            wins: 3,
            shutouts: 1,
        };
        assert_eq!(project_goalie_rates(facts, 0, 40).points, 0.0);
    }

    #[test]
    fn test_zero_starts_projects_zero() {
        let projection = project_goalie_rates(GoalieFacts::default(), 40, 40);
        assert_eq!(projection.points, 0.0);
    }
}

mod standings_tests {
    use super::*;

    fn projected(team: FchlTeam, points: f64) -> ProjectedPlayer {
        ProjectedPlayer {
            name: "Player".to_string(),
            position: Position::Forward,
            fchl_team: team,
            nhl_team: "NYR".to_string(),
            proj_goals: 0.0,
            proj_assists: 0.0,
            proj_wins: 0.0,
            proj_shutouts: 0.0,
            proj_points: points,
            matched: true,
        }
    }

    #[test]
    fn test_baseline_plus_projected_sum() {
        let players = vec![
            projected(FchlTeam::Bot, 30.0),
            projected(FchlTeam::Bot, 12.5),
        ];
        let standings = compute_standings(&players, &default_baselines());

        let bot = standings
            .iter()
            .find(|s| s.team == FchlTeam::Bot)
            .expect("BOT row present");
        assert_eq!(bot.current_points, 828);
        assert_eq!(bot.projected_remaining, 42.5);
        assert_eq!(bot.projected_total, 870.5);
    }

    #[test]
    fn test_sorted_descending_by_projected_total() {
        let standings = compute_standings(&[], &default_baselines());
        let totals: Vec<f64> = standings.iter().map(|s| s.projected_total).collect();
        let mut sorted = totals.clone();
        sorted.sort_by(|a, b| b.total_cmp(a));
        assert_eq!(totals, sorted);
        assert_eq!(standings[0].team, FchlTeam::Lpt); // 907 leads
    }

    #[test]
    fn test_every_team_gets_a_row_without_rosters() {
        let standings = compute_standings(&[], &HashMap::new());
        assert_eq!(standings.len(), 6);
        assert!(standings.iter().all(|s| s.projected_total == 0.0));
    }

    #[test]
    fn test_ties_break_by_team_code() {
        // All totals equal, so display order is pure team-code order.
        let standings = compute_standings(&[], &HashMap::new());
        let codes: Vec<_> = standings.iter().map(|s| s.team.code()).collect();
        assert_eq!(codes, vec!["BOT", "GVR", "LPT", "MAC", "SRL", "ZSK"]);
    }
}

mod run_tests {
    use super::*;

    /// NYR: two completed games (Shesterkin started both, one win, one
    /// shutout) and two still to play.
    fn schedule() -> ScheduleFacts {
        ScheduleFacts::derive(&[
            final_game("NYR", 3, "BOS", 0, Some("Igor Shesterkin"), Some("Jeremy Swayman")),
            final_game("BOS", 2, "NYR", 1, Some("Jeremy Swayman"), Some("Igor Shesterkin")),
            scheduled_game("NYR", "DAL"),
            scheduled_game("DAL", "NYR"),
        ])
    }

    fn tables() -> (SkaterTable, GoalieTable) {
        let skaters = StatTable::from_rows(vec![skater_record(
            "Artemi Panarin",
            "NYR",
            2,
            1.0,
            1.0,
            0.0,
        )]);
        let goalies = StatTable::from_rows(vec![goalie_record("Igor Shesterkin", "NYR", 2)]);
        (skaters, goalies)
    }

    #[test]
    fn test_run_resolves_projects_and_aggregates() {
        let (skaters, goalies) = tables();
        let schedule = schedule();
        let baselines = default_baselines();
        // Roster name is token-swapped; the resolver has to bridge it.
        let roster = vec![
            roster_entry("Panarin Artemi", Position::Forward, FchlTeam::Bot),
            roster_entry("Wayne Gretzky", Position::Forward, FchlTeam::Bot),
            roster_entry("Igor Shesterkin", Position::Goalie, FchlTeam::Zsk),
        ];

        let result = run(&ProjectionInput {
            roster: &roster,
            skaters: &skaters,
            goalies: &goalies,
            schedule: &schedule,
            threshold: 80,
            baselines: &baselines,
        });

        assert_eq!(result.players.len(), 3);
        assert_eq!(result.unmatched, vec!["Wayne Gretzky".to_string()]);

        let panarin = &result.players[0];
        assert!(panarin.matched);
        assert_eq!(panarin.nhl_team, "NYR");
        // 0.5 g/gp and 0.5 a/gp over 2 remaining games.
        assert_eq!(panarin.proj_goals, 1.0);
        assert_eq!(panarin.proj_assists, 1.0);
        assert_eq!(panarin.proj_points, 2.0);

        let gretzky = &result.players[1];
        assert!(!gretzky.matched);
        assert_eq!(gretzky.proj_points, 0.0);
        assert_eq!(gretzky.nhl_team, "");

        // Full start share, half of starts won, half shutouts: over 2
        // remaining games that is 1 win (2 pts) and 1 shutout (3 pts).
        let shesterkin = &result.players[2];
        assert!(shesterkin.matched);
        assert_eq!(shesterkin.proj_wins, 1.0);
        assert_eq!(shesterkin.proj_shutouts, 1.0);
        assert_eq!(shesterkin.proj_points, 5.0);

        let bot = result
            .standings
            .iter()
            .find(|s| s.team == FchlTeam::Bot)
            .expect("BOT row present");
        assert_eq!(bot.projected_total, 828.0 + 2.0);
        let zsk = result
            .standings
            .iter()
            .find(|s| s.team == FchlTeam::Zsk)
            .expect("ZSK row present");
        assert_eq!(zsk.projected_total, 858.0 + 5.0);
    }

    #[test]
    fn test_run_is_reproducible() {
        let (skaters, goalies) = tables();
        let schedule = schedule();
        let baselines = default_baselines();
        let roster = vec![roster_entry(
            "Panarin Artemi",
            Position::Forward,
            FchlTeam::Bot,
        )];
        let input = ProjectionInput {
            roster: &roster,
            skaters: &skaters,
            goalies: &goalies,
            schedule: &schedule,
            threshold: 80,
            baselines: &baselines,
        };

        let first = run(&input);
        for _ in 0..5 {
            let again = run(&input);
            assert_eq!(again.players[0].proj_points, first.players[0].proj_points);
            assert_eq!(again.unmatched, first.unmatched);
        }
    }

    #[test]
    fn test_threshold_100_only_accepts_exact_names() {
        let (skaters, goalies) = tables();
        let schedule = schedule();
        let baselines = default_baselines();
        let roster = vec![roster_entry(
            "Artemi Panarinn",
            Position::Forward,
            FchlTeam::Bot,
        )];

        let result = run(&ProjectionInput {
            roster: &roster,
            skaters: &skaters,
            goalies: &goalies,
            schedule: &schedule,
            threshold: 100,
            baselines: &baselines,
        });
        assert_eq!(result.unmatched.len(), 1);
    }
}
