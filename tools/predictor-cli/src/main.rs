//! FCHL Season Predictor CLI
//!
//! Loads the game log, stat tables, and roster sheet, runs one projection
//! pass, and renders:
//! - standings: projected final league table
//! - players: per-player projected production
//! - unmatched: roster names no stat record matched

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use player_resolver::{load_roster, FchlTeam, Position, RosterLoad};
use projection_engine::{run, ProjectionInput, ProjectionRun};
use schedule_model::{parse_schedule, ScheduleFacts};
use stats_feed::{load_goalies, load_skaters};

mod config;
use config::PredictorConfig;

const DEFAULT_CONFIG_PATH: &str = "predictor.toml";

#[derive(Parser)]
#[command(name = "predictor-cli")]
#[command(about = "FCHL season predictor - projected standings from schedule and stat feeds")]
#[command(version = "0.1.0")]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Similarity threshold override (0-100)
    #[arg(long)]
    threshold: Option<u8>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Projected final standings (default)
    Standings {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Per-player projections
    Players {
        /// Restrict to one FCHL team code
        #[arg(short, long)]
        team: Option<String>,
    },

    /// Roster names no stat record matched
    Unmatched,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli.config)?;
    let threshold = cli.threshold.unwrap_or(config.matching.threshold);
    if threshold > 100 {
        bail!("threshold must be between 0 and 100, got {threshold}");
    }

    let roster: RosterLoad = load_roster(open(&config.data.roster)?)
        .context("failed to load roster sheet")?;
    let schedule = parse_schedule(open(&config.data.schedule)?)
        .context("failed to load game log")?;
    let skaters = load_skaters(open(&config.data.skaters)?)
        .context("failed to load skater table")?;
    let goalies = load_goalies(open(&config.data.goalies)?)
        .context("failed to load goalie table")?;

    let facts = ScheduleFacts::derive(&schedule.games);
    let baselines = config.team_baselines();

    let result = run(&ProjectionInput {
        roster: &roster.entries,
        skaters: &skaters,
        goalies: &goalies,
        schedule: &facts,
        threshold,
        baselines: &baselines,
    });

    match cli.command.unwrap_or(Commands::Standings { json: false }) {
        Commands::Standings { json: true } => {
            println!("{}", serde_json::to_string_pretty(&result.standings)?);
        }
        Commands::Standings { json: false } => {
            render_standings(&result);
            report_data_quality(schedule.anomalies.len(), &roster, &result);
        }
        Commands::Players { team } => {
            let filter = team
                .map(|code| {
                    code.to_uppercase()
                        .parse::<FchlTeam>()
                        .map_err(|_| anyhow::anyhow!("unknown FCHL team code: {code}"))
                })
                .transpose()?;
            render_players(&result, filter);
        }
        Commands::Unmatched => render_unmatched(&result, &roster),
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: &Path) -> Result<PredictorConfig> {
    if path.exists() {
        return PredictorConfig::load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()));
    }
    // A missing explicit path is a user mistake; a missing default path just
    // means stock settings.
    if path != Path::new(DEFAULT_CONFIG_PATH) {
        bail!("config file not found: {}", path.display());
    }
    Ok(PredictorConfig::default())
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    Ok(BufReader::new(file))
}

fn render_standings(result: &ProjectionRun) {
    println!();
    println!("{}", "Projected FCHL Standings".bold());
    println!(
        "{:<4} {:<6} {:>9} {:>11} {:>9}",
        "#".dimmed(),
        "TEAM",
        "CURRENT",
        "REMAINING",
        "TOTAL"
    );
    for (rank, standing) in result.standings.iter().enumerate() {
        println!(
            "{:<4} {:<6} {:>9} {:>11.1} {:>9.1}",
            rank + 1,
            standing.team.code().cyan(),
            standing.current_points,
            standing.projected_remaining,
            standing.projected_total
        );
    }
}

fn render_players(result: &ProjectionRun, filter: Option<FchlTeam>) {
    let mut players: Vec<_> = result
        .players
        .iter()
        .filter(|p| filter.map_or(true, |team| p.fchl_team == team))
        .collect();
    players.sort_by(|a, b| b.proj_points.total_cmp(&a.proj_points));

    println!();
    println!(
        "{:<5} {:<3} {:<24} {:<5} {:>7} {:>7} {:>6} {:>6} {:>7}",
        "FCHL", "POS", "PLAYER", "NHL", "G", "A", "W", "SO", "PTS"
    );
    for player in players {
        let name = if player.matched {
            player.name.normal()
        } else {
            format!("{} (unmatched)", player.name).red()
        };
        println!(
            "{:<5} {:<3} {:<24} {:<5} {:>7.1} {:>7.1} {:>6.1} {:>6.1} {:>7.1}",
            player.fchl_team.code().cyan(),
            player.position.letter(),
            name,
            player.nhl_team,
            player.proj_goals,
            player.proj_assists,
            player.proj_wins,
            player.proj_shutouts,
            player.proj_points
        );
    }
}

fn render_unmatched(result: &ProjectionRun, roster: &RosterLoad) {
    if result.unmatched.is_empty() && roster.anomalies.is_empty() {
        println!("{}", "Every roster entry matched a stat record.".green());
        return;
    }

    if !result.unmatched.is_empty() {
        println!("{}", "Unmatched players (projected at zero):".yellow().bold());
        for name in &result.unmatched {
            println!("  {}", name.red());
        }
    }
    if !roster.anomalies.is_empty() {
        println!("{}", "Roster rows that failed to parse:".yellow().bold());
        for anomaly in &roster.anomalies {
            println!("  line {}: {} ({})", anomaly.line, anomaly.raw, anomaly.reason);
        }
    }
}

fn report_data_quality(schedule_anomalies: usize, roster: &RosterLoad, result: &ProjectionRun) {
    let goalie_slots = result
        .players
        .iter()
        .filter(|p| p.position == Position::Goalie)
        .count();
    println!();
    println!(
        "{}",
        format!(
            "{} players ({} goalie slots), {} unmatched, {} schedule anomalies, {} roster anomalies",
            result.players.len(),
            goalie_slots,
            result.unmatched.len(),
            schedule_anomalies,
            roster.anomalies.len()
        )
        .dimmed()
    );
    if !result.unmatched.is_empty() {
        println!(
            "{}",
            "Run the `unmatched` subcommand to list affected players.".dimmed()
        );
    }
}
