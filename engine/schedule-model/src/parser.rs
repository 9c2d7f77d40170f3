//! Game-log parsing.
//!
//! The source file has two columns both named "Score", so rows are accessed
//! by position only; the header is validated for column count and otherwise
//! ignored. Malformed rows are reported and skipped, never fatal.

use std::io::Read;

use chrono::NaiveDate;
use csv::StringRecord;
use tracing::{info, warn};

use crate::error::{Result, ScheduleError};
use crate::teams::team_abbreviation;
use crate::types::{AnomalyKind, AnomalyReport, GameRecord, GameStatus};

/// Fixed column offsets of the game log.
pub const COL_DATE: usize = 0;
pub const COL_VISITOR: usize = 3;
pub const COL_VISITOR_SCORE: usize = 4;
pub const COL_HOME: usize = 5;
pub const COL_HOME_SCORE: usize = 6;
pub const COL_STATUS: usize = 7;
pub const COL_VISITOR_GOALIE: usize = 8;
pub const COL_HOME_GOALIE: usize = 9;

/// Goalie columns are absent on some not-yet-played rows.
pub const MIN_COLUMNS: usize = 8;

/// Parsed game log: every valid row as a [`GameRecord`], every dropped row
/// as an [`AnomalyReport`].
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    pub games: Vec<GameRecord>,
    pub anomalies: Vec<AnomalyReport>,
}

/// Parse the raw game log.
///
/// Fails only on interface-contract violations (unreadable input, header
/// narrower than [`MIN_COLUMNS`]); bad data rows are skipped and reported.
pub fn parse_schedule<R: Read>(reader: R) -> Result<Schedule> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?;
    if headers.len() < MIN_COLUMNS {
        return Err(ScheduleError::MalformedHeader {
            found: headers.len(),
            expected: MIN_COLUMNS,
        });
    }

    let mut schedule = Schedule::default();
    for (i, row) in rdr.records().enumerate() {
        let line = (i + 2) as u64; // header is line 1
        let record = row?;
        match parse_row(&record) {
            Ok(game) => schedule.games.push(game),
            Err(kind) => {
                warn!(line, %kind, "skipping schedule row");
                schedule.anomalies.push(AnomalyReport { line, kind });
            }
        }
    }

    info!(
        games = schedule.games.len(),
        anomalies = schedule.anomalies.len(),
        "parsed game log"
    );
    Ok(schedule)
}

fn parse_row(record: &StringRecord) -> std::result::Result<GameRecord, AnomalyKind> {
    if record.len() < MIN_COLUMNS {
        return Err(AnomalyKind::ShortRow {
            columns: record.len(),
            expected: MIN_COLUMNS,
        });
    }

    let visitor = known_team(field(record, COL_VISITOR))?;
    let home = known_team(field(record, COL_HOME))?;

    let status = GameStatus::parse(field(record, COL_STATUS));
    let (visitor_score, home_score) = match &status {
        GameStatus::Scheduled => (None, None),
        GameStatus::Other(raw) => {
            return Err(AnomalyKind::UnknownStatus {
                status: raw.clone(),
            })
        }
        _ => {
            let v = parse_score(field(record, COL_VISITOR_SCORE))?;
            let h = parse_score(field(record, COL_HOME_SCORE))?;
            if v == h {
                // NHL games cannot end level; a recorded tie is feed noise.
                return Err(AnomalyKind::TiedScore { score: v });
            }
            (Some(v), Some(h))
        }
    };

    Ok(GameRecord {
        date: NaiveDate::parse_from_str(field(record, COL_DATE), "%Y-%m-%d").ok(),
        visitor: visitor.to_string(),
        visitor_score,
        home: home.to_string(),
        home_score,
        status,
        visitor_goalie: optional_field(record, COL_VISITOR_GOALIE),
        home_goalie: optional_field(record, COL_HOME_GOALIE),
    })
}

fn field(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("").trim()
}

fn optional_field(record: &StringRecord, idx: usize) -> Option<String> {
    let value = field(record, idx);
    (!value.is_empty()).then(|| value.to_string())
}

fn known_team(name: &str) -> std::result::Result<&'static str, AnomalyKind> {
    team_abbreviation(name).ok_or_else(|| AnomalyKind::UnknownTeam {
        name: name.to_string(),
    })
}

fn parse_score(raw: &str) -> std::result::Result<u32, AnomalyKind> {
    raw.parse().map_err(|_| AnomalyKind::BadScore {
        raw: raw.to_string(),
    })
}
