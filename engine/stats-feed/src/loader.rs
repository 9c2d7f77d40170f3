//! CSV loaders for the stat tables.
//!
//! Loaders are generic over `io::Read` so tests can feed string tables
//! without touching the filesystem.

use std::io::Read;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::error::{Result, StatsError};
use crate::models::{GoalieRecord, SkaterRecord, StatRow};
use crate::table::{GoalieTable, SkaterTable, StatTable};

/// Columns both tables must carry; their absence is a contract failure, not
/// a row-level anomaly.
const REQUIRED_COLUMNS: &[&str] = &["name", "team", "games_played"];

/// Load the skater table, keeping only the "all situations" slice.
pub fn load_skaters<R: Read>(reader: R) -> Result<SkaterTable> {
    let table = load_table::<SkaterRecord, R>(reader)?;
    info!(skaters = table.len(), "loaded skater table");
    Ok(table)
}

/// Load the goalie table, keeping only the "all situations" slice.
pub fn load_goalies<R: Read>(reader: R) -> Result<GoalieTable> {
    let table = load_table::<GoalieRecord, R>(reader)?;
    info!(goalies = table.len(), "loaded goalie table");
    Ok(table)
}

fn load_table<T, R>(reader: R) -> Result<StatTable<T>>
where
    T: StatRow + DeserializeOwned,
    R: Read,
{
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(StatsError::MissingColumn(column));
        }
    }

    let mut rows = Vec::new();
    for (i, row) in rdr.deserialize::<T>().enumerate() {
        let line = i + 2;
        match row {
            // The upstream export is supposed to be pre-filtered to the
            // aggregate slice; re-check here because every downstream rate
            // silently doubles if a split row leaks through.
            Ok(record) => match record.situation() {
                Some(situation) if situation != "all" => continue,
                _ => rows.push(record),
            },
            Err(err) => {
                warn!(line, %err, "skipping unreadable stat row");
            }
        }
    }

    Ok(StatTable::from_rows(rows))
}
