//! Name-indexed stat tables.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{GoalieRecord, SkaterRecord, StatRow};

pub type SkaterTable = StatTable<SkaterRecord>;
pub type GoalieTable = StatTable<GoalieRecord>;

/// A stat table keyed by player name.
///
/// Rows keep their file order so fuzzy-match candidates iterate in a stable
/// sequence — score ties must break the same way on every run. Duplicate
/// names resolve first-seen-wins.
#[derive(Debug, Clone, Default)]
pub struct StatTable<T> {
    rows: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: StatRow> StatTable<T> {
    pub fn from_rows(rows: Vec<T>) -> Self {
        let mut index = HashMap::with_capacity(rows.len());
        let mut kept = Vec::with_capacity(rows.len());
        for row in rows {
            if index.contains_key(row.name()) {
                debug!(name = row.name(), "duplicate stat row ignored");
                continue;
            }
            index.insert(row.name().to_string(), kept.len());
            kept.push(row);
        }
        Self { rows: kept, index }
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.index.get(name).map(|&i| &self.rows[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Player names in file order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.name())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
