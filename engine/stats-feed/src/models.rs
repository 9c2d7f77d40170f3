use serde::{Deserialize, Serialize};

/// Row shape shared by both stat tables.
pub trait StatRow {
    /// Canonical player name as the feed spells it (diacritics already
    /// stripped upstream).
    fn name(&self) -> &str;

    /// Situation slice this row belongs to, when the column is present.
    fn situation(&self) -> Option<&str>;
}

/// One skater row from the season-to-date table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SkaterRecord {
    pub name: String,

    /// NHL team abbreviation (e.g. "NYR")
    pub team: String,

    /// Per-situation split label; only "all" rows are kept
    #[serde(default)]
    pub situation: Option<String>,

    pub games_played: u32,

    #[serde(rename = "I_F_goals", default)]
    pub goals: f64,

    #[serde(rename = "I_F_primaryAssists", default)]
    pub primary_assists: f64,

    #[serde(rename = "I_F_secondaryAssists", default)]
    pub secondary_assists: f64,
}

impl SkaterRecord {
    /// Primary plus secondary assists.
    pub fn assists(&self) -> f64 {
        self.primary_assists + self.secondary_assists
    }
}

impl StatRow for SkaterRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn situation(&self) -> Option<&str> {
        self.situation.as_deref()
    }
}

/// One goalie row from the season-to-date table.
///
/// Only identity and games played are read; win/shutout columns in the feed
/// are ignored in favor of schedule-derived tallies.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GoalieRecord {
    pub name: String,

    /// NHL team abbreviation
    pub team: String,

    #[serde(default)]
    pub situation: Option<String>,

    pub games_played: u32,
}

impl StatRow for GoalieRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn situation(&self) -> Option<&str> {
        self.situation.as_deref()
    }
}
