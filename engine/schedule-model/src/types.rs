use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a game ended, or whether it is still to be played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Decided in regulation time
    Regulation,
    /// Decided in overtime
    Overtime,
    /// Decided in a shootout
    Shootout,
    /// Not yet played
    Scheduled,
    /// Status string we do not recognize (e.g. "Postponed")
    Other(String),
}

impl GameStatus {
    /// Parse the status column as the feed spells it.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Regulation" => GameStatus::Regulation,
            "OT" => GameStatus::Overtime,
            "SO" => GameStatus::Shootout,
            "Scheduled" => GameStatus::Scheduled,
            other => GameStatus::Other(other.to_string()),
        }
    }

    /// True for statuses that mean the game has been played to a decision.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            GameStatus::Regulation | GameStatus::Overtime | GameStatus::Shootout
        )
    }
}

/// One normalized row of the game log.
///
/// Built once at load time and immutable thereafter. The parser only emits
/// records that passed validation: a final-status record always carries two
/// unequal scores, and a scheduled record carries none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Game date, when the feed provides one we can parse
    pub date: Option<NaiveDate>,
    /// Visitor team abbreviation (e.g. "NYR")
    pub visitor: String,
    /// Visitor goals, present iff the game is final
    pub visitor_score: Option<u32>,
    /// Home team abbreviation
    pub home: String,
    /// Home goals, present iff the game is final
    pub home_score: Option<u32>,
    /// Outcome status
    pub status: GameStatus,
    /// Starting goalie named on the visitor side, when the feed has one
    pub visitor_goalie: Option<String>,
    /// Starting goalie named on the home side, when the feed has one
    pub home_goalie: Option<String>,
}

impl GameRecord {
    /// Whether the given team abbreviation plays in this game.
    pub fn involves(&self, team: &str) -> bool {
        self.visitor == team || self.home == team
    }
}

/// Why a raw schedule row was dropped instead of parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnomalyKind {
    #[error("row has {columns} columns, expected at least {expected}")]
    ShortRow { columns: usize, expected: usize },

    #[error("unrecognized team name: {name}")]
    UnknownTeam { name: String },

    #[error("unrecognized status: {status}")]
    UnknownStatus { status: String },

    #[error("final game with missing or unparseable score: {raw}")]
    BadScore { raw: String },

    #[error("final game recorded as a {score}-{score} tie")]
    TiedScore { score: u32 },
}

/// A dropped schedule row, kept for host-side diagnostics.
///
/// Anomalous rows count toward neither the completed nor the remaining
/// bucket of any team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyReport {
    /// 1-based line number in the source file (header is line 1)
    pub line: u64,
    pub kind: AnomalyKind,
}
