//! FCHL roster sheet parsing.

use std::fmt;
use std::io::Read;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ParseError, Result};

/// Roster position slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "F")]
    Forward,
    #[serde(rename = "D")]
    Defense,
    #[serde(rename = "G")]
    Goalie,
}

impl Position {
    pub fn letter(&self) -> &'static str {
        match self {
            Position::Forward => "F",
            Position::Defense => "D",
            Position::Goalie => "G",
        }
    }
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "F" => Ok(Position::Forward),
            "D" => Ok(Position::Defense),
            "G" => Ok(Position::Goalie),
            token => Err(ParseError::BadPosition {
                token: token.to_string(),
            }),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// The six FCHL franchises. A closed set: anything else in the team column
/// is a parse anomaly. Variant order is lexical, which downstream standings
/// use as the deterministic tie-break.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum FchlTeam {
    Bot,
    Gvr,
    Lpt,
    Mac,
    Srl,
    Zsk,
}

impl FchlTeam {
    pub const ALL: [FchlTeam; 6] = [
        FchlTeam::Bot,
        FchlTeam::Gvr,
        FchlTeam::Lpt,
        FchlTeam::Mac,
        FchlTeam::Srl,
        FchlTeam::Zsk,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            FchlTeam::Bot => "BOT",
            FchlTeam::Gvr => "GVR",
            FchlTeam::Lpt => "LPT",
            FchlTeam::Mac => "MAC",
            FchlTeam::Srl => "SRL",
            FchlTeam::Zsk => "ZSK",
        }
    }
}

impl FromStr for FchlTeam {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "BOT" => Ok(FchlTeam::Bot),
            "GVR" => Ok(FchlTeam::Gvr),
            "LPT" => Ok(FchlTeam::Lpt),
            "MAC" => Ok(FchlTeam::Mac),
            "SRL" => Ok(FchlTeam::Srl),
            "ZSK" => Ok(FchlTeam::Zsk),
            code => Err(ParseError::UnknownTeam {
                code: code.to_string(),
            }),
        }
    }
}

impl fmt::Display for FchlTeam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One parsed roster slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Descriptor exactly as the sheet carries it
    pub raw: String,
    /// Display name with position prefix and metadata token stripped
    pub name: String,
    pub position: Position,
    pub fchl_team: FchlTeam,
}

/// A roster row that failed the grammar, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterAnomaly {
    /// 1-based line number in the sheet (header is line 1)
    pub line: u64,
    pub raw: String,
    pub reason: ParseError,
}

/// Parsed roster sheet.
#[derive(Debug, Clone, Default)]
pub struct RosterLoad {
    pub entries: Vec<RosterEntry>,
    pub anomalies: Vec<RosterAnomaly>,
}

/// Parse one descriptor against the grammar
/// `<Position> <FirstName> <LastName...> [<MetadataToken>]`.
///
/// The trailing token is dropped only when it matches the metadata pattern
/// (bare integer or single uppercase letter) *and* two name tokens would
/// remain — a two-token descriptor like `F Smith 3` keeps its tail, because
/// the grammar requires first and last name before any metadata.
pub fn parse_entry(raw: &str, team: &str) -> std::result::Result<RosterEntry, ParseError> {
    let mut tokens = raw.split_whitespace();
    let position = tokens.next().ok_or(ParseError::EmptyDescriptor)?.parse()?;

    let mut name_tokens: Vec<&str> = tokens.collect();
    if name_tokens.is_empty() {
        return Err(ParseError::MissingName);
    }
    if name_tokens.len() >= 3 && is_metadata_token(name_tokens[name_tokens.len() - 1]) {
        name_tokens.pop();
    }

    Ok(RosterEntry {
        raw: raw.to_string(),
        name: name_tokens.join(" "),
        position,
        fchl_team: team.parse()?,
    })
}

fn is_metadata_token(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_ascii_uppercase() || c.is_ascii_digit(),
        _ => token.chars().all(|c| c.is_ascii_digit()),
    }
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "PLAYER")]
    player: String,
    #[serde(rename = "TEAM")]
    team: String,
}

/// Load the two-column roster sheet (`PLAYER`, `TEAM` headers).
///
/// Rows failing the descriptor grammar are reported and skipped; only an
/// unreadable sheet is fatal.
pub fn load_roster<R: Read>(reader: R) -> Result<RosterLoad> {
    let mut rdr = csv::Reader::from_reader(reader);

    let mut load = RosterLoad::default();
    for (i, row) in rdr.deserialize::<RosterRow>().enumerate() {
        let line = (i + 2) as u64;
        let row = row?;
        let raw = row.player.trim();
        match parse_entry(raw, row.team.trim()) {
            Ok(entry) => load.entries.push(entry),
            Err(reason) => {
                warn!(line, raw, %reason, "skipping roster row");
                load.anomalies.push(RosterAnomaly {
                    line,
                    raw: raw.to_string(),
                    reason,
                });
            }
        }
    }

    info!(
        entries = load.entries.len(),
        anomalies = load.anomalies.len(),
        "loaded roster"
    );
    Ok(load)
}
