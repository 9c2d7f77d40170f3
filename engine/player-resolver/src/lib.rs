//! Player Resolver
//!
//! Two halves of the roster-to-stats linkage:
//!
//! - [`roster`] parses the FCHL roster sheet — descriptor grammar
//!   `<Position> <Name...> [<metadata>]`, closed team-code set.
//! - [`resolver`] maps a parsed display name to the best-matching stat-table
//!   name under a similarity threshold. The stats source strips diacritics,
//!   so exact matching is unusable; a bounded token-sort ratio is the tool.

pub mod error;
pub mod resolver;
pub mod roster;
pub mod similarity;

pub use error::{ParseError, Result, RosterError};
pub use resolver::{NameResolver, Resolution};
pub use roster::{
    load_roster, parse_entry, FchlTeam, Position, RosterAnomaly, RosterEntry, RosterLoad,
};
pub use similarity::{NameSimilarity, TokenSortRatio};
