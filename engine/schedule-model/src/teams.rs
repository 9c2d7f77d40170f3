//! Fixed NHL team-name table.
//!
//! The game log spells teams out in full while the stat tables use
//! abbreviations, so every schedule row goes through this map once at parse
//! time.

/// Map a full team name to its abbreviation. `None` for anything outside the
/// 32-team league.
pub fn team_abbreviation(full_name: &str) -> Option<&'static str> {
    let abbr = match full_name {
        "Anaheim Ducks" => "ANA",
        "Boston Bruins" => "BOS",
        "Buffalo Sabres" => "BUF",
        "Calgary Flames" => "CGY",
        "Carolina Hurricanes" => "CAR",
        "Chicago Blackhawks" => "CHI",
        "Colorado Avalanche" => "COL",
        "Columbus Blue Jackets" => "CBJ",
        "Dallas Stars" => "DAL",
        "Detroit Red Wings" => "DET",
        "Edmonton Oilers" => "EDM",
        "Florida Panthers" => "FLA",
        "Los Angeles Kings" => "LAK",
        "Minnesota Wild" => "MIN",
        "Montreal Canadiens" => "MTL",
        "Nashville Predators" => "NSH",
        "New Jersey Devils" => "NJD",
        "New York Islanders" => "NYI",
        "New York Rangers" => "NYR",
        "Ottawa Senators" => "OTT",
        "Philadelphia Flyers" => "PHI",
        "Pittsburgh Penguins" => "PIT",
        "San Jose Sharks" => "SJS",
        "Seattle Kraken" => "SEA",
        "St. Louis Blues" => "STL",
        "Tampa Bay Lightning" => "TBL",
        "Toronto Maple Leafs" => "TOR",
        "Utah Mammoth" => "UTA",
        "Vancouver Canucks" => "VAN",
        "Vegas Golden Knights" => "VGK",
        "Washington Capitals" => "WSH",
        "Winnipeg Jets" => "WPG",
        _ => return None,
    };
    Some(abbr)
}
