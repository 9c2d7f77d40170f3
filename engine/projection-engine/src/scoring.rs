//! FCHL scoring weights.
//!
//! Goals: 1 pt, Assists: 1 pt, Wins: 2 pts, Shutouts: 3 pts.

pub const GOAL_PTS: f64 = 1.0;
pub const ASSIST_PTS: f64 = 1.0;
pub const WIN_PTS: f64 = 2.0;
pub const SHUTOUT_PTS: f64 = 3.0;
