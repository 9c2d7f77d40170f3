//! CLI configuration.
//!
//! TOML file with data-file paths, the similarity threshold, and current
//! league points. Every field falls back to a default, so an absent file
//! means "project the bundled season with stock baselines".

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use player_resolver::{FchlTeam, NameResolver};
use projection_engine::default_baselines;

/// Top-level config for the predictor CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Input file locations
    pub data: DataConfig,
    /// Name-resolution tuning
    pub matching: MatchingConfig,
    /// Current league points per FCHL team code, editable between runs
    pub baselines: BTreeMap<String, i64>,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            matching: MatchingConfig::default(),
            baselines: default_baselines()
                .into_iter()
                .map(|(team, points)| (team.code().to_string(), points))
                .collect(),
        }
    }
}

/// Input data file paths
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// FCHL roster sheet (PLAYER, TEAM columns)
    pub roster: PathBuf,
    /// NHL game log
    pub schedule: PathBuf,
    /// Skater season-to-date table
    pub skaters: PathBuf,
    /// Goalie season-to-date table
    pub goalies: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            roster: PathBuf::from("data/FCHL Players - Sheet1.csv"),
            schedule: PathBuf::from("data/nhl-202526-asplayed.csv"),
            skaters: PathBuf::from("data/skaters.csv"),
            goalies: PathBuf::from("data/goalies.csv"),
        }
    }
}

/// Name-resolution tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Similarity threshold, 0-100. Lower risks false matches, higher risks
    /// false unmatched entries.
    pub threshold: u8,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: NameResolver::DEFAULT_THRESHOLD,
        }
    }
}

impl PredictorConfig {
    /// Load config from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: PredictorConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Baselines keyed by team, dropping unknown codes with a warning.
    pub fn team_baselines(&self) -> HashMap<FchlTeam, i64> {
        let mut baselines = HashMap::new();
        for (code, points) in &self.baselines {
            match code.parse::<FchlTeam>() {
                Ok(team) => {
                    baselines.insert(team, *points);
                }
                Err(_) => warn!(%code, "ignoring baseline for unknown team code"),
            }
        }
        baselines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_stock_baselines() {
        let config = PredictorConfig::default();
        assert_eq!(config.matching.threshold, 80);
        assert_eq!(config.baselines.get("BOT"), Some(&828));
        assert_eq!(config.baselines.get("LPT"), Some(&907));
        assert_eq!(config.baselines.len(), 6);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: PredictorConfig = toml::from_str(
            "[matching]\nthreshold = 65\n\n[baselines]\nBOT = 900\n",
        )
        .expect("config should parse");
        assert_eq!(config.matching.threshold, 65);
        assert_eq!(config.baselines.get("BOT"), Some(&900));
        assert_eq!(
            config.data.skaters,
            PathBuf::from("data/skaters.csv")
        );
    }

    #[test]
    fn test_unknown_baseline_codes_are_dropped() {
        let mut config = PredictorConfig::default();
        config.baselines.insert("XYZ".to_string(), 1000);
        let baselines = config.team_baselines();
        assert_eq!(baselines.len(), 6);
        assert_eq!(baselines.get(&FchlTeam::Gvr), Some(&878));
    }
}
