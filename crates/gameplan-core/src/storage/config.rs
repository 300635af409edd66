//! TOML-based application configuration.
//!
//! Stores tunables for the planning engine:
//! - Suggested work-block length
//! - Ranking component weights
//! - Overrides for the organization deadline calendar
//!
//! Configuration is stored at `~/.config/gameplan/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::deadlines::{DeadlineCalendar, RecurringDeadline};
use crate::error::ConfigError;
use crate::plan::score::ScoreWeights;

/// Work-block suggester configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggesterConfig {
    #[serde(default = "default_block_minutes")]
    pub block_minutes: i64,
}

/// Ranking weight configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    #[serde(default = "default_urgency_weight")]
    pub urgency_weight: f64,
    #[serde(default = "default_commitment_weight")]
    pub commitment_weight: f64,
    #[serde(default = "default_priority_weight")]
    pub priority_weight: f64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/gameplan/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub suggester: SuggesterConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    /// Organization deadline overrides. When absent, the built-in weekly
    /// cadence applies.
    #[serde(default)]
    pub deadlines: Option<Vec<RecurringDeadline>>,
}

// Default functions
fn default_block_minutes() -> i64 {
    120
}
fn default_urgency_weight() -> f64 {
    0.5
}
fn default_commitment_weight() -> f64 {
    0.2
}
fn default_priority_weight() -> f64 {
    0.3
}

impl Default for SuggesterConfig {
    fn default() -> Self {
        Self {
            block_minutes: default_block_minutes(),
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            urgency_weight: default_urgency_weight(),
            commitment_weight: default_commitment_weight(),
            priority_weight: default_priority_weight(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            suggester: SuggesterConfig::default(),
            ranking: RankingConfig::default(),
            deadlines: None,
        }
    }
}

impl Config {
    /// Path to the config file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/gameplan"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing defaults on first run.
    ///
    /// # Errors
    /// Returns an error if an existing file does not parse, or defaults
    /// cannot be written.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content)
                .map_err(|e| ConfigError::ParseFailed(e.to_string())),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from disk, falling back to defaults on any failure.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// The deadline calendar this config describes.
    pub fn calendar(&self) -> DeadlineCalendar {
        match &self.deadlines {
            Some(deadlines) => DeadlineCalendar::new(deadlines.clone()),
            None => DeadlineCalendar::default(),
        }
    }

    /// The score weights this config describes.
    pub fn score_weights(&self) -> ScoreWeights {
        ScoreWeights {
            urgency: self.ranking.urgency_weight,
            commitment: self.ranking.commitment_weight,
            priority: self.ranking.priority_weight,
        }
    }
}
