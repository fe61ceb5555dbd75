//! # Engine Configuration
//!
//! Tunables of the analysis engine and the learning rule, loadable from YAML.
//! Every field has a default, so a config file only needs the keys it changes.
//!
//! ```yaml
//! sigmoid_scale: 15.0
//! verdict_threshold: 75
//! leagues:
//!   - fragments: ["brésil", "japon"]
//!     delta: 10.0
//!   - fragments: ["ghana", "algérie"]
//!     delta: -15.0
//! learning:
//!   win_attack_delta: 0.02
//! ```
//!
//! ## Environment Variables
//!
//! - `SBA_CONFIG`: path of a YAML config file read by `from_env_or_default`

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::error::ConfigError;

pub const CONFIG_ENV_VAR: &str = "SBA_CONFIG";

/// Confidence shift applied when the league name contains any fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueAdjustment {
    /// Lowercase name fragments; the group applies once if any of them matches
    pub fragments: Vec<String>,
    pub delta: f64,
}

impl LeagueAdjustment {
    pub fn new(fragments: &[&str], delta: f64) -> Self {
        Self { fragments: fragments.iter().map(|f| f.to_lowercase()).collect(), delta }
    }

    /// Case-insensitive literal substring match. Accents are significant.
    pub fn matches(&self, league: &str) -> bool {
        let league = league.to_lowercase();
        self.fragments.iter().any(|f| !f.is_empty() && league.contains(&f.to_lowercase()))
    }
}

pub fn default_league_adjustments() -> Vec<LeagueAdjustment> {
    vec![
        LeagueAdjustment::new(&["brésil", "japon"], 10.0),
        LeagueAdjustment::new(&["ghana", "algérie"], -15.0),
    ]
}

/// Step sizes of the fixed-step learning rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    pub win_attack_delta: f64,
    pub win_shots_on_target_delta: f64,
    pub loss_shots_off_target_delta: f64,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            win_attack_delta: 0.02,
            win_shots_on_target_delta: 0.05,
            loss_shots_off_target_delta: -0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Divisor of the logistic squashing; higher means a flatter curve
    pub sigmoid_scale: f64,
    pub confidence_floor: u8,
    pub confidence_ceiling: u8,
    /// A bet verdict needs a confidence strictly above this value
    pub verdict_threshold: u8,
    pub leagues: Vec<LeagueAdjustment>,
    pub learning: LearningConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sigmoid_scale: 15.0,
            confidence_floor: 5,
            confidence_ceiling: 98,
            verdict_threshold: 75,
            leagues: default_league_adjustments(),
            learning: LearningConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        Self::from_yaml_str(&content)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Loads the file named by `SBA_CONFIG`, or the defaults when the variable
    /// is unset or the file cannot be used.
    pub fn from_env_or_default() -> Self {
        match env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.is_empty() => match Self::load(Path::new(&path)) {
                Ok(config) => {
                    log::info!("Loaded engine config from {}", path);
                    config
                }
                Err(err) => {
                    log::warn!("Ignoring engine config {}: {}", path, err);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }

    /// Floor and ceiling in ascending order, whatever the file said.
    pub fn confidence_bounds(&self) -> (u8, u8) {
        if self.confidence_floor <= self.confidence_ceiling {
            (self.confidence_floor, self.confidence_ceiling)
        } else {
            (self.confidence_ceiling, self.confidence_floor)
        }
    }
}
