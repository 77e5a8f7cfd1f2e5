//! Balancer tuning
//!
//! The defaults are the constants the balancer was tuned with for 10-22 player
//! pools (5v5 up to 11v11).

use crate::error::ConfigError;
use crate::models::Position;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the size-equalization pass picks the player to move.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EqualizeStrategy {
    /// Move the most recently placed player.
    #[default]
    StackPop,
    /// Prefer a non-keeper with a secondary position, then any non-keeper.
    FlexibleFirst,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct BalanceConfig {
    /// Defenders every team should get before other positions are filled
    pub min_defenders: usize,
    /// Team size from which `large_roster_min_defenders` applies.
    ///
    /// Checked during the defender quota, when a team holds at most one keeper
    /// plus its defenders, so with the other defaults the rule only takes
    /// effect once this is lowered to `min_defenders + 1` or below.
    pub large_roster_threshold: usize,
    pub large_roster_min_defenders: usize,
    pub defender_cap: usize,
    pub midfielder_cap: usize,
    /// No cap by default
    pub forward_cap: Option<usize>,
    pub equalize: EqualizeStrategy,
    pub advisory: AdvisoryConfig,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            min_defenders: 2,
            large_roster_threshold: 9,
            large_roster_min_defenders: 3,
            defender_cap: 5,
            midfielder_cap: 5,
            forward_cap: None,
            equalize: EqualizeStrategy::StackPop,
            advisory: AdvisoryConfig::default(),
        }
    }
}

/// Thresholds for the advisory checks run around a split.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct AdvisoryConfig {
    pub min_players: usize,
    pub max_players: usize,
    /// Largest team rating difference that is not reported
    pub max_rating_gap: u8,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self { min_players: 10, max_players: 22, max_rating_gap: 5 }
    }
}

impl BalanceConfig {
    /// Per-team cap on players assigned to `position` in the general fill pass.
    pub fn cap_for(&self, position: Position) -> Option<usize> {
        match position {
            Position::Defender => Some(self.defender_cap),
            Position::Midfielder => Some(self.midfielder_cap),
            Position::Forward => self.forward_cap,
            Position::Goalkeeper => None,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.large_roster_min_defenders < self.min_defenders {
            return Err(ConfigError::InvalidValue(format!(
                "large_roster_min_defenders ({}) must be >= min_defenders ({})",
                self.large_roster_min_defenders, self.min_defenders
            )));
        }
        if self.advisory.min_players > self.advisory.max_players {
            return Err(ConfigError::InvalidValue(format!(
                "advisory.min_players ({}) must be <= advisory.max_players ({})",
                self.advisory.min_players, self.advisory.max_players
            )));
        }
        Ok(())
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.yaml`/`.yml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let contents = std::fs::read_to_string(path)?;

        match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&contents),
            "json" => Self::from_json_str(&contents),
            _ => Err(ConfigError::UnsupportedFormat { extension }),
        }
    }
}
