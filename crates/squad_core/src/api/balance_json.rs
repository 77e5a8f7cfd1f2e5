//! JSON API for team generation
//!
//! String in, string out, for hosts that talk JSON (mobile/web shells, the CLI).
//! A request carries the selected players, an optional seed and optional
//! tuning; the response carries both teams, the seed actually used (so a split
//! can be reproduced) and any advisories.

use crate::balance::{assess_roster, assess_split, distribute_seeded, Advisory, BalanceConfig};
use crate::error::{ApiError, Result};
use crate::models::{Attributes, Player, Position, Team};
use crate::player::rating::derive_rating;
use crate::player::validation::validate_roster;
use schemars::schema::RootSchema;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BalanceRequest {
    pub schema_version: u8,
    /// Omit to get a fresh random split; the response reports the seed used
    #[serde(default)]
    pub seed: Option<u64>,
    pub players: Vec<PlayerData>,
    #[serde(default)]
    pub config: Option<BalanceConfig>,
}

/// Player record as received over JSON; `rating` may be left out when
/// `attributes` are given.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PlayerData {
    pub id: String,
    pub name: String,
    pub position: Position,
    #[serde(default)]
    pub secondary_position: Option<Position>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub attributes: Attributes,
}

impl PlayerData {
    /// Resolve into a [`Player`], deriving the rating from sub-skills if needed.
    pub fn into_player(self) -> Result<Player> {
        let rating = match self.rating {
            Some(rating) => rating,
            None => derive_rating(self.position, &self.attributes)
                .ok_or_else(|| ApiError::MissingRating { id: self.id.clone() })?,
        };

        Ok(Player {
            id: self.id,
            name: self.name,
            position: self.position,
            secondary_position: self.secondary_position,
            rating,
            attributes: self.attributes,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BalanceResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub team1: Team,
    pub team2: Team,
    pub advisories: Vec<Advisory>,
}

/// Typed entry point behind [`balance_teams_json`].
pub fn balance_teams(request: BalanceRequest) -> Result<BalanceResponse> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(ApiError::UnsupportedSchema {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let config = request.config.unwrap_or_default();
    config.validate()?;

    let players = request
        .players
        .into_iter()
        .map(PlayerData::into_player)
        .collect::<Result<Vec<_>>>()?;

    if let Err(error) = validate_roster(&players) {
        warn!("Balance request rejected: {}", error);
        return Err(error.into());
    }

    let seed = request.seed.unwrap_or_else(rand::random);
    let mut advisories = assess_roster(&players, &config.advisory);

    let split = distribute_seeded(&players, &config, seed);
    advisories.extend(assess_split(&split, &config.advisory));

    for advisory in &advisories {
        debug!("Advisory: {}", advisory);
    }

    let (team1, team2) = split.into_tuple();
    info!(
        "Balanced {} players with seed {}: {} ({}) vs {} ({})",
        players.len(),
        seed,
        team1.len(),
        team1.rating,
        team2.len(),
        team2.rating
    );

    Ok(BalanceResponse { schema_version: SCHEMA_VERSION, seed, team1, team2, advisories })
}

/// Balance a JSON request and return the JSON response.
pub fn balance_teams_json(request_json: &str) -> Result<String> {
    let request: BalanceRequest = serde_json::from_str(request_json)?;
    let response = balance_teams(request)?;
    serde_json::to_string(&response).map_err(|e| ApiError::Serialization(e.to_string()))
}

/// JSON schema of [`BalanceRequest`].
pub fn request_schema() -> RootSchema {
    schema_for!(BalanceRequest)
}

pub fn request_schema_json() -> Result<String> {
    serde_json::to_string_pretty(&request_schema())
        .map_err(|e| ApiError::Serialization(e.to_string()))
}
