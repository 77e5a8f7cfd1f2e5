use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Named sub-skills (pace, passing, defending, ...) on a 0-100 scale.
pub type Attributes = BTreeMap<String, u8>;

/// A player as selected for one team generation.
///
/// The balancer treats the record as read-only input; `rating` is expected to
/// be pre-computed (see [`crate::player::rating::derive_rating`] for callers
/// that only have sub-skills).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_position: Option<Position>,
    /// Overall ability, 1..=100
    pub rating: u8,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: Attributes,
}

impl Player {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: Position,
        rating: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            secondary_position: None,
            rating,
            attributes: Attributes::new(),
        }
    }

    pub fn with_secondary(mut self, position: Position) -> Self {
        self.secondary_position = Some(position);
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: u8) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Eligible for `position` through either the primary or the secondary role.
    pub fn can_play(&self, position: Position) -> bool {
        self.position == position || self.secondary_position == Some(position)
    }

    /// Has a secondary role distinct from the primary one.
    pub fn is_flexible(&self) -> bool {
        matches!(self.secondary_position, Some(p) if p != self.position)
    }
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[serde(alias = "GK")]
    Goalkeeper,
    #[serde(alias = "DF")]
    Defender,
    #[serde(alias = "MF")]
    Midfielder,
    #[serde(alias = "FW")]
    Forward,
}

impl Position {
    pub const ALL: [Position; 4] =
        [Position::Goalkeeper, Position::Defender, Position::Midfielder, Position::Forward];

    /// Decode from the compact numeric code (0=GK ... 3=FW).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Position::Goalkeeper),
            1 => Some(Position::Defender),
            2 => Some(Position::Midfielder),
            3 => Some(Position::Forward),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Position::Goalkeeper => 0,
            Position::Defender => 1,
            Position::Midfielder => 2,
            Position::Forward => 3,
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DF",
            Position::Midfielder => "MF",
            Position::Forward => "FW",
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::Goalkeeper)
    }

    /// Outfield roles, in the order the general fill pass visits them.
    pub fn outfield() -> [Position; 3] {
        [Position::Defender, Position::Midfielder, Position::Forward]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
        };
        f.write_str(name)
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GK" | "GOALKEEPER" | "KEEPER" => Ok(Position::Goalkeeper),
            "DF" | "DEF" | "DEFENDER" => Ok(Position::Defender),
            "MF" | "MID" | "MIDFIELDER" => Ok(Position::Midfielder),
            "FW" | "FWD" | "FORWARD" => Ok(Position::Forward),
            _ => Err(format!("Invalid position: {}", s)),
        }
    }
}

/// A player placed into one team of a particular split.
///
/// `assigned_position` is always set: it is the slot the player filled, or the
/// primary position when the player was placed by the leftover sweep.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct AssignedPlayer {
    #[serde(flatten)]
    pub player: Player,
    pub assigned_position: Position,
}

impl AssignedPlayer {
    pub fn new(player: Player, assigned_position: Position) -> Self {
        Self { player, assigned_position }
    }

    /// Placed in the player's own primary role.
    pub fn at_primary(player: Player) -> Self {
        let assigned_position = player.position;
        Self { player, assigned_position }
    }

    pub fn id(&self) -> &str {
        &self.player.id
    }

    pub fn rating(&self) -> u8 {
        self.player.rating
    }

    /// Filling a slot other than the primary position.
    pub fn is_out_of_position(&self) -> bool {
        self.assigned_position != self.player.position
    }
}
