use super::{AssignedPlayer, Position};
use crate::player::rating::team_rating;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two rosters produced by a split.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct Team {
    pub players: Vec<AssignedPlayer>,
    /// Mean member rating, rounded half-up; 0 when empty
    pub rating: u8,
}

impl Team {
    /// Build a team and compute its aggregate rating.
    pub fn from_players(players: Vec<AssignedPlayer>) -> Self {
        let rating = team_rating(&players);
        Self { players, rating }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players whose slot in this split is `position`.
    pub fn count_assigned(&self, position: Position) -> usize {
        self.players.iter().filter(|p| p.assigned_position == position).count()
    }

    pub fn has_goalkeeper(&self) -> bool {
        self.count_assigned(Position::Goalkeeper) > 0
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.players.iter().any(|p| p.id() == player_id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(|p| p.id())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Team1,
    Team2,
}

impl Side {
    pub fn other(&self) -> Side {
        match self {
            Side::Team1 => Side::Team2,
            Side::Team2 => Side::Team1,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Side::Team1 => 0,
            Side::Team2 => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Team1 => f.write_str("Team 1"),
            Side::Team2 => f.write_str("Team 2"),
        }
    }
}

/// Result of one balancing call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct TeamSplit {
    pub team1: Team,
    pub team2: Team,
}

impl TeamSplit {
    pub fn new(team1: Team, team2: Team) -> Self {
        Self { team1, team2 }
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Team1 => &self.team1,
            Side::Team2 => &self.team2,
        }
    }

    pub fn total_players(&self) -> usize {
        self.team1.len() + self.team2.len()
    }

    /// Absolute difference between the two team ratings.
    pub fn rating_gap(&self) -> u8 {
        self.team1.rating.abs_diff(self.team2.rating)
    }

    /// Team holding `player_id`, if any.
    pub fn side_of(&self, player_id: &str) -> Option<Side> {
        if self.team1.contains(player_id) {
            Some(Side::Team1)
        } else if self.team2.contains(player_id) {
            Some(Side::Team2)
        } else {
            None
        }
    }

    pub fn into_tuple(self) -> (Team, Team) {
        (self.team1, self.team2)
    }
}
