//! Advisory checks around a split
//!
//! These never block balancing. The roster checks run before a split and the
//! split checks after it, so the caller can warn about small pools, missing
//! keepers or lopsided teams.

use super::config::AdvisoryConfig;
use crate::models::{Player, Position, Side, TeamSplit};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difference in per-position counts from which a split is reported as imbalanced.
pub const POSITION_IMBALANCE_THRESHOLD: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    TooFewPlayers { count: usize, min: usize },
    TooManyPlayers { count: usize, max: usize },
    NoGoalkeepers,
    SingleGoalkeeper,
    MissingGoalkeeper { side: Side },
    RatingGap { team1: u8, team2: u8, gap: u8 },
    PositionImbalance { position: Position, team1: usize, team2: usize },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::TooFewPlayers { count, min } => {
                write!(f, "Only {} players selected; at least {} recommended", count, min)
            }
            Advisory::TooManyPlayers { count, max } => {
                write!(f, "{} players selected; at most {} recommended", count, max)
            }
            Advisory::NoGoalkeepers => write!(f, "No goalkeepers selected"),
            Advisory::SingleGoalkeeper => {
                write!(f, "Only one goalkeeper selected; one team will play without a keeper")
            }
            Advisory::MissingGoalkeeper { side } => write!(f, "{} has no goalkeeper", side),
            Advisory::RatingGap { team1, team2, gap } => {
                write!(f, "Teams may be unbalanced: ratings {} vs {} (gap {})", team1, team2, gap)
            }
            Advisory::PositionImbalance { position, team1, team2 } => {
                write!(f, "Uneven {} count: {} vs {}", position, team1, team2)
            }
        }
    }
}

/// Pre-split checks on the selected roster.
pub fn assess_roster(players: &[Player], config: &AdvisoryConfig) -> Vec<Advisory> {
    let mut advisories = Vec::new();
    let count = players.len();

    if count < config.min_players {
        advisories.push(Advisory::TooFewPlayers { count, min: config.min_players });
    } else if count > config.max_players {
        advisories.push(Advisory::TooManyPlayers { count, max: config.max_players });
    }

    let keepers = players.iter().filter(|p| p.can_play(Position::Goalkeeper)).count();
    match keepers {
        0 => advisories.push(Advisory::NoGoalkeepers),
        1 => advisories.push(Advisory::SingleGoalkeeper),
        _ => {}
    }

    advisories
}

/// Post-split checks on the produced teams.
pub fn assess_split(split: &TeamSplit, config: &AdvisoryConfig) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    if split.total_players() == 0 {
        return advisories;
    }

    for side in [Side::Team1, Side::Team2] {
        if !split.team(side).has_goalkeeper() {
            advisories.push(Advisory::MissingGoalkeeper { side });
        }
    }

    let gap = split.rating_gap();
    if gap > config.max_rating_gap {
        advisories.push(Advisory::RatingGap {
            team1: split.team1.rating,
            team2: split.team2.rating,
            gap,
        });
    }

    for position in Position::outfield() {
        let team1 = split.team1.count_assigned(position);
        let team2 = split.team2.count_assigned(position);
        if team1.abs_diff(team2) >= POSITION_IMBALANCE_THRESHOLD {
            advisories.push(Advisory::PositionImbalance { position, team1, team2 });
        }
    }

    advisories
}
