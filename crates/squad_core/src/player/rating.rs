//! Rating helpers
//!
//! - Team aggregate: mean of member ratings, rounded half-up
//! - Overall rating from sub-skills, weighted by position:
//!   - FW: shooting 3x, pace/dribbling/physical 2x
//!   - MF: passing 3x, dribbling 3x, others 2x
//!   - DF: defending 3x, physical 3x, others 2x
//!   - GK: goalkeeping dominates

use crate::models::{AssignedPlayer, Attributes, Position};
use serde::{Deserialize, Serialize};

/// Sub-skill names understood by [`derive_rating`].
pub const KNOWN_ATTRIBUTES: [&str; 7] =
    ["pace", "shooting", "passing", "dribbling", "defending", "physical", "goalkeeping"];

/// Mean of `ratings` rounded half-up, 0 for an empty sequence.
pub fn mean_rating(ratings: impl IntoIterator<Item = u8>) -> u8 {
    let (sum, count) = ratings
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), r| (sum + u64::from(r), count + 1));
    if count == 0 {
        return 0;
    }
    // floor(sum / count + 1/2) without floats
    let rounded = (2 * sum + count) / (2 * count);
    rounded.min(u64::from(u8::MAX)) as u8
}

pub fn team_rating(players: &[AssignedPlayer]) -> u8 {
    mean_rating(players.iter().map(|p| p.rating()))
}

/// Position-specific sub-skill weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionWeights {
    pub pace_weight: f32,
    pub shooting_weight: f32,
    pub passing_weight: f32,
    pub dribbling_weight: f32,
    pub defending_weight: f32,
    pub physical_weight: f32,
    pub goalkeeping_weight: f32,
}

impl PositionWeights {
    pub fn for_position(position: Position) -> Self {
        match position {
            Position::Forward => Self {
                pace_weight: 2.0,
                shooting_weight: 3.0,
                passing_weight: 1.0,
                dribbling_weight: 2.0,
                defending_weight: 0.5,
                physical_weight: 2.0,
                goalkeeping_weight: 0.0,
            },
            Position::Midfielder => Self {
                pace_weight: 2.0,
                shooting_weight: 2.0,
                passing_weight: 3.0,
                dribbling_weight: 3.0,
                defending_weight: 2.0,
                physical_weight: 2.0,
                goalkeeping_weight: 0.0,
            },
            Position::Defender => Self {
                pace_weight: 2.0,
                shooting_weight: 0.5,
                passing_weight: 2.0,
                dribbling_weight: 1.0,
                defending_weight: 3.0,
                physical_weight: 3.0,
                goalkeeping_weight: 0.0,
            },
            Position::Goalkeeper => Self::goalkeeper_weights(),
        }
    }

    /// Keepers are judged almost entirely on goalkeeping.
    pub fn goalkeeper_weights() -> Self {
        Self {
            pace_weight: 0.5,
            shooting_weight: 0.0,
            passing_weight: 1.0,
            dribbling_weight: 0.0,
            defending_weight: 0.5,
            physical_weight: 1.0,
            goalkeeping_weight: 4.0,
        }
    }

    /// Weight for a named sub-skill; `None` for names outside [`KNOWN_ATTRIBUTES`].
    pub fn weight_of(&self, attribute: &str) -> Option<f32> {
        match attribute {
            "pace" => Some(self.pace_weight),
            "shooting" => Some(self.shooting_weight),
            "passing" => Some(self.passing_weight),
            "dribbling" => Some(self.dribbling_weight),
            "defending" => Some(self.defending_weight),
            "physical" => Some(self.physical_weight),
            "goalkeeping" => Some(self.goalkeeping_weight),
            _ => None,
        }
    }
}

/// Overall 1..=100 rating from sub-skills, as seen from `position`.
///
/// Weighted mean over the known sub-skills present in `attributes`; unknown
/// names are ignored. Returns `None` when nothing with a non-zero weight is
/// present.
pub fn derive_rating(position: Position, attributes: &Attributes) -> Option<u8> {
    let weights = PositionWeights::for_position(position);

    let (weighted, total_weight) = attributes
        .iter()
        .filter_map(|(name, value)| {
            weights.weight_of(name).map(|w| (w * f32::from((*value).min(100)), w))
        })
        .fold((0.0f32, 0.0f32), |(acc, tw), (v, w)| (acc + v, tw + w));

    if total_weight <= 0.0 {
        return None;
    }

    Some((weighted / total_weight).round().clamp(1.0, 100.0) as u8)
}
