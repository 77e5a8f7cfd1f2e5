//! Player helpers
//!
//! - Rating aggregation and position-weighted rating derivation
//! - Boundary validation of roster records

pub mod rating;
pub mod validation;

pub use rating::{derive_rating, mean_rating, team_rating, PositionWeights};
pub use validation::{validate_player, validate_roster};
