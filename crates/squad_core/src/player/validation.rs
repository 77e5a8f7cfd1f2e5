//! Roster validation
//!
//! Runs at the application boundary (JSON API, CLI) so that the balancer
//! itself can assume well-formed input.

use crate::error::RosterError;
use crate::models::Player;
use std::collections::HashSet;

pub const MAX_NAME_LEN: usize = 50;
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 100;
pub const MAX_ATTRIBUTE: u8 = 100;

pub fn validate_name(id: &str, name: &str) -> Result<(), RosterError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RosterError::InvalidName {
            id: id.to_string(),
            reason: "Name cannot be empty".to_string(),
        });
    }

    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(RosterError::InvalidName {
            id: id.to_string(),
            reason: format!("Name cannot exceed {} characters", MAX_NAME_LEN),
        });
    }

    Ok(())
}

pub fn validate_rating(id: &str, rating: u8) -> Result<(), RosterError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(RosterError::InvalidRating { id: id.to_string(), rating });
    }
    Ok(())
}

/// Validate a single record; `index` is only used to locate records without an id.
pub fn validate_player(index: usize, player: &Player) -> Result<(), RosterError> {
    if player.id.trim().is_empty() {
        return Err(RosterError::EmptyId { index });
    }

    validate_name(&player.id, &player.name)?;
    validate_rating(&player.id, player.rating)?;

    for (attribute, value) in &player.attributes {
        if *value > MAX_ATTRIBUTE {
            return Err(RosterError::InvalidAttribute {
                id: player.id.clone(),
                attribute: attribute.clone(),
                value: *value,
            });
        }
    }

    Ok(())
}

/// Validate every record and reject duplicate ids. Stops at the first problem.
pub fn validate_roster(players: &[Player]) -> Result<(), RosterError> {
    let mut seen = HashSet::with_capacity(players.len());

    for (index, player) in players.iter().enumerate() {
        validate_player(index, player)?;
        if !seen.insert(player.id.as_str()) {
            return Err(RosterError::DuplicateId { id: player.id.clone() });
        }
    }

    Ok(())
}
