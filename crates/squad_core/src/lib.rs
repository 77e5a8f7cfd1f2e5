//! # squad_core - Pickup Football Team Balancer
//!
//! Splits a pool of selected players into two teams of near-equal size and
//! position mix, with a rating per team.
//!
//! ## Features
//! - Goalkeeper seeding, defender quota and per-position caps
//! - Injectable randomness (`Shuffle`), seeded splits for reproducibility
//! - Pure and synchronous: no I/O, no state between calls
//! - Boundary helpers: roster validation, advisories, JSON API

// Test helpers index rosters by position in the player list
#![allow(clippy::needless_range_loop)]

pub mod api;
pub mod balance;
pub mod error;
pub mod models;
pub mod player;

pub use api::{balance_teams, balance_teams_json, BalanceRequest, BalanceResponse};
pub use balance::{
    assess_roster, assess_split, distribute, distribute_seeded, distribute_with, Advisory,
    AdvisoryConfig, BalanceConfig, EqualizeStrategy, IdentityShuffle, RngShuffle, Shuffle,
};
pub use error::{ApiError, ConfigError, Result, RosterError};
pub use models::{AssignedPlayer, Attributes, Player, Position, Side, Team, TeamSplit};
pub use player::{derive_rating, validate_roster};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
