pub mod player;
pub mod team;

pub use player::{AssignedPlayer, Attributes, Player, Position};
pub use team::{Side, Team, TeamSplit};
