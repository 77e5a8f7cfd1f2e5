//! Team balancing
//!
//! - `distribute`: the two-team split itself (pure, never fails)
//! - `shuffle`: injectable randomness
//! - `config`: tunable thresholds
//! - `advisory`: non-blocking warnings computed before/after a split

pub mod advisory;
pub mod config;
pub mod distribute;
pub mod shuffle;

pub use advisory::{assess_roster, assess_split, Advisory};
pub use config::{AdvisoryConfig, BalanceConfig, EqualizeStrategy};
pub use distribute::{distribute, distribute_seeded, distribute_with, Draft, FillSummary};
pub use shuffle::{IdentityShuffle, RngShuffle, Shuffle};
