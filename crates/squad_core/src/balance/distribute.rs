//! Two-team player distribution
//!
//! A split runs six passes over a working copy of the roster:
//! 1. goalkeeper seeding (one keeper per team when two are available)
//! 2. defender quota (every team reaches `min_defenders` first)
//! 3. general fill by position, Defender -> Midfielder -> Forward, with per-team caps
//! 4. leftover sweep at each player's primary position
//! 5. size equalization, which may undo positional balance: size fairness wins
//! 6. rating aggregation
//!
//! Every selection permutes its candidate pool through the injected
//! [`Shuffle`], so the same roster can produce a different split per call.

use super::config::{BalanceConfig, EqualizeStrategy};
use super::shuffle::{RngShuffle, Shuffle};
use crate::models::{AssignedPlayer, Player, Position, Side, Team, TeamSplit};
use tracing::{debug, trace};

/// Split `players` into two teams with a thread-local RNG and the default tuning.
pub fn distribute(players: &[Player]) -> TeamSplit {
    distribute_with(players, &BalanceConfig::default(), RngShuffle::thread())
}

/// Reproducible split: the same roster, config and seed give the same teams.
pub fn distribute_seeded(players: &[Player], config: &BalanceConfig, seed: u64) -> TeamSplit {
    distribute_with(players, config, RngShuffle::seeded(seed))
}

/// Split `players` using an explicit randomness strategy.
///
/// Never fails. The caller's slice is not modified; duplicate ids are passed
/// through untouched.
pub fn distribute_with<S: Shuffle>(
    players: &[Player],
    config: &BalanceConfig,
    shuffler: S,
) -> TeamSplit {
    let mut draft = Draft::new(players, config, shuffler);

    let keepers = draft.seed_goalkeepers();
    let defenders = draft.fill_defender_quota();
    let fill = draft.fill_positions();
    let swept = draft.sweep_leftovers();
    let moved = draft.equalize();

    debug!(
        "Split {} players: keepers={}, quota={}, filled={}, cap_skips={}, swept={}, moved={}",
        players.len(),
        keepers,
        defenders,
        fill.placed,
        fill.skipped,
        swept,
        moved
    );

    draft.finish()
}

/// Outcome of the general fill pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillSummary {
    pub placed: usize,
    /// Candidates left for the sweep because a team was at the position cap
    pub skipped: usize,
}

/// Working state of one split.
///
/// The passes are exposed individually so callers (and tests) can inspect the
/// intermediate teams; [`distribute_with`] runs them in order.
pub struct Draft<'c, S> {
    config: &'c BalanceConfig,
    shuffler: S,
    /// `None` once the player has been placed
    pool: Vec<Option<Player>>,
    teams: [Vec<AssignedPlayer>; 2],
}

impl<'c, S: Shuffle> Draft<'c, S> {
    pub fn new(players: &[Player], config: &'c BalanceConfig, shuffler: S) -> Self {
        let half = players.len() / 2 + 1;
        Self {
            config,
            shuffler,
            pool: players.iter().cloned().map(Some).collect(),
            teams: [Vec::with_capacity(half), Vec::with_capacity(half)],
        }
    }

    pub fn team(&self, side: Side) -> &[AssignedPlayer] {
        &self.teams[side.index()]
    }

    /// Players on `side` currently slotted at `position`.
    pub fn count_assigned(&self, side: Side, position: Position) -> usize {
        self.teams[side.index()].iter().filter(|p| p.assigned_position == position).count()
    }

    /// Players not yet placed on either team.
    pub fn remaining(&self) -> usize {
        self.pool.iter().filter(|p| p.is_some()).count()
    }

    /// Step 1. Returns how many keepers were seeded (0, 1 or 2).
    pub fn seed_goalkeepers(&mut self) -> usize {
        let mut keepers = self.eligible(Position::Goalkeeper);
        self.shuffler.shuffle(&mut keepers);

        match keepers.as_slice() {
            [] => 0,
            [only] => {
                let mut sides = [Side::Team1, Side::Team2];
                self.shuffler.shuffle(&mut sides);
                self.assign(*only, sides[0], Position::Goalkeeper);
                1
            }
            [first, second, ..] => {
                self.assign(*first, Side::Team1, Position::Goalkeeper);
                self.assign(*second, Side::Team2, Position::Goalkeeper);
                2
            }
        }
    }

    /// Step 2. Places defenders until no team needs one; the rest wait for step 3.
    pub fn fill_defender_quota(&mut self) -> usize {
        let mut candidates = self.eligible(Position::Defender);
        self.shuffler.shuffle(&mut candidates);

        let mut placed = 0;
        for index in candidates {
            let Some(side) = self.defender_quota_side() else {
                break;
            };
            self.assign(index, side, Position::Defender);
            placed += 1;
        }
        placed
    }

    /// Step 3. Fills Defender, Midfielder and Forward slots into the smaller team,
    /// skipping a candidate while either team sits at the position cap.
    pub fn fill_positions(&mut self) -> FillSummary {
        let mut summary = FillSummary::default();

        for position in Position::outfield() {
            let mut candidates = self.eligible(position);
            self.shuffler.shuffle(&mut candidates);

            for index in candidates {
                if self.at_cap(position) {
                    summary.skipped += 1;
                    continue;
                }
                let side = self.smaller_side();
                self.assign(index, side, position);
                summary.placed += 1;
            }
        }

        summary
    }

    /// Step 4. Everyone still unplaced goes to the smaller team at their primary position.
    pub fn sweep_leftovers(&mut self) -> usize {
        let mut leftovers: Vec<usize> =
            (0..self.pool.len()).filter(|&i| self.pool[i].is_some()).collect();
        self.shuffler.shuffle(&mut leftovers);

        let swept = leftovers.len();
        for index in leftovers {
            let side = self.smaller_side();
            if let Some(player) = self.pool[index].take() {
                trace!("Sweep {} -> {}", player.id, side);
                self.teams[side.index()].push(AssignedPlayer::at_primary(player));
            }
        }
        swept
    }

    /// Step 5. Trims each team down to `floor(N / 2)`, team 1 first.
    /// Returns the number of moves made.
    pub fn equalize(&mut self) -> usize {
        let target = self.pool.len() / 2;
        let mut moved = 0;

        while self.teams[0].len() > target {
            self.move_one(Side::Team1);
            moved += 1;
        }
        while self.teams[1].len() > target {
            self.move_one(Side::Team2);
            moved += 1;
        }
        moved
    }

    /// Step 6. Consumes the draft and computes team ratings.
    pub fn finish(self) -> TeamSplit {
        let [team1, team2] = self.teams;
        TeamSplit::new(Team::from_players(team1), Team::from_players(team2))
    }

    fn eligible(&self, position: Position) -> Vec<usize> {
        self.pool
            .iter()
            .enumerate()
            .filter(|(_, p)| p.as_ref().is_some_and(|p| p.can_play(position)))
            .map(|(i, _)| i)
            .collect()
    }

    fn assign(&mut self, index: usize, side: Side, position: Position) {
        if let Some(player) = self.pool[index].take() {
            trace!("Assign {} as {} -> {}", player.id, position, side);
            self.teams[side.index()].push(AssignedPlayer::new(player, position));
        }
    }

    /// Ties go to team 1.
    fn smaller_side(&self) -> Side {
        if self.teams[1].len() < self.teams[0].len() {
            Side::Team2
        } else {
            Side::Team1
        }
    }

    fn at_cap(&self, position: Position) -> bool {
        match self.config.cap_for(position) {
            Some(cap) => [Side::Team1, Side::Team2]
                .iter()
                .any(|&side| self.count_assigned(side, position) >= cap),
            None => false,
        }
    }

    fn needs_defender(&self, side: Side) -> bool {
        let defenders = self.count_assigned(side, Position::Defender);
        let size = self.teams[side.index()].len();

        defenders < self.config.min_defenders
            || (size >= self.config.large_roster_threshold
                && defenders < self.config.large_roster_min_defenders)
    }

    fn defender_quota_side(&self) -> Option<Side> {
        match (self.needs_defender(Side::Team1), self.needs_defender(Side::Team2)) {
            (false, false) => None,
            (true, false) => Some(Side::Team1),
            (false, true) => Some(Side::Team2),
            (true, true) => {
                let key = |side: Side| {
                    (self.count_assigned(side, Position::Defender), self.teams[side.index()].len())
                };
                if key(Side::Team2) < key(Side::Team1) {
                    Some(Side::Team2)
                } else {
                    Some(Side::Team1)
                }
            }
        }
    }

    fn move_one(&mut self, from: Side) {
        let team = &self.teams[from.index()];
        let Some(last) = team.len().checked_sub(1) else {
            return;
        };

        let index = match self.config.equalize {
            EqualizeStrategy::StackPop => last,
            EqualizeStrategy::FlexibleFirst => team
                .iter()
                .rposition(|p| !p.assigned_position.is_goalkeeper() && p.player.is_flexible())
                .or_else(|| team.iter().rposition(|p| !p.assigned_position.is_goalkeeper()))
                .unwrap_or(last),
        };

        let player = self.teams[from.index()].remove(index);
        trace!("Equalize {} : {} -> {}", player.id(), from, from.other());
        self.teams[from.other().index()].push(player);
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::balance::shuffle::IdentityShuffle;
    use crate::player::rating::mean_rating;
    use proptest::prelude::*;

    fn position() -> impl Strategy<Value = Position> {
        (0u8..4).prop_map(|code| Position::from_code(code).unwrap_or(Position::Forward))
    }

    fn roster() -> impl Strategy<Value = Vec<Player>> {
        let entry = (position(), prop::option::of(position()), 1u8..=100);
        prop::collection::vec(entry, 0..=26).prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (primary, secondary, rating))| {
                    let mut player =
                        Player::new(format!("p{}", i), format!("Player {}", i), primary, rating);
                    player.secondary_position = secondary;
                    player
                })
                .collect()
        })
    }

    proptest! {
        /// Property: every player ends up in exactly one team
        #[test]
        fn prop_players_conserved(players in roster(), seed in any::<u64>()) {
            let split = distribute_seeded(&players, &BalanceConfig::default(), seed);

            let mut placed: Vec<String> =
                split.team1.ids().chain(split.team2.ids()).map(String::from).collect();
            placed.sort();
            let mut expected: Vec<String> = players.iter().map(|p| p.id.clone()).collect();
            expected.sort();
            prop_assert_eq!(placed, expected);
        }

        /// Property: team sizes differ by at most one
        #[test]
        fn prop_sizes_balanced(players in roster(), seed in any::<u64>()) {
            let split = distribute_seeded(&players, &BalanceConfig::default(), seed);
            prop_assert!(split.team1.len().abs_diff(split.team2.len()) <= 1);
            prop_assert!(split.team1.len() >= split.team2.len());
        }

        /// Property: ratings are the rounded mean of members
        #[test]
        fn prop_ratings_are_means(players in roster(), seed in any::<u64>()) {
            let split = distribute_seeded(&players, &BalanceConfig::default(), seed);
            for team in [&split.team1, &split.team2] {
                prop_assert_eq!(team.rating, mean_rating(team.players.iter().map(|p| p.rating())));
            }
        }

        /// Property: caps hold once the general fill pass is done
        #[test]
        fn prop_caps_hold_before_sweep(players in roster(), seed in any::<u64>()) {
            let config = BalanceConfig::default();
            let mut draft = Draft::new(&players, &config, RngShuffle::seeded(seed));
            draft.seed_goalkeepers();
            draft.fill_defender_quota();
            draft.fill_positions();

            for side in [Side::Team1, Side::Team2] {
                prop_assert!(draft.count_assigned(side, Position::Defender) <= config.defender_cap);
                let midfielders = draft.count_assigned(side, Position::Midfielder);
                prop_assert!(midfielders <= config.midfielder_cap);
            }
        }

        /// Property: two or more eligible keepers give each team one after seeding
        #[test]
        fn prop_keepers_seeded_per_team(players in roster(), seed in any::<u64>()) {
            let keepers = players.iter().filter(|p| p.can_play(Position::Goalkeeper)).count();
            let config = BalanceConfig::default();
            let mut draft = Draft::new(&players, &config, RngShuffle::seeded(seed));
            draft.seed_goalkeepers();

            if keepers >= 2 {
                prop_assert_eq!(draft.count_assigned(Side::Team1, Position::Goalkeeper), 1);
                prop_assert_eq!(draft.count_assigned(Side::Team2, Position::Goalkeeper), 1);
            }
        }

        /// Property: keepers survive size equalization under either strategy
        #[test]
        fn prop_keepers_kept_after_full_split(players in roster(), seed in any::<u64>()) {
            let keepers = players.iter().filter(|p| p.can_play(Position::Goalkeeper)).count();

            for equalize in [EqualizeStrategy::StackPop, EqualizeStrategy::FlexibleFirst] {
                let config = BalanceConfig { equalize, ..BalanceConfig::default() };
                let split = distribute_seeded(&players, &config, seed);

                if keepers >= 2 {
                    let (team1, team2) = (&split.team1, &split.team2);
                    prop_assert!(team1.has_goalkeeper(), "{:?}: team1 lost its keeper", equalize);
                    prop_assert!(team2.has_goalkeeper(), "{:?}: team2 lost its keeper", equalize);
                }
            }
        }

        /// Property: identity shuffling is deterministic
        #[test]
        fn prop_identity_is_deterministic(players in roster()) {
            let config = BalanceConfig::default();
            prop_assert_eq!(
                distribute_with(&players, &config, IdentityShuffle),
                distribute_with(&players, &config, IdentityShuffle)
            );
        }
    }
}
