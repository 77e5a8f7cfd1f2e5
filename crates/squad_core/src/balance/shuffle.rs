//! Randomness strategies for the balancer
//!
//! Every "who goes where" decision in a split starts by permuting the
//! candidate pool through a [`Shuffle`]. Production callers use [`RngShuffle`]
//! so a "regenerate" yields a different split; tests use [`IdentityShuffle`]
//! or a seeded RNG for reproducible output.

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait Shuffle {
    /// Permute `items` in place.
    fn shuffle<T>(&mut self, items: &mut [T]);
}

impl<S: Shuffle> Shuffle for &mut S {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        (**self).shuffle(items)
    }
}

/// Uniform Fisher-Yates permutation driven by any `rand` RNG.
#[derive(Debug, Clone)]
pub struct RngShuffle<R> {
    rng: R,
}

impl<R: Rng> RngShuffle<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngShuffle<ChaCha8Rng> {
    /// Reproducible shuffling: same seed, same permutations.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl RngShuffle<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> Shuffle for RngShuffle<R> {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        SliceRandom::shuffle(items, &mut self.rng);
    }
}

/// Leaves every pool in input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityShuffle;

impl Shuffle for IdentityShuffle {
    fn shuffle<T>(&mut self, _items: &mut [T]) {}
}
