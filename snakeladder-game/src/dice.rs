//! Seeded six-sided die.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::constants::DIE_FACES;

/// Deterministic die. Two dice built from the same seed produce the same
/// sequence of rolls on every platform.
#[derive(Debug, Clone)]
pub struct Dice {
    rng: ChaCha20Rng,
    seed: u64,
    draws: u64,
}

impl Dice {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            seed,
            draws: 0,
        }
    }

    /// Die seeded from OS entropy, for casual play.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().next_u64();
        Self::from_seed(seed)
    }

    /// Uniform draw from `1..=6`.
    pub fn roll(&mut self) -> u8 {
        self.draws = self.draws.saturating_add(1);
        self.rng.gen_range(1..=DIE_FACES)
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of rolls drawn since construction.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}
