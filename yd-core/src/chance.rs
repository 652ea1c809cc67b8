//! Dice randomization.
//!
//! Rolls come from a ChaCha8 stream. A roller built from a seed replays the same
//! rolls; one built from entropy picks a fresh seed and reports it via [`Roller::seed`].

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

use crate::dice::{Dice, MAX_FACE, MIN_FACE, NUM_DICE};

/// Draw five independent uniform faces from `rng`.
pub fn roll_dice<R: Rng + ?Sized>(rng: &mut R) -> Dice {
    let mut out = [0u8; NUM_DICE];
    for o in &mut out {
        *o = rng.gen_range(MIN_FACE..=MAX_FACE);
    }
    Dice::from_valid(out)
}

/// Seeded source of dice rolls.
pub struct Roller {
    seed: u64,
    rng: Box<ChaCha8Rng>,
}

impl Roller {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: Box::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Seed from the thread-local OS-seeded generator.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// Seed this roller was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn roll(&mut self) -> Dice {
        roll_dice(self.rng.as_mut())
    }
}
