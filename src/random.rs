//! Randomness abstraction for the collapse resolver.
//!
//! The resolver draws through a `RandomSource` trait object rather than an
//! ambient generator, so a seeded or scripted source makes every game
//! reproducible. Production play uses a `SmallRng` behind [`RngSource`].

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Supplies the two kinds of draws the collapse resolver needs.
pub trait RandomSource {
    /// Uniform selection of an index in `0..len`. `len` is never zero: the
    /// resolver checks each bucket is non-empty before drawing from it.
    fn pick(&mut self, len: usize) -> usize;

    /// Uniform draw in `[0, 1)`.
    fn roll(&mut self) -> f64;
}

/// A `SmallRng`-backed source for real play.
#[derive(Debug)]
pub struct RngSource {
    rng: SmallRng,
}

impl RngSource {
    /// Creates a source seeded from system entropy.
    pub fn from_entropy() -> Self {
        RngSource {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates a source with a fixed seed for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        RngSource {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for RngSource {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn roll(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// A source that replays fixed queues of picks and rolls.
///
/// Used by tests to force the resolver down a chosen branch. An exhausted
/// queue yields `0` picks and `0.0` rolls, so `ScriptedRandom::default()`
/// always selects the first bucket entry and the lowest branch.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    picks: VecDeque<usize>,
    rolls: VecDeque<f64>,
}

impl ScriptedRandom {
    /// Creates a source that replays `picks` and `rolls` in order.
    pub fn new(picks: Vec<usize>, rolls: Vec<f64>) -> Self {
        ScriptedRandom {
            picks: picks.into(),
            rolls: rolls.into(),
        }
    }

    /// Returns true once both queues have been fully consumed.
    pub fn is_exhausted(&self) -> bool {
        self.picks.is_empty() && self.rolls.is_empty()
    }
}

impl RandomSource for ScriptedRandom {
    fn pick(&mut self, len: usize) -> usize {
        let idx = self.picks.pop_front().unwrap_or(0);
        assert!(idx < len, "scripted pick {} out of range 0..{}", idx, len);
        idx
    }

    fn roll(&mut self) -> f64 {
        self.rolls.pop_front().unwrap_or(0.0)
    }
}
