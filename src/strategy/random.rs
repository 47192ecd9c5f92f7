//! Random strategy
//!
//! Uniform choice over the candidates from a seeded ChaCha generator, so a
//! given seed always replays the same game.

use super::MoveStrategy;
use crate::core::Vocabulary;
use crate::game::MatchState;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand_chacha::ChaCha8Rng;

/// Uniform random selection from the candidates
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    /// Create a strategy with a fixed seed
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a strategy seeded from the thread-local generator
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl MoveStrategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select_move<'v>(
        &mut self,
        _state: &MatchState,
        _vocabulary: &'v Vocabulary,
        candidates: &[&'v str],
    ) -> Option<&'v str> {
        candidates.choose(&mut self.rng).copied()
    }
}
