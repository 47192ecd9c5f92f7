//! Bot move selection
//!
//! Defines the `MoveStrategy` trait and concrete implementations.

mod heuristic;
pub mod minimax;
mod random;

pub use heuristic::{LongestWordStrategy, RarestLetterTrapStrategy};
pub use minimax::{GraphMinimaxStrategy, MinimaxConfig};
pub use random::RandomStrategy;

use crate::core::Vocabulary;
use crate::game::MatchState;

/// A policy for choosing the bot's next word
///
/// Strategies read the match state but never change it; the engine applies
/// whatever is returned after checking it against the candidate set.
pub trait MoveStrategy {
    /// Short name used in diagnostics and reports
    fn name(&self) -> &'static str;

    /// Select a word from `candidates`
    ///
    /// `candidates` is never empty and holds every legal move in vocabulary
    /// load order. Returning `None` or a word outside `candidates` is a
    /// defect that the engine repairs and records.
    fn select_move<'v>(
        &mut self,
        state: &MatchState,
        vocabulary: &'v Vocabulary,
        candidates: &[&'v str],
    ) -> Option<&'v str>;
}

impl<T: MoveStrategy + ?Sized> MoveStrategy for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn select_move<'v>(
        &mut self,
        state: &MatchState,
        vocabulary: &'v Vocabulary,
        candidates: &[&'v str],
    ) -> Option<&'v str> {
        (**self).select_move(state, vocabulary, candidates)
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Uniform random choice (seeded)
    Random(RandomStrategy),
    /// Longest candidate first
    LongestWord(LongestWordStrategy),
    /// Leave the opponent the rarest letter
    RarestLetterTrap(RarestLetterTrapStrategy),
    /// Depth-bounded adversarial search
    GraphMinimax(GraphMinimaxStrategy),
}

impl MoveStrategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::Random(s) => s.name(),
            Self::LongestWord(s) => s.name(),
            Self::RarestLetterTrap(s) => s.name(),
            Self::GraphMinimax(s) => s.name(),
        }
    }

    fn select_move<'v>(
        &mut self,
        state: &MatchState,
        vocabulary: &'v Vocabulary,
        candidates: &[&'v str],
    ) -> Option<&'v str> {
        match self {
            Self::Random(s) => s.select_move(state, vocabulary, candidates),
            Self::LongestWord(s) => s.select_move(state, vocabulary, candidates),
            Self::RarestLetterTrap(s) => s.select_move(state, vocabulary, candidates),
            Self::GraphMinimax(s) => s.select_move(state, vocabulary, candidates),
        }
    }
}

impl StrategyType {
    /// Names accepted by [`StrategyType::from_name`]
    pub const NAMES: &'static [&'static str] = &[
        "random", "longest", "trap", "minimax", "easy", "medium", "hard",
    ];

    /// Create strategy from name string
    ///
    /// Supported names: "random", "longest", "trap", "minimax", plus the
    /// difficulty levels "easy" (random), "medium" (trap) and "hard"
    /// (minimax). `seed` feeds the random strategy; `minimax` configures the
    /// search. Returns `None` for unrecognized names.
    ///
    /// # Examples
    /// ```
    /// use atlas_chain::strategy::{MinimaxConfig, MoveStrategy, StrategyType};
    ///
    /// let strategy = StrategyType::from_name("hard", 7, MinimaxConfig::default()).unwrap();
    /// assert_eq!(strategy.name(), "minimax");
    /// assert!(StrategyType::from_name("nope", 7, MinimaxConfig::default()).is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str, seed: u64, minimax: MinimaxConfig) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "random" | "easy" => Some(Self::Random(RandomStrategy::new(seed))),
            "longest" | "longest-word" => Some(Self::LongestWord(LongestWordStrategy)),
            "trap" | "rarest" | "medium" => {
                Some(Self::RarestLetterTrap(RarestLetterTrapStrategy))
            }
            "minimax" | "hard" => Some(Self::GraphMinimax(GraphMinimaxStrategy::new(minimax))),
            _ => None,
        }
    }
}
