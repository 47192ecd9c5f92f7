//! Graph-search strategy
//!
//! Treats the vocabulary as a directed graph and runs a depth-bounded
//! adversarial search over it, with both simulated players drawing from the
//! same pool of unplayed words.

mod graph;
mod search;

pub use graph::{ChainGraph, Frontier, NodeId};
pub use search::{MinimaxConfig, WIN_SCORE, select_best_move};

use super::MoveStrategy;
use crate::core::Vocabulary;
use crate::game::MatchState;

/// Depth-bounded negamax over the word-chain graph
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphMinimaxStrategy {
    config: MinimaxConfig,
}

impl GraphMinimaxStrategy {
    #[must_use]
    pub fn new(config: MinimaxConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> MinimaxConfig {
        self.config
    }
}

impl MoveStrategy for GraphMinimaxStrategy {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn select_move<'v>(
        &mut self,
        state: &MatchState,
        vocabulary: &'v Vocabulary,
        candidates: &[&'v str],
    ) -> Option<&'v str> {
        let graph = ChainGraph::build(vocabulary);
        select_best_move(&graph, state, candidates, self.config).map(|(word, _)| word)
    }
}
