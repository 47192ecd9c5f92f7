//! Depth-bounded negamax over the chain graph
//!
//! Scores are from the perspective of the side to move. A side with no legal
//! reply loses; wins found sooner score higher. At the horizon, or once the
//! node budget runs out, positions are scored by mobility: own move count
//! minus the fewest replies any of those moves would leave the opponent.

use super::graph::{ChainGraph, Frontier, NodeId};
use crate::game::MatchState;
use rayon::prelude::*;

/// Score of a position won at ply 0
pub const WIN_SCORE: i32 = 1_000_000;

/// Search limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxConfig {
    /// Plies to search, counting the bot's own move (values below 1 act as 1)
    pub depth: u32,
    /// Interior nodes expanded before falling back to the heuristic
    pub node_budget: u64,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            node_budget: 200_000,
        }
    }
}

impl MinimaxConfig {
    #[must_use]
    pub const fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub const fn with_node_budget(mut self, node_budget: u64) -> Self {
        self.node_budget = node_budget;
        self
    }

    /// Search depth, never below one ply
    #[must_use]
    pub const fn effective_depth(&self) -> u32 {
        if self.depth == 0 { 1 } else { self.depth }
    }
}

/// Select the candidate with the best search score
///
/// Each candidate is searched on its own copy of the frontier, in parallel,
/// with an equal share of the node budget. Ties go to the lexicographically
/// smallest word. Candidates missing from the graph or already played are
/// ignored; returns `None` if nothing remains.
///
/// # Examples
/// ```
/// use atlas_chain::core::Vocabulary;
/// use atlas_chain::game::MatchState;
/// use atlas_chain::strategy::minimax::{ChainGraph, MinimaxConfig, WIN_SCORE, select_best_move};
///
/// let vocab = Vocabulary::load(["Iran", "Italy", "Nepal"]).unwrap();
/// let graph = ChainGraph::build(&vocab);
///
/// let (word, score) = select_best_move(
///     &graph,
///     &MatchState::new(),
///     &["iran", "italy"],
///     MinimaxConfig::default(),
/// )
/// .unwrap();
///
/// // Nothing starts with Y
/// assert_eq!(word, "italy");
/// assert_eq!(score, WIN_SCORE - 1);
/// ```
#[must_use]
pub fn select_best_move<'v>(
    graph: &ChainGraph<'v>,
    state: &MatchState,
    candidates: &[&'v str],
    config: MinimaxConfig,
) -> Option<(&'v str, i32)> {
    let root = Frontier::from_state(graph, state);
    let roots: Vec<(&'v str, NodeId)> = candidates
        .iter()
        .filter_map(|&word| graph.node(word).map(|node| (word, node)))
        .filter(|&(_, node)| root.is_available(node))
        .collect();
    if roots.is_empty() {
        return None;
    }

    let depth = config.effective_depth();
    let share = (config.node_budget / roots.len() as u64).max(1);

    roots
        .par_iter()
        .map(|&(word, node)| {
            let mut frontier = root.clone();
            let mut budget = share;
            frontier.play(graph, node);
            let score = -negamax(graph, &mut frontier, graph.end(node), depth - 1, 1, &mut budget);
            (word, score)
        })
        .max_by(|(a, score_a), (b, score_b)| score_a.cmp(score_b).then_with(|| b.cmp(a)))
}

/// Negamax value for the side that must play a word starting with `letter`
fn negamax(
    graph: &ChainGraph<'_>,
    frontier: &mut Frontier,
    letter: usize,
    depth: u32,
    ply: i32,
    budget: &mut u64,
) -> i32 {
    let moves: Vec<NodeId> = frontier.moves(graph, letter).collect();
    if moves.is_empty() {
        return -(WIN_SCORE - ply);
    }
    if depth == 0 || *budget == 0 {
        return evaluate(graph, frontier, &moves, ply);
    }
    *budget -= 1;

    let mut best = -WIN_SCORE;
    for node in moves {
        frontier.play(graph, node);
        let score = -negamax(graph, frontier, graph.end(node), depth - 1, ply + 1, budget);
        frontier.unplay(graph, node);
        best = best.max(score);
    }
    best
}

/// Horizon score for a side with at least one move
fn evaluate(graph: &ChainGraph<'_>, frontier: &Frontier, moves: &[NodeId], ply: i32) -> i32 {
    let fewest_replies = moves
        .iter()
        .map(|&node| frontier.out_degree_after(graph, node))
        .min()
        .unwrap_or(0);

    if fewest_replies == 0 {
        return WIN_SCORE - (ply + 1);
    }
    moves.len() as i32 - fewest_replies as i32
}
