//! Word-chain graph
//!
//! Nodes are vocabulary words; there is an edge `w -> w'` when `w'` starts
//! with the last letter of `w`. Edges are implicit: successors of a node are
//! the available words in the bucket of its end letter.

use crate::core::{Vocabulary, first_letter, last_letter, letter_index};
use crate::game::MatchState;
use rustc_hash::FxHashMap;

/// Node identifier (index into the graph's word table)
pub type NodeId = u32;

/// Immutable graph topology built from a vocabulary
#[derive(Debug, Clone)]
pub struct ChainGraph<'v> {
    words: Vec<&'v str>,
    starts: Vec<u8>,
    ends: Vec<u8>,
    buckets: [Vec<NodeId>; 26],
    index: FxHashMap<&'v str, NodeId>,
}

impl<'v> ChainGraph<'v> {
    /// Build the graph over every vocabulary entry
    #[must_use]
    pub fn build(vocabulary: &'v Vocabulary) -> Self {
        let mut graph = Self {
            words: Vec::with_capacity(vocabulary.len()),
            starts: Vec::with_capacity(vocabulary.len()),
            ends: Vec::with_capacity(vocabulary.len()),
            buckets: Default::default(),
            index: FxHashMap::default(),
        };

        for entry in vocabulary.iter() {
            let word = entry.normalized();
            let (Some(start), Some(end)) = (
                first_letter(word).and_then(letter_index),
                last_letter(word).and_then(letter_index),
            ) else {
                continue;
            };

            let id = graph.words.len() as NodeId;
            graph.words.push(word);
            graph.starts.push(start as u8);
            graph.ends.push(end as u8);
            graph.buckets[start].push(id);
            graph.index.insert(word, id);
        }

        graph
    }

    /// Node for a normalized word
    #[must_use]
    pub fn node(&self, word: &str) -> Option<NodeId> {
        self.index.get(word).copied()
    }

    /// Word at a node
    #[must_use]
    pub fn word(&self, node: NodeId) -> &'v str {
        self.words[node as usize]
    }

    /// Bucket (0-25) of the node's first letter
    #[inline]
    #[must_use]
    pub fn start(&self, node: NodeId) -> usize {
        self.starts[node as usize] as usize
    }

    /// Bucket (0-25) of the node's last letter
    #[inline]
    #[must_use]
    pub fn end(&self, node: NodeId) -> usize {
        self.ends[node as usize] as usize
    }

    /// All nodes whose word starts with the given letter bucket
    #[must_use]
    pub fn bucket(&self, letter: usize) -> &[NodeId] {
        &self.buckets[letter]
    }

    /// Number of nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Mutable availability over a graph: which words are still unplayed
///
/// Shared by both simulated players, so a word used by either side is gone
/// for both. Cheap to clone for parallel search.
#[derive(Debug, Clone)]
pub struct Frontier {
    available: Vec<bool>,
    remaining: [u32; 26],
}

impl Frontier {
    /// Availability matching the words already played in `state`
    #[must_use]
    pub fn from_state(graph: &ChainGraph<'_>, state: &MatchState) -> Self {
        let mut frontier = Self {
            available: vec![true; graph.len()],
            remaining: [0; 26],
        };
        for letter in 0..26 {
            frontier.remaining[letter] = graph.bucket(letter).len() as u32;
        }
        for word in state.played() {
            if let Some(node) = graph.node(word) {
                frontier.play(graph, node);
            }
        }
        frontier
    }

    /// Whether a node is still unplayed
    #[inline]
    #[must_use]
    pub fn is_available(&self, node: NodeId) -> bool {
        self.available[node as usize]
    }

    /// Unplayed words starting with the letter bucket
    #[inline]
    #[must_use]
    pub fn remaining(&self, letter: usize) -> u32 {
        self.remaining[letter]
    }

    /// Unplayed nodes starting with the letter bucket
    pub fn moves<'g>(
        &'g self,
        graph: &'g ChainGraph<'_>,
        letter: usize,
    ) -> impl Iterator<Item = NodeId> + 'g {
        graph
            .bucket(letter)
            .iter()
            .copied()
            .filter(|&node| self.is_available(node))
    }

    /// Replies the opponent would have if `node` were played now
    #[must_use]
    pub fn out_degree_after(&self, graph: &ChainGraph<'_>, node: NodeId) -> u32 {
        let end = graph.end(node);
        let self_loop = u32::from(graph.start(node) == end && self.is_available(node));
        self.remaining[end].saturating_sub(self_loop)
    }

    /// Mark a node as played
    pub fn play(&mut self, graph: &ChainGraph<'_>, node: NodeId) {
        let slot = &mut self.available[node as usize];
        if *slot {
            *slot = false;
            self.remaining[graph.start(node)] -= 1;
        }
    }

    /// Undo [`Frontier::play`]
    pub fn unplay(&mut self, graph: &ChainGraph<'_>, node: NodeId) {
        let slot = &mut self.available[node as usize];
        if !*slot {
            *slot = true;
            self.remaining[graph.start(node)] += 1;
        }
    }
}
