//! Deterministic single-ply heuristics
//!
//! Both strategies rank candidates by a score and break ties on the
//! lexicographically smallest word, so identical inputs always produce the
//! same move.

use super::MoveStrategy;
use crate::core::{Vocabulary, first_letter, last_letter, letter_index};
use crate::game::MatchState;

/// Longest candidate wins
#[derive(Debug, Clone, Copy, Default)]
pub struct LongestWordStrategy;

impl MoveStrategy for LongestWordStrategy {
    fn name(&self) -> &'static str {
        "longest"
    }

    fn select_move<'v>(
        &mut self,
        _state: &MatchState,
        _vocabulary: &'v Vocabulary,
        candidates: &[&'v str],
    ) -> Option<&'v str> {
        candidates
            .iter()
            .copied()
            .min_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)))
    }
}

/// Leave the opponent the scarcest letter
///
/// A candidate's score is how many unplayed entries would start with its last
/// letter once it is played. The lowest score wins; zero means the opponent
/// is stuck.
#[derive(Debug, Clone, Copy, Default)]
pub struct RarestLetterTrapStrategy;

impl RarestLetterTrapStrategy {
    /// Unplayed entries per starting letter
    fn available_by_letter(state: &MatchState, vocabulary: &Vocabulary) -> [usize; 26] {
        let mut available = [0; 26];
        for entry in vocabulary.iter() {
            let word = entry.normalized();
            if state.is_used(word) {
                continue;
            }
            if let Some(bucket) = first_letter(word).and_then(letter_index) {
                available[bucket] += 1;
            }
        }
        available
    }

    /// Options the opponent would have after `word` is played
    fn replies_after(word: &str, available: &[usize; 26]) -> usize {
        let Some(end) = last_letter(word) else {
            return 0;
        };
        let Some(bucket) = letter_index(end) else {
            return 0;
        };
        // The word itself is no longer available once played
        let self_loop = usize::from(first_letter(word) == Some(end));
        available[bucket].saturating_sub(self_loop)
    }
}

impl MoveStrategy for RarestLetterTrapStrategy {
    fn name(&self) -> &'static str {
        "trap"
    }

    fn select_move<'v>(
        &mut self,
        state: &MatchState,
        vocabulary: &'v Vocabulary,
        candidates: &[&'v str],
    ) -> Option<&'v str> {
        let available = Self::available_by_letter(state, vocabulary);

        candidates
            .iter()
            .map(|&word| (word, Self::replies_after(word, &available)))
            .min_by(|(a, score_a), (b, score_b)| score_a.cmp(score_b).then_with(|| a.cmp(b)))
            .map(|(word, _)| word)
    }
}
