//! Move validation
//!
//! Pure checks against a vocabulary and a match state. Nothing here mutates;
//! the engine applies a move only after these functions accept it.

use super::outcome::RejectKind;
use super::state::{MatchState, Phase};
use crate::core::{Vocabulary, first_letter, normalize};

/// Validate a raw player submission
///
/// Returns the canonical vocabulary key on success. Checks run in a fixed
/// order: phase, empty input, membership (aliases resolved), repetition,
/// required letter.
///
/// # Errors
/// Returns the `RejectKind` of the first failing check.
pub fn validate_player_move<'v>(
    vocabulary: &'v Vocabulary,
    state: &MatchState,
    raw: &str,
) -> Result<&'v str, RejectKind> {
    let phase = state.phase();
    if !matches!(phase, Phase::AwaitingFirstMove | Phase::AwaitingPlayerMove) {
        return Err(RejectKind::OutOfTurn { phase });
    }

    let normalized = normalize(raw);
    if normalized.is_empty() {
        return Err(RejectKind::EmptyInput);
    }

    let word = vocabulary
        .resolve(&normalized)
        .ok_or(RejectKind::UnknownWord)?;

    if state.is_used(word) {
        return Err(RejectKind::WordAlreadyUsed);
    }

    if phase == Phase::AwaitingPlayerMove {
        if let Some(required) = state.required_letter() {
            if first_letter(word) != Some(required) {
                return Err(RejectKind::LetterMismatch { required });
            }
        }
    }

    Ok(word)
}

/// Every unplayed entry that may legally be played next
///
/// Before the first move that is the whole vocabulary; afterwards, the
/// unplayed entries starting with the required letter. Load order is kept.
#[must_use]
pub fn legal_moves<'v>(vocabulary: &'v Vocabulary, state: &MatchState) -> Vec<&'v str> {
    match state.required_letter() {
        Some(letter) => vocabulary
            .candidates_starting_with(letter)
            .filter(|word| !state.is_used(word))
            .collect(),
        None => vocabulary
            .iter()
            .map(crate::core::VocabularyEntry::normalized)
            .filter(|word| !state.is_used(word))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::Side;

    fn vocab() -> Vocabulary {
        Vocabulary::load(["India", "Afghanistan", "Nepal", "Laos", "Argentina"])
            .unwrap()
            .with_aliases(&[("Hindustan", "India")])
            .unwrap()
    }

    fn after(words: &[&str]) -> MatchState {
        let mut state = MatchState::new();
        for (i, word) in words.iter().enumerate() {
            let side = if i % 2 == 0 { Side::Player } else { Side::Bot };
            state.record(word, side);
        }
        if !words.is_empty() {
            let phase = if words.len() % 2 == 0 {
                Phase::AwaitingPlayerMove
            } else {
                Phase::AwaitingBotMove
            };
            state.set_phase(phase);
        }
        state
    }

    #[test]
    fn first_move_accepts_any_entry() {
        let vocab = vocab();
        let state = MatchState::new();
        assert_eq!(validate_player_move(&vocab, &state, "  Nepal "), Ok("nepal"));
    }

    #[test]
    fn empty_input_rejected() {
        let vocab = vocab();
        let state = MatchState::new();
        assert_eq!(
            validate_player_move(&vocab, &state, " 42 "),
            Err(RejectKind::EmptyInput)
        );
    }

    #[test]
    fn unknown_word_rejected() {
        let vocab = vocab();
        let state = MatchState::new();
        assert_eq!(
            validate_player_move(&vocab, &state, "France"),
            Err(RejectKind::UnknownWord)
        );
    }

    #[test]
    fn alias_resolves_to_entry() {
        let vocab = vocab();
        let state = MatchState::new();
        assert_eq!(validate_player_move(&vocab, &state, "Hindustan"), Ok("india"));
    }

    #[test]
    fn repeat_rejected_even_through_alias() {
        let vocab = vocab();
        let state = after(&["india", "afghanistan"]);
        // Still fails on repetition before the letter check
        assert_eq!(
            validate_player_move(&vocab, &state, "hindustan"),
            Err(RejectKind::WordAlreadyUsed)
        );
    }

    #[test]
    fn letter_mismatch_rejected() {
        let vocab = vocab();
        let state = after(&["india", "argentina"]);
        assert_eq!(
            validate_player_move(&vocab, &state, "nepal"),
            Err(RejectKind::LetterMismatch { required: 'a' })
        );
        assert_eq!(
            validate_player_move(&vocab, &state, "Afghanistan"),
            Ok("afghanistan")
        );
    }

    #[test]
    fn out_of_turn_rejected() {
        let vocab = vocab();
        let state = after(&["india"]);
        assert_eq!(
            validate_player_move(&vocab, &state, "argentina"),
            Err(RejectKind::OutOfTurn {
                phase: Phase::AwaitingBotMove
            })
        );
    }

    #[test]
    fn legal_moves_before_first_move_is_everything() {
        let vocab = vocab();
        assert_eq!(legal_moves(&vocab, &MatchState::new()).len(), 5);
    }

    #[test]
    fn legal_moves_exclude_played_words() {
        let vocab = vocab();
        let state = after(&["argentina"]);
        assert_eq!(legal_moves(&vocab, &state), vec!["afghanistan"]);

        let state = after(&["india", "afghanistan", "nepal", "laos"]);
        assert!(legal_moves(&vocab, &state).is_empty());
    }
}
