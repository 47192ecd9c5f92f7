//! Strategy duel command
//!
//! Plays one full match where a challenger strategy takes the player's side
//! against the bot strategy, and records the chain.

use crate::core::Vocabulary;
use crate::game::{EndReason, MatchConfig, MatchEngine, MoveError, Phase, Side};
use crate::strategy::MoveStrategy;

/// A single word in a duel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuelStep {
    pub side: Side,
    pub word: String,
    /// Legal moves the side had when it played
    pub options: usize,
}

/// Result of a duel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuelResult {
    pub challenger: &'static str,
    pub bot: &'static str,
    pub steps: Vec<DuelStep>,
    /// `None` when the turn limit ended the match
    pub winner: Option<Side>,
    /// Strategy answers the engine had to replace
    pub violations: usize,
}

impl DuelResult {
    /// Words played in the chain
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Play a full match between `challenger` (player side) and `bot`
///
/// `opening` forces the challenger's first word. A challenger with no legal
/// move, or one that answers outside its options, resigns.
///
/// # Errors
///
/// Returns the engine's rejection if `opening` is not a legal first word.
pub fn run_duel<C, B>(
    vocabulary: &Vocabulary,
    mut challenger: C,
    bot: B,
    config: MatchConfig,
    opening: Option<&str>,
) -> Result<DuelResult, MoveError>
where
    C: MoveStrategy,
    B: MoveStrategy,
{
    let challenger_name = challenger.name();
    let mut engine = MatchEngine::with_config(vocabulary, bot, config);
    let mut steps = Vec::new();
    let mut violations = 0;

    if let Some(word) = opening {
        let options = engine.legal_moves().len();
        engine.submit_player_move(word)?;
        steps.push(last_step(&engine, Side::Player, options));
    }

    let winner = loop {
        match engine.phase() {
            Phase::AwaitingFirstMove | Phase::AwaitingPlayerMove => {
                let moves = engine.legal_moves();
                let choice = if moves.is_empty() {
                    None
                } else {
                    challenger.select_move(engine.state(), vocabulary, &moves)
                };

                let accepted = match choice {
                    Some(word) if moves.contains(&word) => {
                        engine.submit_player_move(word).is_ok()
                    }
                    Some(_) => {
                        violations += 1;
                        false
                    }
                    None => false,
                };
                if accepted {
                    steps.push(last_step(&engine, Side::Player, moves.len()));
                } else {
                    engine.resign()?;
                }
            }
            Phase::AwaitingBotMove => {
                let options = engine.legal_moves().len();
                let turns = engine.state().turns();
                engine.request_bot_move()?;
                if engine.state().turns() > turns {
                    steps.push(last_step(&engine, Side::Bot, options));
                }
            }
            Phase::PlayerWon => break Some(Side::Player),
            Phase::GameOver(EndReason::Resigned) => break Some(Side::Bot),
            Phase::GameOver(EndReason::TurnLimit) => break None,
        }
    };

    violations += engine.take_diagnostics().len();

    Ok(DuelResult {
        challenger: challenger_name,
        bot: engine.strategy().name(),
        steps,
        winner,
        violations,
    })
}

/// Step for the most recently played word
fn last_step<S>(engine: &MatchEngine<'_, S>, side: Side, options: usize) -> DuelStep
where
    S: MoveStrategy,
{
    let word = engine
        .played_display()
        .last()
        .map_or_else(String::new, |word| (*word).to_string());
    DuelStep {
        side,
        word,
        options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RejectKind;
    use crate::strategy::{LongestWordStrategy, RandomStrategy, RarestLetterTrapStrategy};

    fn four_countries() -> Vocabulary {
        Vocabulary::load(["India", "Afghanistan", "Nepal", "Laos"]).unwrap()
    }

    #[test]
    fn chain_runs_until_challenger_is_stuck() {
        let vocab = four_countries();
        let result = run_duel(
            &vocab,
            LongestWordStrategy,
            LongestWordStrategy,
            MatchConfig::default(),
            Some("India"),
        )
        .unwrap();

        let words: Vec<&str> = result.steps.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["India", "Afghanistan", "Nepal", "Laos"]);
        // Nothing starts with S, so the challenger resigns
        assert_eq!(result.winner, Some(Side::Bot));
        assert_eq!(result.violations, 0);
        assert_eq!(result.steps[1].side, Side::Bot);
    }

    #[test]
    fn stuck_bot_loses() {
        let vocab = Vocabulary::load(["India", "Afghanistan", "Nepal"]).unwrap();
        let result = run_duel(
            &vocab,
            LongestWordStrategy,
            LongestWordStrategy,
            MatchConfig::default(),
            Some("India"),
        )
        .unwrap();

        // Nepal leaves the bot needing an L
        assert_eq!(result.len(), 3);
        assert_eq!(result.winner, Some(Side::Player));
    }

    #[test]
    fn turn_limit_has_no_winner() {
        let vocab = four_countries();
        let result = run_duel(
            &vocab,
            LongestWordStrategy,
            LongestWordStrategy,
            MatchConfig::new().with_max_turns(2),
            Some("India"),
        )
        .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result.steps[1].word, "Afghanistan");
        assert_eq!(result.winner, None);
    }

    #[test]
    fn turn_limit_on_challenger_move_keeps_the_word() {
        let vocab = four_countries();
        let result = run_duel(
            &vocab,
            LongestWordStrategy,
            LongestWordStrategy,
            MatchConfig::new().with_max_turns(3),
            Some("India"),
        )
        .unwrap();

        let words: Vec<&str> = result.steps.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["India", "Afghanistan", "Nepal"]);
        assert_eq!(result.winner, None);
    }

    #[test]
    fn illegal_opening_is_an_error() {
        let vocab = four_countries();
        let err = run_duel(
            &vocab,
            LongestWordStrategy,
            LongestWordStrategy,
            MatchConfig::default(),
            Some("France"),
        )
        .unwrap_err();
        assert_eq!(err.kind, RejectKind::UnknownWord);
    }

    #[test]
    fn full_country_duel_keeps_the_chain() {
        let vocab = crate::wordlists::countries().unwrap();
        let result = run_duel(
            &vocab,
            RandomStrategy::new(11),
            RarestLetterTrapStrategy,
            MatchConfig::default(),
            None,
        )
        .unwrap();

        assert!(result.winner.is_some());
        assert_eq!(result.violations, 0);
        for pair in result.steps.windows(2) {
            let last = crate::core::normalize(&pair[0].word).chars().last();
            let first = crate::core::normalize(&pair[1].word).chars().next();
            assert_eq!(last, first);
            assert_ne!(pair[0].side, pair[1].side);
        }
    }
}
