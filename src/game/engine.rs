//! Match engine
//!
//! Drives one match: validates player submissions, asks the configured
//! strategy for the bot's reply, and keeps the phase machine consistent.

use super::diagnostics::{Diagnostic, DiagnosticLog};
use super::outcome::{MoveError, Outcome, RejectKind};
use super::rules;
use super::state::{EndReason, MatchState, Phase, Side};
use crate::core::Vocabulary;
use crate::strategy::MoveStrategy;

/// Rule options for a single match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchConfig {
    /// End the match with `GameOver(TurnLimit)` after this many words
    pub max_turns: Option<usize>,
}

impl MatchConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self { max_turns: None }
    }

    #[must_use]
    pub const fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = Some(max_turns);
        self
    }
}

/// A single match between the player and a bot strategy
///
/// The vocabulary is borrowed so any number of engines can share it; the
/// match state is owned, so engines never interfere with each other.
pub struct MatchEngine<'v, S: MoveStrategy> {
    vocabulary: &'v Vocabulary,
    strategy: S,
    config: MatchConfig,
    state: MatchState,
    last_outcome: Option<Outcome>,
    diagnostics: DiagnosticLog,
}

impl<'v, S: MoveStrategy> MatchEngine<'v, S> {
    /// Create an engine with default rules
    ///
    /// # Examples
    /// ```
    /// use atlas_chain::core::Vocabulary;
    /// use atlas_chain::game::{MatchEngine, Phase};
    /// use atlas_chain::strategy::LongestWordStrategy;
    ///
    /// let vocab = Vocabulary::load(["India", "Afghanistan", "Nepal"]).unwrap();
    /// let mut engine = MatchEngine::new(&vocab, LongestWordStrategy);
    ///
    /// engine.submit_player_move("India").unwrap();
    /// engine.request_bot_move().unwrap();
    /// assert_eq!(engine.played_display(), vec!["India", "Afghanistan"]);
    /// assert_eq!(engine.required_letter(), Some('n'));
    /// assert_eq!(engine.phase(), Phase::AwaitingPlayerMove);
    /// ```
    pub fn new(vocabulary: &'v Vocabulary, strategy: S) -> Self {
        Self::with_config(vocabulary, strategy, MatchConfig::default())
    }

    /// Create an engine with explicit rules
    pub fn with_config(vocabulary: &'v Vocabulary, strategy: S, config: MatchConfig) -> Self {
        Self {
            vocabulary,
            strategy,
            config,
            state: MatchState::new(),
            last_outcome: None,
            diagnostics: DiagnosticLog::default(),
        }
    }

    /// Submit a raw word for the player
    ///
    /// # Errors
    /// Returns a `MoveError` when the word is refused; the match state is
    /// unchanged in that case.
    pub fn submit_player_move(&mut self, raw: &str) -> Result<Outcome, MoveError> {
        let word = match rules::validate_player_move(self.vocabulary, &self.state, raw) {
            Ok(word) => word,
            Err(kind) => return Err(self.reject(kind, raw)),
        };

        self.state.record(word, Side::Player);
        let outcome = match self.advance(Phase::AwaitingBotMove) {
            Some(next) => Outcome::Accepted {
                word: word.to_string(),
                display: self.display(word).to_string(),
                next,
            },
            None => Outcome::GameOver(EndReason::TurnLimit),
        };

        Ok(self.finish(outcome))
    }

    /// Let the bot strategy play
    ///
    /// When the bot has no legal move the player wins and nothing is played.
    /// A strategy answer outside the candidate set is never played: the first
    /// candidate is used instead and a diagnostic is recorded.
    ///
    /// # Errors
    /// Returns `OutOfTurn` unless the phase is `AwaitingBotMove`; the match
    /// state is unchanged in that case.
    pub fn request_bot_move(&mut self) -> Result<Outcome, MoveError> {
        let phase = self.state.phase();
        if phase != Phase::AwaitingBotMove {
            return Err(self.reject(RejectKind::OutOfTurn { phase }, ""));
        }

        let candidates = rules::legal_moves(self.vocabulary, &self.state);
        let Some(&fallback) = candidates.first() else {
            let letter = self.state.required_letter().unwrap_or('?');
            self.state.set_phase(Phase::PlayerWon);
            return Ok(self.finish(Outcome::PlayerWon { letter }));
        };

        let choice = self
            .strategy
            .select_move(&self.state, self.vocabulary, &candidates);

        let word = match choice {
            Some(word) if candidates.contains(&word) => word,
            other => {
                self.diagnostics
                    .push(Diagnostic::StrategyInvariantViolation {
                        strategy: self.strategy.name(),
                        turn: self.state.turns() + 1,
                        returned: other.map(str::to_string),
                        fallback: fallback.to_string(),
                    });
                fallback
            }
        };

        self.state.record(word, Side::Bot);
        let outcome = match self.advance(Phase::AwaitingPlayerMove) {
            Some(next) => Outcome::BotPlayed {
                word: word.to_string(),
                display: self.display(word).to_string(),
                next,
            },
            None => Outcome::GameOver(EndReason::TurnLimit),
        };

        Ok(self.finish(outcome))
    }

    /// Start over with an empty chain
    ///
    /// Diagnostics are kept; they describe the strategy, not the match.
    pub fn reset(&mut self) -> Outcome {
        self.state = MatchState::new();
        self.finish(Outcome::Reset)
    }

    /// Concede the match for the player
    ///
    /// # Errors
    /// Returns `OutOfTurn` if the match is already over.
    pub fn resign(&mut self) -> Result<Outcome, MoveError> {
        let phase = self.state.phase();
        if phase.is_terminal() {
            return Err(self.reject(RejectKind::OutOfTurn { phase }, ""));
        }

        self.state.set_phase(Phase::GameOver(EndReason::Resigned));
        Ok(self.finish(Outcome::GameOver(EndReason::Resigned)))
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Side expected to move next, if the match is live
    #[must_use]
    pub const fn whose_turn(&self) -> Option<Side> {
        self.state.phase().to_move()
    }

    /// Letter the next word must start with
    #[must_use]
    pub const fn required_letter(&self) -> Option<char> {
        self.state.required_letter()
    }

    /// Played normalized words in order
    #[must_use]
    pub fn played(&self) -> Vec<&str> {
        self.state.played().collect()
    }

    /// Played words in display form, in order
    #[must_use]
    pub fn played_display(&self) -> Vec<&str> {
        self.state.played().map(|word| self.display(word)).collect()
    }

    /// Unplayed words the side to move could legally play
    #[must_use]
    pub fn legal_moves(&self) -> Vec<&'v str> {
        if self.state.phase().is_terminal() {
            return Vec::new();
        }
        rules::legal_moves(self.vocabulary, &self.state)
    }

    /// Result of the most recent action, rejections included
    #[must_use]
    pub const fn last_outcome(&self) -> Option<&Outcome> {
        self.last_outcome.as_ref()
    }

    /// Snapshot of the match state
    #[must_use]
    pub const fn state(&self) -> &MatchState {
        &self.state
    }

    /// Vocabulary this match is played over
    #[must_use]
    pub const fn vocabulary(&self) -> &'v Vocabulary {
        self.vocabulary
    }

    /// Rules in force
    #[must_use]
    pub const fn config(&self) -> MatchConfig {
        self.config
    }

    /// Strategy governing the bot
    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Recorded diagnostics, oldest first
    #[must_use]
    pub const fn diagnostics(&self) -> &DiagnosticLog {
        &self.diagnostics
    }

    /// Remove and return recorded diagnostics
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.drain()
    }

    /// Move to `next`, or to `GameOver` once the turn limit is hit
    ///
    /// Returns the new required letter, or `None` if the limit ended the match.
    fn advance(&mut self, next: Phase) -> Option<char> {
        let limit_reached = self
            .config
            .max_turns
            .is_some_and(|max| self.state.turns() >= max);

        if limit_reached {
            self.state.set_phase(Phase::GameOver(EndReason::TurnLimit));
            return None;
        }
        self.state.set_phase(next);
        Some(self.state.required_letter().unwrap_or('?'))
    }

    fn display<'a>(&'a self, word: &'a str) -> &'a str {
        self.vocabulary.display_of(word).unwrap_or(word)
    }

    fn reject(&mut self, kind: RejectKind, input: &str) -> MoveError {
        let err = MoveError::new(kind, input);
        self.last_outcome = Some(Outcome::Rejected(err.clone()));
        err
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        self.last_outcome = Some(outcome.clone());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{LongestWordStrategy, RandomStrategy};
    use proptest::prelude::*;

    /// Strategy that always answers with a fixed word, legal or not
    struct Stubborn(&'static str);

    impl MoveStrategy for Stubborn {
        fn name(&self) -> &'static str {
            "stubborn"
        }

        fn select_move<'a>(
            &mut self,
            _state: &MatchState,
            _vocabulary: &'a Vocabulary,
            _candidates: &[&'a str],
        ) -> Option<&'a str> {
            Some(self.0)
        }
    }

    /// Strategy that never answers
    struct Silent;

    impl MoveStrategy for Silent {
        fn name(&self) -> &'static str {
            "silent"
        }

        fn select_move<'a>(
            &mut self,
            _state: &MatchState,
            _vocabulary: &'a Vocabulary,
            _candidates: &[&'a str],
        ) -> Option<&'a str> {
            None
        }
    }

    fn four_countries() -> Vocabulary {
        Vocabulary::load(["india", "afghanistan", "nepal", "laos"]).unwrap()
    }

    #[test]
    fn chain_until_bot_is_stuck() {
        let vocab = four_countries();
        let mut engine = MatchEngine::new(&vocab, LongestWordStrategy);

        let outcome = engine.submit_player_move("India").unwrap();
        assert_eq!(
            outcome,
            Outcome::Accepted {
                word: "india".to_string(),
                display: "india".to_string(),
                next: 'a',
            }
        );
        assert_eq!(engine.required_letter(), Some('a'));

        // Walk the player's side through the remaining chain by hand
        for (word, letter) in [("afghanistan", 'n'), ("nepal", 'l'), ("laos", 's')] {
            engine.state.set_phase(Phase::AwaitingPlayerMove);
            engine.submit_player_move(word).unwrap();
            assert_eq!(engine.required_letter(), Some(letter));
        }

        let outcome = engine.request_bot_move().unwrap();
        assert_eq!(outcome, Outcome::PlayerWon { letter: 's' });
        assert_eq!(engine.phase(), Phase::PlayerWon);
        assert_eq!(engine.played().len(), 4);
    }

    #[test]
    fn display_form_is_reported() {
        let vocab = Vocabulary::load(["India", "Afghanistan"]).unwrap();
        let mut engine = MatchEngine::new(&vocab, LongestWordStrategy);

        engine.submit_player_move("INDIA").unwrap();
        assert_eq!(engine.played_display(), vec!["India"]);
        assert_eq!(engine.played(), vec!["india"]);
    }

    #[test]
    fn repeated_word_rejected_and_state_unchanged() {
        let vocab = Vocabulary::load(["India", "Argentina", "Afghanistan"]).unwrap();
        let mut engine = MatchEngine::new(&vocab, Stubborn("argentina"));

        engine.submit_player_move("india").unwrap();
        engine.request_bot_move().unwrap();
        let before = engine.state().clone();

        // "argentina" already played by the bot
        let err = engine.submit_player_move("Argentina").unwrap_err();
        assert_eq!(err.kind, RejectKind::WordAlreadyUsed);
        assert_eq!(err.input, "Argentina");
        assert_eq!(engine.state(), &before);
        assert_eq!(engine.last_outcome(), Some(&Outcome::Rejected(err)));
    }

    #[test]
    fn first_word_cannot_be_repeated() {
        let vocab = Vocabulary::load(["India", "Argentina", "Iran"]).unwrap();
        let mut engine = MatchEngine::new(&vocab, Stubborn("argentina"));

        engine.submit_player_move("india").unwrap();
        engine.request_bot_move().unwrap();
        let before = engine.state().clone();

        let err = engine.submit_player_move("India").unwrap_err();
        assert_eq!(err.kind, RejectKind::WordAlreadyUsed);
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn letter_mismatch_rejected() {
        let vocab = four_countries();
        let mut engine = MatchEngine::new(&vocab, LongestWordStrategy);

        engine.submit_player_move("india").unwrap();
        engine.state.set_phase(Phase::AwaitingPlayerMove);

        let err = engine.submit_player_move("nepal").unwrap_err();
        assert_eq!(err.kind, RejectKind::LetterMismatch { required: 'a' });
        assert_eq!(engine.played(), vec!["india"]);
    }

    #[test]
    fn empty_and_unknown_input_rejected() {
        let vocab = four_countries();
        let mut engine = MatchEngine::new(&vocab, LongestWordStrategy);

        assert_eq!(
            engine.submit_player_move("  !! ").unwrap_err().kind,
            RejectKind::EmptyInput
        );
        assert_eq!(
            engine.submit_player_move("France").unwrap_err().kind,
            RejectKind::UnknownWord
        );
        assert_eq!(engine.phase(), Phase::AwaitingFirstMove);
    }

    #[test]
    fn bot_move_out_of_turn_is_rejected_without_mutation() {
        let vocab = four_countries();
        let mut engine = MatchEngine::new(&vocab, LongestWordStrategy);

        let before = engine.state().clone();
        let err = engine.request_bot_move().unwrap_err();
        assert_eq!(
            err.kind,
            RejectKind::OutOfTurn {
                phase: Phase::AwaitingFirstMove
            }
        );
        assert_eq!(engine.state(), &before);

        engine.submit_player_move("india").unwrap();
        engine.request_bot_move().unwrap();
        let before = engine.state().clone();
        assert!(engine.request_bot_move().is_err());
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn player_move_out_of_turn_is_rejected() {
        let vocab = four_countries();
        let mut engine = MatchEngine::new(&vocab, LongestWordStrategy);

        engine.submit_player_move("india").unwrap();
        let err = engine.submit_player_move("afghanistan").unwrap_err();
        assert_eq!(
            err.kind,
            RejectKind::OutOfTurn {
                phase: Phase::AwaitingBotMove
            }
        );
    }

    #[test]
    fn bot_plays_and_hands_turn_back() {
        let vocab = four_countries();
        let mut engine = MatchEngine::new(&vocab, LongestWordStrategy);

        engine.submit_player_move("india").unwrap();
        assert_eq!(engine.whose_turn(), Some(Side::Bot));

        let outcome = engine.request_bot_move().unwrap();
        assert_eq!(
            outcome,
            Outcome::BotPlayed {
                word: "afghanistan".to_string(),
                display: "afghanistan".to_string(),
                next: 'n',
            }
        );
        assert_eq!(engine.whose_turn(), Some(Side::Player));
        assert_eq!(engine.legal_moves(), vec!["nepal"]);
    }

    #[test]
    fn illegal_strategy_answer_falls_back_with_diagnostic() {
        let vocab = Vocabulary::load(["India", "Argentina", "Afghanistan"]).unwrap();
        // "india" is already played, so this answer is illegal
        let mut engine = MatchEngine::new(&vocab, Stubborn("india"));

        engine.submit_player_move("india").unwrap();
        let outcome = engine.request_bot_move().unwrap();

        // First candidate in load order
        assert!(matches!(outcome, Outcome::BotPlayed { ref word, .. } if word == "argentina"));
        assert_eq!(engine.diagnostics().len(), 1);

        let diagnostics = engine.take_diagnostics();
        assert_eq!(
            diagnostics,
            vec![Diagnostic::StrategyInvariantViolation {
                strategy: "stubborn",
                turn: 2,
                returned: Some("india".to_string()),
                fallback: "argentina".to_string(),
            }]
        );
        assert!(engine.diagnostics().is_empty());
    }

    #[test]
    fn silent_strategy_falls_back() {
        let vocab = four_countries();
        let mut engine = MatchEngine::new(&vocab, Silent);

        engine.submit_player_move("india").unwrap();
        engine.request_bot_move().unwrap();
        assert_eq!(engine.played(), vec!["india", "afghanistan"]);
        assert_eq!(engine.diagnostics().len(), 1);
    }

    #[test]
    fn reset_clears_chain() {
        let vocab = four_countries();
        let mut engine = MatchEngine::new(&vocab, LongestWordStrategy);

        engine.submit_player_move("india").unwrap();
        engine.request_bot_move().unwrap();
        assert_eq!(engine.reset(), Outcome::Reset);

        assert_eq!(engine.phase(), Phase::AwaitingFirstMove);
        assert_eq!(engine.required_letter(), None);
        assert!(engine.played().is_empty());
        engine.submit_player_move("india").unwrap();
    }

    #[test]
    fn resign_ends_match() {
        let vocab = four_countries();
        let mut engine = MatchEngine::new(&vocab, LongestWordStrategy);

        engine.submit_player_move("india").unwrap();
        engine.request_bot_move().unwrap();
        assert_eq!(
            engine.resign().unwrap(),
            Outcome::GameOver(EndReason::Resigned)
        );
        assert_eq!(engine.phase(), Phase::GameOver(EndReason::Resigned));
        assert!(engine.legal_moves().is_empty());
        assert!(engine.resign().is_err());
        assert!(engine.submit_player_move("nepal").is_err());
    }

    #[test]
    fn turn_limit_ends_match() {
        let vocab = four_countries();
        let config = MatchConfig::new().with_max_turns(2);
        let mut engine = MatchEngine::with_config(&vocab, LongestWordStrategy, config);

        assert!(matches!(
            engine.submit_player_move("india").unwrap(),
            Outcome::Accepted { .. }
        ));
        let outcome = engine.request_bot_move().unwrap();
        assert_eq!(outcome, Outcome::GameOver(EndReason::TurnLimit));
        assert_eq!(outcome.to_string(), "Turn limit reached. Game over.");
        assert_eq!(engine.last_outcome(), Some(&outcome));
        assert_eq!(engine.phase(), Phase::GameOver(EndReason::TurnLimit));

        // The word that hit the limit still counts
        assert_eq!(engine.played(), vec!["india", "afghanistan"]);
        assert!(engine.submit_player_move("nepal").is_err());
    }

    #[test]
    fn turn_limit_on_player_move() {
        let vocab = four_countries();
        let config = MatchConfig::new().with_max_turns(1);
        let mut engine = MatchEngine::with_config(&vocab, LongestWordStrategy, config);

        let outcome = engine.submit_player_move("India").unwrap();
        assert_eq!(outcome, Outcome::GameOver(EndReason::TurnLimit));
        assert_eq!(engine.last_outcome(), Some(&outcome));
        assert_eq!(engine.played_display(), vec!["India"]);
        assert!(engine.request_bot_move().is_err());
    }

    /// Every action in a finished match is refused and leaves the state alone
    fn assert_frozen<S: MoveStrategy>(engine: &mut MatchEngine<'_, S>, word: &str) {
        let phase = engine.phase();
        let before = engine.state().clone();
        let refused = RejectKind::OutOfTurn { phase };

        assert_eq!(engine.request_bot_move().unwrap_err().kind, refused);
        assert_eq!(engine.state(), &before);
        assert_eq!(engine.submit_player_move(word).unwrap_err().kind, refused);
        assert_eq!(engine.state(), &before);
        assert_eq!(engine.resign().unwrap_err().kind, refused);
        assert_eq!(engine.state(), &before);
        assert!(engine.legal_moves().is_empty());
    }

    #[test]
    fn finished_matches_refuse_every_action() {
        // Bot is stuck on Y
        let vocab = Vocabulary::load(["Italy", "India", "Iran"]).unwrap();
        let mut engine = MatchEngine::new(&vocab, LongestWordStrategy);
        engine.submit_player_move("italy").unwrap();
        engine.request_bot_move().unwrap();
        assert_eq!(engine.phase(), Phase::PlayerWon);
        assert_frozen(&mut engine, "india");

        let vocab = four_countries();
        let mut engine = MatchEngine::new(&vocab, LongestWordStrategy);
        engine.submit_player_move("india").unwrap();
        engine.resign().unwrap();
        assert_eq!(engine.phase(), Phase::GameOver(EndReason::Resigned));
        assert_frozen(&mut engine, "afghanistan");

        let config = MatchConfig::new().with_max_turns(2);
        let mut engine = MatchEngine::with_config(&vocab, LongestWordStrategy, config);
        engine.submit_player_move("india").unwrap();
        engine.request_bot_move().unwrap();
        assert_eq!(engine.phase(), Phase::GameOver(EndReason::TurnLimit));
        assert_frozen(&mut engine, "nepal");
    }

    #[test]
    fn independent_matches_share_vocabulary() {
        let vocab = four_countries();
        let mut first = MatchEngine::new(&vocab, LongestWordStrategy);
        let mut second = MatchEngine::new(&vocab, RandomStrategy::new(7));

        first.submit_player_move("india").unwrap();
        second.submit_player_move("nepal").unwrap();

        assert_eq!(first.played(), vec!["india"]);
        assert_eq!(second.played(), vec!["nepal"]);
        assert_eq!(second.required_letter(), Some('l'));
    }

    fn country_vocab() -> Vocabulary {
        crate::wordlists::countries().unwrap()
    }

    proptest! {
        #[test]
        fn played_words_never_repeat_and_chain(
            seed in any::<u64>(),
            picks in proptest::collection::vec(any::<prop::sample::Index>(), 1..40),
        ) {
            let vocab = country_vocab();
            let mut engine = MatchEngine::new(&vocab, RandomStrategy::new(seed));

            for pick in picks {
                match engine.phase() {
                    Phase::AwaitingFirstMove | Phase::AwaitingPlayerMove => {
                        let moves = engine.legal_moves();
                        if moves.is_empty() {
                            break;
                        }
                        let required = engine.required_letter();
                        let word = moves[pick.index(moves.len())];
                        engine.submit_player_move(word).unwrap();
                        if let Some(letter) = required {
                            prop_assert_eq!(word.chars().next(), Some(letter));
                        }
                    }
                    Phase::AwaitingBotMove => {
                        let required = engine.required_letter();
                        if let Outcome::BotPlayed { word, .. } = engine.request_bot_move().unwrap() {
                            prop_assert_eq!(word.chars().next(), required);
                        }
                    }
                    Phase::PlayerWon | Phase::GameOver(_) => break,
                }

                let played = engine.played();
                let unique: std::collections::HashSet<_> = played.iter().collect();
                prop_assert_eq!(unique.len(), played.len());
                if let Some(last) = played.last() {
                    prop_assert_eq!(engine.required_letter(), last.chars().last());
                }
            }
            prop_assert!(engine.diagnostics().is_empty());
        }
    }
}
