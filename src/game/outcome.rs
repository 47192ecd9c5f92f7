//! Results of engine actions
//!
//! Every action returns either an `Outcome` or a `MoveError`. Rejections are
//! recoverable: the match state is left exactly as it was.

use super::state::{EndReason, Phase};
use std::fmt;
use thiserror::Error;

/// Why a move was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectKind {
    #[error("please enter a word")]
    EmptyInput,

    #[error("that word is not in the vocabulary")]
    UnknownWord,

    #[error("that word has already been played")]
    WordAlreadyUsed,

    #[error("the word must start with '{}'", .required.to_ascii_uppercase())]
    LetterMismatch { required: char },

    #[error("no move is expected right now ({phase})")]
    OutOfTurn { phase: Phase },
}

/// A refused action, carrying the input that was attempted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct MoveError {
    pub kind: RejectKind,
    pub input: String,
}

impl MoveError {
    /// Create a rejection for the given raw input
    #[must_use]
    pub fn new(kind: RejectKind, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }
}

/// Result of the most recent engine action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Player's word was accepted
    Accepted {
        word: String,
        display: String,
        next: char,
    },
    /// Bot played a word
    BotPlayed {
        word: String,
        display: String,
        next: char,
    },
    /// Bot found nothing starting with `letter`
    PlayerWon { letter: char },
    /// Match ended for a reason other than a stuck bot
    GameOver(EndReason),
    /// The last action was refused
    Rejected(MoveError),
    /// Match was reset to its initial state
    Reset,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted { display, .. } => write!(f, "{display} accepted."),
            Self::BotPlayed { display, next, .. } => write!(
                f,
                "My turn: {display}. Your next word should start with {}.",
                next.to_ascii_uppercase()
            ),
            Self::PlayerWon { letter } => write!(
                f,
                "I couldn't find anything starting with {}. You win!",
                letter.to_ascii_uppercase()
            ),
            Self::GameOver(EndReason::TurnLimit) => write!(f, "Turn limit reached. Game over."),
            Self::GameOver(EndReason::Resigned) => write!(f, "You resigned. I win!"),
            Self::Rejected(err) if err.input.trim().is_empty() => {
                write!(f, "Invalid move! {}.", capitalize(&err.kind.to_string()))
            }
            Self::Rejected(err) => write!(f, "Invalid move '{}': {}.", err.input.trim(), err.kind),
            Self::Reset => write!(f, "Game reset! Let's start fresh."),
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
