//! Per-match state
//!
//! Each match owns one `MatchState`; nothing here is shared between matches.

use crate::core::last_letter;
use rustc_hash::FxHashSet;
use std::fmt;

/// Which participant made (or is due to make) a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Bot,
}

impl Side {
    /// The other participant
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Bot,
            Self::Bot => Self::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::Bot => write!(f, "bot"),
        }
    }
}

/// Why a match reached `GameOver`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The configured turn limit was reached
    TurnLimit,
    /// The player gave up
    Resigned,
}

/// Match phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No word played yet; any vocabulary entry is legal
    #[default]
    AwaitingFirstMove,
    /// Player must answer the required letter
    AwaitingPlayerMove,
    /// Bot must answer the required letter
    AwaitingBotMove,
    /// Bot had no legal move
    PlayerWon,
    /// Terminal state for rule extensions
    GameOver(EndReason),
}

impl Phase {
    /// Whether no further moves are accepted
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::PlayerWon | Self::GameOver(_))
    }

    /// The side expected to move, if any
    #[must_use]
    pub const fn to_move(self) -> Option<Side> {
        match self {
            Self::AwaitingFirstMove | Self::AwaitingPlayerMove => Some(Side::Player),
            Self::AwaitingBotMove => Some(Side::Bot),
            Self::PlayerWon | Self::GameOver(_) => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AwaitingFirstMove => write!(f, "awaiting first move"),
            Self::AwaitingPlayerMove => write!(f, "awaiting player move"),
            Self::AwaitingBotMove => write!(f, "awaiting bot move"),
            Self::PlayerWon => write!(f, "player won"),
            Self::GameOver(EndReason::TurnLimit) => write!(f, "game over (turn limit)"),
            Self::GameOver(EndReason::Resigned) => write!(f, "game over (resigned)"),
        }
    }
}

/// One accepted move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Play {
    word: String,
    side: Side,
}

impl Play {
    /// Normalized word
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Who played it
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }
}

/// Mutable record of a single match
///
/// Played words are kept in play order alongside a set for O(1) repeat
/// checks. The required letter is always the last letter of the most recent
/// play.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchState {
    plays: Vec<Play>,
    used: FxHashSet<String>,
    required: Option<char>,
    phase: Phase,
}

impl MatchState {
    /// Fresh state at `AwaitingFirstMove`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Letter the next word must start with (`None` before the first move)
    #[inline]
    #[must_use]
    pub const fn required_letter(&self) -> Option<char> {
        self.required
    }

    /// All plays in order
    #[must_use]
    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    /// Played normalized words in order
    pub fn played(&self) -> impl Iterator<Item = &str> {
        self.plays.iter().map(Play::word)
    }

    /// Most recent play
    #[must_use]
    pub fn last_play(&self) -> Option<&Play> {
        self.plays.last()
    }

    /// Whether a normalized word has been played
    #[inline]
    #[must_use]
    pub fn is_used(&self, normalized: &str) -> bool {
        self.used.contains(normalized)
    }

    /// Number of words played so far
    #[inline]
    #[must_use]
    pub fn turns(&self) -> usize {
        self.plays.len()
    }

    /// Append a validated word and move the required letter to its end
    pub(crate) fn record(&mut self, word: &str, side: Side) {
        self.used.insert(word.to_string());
        self.required = last_letter(word);
        self.plays.push(Play {
            word: word.to_string(),
            side,
        });
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
}
