//! Atlas word chain
//!
//! Rules engine for the Atlas word-chain game with pluggable bot strategies:
//! every word must start with the last letter of the previous one, may be
//! played only once, and must belong to a fixed vocabulary.
//!
//! # Quick Start
//!
//! ```rust
//! use atlas_chain::game::{MatchEngine, Outcome};
//! use atlas_chain::strategy::RarestLetterTrapStrategy;
//! use atlas_chain::wordlists;
//!
//! let vocab = wordlists::countries().unwrap();
//! let mut engine = MatchEngine::new(&vocab, RarestLetterTrapStrategy);
//!
//! engine.submit_player_move("Peru").unwrap();
//! match engine.request_bot_move().unwrap() {
//!     Outcome::BotPlayed { word, .. } => assert!(word.starts_with('u')),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

// Normalization and vocabulary
pub mod core;

// Match state, rules and engine
pub mod game;

// Bot move selection
pub mod strategy;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
