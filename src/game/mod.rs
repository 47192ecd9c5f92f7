//! Match engine for the word chain
//!
//! The engine owns one match; rules are pure functions over a vocabulary
//! and a match state, so presentation code only ever sees returned results.

pub mod diagnostics;
mod engine;
mod outcome;
pub mod rules;
mod state;

pub use diagnostics::{Diagnostic, DiagnosticLog};
pub use engine::{MatchConfig, MatchEngine};
pub use outcome::{MoveError, Outcome, RejectKind};
pub use state::{EndReason, MatchState, Phase, Play, Side};
