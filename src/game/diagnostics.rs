//! Engine diagnostics
//!
//! Internal defects the player never sees as rule violations. The engine keeps
//! the most recent records in a bounded buffer for the caller to drain.

use std::collections::VecDeque;
use std::fmt;

/// Default number of diagnostics retained
pub const DEFAULT_CAPACITY: usize = 64;

/// A recorded internal defect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A strategy returned nothing, or a word outside the candidate set
    StrategyInvariantViolation {
        strategy: &'static str,
        turn: usize,
        returned: Option<String>,
        fallback: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StrategyInvariantViolation {
                strategy,
                turn,
                returned,
                fallback,
            } => {
                write!(f, "strategy '{strategy}' on turn {turn} ")?;
                match returned {
                    Some(word) => write!(f, "returned illegal move '{word}'")?,
                    None => write!(f, "returned no move")?,
                }
                write!(f, "; played '{fallback}' instead")
            }
        }
    }
}

/// Bounded FIFO of diagnostics; oldest records are dropped first
#[derive(Debug, Clone)]
pub struct DiagnosticLog {
    records: VecDeque<Diagnostic>,
    capacity: usize,
    dropped: usize,
}

impl DiagnosticLog {
    /// Create a log holding at most `capacity` records
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity: capacity.max(1),
            dropped: 0,
        }
    }

    /// Record a diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        if self.records.len() == self.capacity {
            self.records.pop_front();
            self.dropped += 1;
        }
        self.records.push_back(diagnostic);
    }

    /// Retained records, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.records.iter()
    }

    /// Remove and return all retained records
    pub fn drain(&mut self) -> Vec<Diagnostic> {
        self.records.drain(..).collect()
    }

    /// Number of retained records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records discarded because the log was full
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.dropped
    }
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
