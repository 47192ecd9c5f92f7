//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod duel;
pub mod play;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use duel::{DuelResult, DuelStep, run_duel};
pub use play::{PlayOptions, run_play};
