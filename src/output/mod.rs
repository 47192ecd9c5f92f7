//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_benchmark_result, print_duel_result, write_diagnostics,
};
pub use formatters::{create_progress_bar, format_chain, mark_last_letter};
