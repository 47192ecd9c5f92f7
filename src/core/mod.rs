//! Core domain types for the word chain
//!
//! Normalization and the vocabulary index. Everything here is pure and
//! read-only once built, so one vocabulary can back any number of matches.

mod normalize;
mod vocabulary;

pub use normalize::{first_letter, last_letter, normalize};
pub(crate) use normalize::letter_index;
pub use vocabulary::{DuplicatePolicy, Vocabulary, VocabularyEntry, VocabularyError};
