//! Word lists for the chain game
//!
//! The default vocabulary is the embedded country list, with aliases for
//! common alternate names. The continent list can be played alone or mixed
//! with the countries. Custom lists are read with [`loader`].

mod aliases;
mod embedded;
pub mod loader;

pub use aliases::ALIASES;
pub use embedded::{CONTINENTS, CONTINENTS_COUNT, COUNTRIES, COUNTRIES_COUNT};

use crate::core::{Vocabulary, VocabularyError};

/// Build the default country vocabulary, aliases included
///
/// # Errors
/// Returns a `VocabularyError` if the embedded list or alias table is
/// inconsistent.
pub fn countries() -> Result<Vocabulary, VocabularyError> {
    Vocabulary::load(COUNTRIES)?.with_aliases(ALIASES)
}

/// Build the continent vocabulary
///
/// # Errors
/// Returns a `VocabularyError` if the embedded list is inconsistent.
pub fn continents() -> Result<Vocabulary, VocabularyError> {
    Vocabulary::load(CONTINENTS)
}

/// Countries followed by continents, with the country aliases
///
/// # Errors
/// Returns a `VocabularyError` if a continent collides with a country or the
/// alias table is inconsistent.
pub fn geography() -> Result<Vocabulary, VocabularyError> {
    Vocabulary::load(COUNTRIES.iter().chain(CONTINENTS))?.with_aliases(ALIASES)
}
