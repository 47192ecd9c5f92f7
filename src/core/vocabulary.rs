//! Vocabulary index
//!
//! An immutable set of playable words keyed by normalized form, with a
//! per-letter bucket index for enumerating legal moves.

use super::normalize::{first_letter, index_letter, letter_index, normalize};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors raised while building or querying a vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    /// Two display forms share one normalized key
    #[error("'{second}' duplicates '{first}' (both normalize to '{normalized}')")]
    DuplicateEntry {
        normalized: String,
        first: String,
        second: String,
    },

    /// A raw entry has no letters left after normalization
    #[error("entry '{0}' has no letters")]
    EmptyEntry(String),

    /// The word is not part of the vocabulary
    #[error("'{0}' is not in the vocabulary")]
    UnknownWord(String),
}

/// What to do when two entries normalize to the same key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fail the load with `DuplicateEntry`
    #[default]
    Reject,
    /// Keep the first display form, drop later ones
    KeepFirst,
}

/// A single vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
    normalized: String,
    display: String,
}

impl VocabularyEntry {
    /// Canonical key
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Original spelling, for output only
    #[inline]
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }
}

/// Read-only word index shared by every match
///
/// Built once at startup; all lookups take normalized forms.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    entries: Vec<VocabularyEntry>,
    by_key: FxHashMap<String, usize>,
    by_letter: [Vec<usize>; 26],
    aliases: FxHashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary, rejecting duplicate normalized forms
    ///
    /// # Errors
    /// Returns `DuplicateEntry` if two entries normalize identically, or
    /// `EmptyEntry` if an entry contains no letters.
    ///
    /// # Examples
    /// ```
    /// use atlas_chain::core::Vocabulary;
    ///
    /// let vocab = Vocabulary::load(["India", "Nepal"]).unwrap();
    /// assert!(vocab.contains("india"));
    /// assert_eq!(vocab.display_of("nepal").unwrap(), "Nepal");
    ///
    /// assert!(Vocabulary::load(["Laos", "LAOS"]).is_err());
    /// ```
    pub fn load<I, S>(raw_entries: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::load_with(raw_entries, DuplicatePolicy::Reject)
    }

    /// Build a vocabulary with an explicit duplicate policy
    ///
    /// # Errors
    /// Returns `EmptyEntry` for entries without letters, and `DuplicateEntry`
    /// under `DuplicatePolicy::Reject`.
    pub fn load_with<I, S>(raw_entries: I, policy: DuplicatePolicy) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocab = Self::default();

        for raw in raw_entries {
            let display = raw.as_ref().trim();
            let normalized = normalize(display);

            let Some(letter) = first_letter(&normalized).and_then(letter_index) else {
                return Err(VocabularyError::EmptyEntry(display.to_string()));
            };

            if let Some(&existing) = vocab.by_key.get(&normalized) {
                match policy {
                    DuplicatePolicy::KeepFirst => continue,
                    DuplicatePolicy::Reject => {
                        return Err(VocabularyError::DuplicateEntry {
                            normalized,
                            first: vocab.entries[existing].display.clone(),
                            second: display.to_string(),
                        });
                    }
                }
            }

            let index = vocab.entries.len();
            vocab.by_key.insert(normalized.clone(), index);
            vocab.by_letter[letter].push(index);
            vocab.entries.push(VocabularyEntry {
                normalized,
                display: display.to_string(),
            });
        }

        Ok(vocab)
    }

    /// Register alternate spellings for existing entries
    ///
    /// Each pair is `(alias, target)` in raw form. Aliases that normalize to
    /// an existing entry are ignored so the entry itself always wins.
    ///
    /// # Errors
    /// Returns `UnknownWord` if a target is not in the vocabulary, or
    /// `EmptyEntry` if an alias has no letters.
    pub fn with_aliases(mut self, pairs: &[(&str, &str)]) -> Result<Self, VocabularyError> {
        for &(alias, target) in pairs {
            let key = normalize(alias);
            if key.is_empty() {
                return Err(VocabularyError::EmptyEntry(alias.to_string()));
            }

            let target_key = normalize(target);
            let &index = self
                .by_key
                .get(&target_key)
                .ok_or(VocabularyError::UnknownWord(target_key))?;

            if !self.by_key.contains_key(&key) {
                self.aliases.insert(key, index);
            }
        }

        Ok(self)
    }

    /// Membership test on a normalized form
    #[inline]
    #[must_use]
    pub fn contains(&self, normalized: &str) -> bool {
        self.by_key.contains_key(normalized)
    }

    /// Resolve a normalized form or alias to its canonical entry key
    #[must_use]
    pub fn resolve(&self, normalized: &str) -> Option<&str> {
        self.by_key
            .get(normalized)
            .or_else(|| self.aliases.get(normalized))
            .map(|&index| self.entries[index].normalized.as_str())
    }

    /// Display form of a normalized word
    ///
    /// # Errors
    /// Returns `UnknownWord` if the word is not in the vocabulary.
    pub fn display_of(&self, normalized: &str) -> Result<&str, VocabularyError> {
        self.by_key
            .get(normalized)
            .map(|&index| self.entries[index].display.as_str())
            .ok_or_else(|| VocabularyError::UnknownWord(normalized.to_string()))
    }

    /// All entries starting with `letter`, in load order
    ///
    /// Letters outside `a`-`z` have no entries.
    pub fn candidates_starting_with(&self, letter: char) -> impl Iterator<Item = &str> + '_ {
        letter_index(letter)
            .map_or(&[][..], |bucket| self.by_letter[bucket].as_slice())
            .iter()
            .map(|&index| self.entries[index].normalized.as_str())
    }

    /// Number of entries starting with `letter`
    #[must_use]
    pub fn count_starting_with(&self, letter: char) -> usize {
        letter_index(letter).map_or(0, |bucket| self.by_letter[bucket].len())
    }

    /// Entry counts per starting letter, `a` through `z`
    #[must_use]
    pub fn letter_counts(&self) -> [(char, usize); 26] {
        std::array::from_fn(|bucket| (index_letter(bucket), self.by_letter[bucket].len()))
    }

    /// Iterate all entries in load order
    pub fn iter(&self) -> impl Iterator<Item = &VocabularyEntry> {
        self.entries.iter()
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vocabulary has no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
