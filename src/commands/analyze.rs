//! Word analysis command
//!
//! Reports how a word sits in the chain graph: what it accepts, what it
//! leaves the opponent, and the per-letter availability of the vocabulary.

use crate::core::{Vocabulary, VocabularyError, first_letter, last_letter, normalize};

/// Result of analyzing a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub display: String,
    pub normalized: String,
    pub first: char,
    pub last: char,
    /// Words that could follow this one on a fresh board
    pub replies: usize,
    /// Words that could precede this one
    pub predecessors: usize,
    /// No word starts with the last letter (other than the word itself)
    pub dead_end: bool,
    /// Entries per starting letter, `a` to `z`
    pub letter_profile: [(char, usize); 26],
    pub total_words: usize,
}

/// Analyze a word against the vocabulary
///
/// Aliases are accepted and resolved to their vocabulary entry.
///
/// # Errors
///
/// Returns `UnknownWord` if the word is not in the vocabulary.
///
/// # Examples
/// ```
/// use atlas_chain::commands::analyze_word;
/// use atlas_chain::core::Vocabulary;
///
/// let vocab = Vocabulary::load(["Italy", "Iran", "Nepal"]).unwrap();
/// let result = analyze_word(&vocab, "italy").unwrap();
/// assert_eq!(result.display, "Italy");
/// assert!(result.dead_end);
/// ```
pub fn analyze_word(vocabulary: &Vocabulary, raw: &str) -> Result<AnalysisResult, VocabularyError> {
    let word = vocabulary
        .resolve(&normalize(raw))
        .ok_or_else(|| VocabularyError::UnknownWord(raw.trim().to_string()))?;
    let display = vocabulary.display_of(word)?;

    let (Some(first), Some(last)) = (first_letter(word), last_letter(word)) else {
        return Err(VocabularyError::UnknownWord(raw.trim().to_string()));
    };

    let self_loop = usize::from(first == last);
    let replies = vocabulary.count_starting_with(last).saturating_sub(self_loop);
    let predecessors = vocabulary
        .iter()
        .filter(|entry| entry.normalized() != word)
        .filter(|entry| last_letter(entry.normalized()) == Some(first))
        .count();

    Ok(AnalysisResult {
        display: display.to_string(),
        normalized: word.to_string(),
        first,
        last,
        replies,
        predecessors,
        dead_end: replies == 0,
        letter_profile: vocabulary.letter_counts(),
        total_words: vocabulary.len(),
    })
}
