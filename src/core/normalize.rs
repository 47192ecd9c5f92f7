//! Canonical word keys
//!
//! Every comparison in the game happens on normalized forms: the input is
//! lowercased and then everything outside `a`-`z` is dropped. Word lists
//! persisted elsewhere rely on this rule being bit-exact.

/// Normalize a raw word into its canonical key
///
/// Returns an empty string when nothing alphabetic survives; callers treat
/// that as invalid input.
///
/// # Examples
/// ```
/// use atlas_chain::core::normalize;
///
/// assert_eq!(normalize("Guinea-Bissau"), "guineabissau");
/// assert_eq!(normalize("Cote d'Ivoire"), "cotedivoire");
/// assert_eq!(normalize(" 42 "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// First letter of a normalized word
#[inline]
#[must_use]
pub fn first_letter(normalized: &str) -> Option<char> {
    normalized.chars().next()
}

/// Last letter of a normalized word
#[inline]
#[must_use]
pub fn last_letter(normalized: &str) -> Option<char> {
    normalized.chars().next_back()
}

/// Bucket index (0-25) for a letter, or `None` outside `a`-`z`
#[inline]
#[must_use]
pub(crate) fn letter_index(letter: char) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| (letter as u8 - b'a') as usize)
}

/// Letter for a bucket index (0-25)
#[inline]
#[must_use]
pub(crate) const fn index_letter(index: usize) -> char {
    (b'a' + index as u8) as char
}
