//! Word list loading utilities
//!
//! Lists are plain text with one display form per line. CSV files are
//! accepted too: only the first column is read.

use std::fs;
use std::io;
use std::path::Path;

/// Load raw display forms from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use atlas_chain::core::Vocabulary;
/// use atlas_chain::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/countries.txt").unwrap();
/// let vocab = Vocabulary::load(&words).unwrap();
/// println!("Loaded {} words", vocab.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Parse word list text
///
/// Skips blank lines and `#` comments and keeps the first CSV field of each
/// remaining line.
///
/// # Examples
/// ```
/// use atlas_chain::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("# header\nIndia,1\n\"Korea, South\",2\n\nNepal");
/// assert_eq!(words, vec!["India", "Korea, South", "Nepal"]);
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            let field = first_field(trimmed).trim();
            (!field.is_empty()).then(|| field.to_string())
        })
        .collect()
}

/// First comma-separated field, honoring a leading double quote
fn first_field(line: &str) -> &str {
    if let Some(rest) = line.strip_prefix('"') {
        return rest.find('"').map_or(rest, |end| &rest[..end]);
    }
    line.split(',').next().unwrap_or(line)
}
