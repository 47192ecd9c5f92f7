//! Formatting utilities for terminal output

/// Join display words into a chain
#[must_use]
pub fn format_chain(words: &[&str]) -> String {
    if words.is_empty() {
        return "(empty)".to_string();
    }
    words.join(" → ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bracket the final letter of a display word in uppercase, dropping trailing punctuation
///
/// The bracketed letter is the one the next word must start with.
#[must_use]
pub fn mark_last_letter(display: &str) -> String {
    let trimmed = display.trim_end_matches(|c: char| !c.is_alphabetic());
    let mut chars = trimmed.char_indices().rev();
    match chars.next() {
        Some((index, last)) => format!("{}[{}]", &trimmed[..index], last.to_uppercase()),
        None => display.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_joins_words() {
        assert_eq!(format_chain(&["India", "Austria"]), "India → Austria");
        assert_eq!(format_chain(&["Peru"]), "Peru");
        assert_eq!(format_chain(&[]), "(empty)");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn last_letter_is_marked() {
        assert_eq!(mark_last_letter("Nepal"), "Nepa[L]");
        assert_eq!(mark_last_letter("Cote d'Ivoire"), "Cote d'Ivoir[E]");
        assert_eq!(mark_last_letter("Guinea-Bissau."), "Guinea-Bissa[U]");
        assert_eq!(mark_last_letter(""), "");
        assert_eq!(mark_last_letter("..."), "...");
    }
}
