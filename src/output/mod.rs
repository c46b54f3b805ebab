// Output formatting: terminal display of alerts, stats and patterns.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if
/// truncated. Respects UTF-8 character boundaries.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Confidence as a whole percentage, e.g. 0.873 -> "87%".
pub fn percent(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_untouched() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 5), "hello");
    }

    #[test]
    fn multibyte_safe() {
        assert_eq!(truncate_chars("héllo wörld", 4), "héll...");
        assert_eq!(truncate_chars("🙂🙂🙂", 2), "🙂🙂...");
    }

    #[test]
    fn percent_rounds() {
        assert_eq!(percent(0.873), "87%");
        assert_eq!(percent(1.0), "100%");
    }
}
