//! Greedy word wrapping.

/// Column budget for wrapped comment text, prefix included.
pub const WRAP_WIDTH: usize = 80;

/// Wrap `text` into lines of at most `width` columns, each starting with `prefix`.
///
/// Runs of whitespace collapse to a single space. Words are never split: a
/// word that does not fit on an empty line gets a line of its own. Text with
/// no words produces no lines.
///
/// ```
/// use stone_codegen::wrap_text;
///
/// let lines = wrap_text("one two three", " * ", 12);
/// assert_eq!(lines, [" * one two", " * three"]);
/// ```
pub fn wrap_text(text: &str, prefix: &str, width: usize) -> Vec<String> {
    let budget = width.saturating_sub(prefix.chars().count());
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > budget {
            lines.push(format!("{prefix}{current}"));
            current.clear();
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if current_len > 0 {
        lines.push(format!("{prefix}{current}"));
    }
    lines
}
