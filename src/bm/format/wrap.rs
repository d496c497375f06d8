use unicode_width::UnicodeWidthStr;

/// Prose width used for wrapped sections.
pub const PROSE_WIDTH: usize = 70;

/// Reflows `text` into lines no wider than `width` display columns.
///
/// All whitespace, newlines included, collapses to single spaces first. A word wider
/// than `width` gets a line of its own and is never split.
pub fn fill(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}
