//! Small text transformations shared by the builder and the renderers.

/// Collapses every run of consecutive newlines into a single newline.
pub fn normalize_newlines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_newline = false;
    for c in text.chars() {
        if c == '\n' {
            if last_was_newline {
                continue;
            }
            last_was_newline = true;
        } else {
            last_was_newline = false;
        }
        out.push(c);
    }
    out
}

/// Parses the comma-delimited tag prompt answer.
///
/// Whitespace is removed and trailing commas are dropped before splitting, so
/// `"rust, cli,"` yields `["rust", "cli"]` and `""` yields no tags.
pub fn parse_tags(input: &str) -> Vec<String> {
    let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let stripped = stripped.trim_end_matches(',');
    if stripped.is_empty() {
        return Vec::new();
    }
    stripped
        .split(',')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Applies the presence rule: `Some` only when the trimmed value is non-empty.
pub fn present(value: Option<String>) -> Option<String> {
    present_str(value.as_deref()).map(str::to_string)
}

/// Borrowing form of [`present`], used by the renderers.
pub fn present_str(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Escapes a value for interpolation into HTML text or a quoted attribute.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
