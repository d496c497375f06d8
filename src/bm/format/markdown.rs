//! Markdown rendering.
//!
//! The document is a sequence of sections separated by one blank line. Each optional
//! section is produced by a function returning `Option<String>`, so an absent field simply
//! contributes nothing.

use super::wrap::{fill, PROSE_WIDTH};
use crate::model::BookmarkRecord;
use crate::text::present_str;

/// Renders a bookmark as a markdown document.
pub fn render_markdown(record: &BookmarkRecord) -> String {
    let sections = [
        Some(header(record)),
        Some(format!("# Location\n\n<{}>", record.location)),
        present_str(record.title.as_deref()).map(|t| format!("## Title\n\n{t}")),
        present_str(record.excerpt.as_deref())
            .map(|e| format!("## Excerpt\n\n{}", fill(e, PROSE_WIDTH))),
        tags(&record.tags),
        quotes(&record.quotes),
        comments(&record.comments),
        Some(format!(
            "## Content\n\n{}",
            record.content.markdown.trim_end_matches('\n')
        )),
    ];

    let mut doc = sections.into_iter().flatten().collect::<Vec<_>>().join("\n\n");
    doc.push('\n');
    doc
}

/// `Key: value` lines ending in two spaces, markdown's forced line break.
fn header(record: &BookmarkRecord) -> String {
    let mut lines = vec![
        format!("Date: {}  ", record.date_string()),
        format!("Location: {}  ", record.location),
        format!("ID: {}  ", record.id),
    ];
    if let Some(title) = present_str(record.title.as_deref()) {
        lines.push(format!("Title: {title}  "));
    }
    if let Some(author) = present_str(record.author.as_deref()) {
        lines.push(format!("Author: {author}  "));
    }
    lines.join("\n")
}

fn tags(tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        return None;
    }
    let joined = tags
        .iter()
        .map(|t| format!("#{t}"))
        .collect::<Vec<_>>()
        .join(" ");
    Some(format!("## Tags\n\n{joined}"))
}

fn quotes(quotes: &[String]) -> Option<String> {
    if quotes.is_empty() {
        return None;
    }
    let joined = quotes
        .iter()
        .map(|q| format!("> {q}"))
        .collect::<Vec<_>>()
        .join("\n\n");
    Some(format!("## Quotes\n\n{joined}"))
}

fn comments(comments: &[String]) -> Option<String> {
    if comments.is_empty() {
        return None;
    }
    let joined = comments
        .iter()
        .map(|c| format!("* {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    Some(format!("## Comments\n\n{joined}"))
}
