//! HTML rendering.
//!
//! The document structure lives in `templates/bookmark.html` (minijinja). Rust prepares a
//! view with every value already escaped and every optional value already resolved to
//! `None` or an empty list, so the template only branches on presence.

use crate::error::Result;
use crate::model::BookmarkRecord;
use crate::text::{escape_html, present_str};
use minijinja::{AutoEscape, Environment};
use once_cell::sync::OnceCell;
use serde::Serialize;

const TEMPLATE_NAME: &str = "bookmark.html";
const BOOKMARK_TEMPLATE: &str = include_str!("templates/bookmark.html");

static ENVIRONMENT: OnceCell<Environment<'static>> = OnceCell::new();

#[derive(Serialize)]
struct HtmlView {
    title: Option<String>,
    excerpt: Option<String>,
    author: Option<String>,
    keywords: Option<String>,
    location: String,
    id: String,
    tags: Vec<String>,
    quotes: Vec<String>,
    comments: Vec<String>,
    // Embedded verbatim.
    content: String,
}

impl From<&BookmarkRecord> for HtmlView {
    fn from(record: &BookmarkRecord) -> Self {
        let escape_all =
            |items: &[String]| -> Vec<String> { items.iter().map(|s| escape_html(s)).collect() };
        let tags = escape_all(&record.tags);
        let keywords = if tags.is_empty() {
            None
        } else {
            Some(tags.join(","))
        };

        Self {
            title: present_str(record.title.as_deref()).map(escape_html),
            excerpt: present_str(record.excerpt.as_deref()).map(escape_html),
            author: present_str(record.author.as_deref()).map(escape_html),
            keywords,
            location: escape_html(record.location.as_str()),
            id: record.id.to_string(),
            tags,
            quotes: escape_all(&record.quotes),
            comments: escape_all(&record.comments),
            content: record.content.html.clone(),
        }
    }
}

fn environment() -> Result<&'static Environment<'static>> {
    let env = ENVIRONMENT.get_or_try_init(|| -> std::result::Result<_, minijinja::Error> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        // Values are escaped in HtmlView; the content body must pass through untouched.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_template(TEMPLATE_NAME, BOOKMARK_TEMPLATE)?;
        Ok(env)
    })?;
    Ok(env)
}

/// Renders a bookmark as a self-contained HTML document.
pub fn render_html(record: &BookmarkRecord) -> Result<String> {
    let view = HtmlView::from(record);
    let template = environment()?.get_template(TEMPLATE_NAME)?;
    let mut doc = template.render(&view)?;
    doc.push('\n');
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{bare_record, example_record};

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_template_compiles() {
        assert!(environment().is_ok());
    }

    #[test]
    fn test_example_record() {
        let doc = render_html(&example_record()).unwrap();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Bookmark of \"A\"</title>"));
        assert!(doc.contains("<dt>Title</dt>\n            <dd class=\"title\">A</dd>"));
        assert!(doc.contains(
            "<a href=\"https://example.com/a\" class=\"location\">https://example.com/a</a>"
        ));
        assert!(doc.contains("<blockquote class=\"excerpt\">Hi</blockquote>"));
        assert!(doc.contains("<h1>A</h1>"));
        assert!(doc.contains("<p>body</p>"));
        assert!(!doc.contains("<dt>Tags</dt>"));
        assert!(!doc.contains("<dt>Quotes</dt>"));
        assert!(!doc.contains("<dt>Comments</dt>"));
        assert_eq!(count(&doc, "<dd"), 5);
    }

    #[test]
    fn test_bare_record_has_no_optional_markup() {
        let doc = render_html(&bare_record()).unwrap();
        assert!(doc.contains("<title></title>"));
        assert!(!doc.contains("name=\"description\""));
        assert!(!doc.contains("name=\"keywords\""));
        assert!(!doc.contains("name=\"author\""));
        assert!(!doc.contains("<dt>Title</dt>"));
        assert!(!doc.contains("<dt>Excerpt</dt>"));
        assert!(!doc.contains("<h1>"));
        assert!(!doc.contains("content=\"\""));
        // Location, Content and ID only.
        assert_eq!(count(&doc, "<dt>"), 3);
        assert_eq!(count(&doc, "<dd"), 3);
        assert!(doc.contains("<meta name=\"location\" content=\"https://example.com/a\">"));
        assert!(doc.contains("<meta name=\"id\" content=\"00000000-0000-0000-0000-000000000000\">"));
    }

    #[test]
    fn test_meta_tags_when_present() {
        let mut record = example_record();
        record.author = Some("Jane Doe".into());
        record.tags = vec!["rust".into(), "cli".into()];
        let doc = render_html(&record).unwrap();
        assert!(doc.contains("<meta name=\"description\" content=\"Hi\">"));
        assert!(doc.contains("<meta name=\"keywords\" content=\"rust,cli\">"));
        assert!(doc.contains("<meta name=\"author\" content=\"Jane Doe\">"));
    }

    #[test]
    fn test_one_list_item_per_tag_in_order() {
        let mut record = bare_record();
        record.tags = vec!["zeta".into(), "alpha".into(), "mid".into()];
        let doc = render_html(&record).unwrap();
        assert_eq!(count(&doc, "<li class=\"tag\">"), 3);
        let zeta = doc.find("#zeta").unwrap();
        let alpha = doc.find("#alpha").unwrap();
        let mid = doc.find("#mid").unwrap();
        assert!(zeta < alpha && alpha < mid);
        assert!(doc.contains("<ul style=\"list-style-type: none;\">"));
    }

    #[test]
    fn test_quotes_and_comments() {
        let mut record = bare_record();
        record.quotes = vec!["one".into(), "two".into()];
        record.comments = vec!["first thought".into()];
        let doc = render_html(&record).unwrap();
        assert_eq!(count(&doc, "<blockquote class=\"quote\">"), 2);
        assert!(doc.contains("<li class=\"comment\">first thought</li>"));

        let quotes = doc.find("<dt>Quotes</dt>").unwrap();
        let comments = doc.find("<dt>Comments</dt>").unwrap();
        let content = doc.find("<dt>Content</dt>").unwrap();
        assert!(quotes < comments && comments < content);
    }

    #[test]
    fn test_values_are_escaped_but_content_is_not() {
        let mut record = example_record();
        record.title = Some("<script>alert('x')</script>".into());
        record.excerpt = Some("say \"hi\"".into());
        record.content.html = "<div><script>ok()</script></div>".into();
        let doc = render_html(&record).unwrap();
        assert!(doc.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(doc.contains("<meta name=\"description\" content=\"say &quot;hi&quot;\">"));
        assert!(doc.contains("<div><script>ok()</script></div>"));
    }

    #[test]
    fn test_deterministic() {
        let record = example_record();
        assert_eq!(render_html(&record).unwrap(), render_html(&record).unwrap());
    }
}
