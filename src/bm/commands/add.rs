use crate::convert::MarkdownConverter;
use crate::editor::{AnnotationKind, Annotator};
use crate::error::{BmError, Result};
use crate::extract::MetadataExtractor;
use crate::model::{ArticleMetadata, BookmarkRecord, Content};
use crate::text::{normalize_newlines, parse_tags, present};
use chrono::Local;
use tracing::{debug, info, warn};
use url::Url;
use uuid::Uuid;

/// Checks that `input` is an absolute http(s) URL with a host.
pub fn validate_url(input: &str) -> Result<Url> {
    let url = Url::parse(input.trim()).map_err(|_| BmError::InvalidUrl(input.to_string()))?;
    let web_scheme = matches!(url.scheme(), "http" | "https");
    let has_host = url.host_str().is_some_and(|h| !h.is_empty());
    if !web_scheme || !has_host {
        return Err(BmError::InvalidUrl(input.to_string()));
    }
    Ok(url)
}

/// Builds a bookmark record for `url`.
///
/// The URL is validated before any collaborator runs. Extraction failures degrade to
/// empty metadata; conversion and editor failures abort. Annotations are only collected
/// when `interactive` is set.
pub fn run<X, C, A>(
    extractor: &X,
    converter: &C,
    annotator: &A,
    url: &str,
    interactive: bool,
) -> Result<BookmarkRecord>
where
    X: MetadataExtractor + ?Sized,
    C: MarkdownConverter + ?Sized,
    A: Annotator + ?Sized,
{
    let location = validate_url(url)?;
    info!("bookmarking {}", location);

    let metadata = extractor.extract(&location).unwrap_or_else(|e| {
        warn!("{}; continuing without article metadata", e);
        ArticleMetadata::default()
    });

    let html = metadata.html_content.unwrap_or_default();
    let markdown = if html.trim().is_empty() {
        String::new()
    } else {
        debug!("converting {} bytes of html", html.len());
        normalize_newlines(&converter.convert(&html)?)
    };

    let mut record = BookmarkRecord::new(location, Local::now().fixed_offset(), Uuid::new_v4());
    record.author = present(metadata.byline);
    record.title = present(metadata.title);
    record.excerpt = present(metadata.excerpt.map(|e| normalize_newlines(&e)));
    record.content = Content { markdown, html };

    if interactive {
        record.tags = parse_tags(&annotator.prompt_tags()?);
        record.quotes = annotator.collect(AnnotationKind::Quotes)?;
        record.comments = annotator.collect(AnnotationKind::Comments)?;
        debug!(
            "collected {} tags, {} quotes, {} comments",
            record.tags.len(),
            record.quotes.len(),
            record.comments.len()
        );
    }

    Ok(record)
}
