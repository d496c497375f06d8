//! Fixtures and in-memory collaborators for tests.

use crate::convert::MarkdownConverter;
use crate::editor::{AnnotationKind, Annotator};
use crate::error::{BmError, Result};
use crate::extract::MetadataExtractor;
use crate::model::{ArticleMetadata, BookmarkRecord, Content};
use chrono::{DateTime, FixedOffset, TimeZone};
use std::cell::{Cell, RefCell};
use url::Url;
use uuid::Uuid;

pub fn fixed_date() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .and_then(|tz| tz.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).single())
        .expect("valid fixed date")
}

/// A record with nothing but the always-present fields.
pub fn bare_record() -> BookmarkRecord {
    let location = Url::parse("https://example.com/a").expect("valid url");
    BookmarkRecord::new(location, fixed_date(), Uuid::nil())
}

/// `https://example.com/a` with title `A`, excerpt `Hi` and body `body`.
pub fn example_record() -> BookmarkRecord {
    BookmarkRecord {
        title: Some("A".into()),
        excerpt: Some("Hi".into()),
        content: Content {
            markdown: "body".into(),
            html: "<p>body</p>".into(),
        },
        ..bare_record()
    }
}

/// Extractor returning canned metadata, or failing when built with `failing()`.
#[derive(Default)]
pub struct FakeExtractor {
    pub metadata: Option<ArticleMetadata>,
    pub calls: Cell<usize>,
}

impl FakeExtractor {
    pub fn returning(metadata: ArticleMetadata) -> Self {
        Self {
            metadata: Some(metadata),
            calls: Cell::new(0),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }
}

impl MetadataExtractor for FakeExtractor {
    fn extract(&self, url: &Url) -> Result<ArticleMetadata> {
        self.calls.set(self.calls.get() + 1);
        self.metadata
            .clone()
            .ok_or_else(|| BmError::Extraction(format!("no metadata for {url}")))
    }
}

/// Converter that prefixes its input, or fails.
#[derive(Default)]
pub struct FakeConverter {
    pub fail: bool,
    pub inputs: RefCell<Vec<String>>,
}

impl FakeConverter {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl MarkdownConverter for FakeConverter {
    fn convert(&self, html: &str) -> Result<String> {
        self.inputs.borrow_mut().push(html.to_string());
        if self.fail {
            return Err(BmError::Conversion("converter exited with 1".into()));
        }
        Ok(format!("md:{html}"))
    }
}

/// Annotator answering with fixed tags, quotes and comments.
#[derive(Default)]
pub struct FakeAnnotator {
    pub tags: String,
    pub quotes: Vec<String>,
    pub comments: Vec<String>,
    pub fail_editor: bool,
    pub prompts: RefCell<Vec<AnnotationKind>>,
}

impl Annotator for FakeAnnotator {
    fn prompt_tags(&self) -> Result<String> {
        Ok(self.tags.clone())
    }

    fn collect(&self, kind: AnnotationKind) -> Result<Vec<String>> {
        self.prompts.borrow_mut().push(kind);
        if self.fail_editor {
            return Err(BmError::Editor("editor exited with 1".into()));
        }
        Ok(match kind {
            AnnotationKind::Quotes => self.quotes.clone(),
            AnnotationKind::Comments => self.comments.clone(),
        })
    }
}
