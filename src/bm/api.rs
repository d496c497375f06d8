//! # API Facade
//!
//! Single entry point for bm operations, independent of the UI driving them.
//!
//! `BookmarkApi<X, C>` is generic over the extractor and converter:
//! - Production: `BookmarkApi<ReadableExtractor, PandocConverter>`
//! - Testing: `BookmarkApi<FakeExtractor, FakeConverter>`
//!
//! The facade dispatches; record construction lives in `commands::add` and rendering in
//! `format`.

use crate::commands;
use crate::convert::MarkdownConverter;
use crate::editor::Annotator;
use crate::error::Result;
use crate::extract::MetadataExtractor;
use crate::format::{self, Format};
use crate::model::BookmarkRecord;

pub struct BookmarkApi<X: MetadataExtractor, C: MarkdownConverter> {
    extractor: X,
    converter: C,
}

impl<X: MetadataExtractor, C: MarkdownConverter> BookmarkApi<X, C> {
    pub fn new(extractor: X, converter: C) -> Self {
        Self {
            extractor,
            converter,
        }
    }

    /// Builds the record for `url`, collecting annotations from `annotator` when
    /// `interactive` is set.
    pub fn add_bookmark<A: Annotator + ?Sized>(
        &self,
        url: &str,
        annotator: &A,
        interactive: bool,
    ) -> Result<BookmarkRecord> {
        commands::add::run(
            &self.extractor,
            &self.converter,
            annotator,
            url,
            interactive,
        )
    }

    pub fn render(&self, record: &BookmarkRecord, format: &str) -> Result<String> {
        format::render(record, format)
    }

    pub fn render_as(&self, record: &BookmarkRecord, format: Format) -> Result<String> {
        format::render_as(record, format)
    }
}
