//! # Formatter
//!
//! Pure functions from a [`BookmarkRecord`] to a rendered document. No I/O happens here.
//!
//! Both renderers follow the same rule: an optional section appears only when its field is
//! present and non-empty. Absent fields produce no markup at all, never an empty header or
//! an empty `<dd>`.

use crate::error::{BmError, Result};
use crate::model::BookmarkRecord;
use std::fmt;
use std::str::FromStr;

pub mod html;
pub mod markdown;
pub mod wrap;

pub use html::render_html;
pub use markdown::render_markdown;

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    #[default]
    Html,
    Markdown,
}

impl Format {
    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Markdown => "md",
        }
    }
}

impl FromStr for Format {
    type Err = BmError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "html" => Ok(Format::Html),
            "md" => Ok(Format::Markdown),
            other => Err(BmError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Renders `record` in the format named by `format` (`"html"` or `"md"`).
///
/// An unknown selector fails with [`BmError::UnsupportedFormat`] before any rendering work.
pub fn render(record: &BookmarkRecord, format: &str) -> Result<String> {
    let format = Format::from_str(format)?;
    render_as(record, format)
}

/// Renders `record` in an already-validated format.
pub fn render_as(record: &BookmarkRecord, format: Format) -> Result<String> {
    match format {
        Format::Html => render_html(record),
        Format::Markdown => Ok(render_markdown(record)),
    }
}
