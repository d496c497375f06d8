use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use url::Url;
use uuid::Uuid;

/// Article metadata as reported by the readability extractor.
///
/// Every key is optional; the extractor omits whatever it could not find.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArticleMetadata {
    pub byline: Option<String>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    #[serde(rename = "htmlContent")]
    pub html_content: Option<String>,
}

/// The article body in both representations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Content {
    pub markdown: String,
    pub html: String,
}

/// A fully assembled bookmark, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkRecord {
    pub id: Uuid,
    pub location: Url,
    pub bookmark_date: DateTime<FixedOffset>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Vec<String>,
    pub quotes: Vec<String>,
    pub comments: Vec<String>,
    pub content: Content,
}

impl BookmarkRecord {
    /// A record with only the always-present fields set.
    pub fn new(location: Url, bookmark_date: DateTime<FixedOffset>, id: Uuid) -> Self {
        Self {
            id,
            location,
            bookmark_date,
            author: None,
            title: None,
            excerpt: None,
            tags: Vec::new(),
            quotes: Vec::new(),
            comments: Vec::new(),
            content: Content::default(),
        }
    }

    /// ISO-8601 timestamp as shown in rendered documents.
    pub fn date_string(&self) -> String {
        self.bookmark_date.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
    }
}
