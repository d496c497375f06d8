//! # Bm Architecture
//!
//! Bm turns a URL into a bookmark document. It asks an external readability tool for the
//! article, converts the article body to markdown with an external converter, optionally
//! collects the user's own tags, quotes and comments through their editor, and renders the
//! result as a markdown or HTML document.
//!
//! The library holds all of the logic; the `bm` binary is a thin CLI client on top of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, sets up logging, maps exit codes       │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, generic over the external collaborators     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Commands (commands/*.rs)     │ │  Formatter (format/)      │
//! │  - Builds a BookmarkRecord    │ │  - Pure record → document │
//! └───────────────────────────────┘ └───────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collaborators (extract.rs, convert.rs, editor.rs)          │
//! │  - Traits at the seams, process-backed implementations      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: The Record Is Typed
//!
//! A [`model::BookmarkRecord`] carries `Option`s for everything the extractor may not
//! provide and plain vectors for annotations. Renderers walk a fixed, ordered list of
//! sections and emit a section only when its field is present and non-empty, in both
//! output formats. There are no empty-string sentinels.
//!
//! ## Testing Strategy
//!
//! 1. **Formatter** (`format/*.rs`): exhaustive unit tests over present/absent fields.
//! 2. **Commands** (`commands/*.rs`): builder logic against the in-memory fakes in
//!    `test_utils`.
//! 3. **CLI** (`tests/`): the binary end to end, with `sh` and `cat` standing in for the
//!    extractor and converter.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Record construction
//! - [`format`]: Markdown and HTML renderers
//! - [`model`]: Core data types (`BookmarkRecord`, `Content`, `ArticleMetadata`)
//! - [`text`]: Newline normalization, tag parsing, HTML escaping
//! - [`extract`]: Metadata extraction through an external readability tool
//! - [`convert`]: HTML to markdown conversion through an external converter
//! - [`editor`]: Interactive annotation collection
//! - [`writer`]: Output destinations and file naming
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod convert;
pub mod editor;
pub mod error;
pub mod extract;
pub mod format;
pub mod model;
pub mod text;
pub mod writer;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
