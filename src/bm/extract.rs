//! Article metadata extraction.
//!
//! [`ReadableExtractor`] runs a readability command line tool (`readable` by default) with
//! the URL as its last argument and parses the JSON it prints. Any failure is reported as
//! [`BmError::Extraction`]; the builder treats that as "no metadata", never as fatal.

use crate::error::{BmError, Result};
use crate::model::ArticleMetadata;
use std::process::{Command, Stdio};
use tracing::debug;
use url::Url;

/// Source of article metadata for a URL.
pub trait MetadataExtractor {
    fn extract(&self, url: &Url) -> Result<ArticleMetadata>;
}

/// Extractor backed by an external readability process.
#[derive(Debug, Clone)]
pub struct ReadableExtractor {
    command: Vec<String>,
}

impl ReadableExtractor {
    /// `command` is the program followed by its fixed arguments.
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

impl MetadataExtractor for ReadableExtractor {
    fn extract(&self, url: &Url) -> Result<ArticleMetadata> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| BmError::Extraction("no extractor command configured".into()))?;

        debug!("running extractor: {} {:?} {}", program, args, url);
        let output = Command::new(program)
            .args(args)
            .arg(url.as_str())
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| BmError::Extraction(format!("failed to launch '{program}': {e}")))?;

        if !output.status.success() {
            return Err(BmError::Extraction(format!(
                "Unable to format output of URL: {url} ('{program}' exited with {})",
                output.status
            )));
        }

        let stdout = String::from_utf8(output.stdout).map_err(|_| {
            BmError::Extraction(format!("'{program}' output is not valid UTF-8"))
        })?;
        parse_metadata(&stdout)
    }
}

/// Parses the extractor's JSON object.
pub fn parse_metadata(json: &str) -> Result<ArticleMetadata> {
    serde_json::from_str(json).map_err(|e| {
        let preview: String = json.chars().take(200).collect();
        BmError::Extraction(format!("invalid JSON from extractor ({e}): {preview}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> Url {
        Url::parse("https://example.com/a").unwrap()
    }

    fn sh(script: &str) -> ReadableExtractor {
        ReadableExtractor::new(vec!["sh".into(), "-c".into(), script.into(), "extract".into()])
    }

    #[test]
    fn test_parse_metadata() {
        let md = parse_metadata(r#"{"title":"T","htmlContent":"<p>x</p>"}"#).unwrap();
        assert_eq!(md.title.as_deref(), Some("T"));
        assert_eq!(md.html_content.as_deref(), Some("<p>x</p>"));
        assert!(md.byline.is_none());
    }

    #[test]
    fn test_parse_metadata_malformed() {
        assert!(matches!(
            parse_metadata("not json"),
            Err(BmError::Extraction(_))
        ));
        assert!(matches!(parse_metadata("[1,2]"), Err(BmError::Extraction(_))));
    }

    #[test]
    fn test_process_receives_url_as_last_argument() {
        let extractor = sh(r#"printf '{"title":"%s"}' "$1""#);
        let md = extractor.extract(&url()).unwrap();
        assert_eq!(md.title.as_deref(), Some("https://example.com/a"));
    }

    #[test]
    fn test_non_zero_exit_is_extraction_failure() {
        let err = sh("exit 3").extract(&url()).unwrap_err();
        assert!(matches!(err, BmError::Extraction(_)));
    }

    #[test]
    fn test_missing_program_is_extraction_failure() {
        let extractor = ReadableExtractor::new(vec!["bm-no-such-extractor".into()]);
        assert!(matches!(
            extractor.extract(&url()),
            Err(BmError::Extraction(_))
        ));
    }

    #[test]
    fn test_empty_command() {
        let extractor = ReadableExtractor::new(Vec::new());
        assert!(matches!(
            extractor.extract(&url()),
            Err(BmError::Extraction(_))
        ));
    }
}
