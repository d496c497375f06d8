use crate::error::{BmError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const CONFIG_DIR_ENV: &str = "BM_CONFIG_DIR";
const DEFAULT_FORMAT: &str = "html";

/// Configuration for bm, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BmConfig {
    /// Directory bookmarks are written to when `--output` is given without a value
    #[serde(default)]
    pub journal_dir: Option<PathBuf>,

    /// Output format used when `--format` is omitted ("html" or "md")
    #[serde(default = "default_format")]
    pub format: String,

    /// Readability extractor command; the URL is appended as the last argument
    #[serde(default = "default_extractor")]
    pub extractor: Vec<String>,

    /// HTML to markdown converter command; HTML is fed on stdin
    #[serde(default = "default_converter")]
    pub converter: Vec<String>,

    /// Editor command, overriding $EDITOR and $VISUAL
    #[serde(default)]
    pub editor: Option<String>,
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

fn default_extractor() -> Vec<String> {
    ["readable", "--quiet", "--json", "--low-confidence=exit"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_converter() -> Vec<String> {
    ["pandoc", "--from", "html", "--to", "markdown"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for BmConfig {
    fn default() -> Self {
        Self {
            journal_dir: None,
            format: default_format(),
            extractor: default_extractor(),
            converter: default_converter(),
            editor: None,
        }
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "bm", "bm")
        .ok_or_else(|| BmError::Config("could not determine home directory".to_string()))
}

/// Directory holding `config.json`: `$BM_CONFIG_DIR`, else the platform config dir.
pub fn config_dir() -> Result<PathBuf> {
    match env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => Ok(project_dirs()?.config_dir().to_path_buf()),
    }
}

impl BmConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BmConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// The default output directory: the configured journal, else `<data dir>/bookmarks`.
    pub fn journal_dir(&self) -> Result<PathBuf> {
        match &self.journal_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(project_dirs()?.data_dir().join("bookmarks")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = BmConfig::default();
        assert_eq!(config.format, "html");
        assert_eq!(config.extractor[0], "readable");
        assert_eq!(config.converter[0], "pandoc");
        assert!(config.journal_dir.is_none());
        assert!(config.editor.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = BmConfig::load(dir.path()).unwrap();
        assert_eq!(config, BmConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");

        let config = BmConfig {
            journal_dir: Some(PathBuf::from("/tmp/journal")),
            format: "md".to_string(),
            editor: Some("nano".to_string()),
            ..BmConfig::default()
        };
        config.save(&nested).unwrap();

        let loaded = BmConfig::load(&nested).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"format": "md"}"#).unwrap();

        let config = BmConfig::load(dir.path()).unwrap();
        assert_eq!(config.format, "md");
        assert_eq!(config.extractor, default_extractor());
        assert_eq!(config.converter, default_converter());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ nope").unwrap();
        assert!(matches!(
            BmConfig::load(dir.path()),
            Err(BmError::Serialization(_))
        ));
    }

    #[test]
    fn test_configured_journal_dir() {
        let config = BmConfig {
            journal_dir: Some(PathBuf::from("/somewhere")),
            ..BmConfig::default()
        };
        assert_eq!(config.journal_dir().unwrap(), PathBuf::from("/somewhere"));
    }
}
