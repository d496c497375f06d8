use thiserror::Error;

/// Exit code for any handled failure.
pub const FAILURE_EXIT_CODE: i32 = 10;

#[derive(Error, Debug)]
pub enum BmError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Conversion failed: {0}")]
    Conversion(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Unrecognized format: {0}")]
    UnsupportedFormat(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BmError {
    /// Process exit code reported by the CLI for this error.
    pub fn exit_code(&self) -> i32 {
        FAILURE_EXIT_CODE
    }
}

pub type Result<T> = std::result::Result<T, BmError>;
