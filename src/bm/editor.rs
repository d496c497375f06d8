use crate::error::{BmError, Result};
use console::Term;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;
use tracing::debug;

const COMMENT_MARKER: char = '#';

/// The kinds of free-form annotations collected through the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
    Quotes,
    Comments,
}

impl AnnotationKind {
    /// Commented header seeded into the scratch buffer.
    pub fn prompt(&self) -> &'static str {
        match self {
            AnnotationKind::Quotes => {
                "# Enter quotes from the article, one per line.\n\
                 # Lines starting with '#' and blank lines are ignored.\n"
            }
            AnnotationKind::Comments => {
                "# Enter your comments, one per line.\n\
                 # Lines starting with '#' and blank lines are ignored.\n"
            }
        }
    }
}

/// Source of user annotations for a bookmark.
pub trait Annotator {
    /// Asks for a comma-delimited tag list and returns the raw answer.
    fn prompt_tags(&self) -> Result<String>;

    /// Collects one annotation per line.
    fn collect(&self, kind: AnnotationKind) -> Result<Vec<String>>;
}

/// Annotator that reads tags from the terminal and everything else through the editor.
///
/// The editor is resolved on first use, see [`get_editor`].
pub struct TerminalAnnotator {
    configured_editor: Option<String>,
    term: Term,
}

impl TerminalAnnotator {
    pub fn new(configured_editor: Option<String>) -> Self {
        Self {
            configured_editor,
            term: Term::stderr(),
        }
    }
}

impl Annotator for TerminalAnnotator {
    fn prompt_tags(&self) -> Result<String> {
        self.term.write_str("Tags (comma separated): ")?;
        if self.term.is_term() {
            return Ok(self.term.read_line()?);
        }
        // Piped input: take the first line of stdin.
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line)
    }

    fn collect(&self, kind: AnnotationKind) -> Result<Vec<String>> {
        let editor = get_editor(self.configured_editor.as_deref())?;
        collect_lines(&editor, kind.prompt())
    }
}

/// Resolves the editor command.
/// Uses the configured editor, then $EDITOR, then $VISUAL, then common fallbacks.
pub fn get_editor(configured: Option<&str>) -> Result<String> {
    if let Some(editor) = configured.filter(|e| !e.trim().is_empty()) {
        return Ok(editor.to_string());
    }

    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.trim().is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(BmError::Editor(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the editor and waits for it to close.
/// Returns the contents of the file after editing.
///
/// `editor` may carry arguments (`"code --wait"`); it is split on whitespace.
pub fn open_in_editor<P: AsRef<Path>>(editor: &str, file_path: P) -> Result<String> {
    let path = file_path.as_ref();
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| BmError::Editor("empty editor command".to_string()))?;

    debug!("opening {} in {}", path.display(), editor);
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| BmError::Editor(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(BmError::Editor(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    Ok(fs::read_to_string(path)?)
}

/// Seeds a scratch file with `prompt`, lets the user edit it and returns the kept lines.
///
/// The scratch file is removed when this returns, on success and on every error path.
pub fn collect_lines(editor: &str, prompt: &str) -> Result<Vec<String>> {
    let mut scratch = tempfile::Builder::new()
        .prefix("bm-")
        .suffix(".md")
        .tempfile()?;
    scratch.write_all(prompt.as_bytes())?;
    scratch.flush()?;

    let buffer = open_in_editor(editor, scratch.path())?;
    Ok(parse_buffer(&buffer))
}

/// Keeps non-blank lines that do not start with the comment marker, trimmed.
pub fn parse_buffer(buffer: &str) -> Vec<String> {
    buffer
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
        .map(str::to_string)
        .collect()
}
