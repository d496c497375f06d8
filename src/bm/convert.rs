//! HTML to markdown conversion through an external converter (`pandoc` by default).

use crate::error::{BmError, Result};
use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;
use tracing::debug;

/// Turns an HTML fragment into markdown.
pub trait MarkdownConverter {
    fn convert(&self, html: &str) -> Result<String>;
}

/// Converter backed by an external process reading HTML on stdin.
#[derive(Debug, Clone)]
pub struct PandocConverter {
    command: Vec<String>,
}

impl PandocConverter {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

impl MarkdownConverter for PandocConverter {
    fn convert(&self, html: &str) -> Result<String> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| BmError::Conversion("no converter command configured".into()))?;

        debug!("running converter: {} {:?}", program, args);
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| BmError::Conversion(format!("failed to launch '{program}': {e}")))?;

        // stdin must be written while stdout drains.
        let writer = child.stdin.take().map(|mut stdin| {
            let input = html.to_string();
            thread::spawn(move || stdin.write_all(input.as_bytes()))
        });

        let output = child
            .wait_with_output()
            .map_err(|e| BmError::Conversion(format!("'{program}' failed: {e}")))?;

        if let Some(handle) = writer {
            match handle.join() {
                Ok(Ok(())) => {}
                Ok(Err(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
                Ok(Err(e)) => {
                    return Err(BmError::Conversion(format!(
                        "failed to write to '{program}': {e}"
                    )))
                }
                Err(_) => {
                    return Err(BmError::Conversion(format!(
                        "stdin writer for '{program}' panicked"
                    )))
                }
            }
        }

        if !output.status.success() {
            return Err(BmError::Conversion(format!(
                "Unable to convert html to markdown ('{program}' exited with {})",
                output.status
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|_| BmError::Conversion(format!("'{program}' output is not valid UTF-8")))
    }
}
