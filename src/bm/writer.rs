//! Output destinations.
//!
//! A rendered document goes either to stdout or to a timestamp-named file inside an output
//! directory. Rendering always completes before a file is created, so a failed run leaves
//! nothing behind.

use crate::config::BmConfig;
use crate::error::Result;
use crate::format::Format;
use chrono::{DateTime, TimeZone};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where the rendered bookmark goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    Directory(PathBuf),
}

impl Destination {
    /// Maps the `--output` flag: absent means stdout, bare means the journal directory,
    /// with a value means that directory.
    pub fn resolve(output: Option<Option<PathBuf>>, config: &BmConfig) -> Result<Self> {
        match output {
            None => Ok(Destination::Stdout),
            Some(None) => Ok(Destination::Directory(config.journal_dir()?)),
            Some(Some(dir)) => Ok(Destination::Directory(dir)),
        }
    }
}

/// File name for a bookmark taken at `date`, e.g. `20240501T103000.md`.
pub fn file_name<Tz: TimeZone>(date: &DateTime<Tz>, format: Format) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}.{}", date.format("%Y%m%dT%H%M%S"), format.extension())
}

/// Appends `text` to an open stream.
pub fn write<W: Write + ?Sized>(stream: &mut W, text: &str) -> Result<()> {
    stream.write_all(text.as_bytes())?;
    stream.flush()?;
    Ok(())
}

/// Writes `text` to `dir/name`, creating `dir` as needed and truncating an existing file.
pub fn write_file(dir: &Path, name: &str, text: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(name);
    let mut file = File::create(&path)?;
    write(&mut file, text)?;
    Ok(path)
}
