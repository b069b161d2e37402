//! Line-oriented reading and writing of the launcher's state files.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use log::debug;

use crate::config::ensure_parent_directory;
use crate::error::{Error, Result};

/// Reads the trimmed, non-blank lines of a file.
///
/// A missing file reads as no lines.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn read_lines(file_description: &str, path: &Path) -> Result<Vec<String>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::io_error(file_description, path, e)),
    };

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect())
}

/// Replaces the content of a file with one line per item.
///
/// The parent directory is created when missing.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn write_lines<I, S>(file_description: &str, path: &Path, lines: I) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ensure_parent_directory(file_description, path)?;

    let file = File::create(path).map_err(|e| Error::io_error(file_description, path, e))?;
    let mut writer = BufWriter::new(file);

    let mut bytes_written = 0;
    for line in lines {
        let line = line.as_ref();
        writeln!(writer, "{line}").map_err(|e| Error::io_error(file_description, path, e))?;
        bytes_written += line.len() + 1;
    }
    writer
        .flush()
        .map_err(|e| Error::io_error(file_description, path, e))?;

    debug!("written out {} bytes into {}", bytes_written, path.display());
    Ok(bytes_written)
}
