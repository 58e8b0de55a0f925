use crate::error::{EngineError, Result};
use crate::stats::FileRecord;
use std::path::Path;

/// Line breakdown of one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClassification {
    pub total_lines: usize,
    /// Zero-based, ascending.
    pub empty_indices: Vec<usize>,
}

impl LineClassification {
    #[must_use]
    pub fn empty_lines(&self) -> usize {
        self.empty_indices.len()
    }

    #[must_use]
    pub fn non_empty_lines(&self) -> usize {
        self.total_lines - self.empty_indices.len()
    }
}

/// Classify a file, treating any read failure as an empty file.
#[must_use]
pub fn classify_file(path: &Path) -> LineClassification {
    match read_text(path) {
        Ok(text) => classify_text(&text),
        Err(e) => {
            log::debug!("{e}; counting as 0 lines");
            LineClassification::default()
        }
    }
}

/// Classify a file and wrap the result as a [`FileRecord`].
#[must_use]
pub fn process_file(path: &Path) -> FileRecord {
    let lines = classify_file(path);
    FileRecord::new(path.to_path_buf(), lines.non_empty_lines(), lines.empty_lines())
}

/// Whole-file read with lossy UTF-8 decoding. The handle is closed before returning.
fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Pure classification over decoded text.
#[must_use]
pub fn classify_text(text: &str) -> LineClassification {
    let mut result = LineClassification::default();
    for (idx, line) in split_lines(text).enumerate() {
        result.total_lines += 1;
        if is_blank(line) {
            result.empty_indices.push(idx);
        }
    }
    result
}

/// Only whitespace, where the ASCII information separators `\x1c`..=`\x1f`
/// also count as whitespace.
fn is_blank(line: &str) -> bool {
    line.chars()
        .all(|c| c.is_whitespace() || matches!(c, '\x1c'..='\x1f'))
}

/// Universal-newline split: `\n`, `\r\n` and a lone `\r` all end a line.
/// A final segment without a terminator is a line; a trailing terminator does not open a new one.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(pos) => {
                let line = &rest[..pos];
                let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + skip..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}
