// Document loading and result writing — the only fallible boundary.
//
// Everything downstream operates on fully materialized strings and is
// total: the scoring pipeline itself never returns an error. Degenerate
// inputs (empty files, punctuation-only files) resolve to a 0.0 score.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// A loaded input document: raw UTF-8 content plus where it came from.
///
/// The path is kept for error messages and display only — it plays no
/// part in scoring.
#[derive(Debug)]
pub struct Document {
    pub path: PathBuf,
    pub content: String,
}

impl Document {
    /// Read a document from disk as UTF-8 text.
    ///
    /// A trailing newline is appended, matching line-based readers that
    /// re-join lines with '\n'. Normalization collapses it away, so the
    /// score is unaffected either way.
    pub fn load(path: &Path) -> Result<Self> {
        let mut content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        content.push('\n');

        debug!(path = %path.display(), bytes = content.len(), "Loaded document");

        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }
}

/// Write the formatted score as the entire contents of the result file.
/// No trailing newline — the percentage string is the whole file.
pub fn write_result(path: &Path, formatted: &str) -> Result<()> {
    fs::write(path, formatted)
        .with_context(|| format!("Failed to write result file: {}", path.display()))
}
