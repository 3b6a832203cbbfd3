use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::engine::matches::Match;
use crate::error::Result;

/// Outcome of one spellcheck run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellcheckReport {
    pub language: String,
    pub matches: Vec<Match>,
    /// Words seen on successfully processed pages (or corpus lines).
    pub total_words: usize,
    /// Zero-based numbers of pages that failed and were skipped.
    pub failed_pages: Vec<usize>,
    pub report_path: PathBuf,
}

impl SpellcheckReport {
    pub fn misspelled_count(&self) -> usize {
        self.matches.len()
    }
}

/// Write the matches as a JSON array.
pub fn write_report(path: &Path, matches: &[Match]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_vec(matches)?)?;
    debug!(path = %path.display(), matches = matches.len(), "report written");
    Ok(())
}

/// Remove a directory tree, logging instead of failing.
pub fn delete_directory(path: &Path) {
    if !path.is_dir() {
        return;
    }
    if let Err(e) = fs::remove_dir_all(path) {
        warn!(path = %path.display(), error = %e, "failed to remove cache directory");
    }
}
