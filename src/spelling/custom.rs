//! Custom dictionary loading.
//!
//! A custom dictionary is a word-list file (one word per line) unioned with
//! every `.txt` word list found under the global dictionary directory. The
//! result is case-duplicated: each word is present lowercased and
//! uppercased.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, error};

use crate::error::Result;

/// Read one word per line, trimming and dropping blank lines.
pub fn read_word_list<P: AsRef<Path>>(path: P) -> Result<HashSet<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Collect the words of every `.txt` file below `dir`, recursively.
///
/// A missing directory yields an empty set.
pub fn load_words_from_directory<P: AsRef<Path>>(dir: P) -> Result<HashSet<String>> {
    let dir = dir.as_ref();
    let mut words = HashSet::new();
    if !dir.is_dir() {
        return Ok(words);
    }

    let mut pending = vec![dir.to_path_buf()];
    while let Some(current) = pending.pop() {
        for entry in fs::read_dir(&current)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "txt") {
                words.extend(read_word_list(&path)?);
            }
        }
    }

    Ok(words)
}

/// Lowercased and uppercased forms of every word.
pub fn case_variants<I, S>(words: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .flat_map(|w| [w.as_ref().to_lowercase(), w.as_ref().to_uppercase()])
        .collect()
}

/// Build the custom word set for an engine.
///
/// A custom file that cannot be read is logged and yields an empty set.
pub fn load_custom_dictionary(custom_file: Option<&Path>, global_dir: &Path) -> HashSet<String> {
    let custom = match custom_file.map(read_word_list).transpose() {
        Ok(words) => words.unwrap_or_default(),
        Err(e) => {
            error!(error = %e, "failed to read custom dictionary");
            return HashSet::new();
        }
    };

    let global = match load_words_from_directory(global_dir) {
        Ok(words) => words,
        Err(e) => {
            error!(error = %e, dir = %global_dir.display(), "failed to read global word lists");
            HashSet::new()
        }
    };

    let words = case_variants(custom.union(&global));
    debug!(words = words.len(), "custom dictionary loaded");
    words
}
