//! Fallback backend: a plain word list read from a `.dic` file.
//!
//! The leading entry count is skipped, affix flags (`word/ABC`) and
//! morphological fields are dropped. No affix expansion takes place, so only
//! stems listed in the file are accepted, plus their capitalized and
//! all-uppercase forms.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::language::LanguageTag;
use crate::spelling::backend::{BackendKind, BackendLoader, LoadOutcome, SpellBackend};
use crate::spelling::locate::locate;

#[derive(Debug, Clone, Default)]
pub struct DicWordList {
    words: HashSet<String>,
}

impl DicWordList {
    /// Parse the contents of a `.dic` file.
    pub fn parse(content: &str) -> Self {
        let mut lines = content.lines().peekable();
        if lines
            .peek()
            .is_some_and(|first| first.trim().parse::<usize>().is_ok())
        {
            lines.next();
        }

        let words = lines
            .filter_map(|line| {
                let entry = line.split_whitespace().next()?;
                if entry.starts_with('#') {
                    return None;
                }
                let stem = entry.split('/').next().unwrap_or(entry);
                if stem.is_empty() {
                    None
                } else {
                    Some(stem.to_string())
                }
            })
            .collect();

        DicWordList { words }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        let is_capitalized = word.chars().next().is_some_and(char::is_uppercase)
            && word.chars().skip(1).all(|c| !c.is_uppercase());
        let is_upper = word.chars().any(char::is_alphabetic)
            && word.chars().all(|c| !c.is_lowercase());
        if !(is_capitalized || is_upper) {
            return false;
        }

        let lower = word.to_lowercase();
        if self.words.contains(&lower) {
            return true;
        }
        if is_upper {
            let mut chars = lower.chars();
            if let Some(first) = chars.next() {
                let title: String = first.to_uppercase().chain(chars).collect();
                return self.words.contains(&title);
            }
        }
        false
    }
}

impl SpellBackend for DicWordList {
    fn check(&self, word: &str) -> bool {
        self.contains(word)
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Fallback
    }
}

/// Loads [`DicWordList`] from the located `.dic` file.
#[derive(Debug, Default, Clone, Copy)]
pub struct DicReaderLoader;

impl BackendLoader for DicReaderLoader {
    fn kind(&self) -> BackendKind {
        BackendKind::Fallback
    }

    fn load(&self, language: &LanguageTag, base_path: &Path) -> Result<LoadOutcome> {
        let files = locate(base_path, language, false)?;
        let words = DicWordList::from_file(&files.dic)?;
        debug!(language = %language, words = words.len(), "dictionary word list loaded");
        Ok(LoadOutcome::Ready(Arc::new(words)))
    }
}
