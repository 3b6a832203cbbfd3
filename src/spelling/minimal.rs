//! Last-resort backend over the built-in word-frequency lists.

use std::path::Path;
use std::sync::Arc;

use tracing::warn;

use crate::error::Result;
use crate::language::LanguageTag;
use crate::spelling::backend::{BackendKind, BackendLoader, LoadOutcome, SpellBackend};
use crate::spelling::dictionary::{BuiltinDictionary, SpellingDictionary};

#[derive(Debug, Clone)]
pub struct FrequencyBackend {
    dictionary: SpellingDictionary,
}

impl FrequencyBackend {
    pub fn new(dictionary: SpellingDictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &SpellingDictionary {
        &self.dictionary
    }
}

impl SpellBackend for FrequencyBackend {
    fn check(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Minimal
    }
}

/// Always succeeds; needs no files.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinimalLoader;

impl BackendLoader for MinimalLoader {
    fn kind(&self) -> BackendKind {
        BackendKind::Minimal
    }

    fn load(&self, language: &LanguageTag, _base_path: &Path) -> Result<LoadOutcome> {
        warn!(language = %language, "using built-in word list");
        let dictionary = BuiltinDictionary::for_language(language.language());
        Ok(LoadOutcome::Ready(Arc::new(FrequencyBackend::new(dictionary))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_loader_needs_no_files() {
        let tag = LanguageTag::parse("en_US").unwrap();
        let outcome = MinimalLoader.load(&tag, Path::new("/nonexistent")).unwrap();
        match outcome {
            LoadOutcome::Ready(backend) => {
                assert_eq!(backend.kind(), BackendKind::Minimal);
                assert!(backend.check("cats"));
                assert!(backend.check("Their"));
                assert!(!backend.check("Zorblax"));
            }
            LoadOutcome::Unavailable { reason } => panic!("unavailable: {reason}"),
        }
    }
}
