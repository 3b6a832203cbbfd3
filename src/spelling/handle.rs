use std::collections::HashSet;
use std::fmt::{self, Debug};
use std::sync::Arc;

use crate::language::LanguageTag;
use crate::spelling::backend::{BackendKind, SpellBackend};

/// A bound dictionary for one language.
///
/// Custom words are fixed at construction and accepted verbatim before the
/// backend is asked.
#[derive(Clone)]
pub struct DictionaryHandle {
    language: LanguageTag,
    backend: Arc<dyn SpellBackend>,
    custom_words: Arc<HashSet<String>>,
}

impl DictionaryHandle {
    pub fn new(
        language: LanguageTag,
        backend: Arc<dyn SpellBackend>,
        custom_words: Arc<HashSet<String>>,
    ) -> Self {
        DictionaryHandle {
            language,
            backend,
            custom_words,
        }
    }

    pub fn language(&self) -> &LanguageTag {
        &self.language
    }

    pub fn kind(&self) -> BackendKind {
        self.backend.kind()
    }

    pub fn custom_words(&self) -> &HashSet<String> {
        &self.custom_words
    }

    /// Whether `word` is spelled correctly.
    pub fn verify(&self, word: &str) -> bool {
        self.custom_words.contains(word) || self.backend.check(word)
    }
}

impl Debug for DictionaryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DictionaryHandle")
            .field("language", &self.language)
            .field("kind", &self.kind())
            .field("custom_words", &self.custom_words.len())
            .finish()
    }
}
