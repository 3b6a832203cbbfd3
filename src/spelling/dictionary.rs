//! Word-frequency dictionaries.
//!
//! [`SpellingDictionary`] is the in-memory store behind the minimal backend:
//! a case-insensitive word set with frequencies. [`BuiltinDictionary`]
//! provides the word lists used when no dictionary files can be loaded.

use ahash::AHashMap;

use crate::language::Language;

/// A case-insensitive set of words with frequencies.
#[derive(Debug, Clone, Default)]
pub struct SpellingDictionary {
    words: AHashMap<String, u32>,
}

impl SpellingDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word with the given frequency, replacing any previous frequency.
    pub fn add_word(&mut self, word: &str, frequency: u32) {
        self.words.insert(word.to_lowercase(), frequency);
    }

    /// Check if a word exists in the dictionary, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    pub fn frequency(&self, word: &str) -> u32 {
        self.words.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    /// Number of unique words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

const ENGLISH_WORDS: &[&str] = &[
    "a", "about", "after", "again", "all", "also", "an", "and", "any", "are", "as", "at", "back",
    "be", "because", "been", "before", "being", "between", "both", "but", "by", "cafe", "can",
    "case", "cat", "cats", "change", "child", "children", "come", "could", "data", "day", "did",
    "do", "document", "does", "dog", "dogs", "down", "during", "each", "end", "even", "every",
    "example", "fact", "few", "find", "first", "for", "from", "get", "give", "go", "good",
    "government", "great", "group", "had", "hand", "has", "have", "he", "her", "here", "high",
    "him", "his", "home", "house", "how", "i", "if", "important", "in", "information", "into",
    "is", "it", "its", "just", "know", "large", "last", "life", "like", "little", "long", "look",
    "make", "man", "many", "may", "me", "might", "more", "most", "much", "must", "my", "new",
    "no", "not", "now", "number", "of", "off", "old", "on", "one", "only", "or", "other", "our",
    "out", "over", "own", "page", "part", "people", "place", "point", "problem", "program",
    "public", "report", "right", "run", "running", "runs", "same", "say", "see", "should",
    "small", "so", "some", "state", "still", "study", "such", "system", "take", "than", "that",
    "the", "their", "them", "then", "there", "these", "they", "thing", "think", "this", "those",
    "three", "through", "time", "to", "two", "under", "up", "us", "use", "very", "was", "water",
    "way", "we", "well", "were", "what", "when", "where", "which", "while", "who", "why", "will",
    "with", "word", "words", "work", "world", "would", "year", "years", "you", "your",
];

const GERMAN_WORDS: &[&str] = &[
    "aber", "als", "auch", "auf", "aus", "bei", "das", "dem", "den", "der", "die", "ein", "eine",
    "er", "es", "für", "haben", "haus", "häuser", "ich", "im", "in", "ist", "jahr", "kind",
    "mädchen", "mit", "nach", "nicht", "noch", "sein", "sich", "sie", "sind", "straße", "und",
    "von", "war", "welt", "werden", "wie", "wir", "wird", "zeit", "zu",
];

const SPANISH_WORDS: &[&str] = &[
    "año", "casa", "como", "con", "de", "del", "el", "en", "es", "está", "hay", "la", "las",
    "los", "más", "mundo", "para", "pero", "por", "que", "se", "ser", "sin", "su", "también",
    "tiempo", "un", "una", "vida", "y",
];

const PORTUGUESE_WORDS: &[&str] = &[
    "ação", "ano", "casa", "com", "como", "da", "de", "do", "e", "em", "é", "mais", "mundo",
    "não", "o", "os", "para", "por", "que", "se", "tempo", "um", "uma", "vida",
];

const FRENCH_WORDS: &[&str] = &[
    "au", "avec", "ce", "dans", "de", "des", "du", "en", "est", "et", "homme", "il", "la", "le",
    "les", "maison", "monde", "ne", "pas", "plus", "pour", "que", "qui", "sur", "temps", "un",
    "une", "vie",
];

/// Built-in word lists for the minimal backend.
pub struct BuiltinDictionary;

impl BuiltinDictionary {
    /// The built-in dictionary for a language. CJK languages get an empty one.
    pub fn for_language(language: Language) -> SpellingDictionary {
        let words: &[&str] = match language {
            Language::En => ENGLISH_WORDS,
            Language::De => GERMAN_WORDS,
            Language::Es => SPANISH_WORDS,
            Language::Pt => PORTUGUESE_WORDS,
            Language::Fr => FRENCH_WORDS,
            Language::Ja | Language::Ko | Language::Zh => &[],
        };

        let mut dict = SpellingDictionary::new();
        for word in words {
            dict.add_word(word, 1);
        }
        dict
    }

    pub fn english() -> SpellingDictionary {
        Self::for_language(Language::En)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_basic_operations() {
        let mut dict = SpellingDictionary::new();

        assert!(!dict.contains("hello"));
        assert_eq!(dict.frequency("hello"), 0);
        assert!(dict.is_empty());

        dict.add_word("hello", 5);
        assert!(dict.contains("hello"));
        assert_eq!(dict.frequency("hello"), 5);

        dict.add_word("hello", 2);
        assert_eq!(dict.frequency("hello"), 2);
        assert_eq!(dict.word_count(), 1);
    }

    #[test]
    fn test_dictionary_case_insensitive() {
        let mut dict = SpellingDictionary::new();

        dict.add_word("Hello", 5);
        assert!(dict.contains("hello"));
        assert!(dict.contains("HELLO"));
        assert_eq!(dict.frequency("hELLo"), 5);
    }

    #[test]
    fn test_builtin_dictionaries() {
        let english = BuiltinDictionary::english();
        assert!(english.contains("their"));
        assert!(english.contains("cats"));
        assert!(english.word_count() > 100);

        assert!(BuiltinDictionary::for_language(Language::De).contains("straße"));
        assert!(BuiltinDictionary::for_language(Language::Ja).is_empty());
    }
}
