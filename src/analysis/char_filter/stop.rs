//! Stop word char filter.
//!
//! Splits the token text on whitespace, drops fragments found in the stop
//! word list and joins the rest with single spaces. Comparison is exact
//! (case-sensitive) after canonical composition, so decomposed input such as
//! `"fu\u{0308}r"` still matches `"für"`.
//!
//! # Examples
//!
//! ```
//! use orthos::analysis::char_filter::CharFilter;
//! use orthos::analysis::char_filter::stop::StopWordCharFilter;
//! use orthos::language::Language;
//!
//! let filter = StopWordCharFilter::for_language(Language::En);
//! assert_eq!(filter.filter("the quick fox"), "quick fox");
//! assert_eq!(filter.filter("The"), "The");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use unicode_normalization::UnicodeNormalization;

use super::CharFilter;
use crate::language::Language;

const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
    "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
    "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she", "should",
    "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "you", "your", "yours", "yourself", "yourselves",
];

const GERMAN_STOP_WORDS: &[&str] = &[
    "aber", "alle", "allem", "allen", "aller", "alles", "als", "also", "am", "an", "ander",
    "andere", "anderem", "anderen", "anderer", "anderes", "auch", "auf", "aus", "bei", "bin",
    "bis", "bist", "da", "damit", "dann", "das", "dass", "dein", "deine", "dem", "den", "der",
    "des", "dich", "die", "dies", "diese", "diesem", "diesen", "dieser", "dieses", "dir", "doch",
    "dort", "du", "durch", "ein", "eine", "einem", "einen", "einer", "eines", "er", "es", "etwas",
    "euch", "euer", "für", "gegen", "hab", "habe", "haben", "hat", "hatte", "hier", "hin",
    "hinter", "ich", "ihm", "ihn", "ihnen", "ihr", "ihre", "im", "in", "indem", "ins", "ist",
    "jede", "jedem", "jeden", "jeder", "jedes", "kann", "kein", "keine", "man", "mein", "meine",
    "mich", "mir", "mit", "nach", "nicht", "noch", "nun", "nur", "ob", "oder", "ohne", "sehr",
    "sein", "seine", "sich", "sie", "sind", "so", "solche", "soll", "sondern", "um", "und", "uns",
    "unser", "unter", "über", "viel", "vom", "von", "vor", "war", "waren", "was", "weil", "welche",
    "wenn", "werden", "wie", "wieder", "will", "wir", "wird", "wo", "zu", "zum", "zur", "zwischen",
];

const SPANISH_STOP_WORDS: &[&str] = &[
    "a", "al", "algo", "algunas", "algunos", "ante", "antes", "como", "con", "contra", "cual",
    "cuando", "de", "del", "desde", "donde", "durante", "e", "el", "ella", "ellas", "ellos", "en",
    "entre", "era", "es", "esa", "esas", "ese", "eso", "esos", "esta", "estas", "este", "esto",
    "estos", "fue", "ha", "hasta", "hay", "la", "las", "le", "les", "lo", "los", "más", "me", "mi",
    "mis", "muy", "nada", "ni", "no", "nos", "nosotros", "o", "otra", "otras", "otro", "otros",
    "para", "pero", "poco", "por", "porque", "que", "quien", "se", "ser", "si", "sin", "sobre",
    "son", "su", "sus", "también", "tanto", "te", "tiene", "todo", "todos", "tu", "tus", "un",
    "una", "uno", "unos", "y", "ya", "yo",
];

const PORTUGUESE_STOP_WORDS: &[&str] = &[
    "a", "ao", "aos", "aquela", "aquele", "as", "até", "com", "como", "da", "das", "de", "dela",
    "dele", "do", "dos", "e", "ela", "elas", "ele", "eles", "em", "entre", "era", "essa", "esse",
    "esta", "este", "eu", "foi", "há", "isso", "isto", "já", "la", "lhe", "mais", "mas", "me",
    "mesmo", "meu", "minha", "muito", "na", "nas", "nem", "no", "nos", "não", "nós", "o", "os",
    "ou", "para", "pela", "pelo", "por", "qual", "quando", "que", "quem", "se", "sem", "ser",
    "seu", "sua", "são", "também", "te", "tem", "um", "uma", "você",
];

const FRENCH_STOP_WORDS: &[&str] = &[
    "au", "aux", "avec", "ce", "ces", "dans", "de", "des", "du", "elle", "en", "et", "eux", "il",
    "ils", "je", "la", "le", "les", "leur", "lui", "ma", "mais", "me", "même", "mes", "moi", "mon",
    "ne", "nos", "notre", "nous", "on", "ou", "par", "pas", "pour", "qu", "que", "qui", "sa", "se",
    "ses", "son", "sur", "ta", "te", "tes", "toi", "ton", "tu", "un", "une", "vos", "votre",
    "vous", "c", "d", "j", "l", "à", "m", "n", "s", "t", "y", "été", "était", "être",
];

fn build_set(words: &[&str]) -> Arc<HashSet<String>> {
    Arc::new(words.iter().map(|w| w.nfc().collect()).collect())
}

static ENGLISH: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| build_set(ENGLISH_STOP_WORDS));
static GERMAN: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| build_set(GERMAN_STOP_WORDS));
static SPANISH: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| build_set(SPANISH_STOP_WORDS));
static PORTUGUESE: LazyLock<Arc<HashSet<String>>> =
    LazyLock::new(|| build_set(PORTUGUESE_STOP_WORDS));
static FRENCH: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| build_set(FRENCH_STOP_WORDS));
static EMPTY: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| Arc::new(HashSet::new()));

/// The built-in stop word set for a language. CJK languages have none.
pub fn stop_words(language: Language) -> Arc<HashSet<String>> {
    let set: &Arc<HashSet<String>> = match language {
        Language::En => &ENGLISH,
        Language::De => &GERMAN,
        Language::Es => &SPANISH,
        Language::Pt => &PORTUGUESE,
        Language::Fr => &FRENCH,
        Language::Ja | Language::Ko | Language::Zh => &EMPTY,
    };
    Arc::clone(set)
}

#[derive(Debug, Clone)]
pub struct StopWordCharFilter {
    stop_words: Arc<HashSet<String>>,
}

impl StopWordCharFilter {
    pub fn for_language(language: Language) -> Self {
        Self {
            stop_words: stop_words(language),
        }
    }

    /// Create a filter from a custom word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words.into_iter().map(|w| w.as_ref().nfc().collect()).collect();
        Self {
            stop_words: Arc::new(stop_words),
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        let composed: String = word.nfc().collect();
        self.stop_words.contains(&composed)
    }

    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl CharFilter for StopWordCharFilter {
    fn filter(&self, input: &str) -> String {
        input
            .split_whitespace()
            .filter(|word| !self.is_stop_word(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words_removed() {
        let filter = StopWordCharFilter::for_language(Language::En);
        assert_eq!(filter.filter("are"), "");
        assert_eq!(filter.filter("cats"), "cats");
        assert_eq!(filter.filter("the  cats"), "cats");
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let filter = StopWordCharFilter::for_language(Language::En);
        assert!(filter.is_stop_word("their"));
        assert!(!filter.is_stop_word("Their"));
    }

    #[test]
    fn test_decomposed_input_matches() {
        let filter = StopWordCharFilter::for_language(Language::De);
        assert!(filter.is_stop_word("fu\u{0308}r"));
        assert!(filter.is_stop_word("für"));
    }

    #[test]
    fn test_custom_and_cjk_lists() {
        let filter = StopWordCharFilter::from_words(["foo"]);
        assert_eq!(filter.len(), 1);
        assert_eq!(filter.filter("foo bar"), "bar");
        assert!(StopWordCharFilter::for_language(Language::Ja).is_empty());
    }
}
