//! Ignore patterns: tokens that bypass spell checking entirely.
//!
//! Every language gets the union of the global default patterns and its own
//! list (document-number codes, citation formats, superscript references).
//! Sets are built once per primary language and shared through
//! [`IgnorePatternRegistry`]. Pattern order carries no meaning here, so sets
//! are compared with set equality.
//!
//! # Examples
//!
//! ```
//! use orthos::ignore::{IgnorePatternRegistry, should_check};
//!
//! let registry = IgnorePatternRegistry::new();
//! let patterns = registry.get_patterns("en_US").unwrap();
//!
//! assert!(!should_check("https://example.com", &patterns, &[] as &[&str]));
//! assert!(!should_check("PP-0004", &patterns, &[] as &[&str]));
//! assert!(should_check("cats", &patterns, &[] as &[&str]));
//! ```

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use regex::{Regex, RegexBuilder};

use crate::error::{OrthosError, Result};
use crate::language::{Language, primary_code};

/// Patterns applied to every language.
pub const DEFAULT_IGNORED_PATTERNS: &[&str] = &[
    // document numbers like "pp-abc-0004"
    r"pp-\w+-\d*",
    r"word\d",
    // emails
    r"\b[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}\b",
    // URLs
    r"http[s]?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\\(\\),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+",
    // yyyy-mm-dd
    r"\b\d{4}-\d{2}-\d{2}\b",
    // hh:mm:ss
    r"\b\d{2}:\d{2}:\d{2}\b",
    // 10-digit phone numbers
    r"\b\d{10}\b",
    // word/word compounds
    r"\b[\w-]+/[\w-]+\b",
    r"[A-Za-z0-9]+/[A-Za-z0-9]+",
    // non-ASCII runs
    r"[^\x00-\x7F]+",
];

/// Document codes, citations and superscript references shared by every
/// language list.
const DOCUMENT_REFERENCE_PATTERNS: &[&str] = &[
    r"pp-\w+-\d*",
    r"pp-\d+",
    r"[a-z]{2}-[a-z]{3}-[a-z]{3}-\d{4}",
    r"\d{4};\d+\(\d+\):\d+;?",
    r"\[\d+(?:[,–-]\d+)*\]",
    r"[\x{00b9}\x{00b2}\x{00b3}\x{2070}-\x{2079}]+",
    r"nct\d{8}",
];

const EN_PATTERNS: &[&str] = &[r"\d+(?:st|nd|rd|th)"];
const DE_PATTERNS: &[&str] = &[r"\d+\.", r"s\.\d+"];
const ES_PATTERNS: &[&str] = &[r"\d+[ºª]", r"p\.\d+"];
const FR_PATTERNS: &[&str] = &[r"\d+(?:er|re|e|ème|eme)"];
const PT_PATTERNS: &[&str] = &[r"\d+[ºª]", r"p\.\d+"];
const CJK_PATTERNS: &[&str] = &[];

/// Language-specific pattern sources for `language`.
pub fn language_patterns(language: Language) -> Vec<&'static str> {
    let own = match language {
        Language::En => EN_PATTERNS,
        Language::De => DE_PATTERNS,
        Language::Es => ES_PATTERNS,
        Language::Fr => FR_PATTERNS,
        Language::Pt => PT_PATTERNS,
        Language::Ja | Language::Ko | Language::Zh => CJK_PATTERNS,
    };
    DOCUMENT_REFERENCE_PATTERNS
        .iter()
        .chain(own.iter())
        .copied()
        .collect()
}

/// The deduplicated pattern sources for a language tag.
///
/// An unrecognized primary code yields exactly the global defaults.
pub fn get_ignore_patterns_for_language(language: &str) -> BTreeSet<String> {
    let mut sources: BTreeSet<String> = DEFAULT_IGNORED_PATTERNS
        .iter()
        .map(|p| p.to_string())
        .collect();
    if let Some(lang) = Language::from_code(primary_code(language)) {
        sources.extend(language_patterns(lang).into_iter().map(str::to_string));
    }
    sources
}

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(
        r"^(?:https?|ftps?)://(?:[^\s:@/]+(?::[^\s:@/]*)?@)?(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,63}(?::\d{1,5})?(?:[/?#]\S*)?$",
    )
    .case_insensitive(true)
    .build()
    .expect("URL pattern should be valid")
});

/// Whether `word` is a syntactically valid absolute URL.
pub fn is_url(word: &str) -> bool {
    URL_REGEX.is_match(word)
}

/// A compiled, immutable set of ignore patterns.
#[derive(Debug, Clone)]
pub struct IgnorePatternSet {
    sources: BTreeSet<String>,
    compiled: Vec<Regex>,
}

impl IgnorePatternSet {
    /// Compile a set from pattern sources. Duplicates collapse.
    ///
    /// Each pattern is anchored at both ends and matched case-insensitively.
    pub fn from_sources<I, S>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sources: BTreeSet<String> = sources.into_iter().map(Into::into).collect();
        let compiled = sources
            .iter()
            .map(|source| {
                RegexBuilder::new(&format!("^(?:{source})$"))
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| {
                        OrthosError::analysis(format!("Invalid ignore pattern {source:?}: {e}"))
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(IgnorePatternSet { sources, compiled })
    }

    /// Build the set for a language tag.
    pub fn for_language(language: &str) -> Result<Self> {
        Self::from_sources(get_ignore_patterns_for_language(language))
    }

    /// The pattern sources.
    pub fn sources(&self) -> &BTreeSet<String> {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Whether the lowercased word is literally one of the sources.
    pub fn contains_literal(&self, word: &str) -> bool {
        self.sources.contains(&word.to_lowercase())
    }

    /// Whether any pattern matches the whole word.
    pub fn matches(&self, word: &str) -> bool {
        self.compiled.iter().any(|re| re.is_match(word))
    }
}

/// Decide whether a raw token should be spell checked at all.
///
/// Returns `false` for URLs, tokens present (case-insensitively) in the
/// pattern set or fully matched by one of its patterns, and tokens from the
/// unicode ignore list.
pub fn should_check<S: AsRef<str>>(
    word: &str,
    patterns: &IgnorePatternSet,
    ignore_unicode_list: &[S],
) -> bool {
    if is_url(word) || patterns.contains_literal(word) || patterns.matches(word) {
        return false;
    }
    !ignore_unicode_list.iter().any(|s| s.as_ref() == word)
}

/// Process-wide cache of compiled pattern sets, keyed by primary code.
#[derive(Debug, Default)]
pub struct IgnorePatternRegistry {
    sets: RwLock<HashMap<String, Arc<IgnorePatternSet>>>,
}

impl IgnorePatternRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The compiled set for `language`, built on first request.
    pub fn get_patterns(&self, language: &str) -> Result<Arc<IgnorePatternSet>> {
        let key = match Language::from_code(primary_code(language)) {
            Some(lang) => lang.code().to_string(),
            None => String::new(),
        };

        if let Some(set) = self.sets.read().get(&key) {
            return Ok(Arc::clone(set));
        }

        let mut sets = self.sets.write();
        if let Some(set) = sets.get(&key) {
            return Ok(Arc::clone(set));
        }
        let set = Arc::new(IgnorePatternSet::for_language(language)?);
        sets.insert(key, Arc::clone(&set));
        Ok(set)
    }
}
