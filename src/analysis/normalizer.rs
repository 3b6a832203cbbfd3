//! The language gate in front of the normalization pipelines.
//!
//! Before any rule runs, a token is screened:
//!
//! - an unknown primary language is an error;
//! - a token whose first fragment ends in a soft hyphen, which contains a URL
//!   marker, or whose longest space-separated fragment exceeds
//!   [`MAX_FRAGMENT_CHARS`] characters is returned unchanged;
//! - a token matching the combined skip pattern (URLs, query strings,
//!   percent escapes, parenthesized spans, journal references, trial ids,
//!   pixel sizes) becomes the empty string, which callers treat as "skip".

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::analysis::language::pipeline_for;
use crate::analysis::pipeline::{NormalizationPipeline, RuleOverrides};
use crate::error::{OrthosError, Result};
use crate::language::Language;

/// Substrings that mark a token as URL-like.
pub const URL_PARTS: &[&str] = &["https", "http", "www", ".com", ".gov", ".org", "?", "&", "%"];

/// Longest fragment accepted for normalization.
pub const MAX_FRAGMENT_CHARS: usize = 30;

const SOFT_HYPHEN: char = '\u{00ad}';

const SKIP_PATTERNS: &[&str] = &[
    r"((http|https)://)?(www\.)?[a-zA-Z0-9]+\.[a-zA-Z]{2,3}(/[a-zA-Z0-9#./?=]*)*",
    r"[a-zA-Z0-9%]+\&[a-zA-Z0-9]+=.*",
    r".*%[a-zA-Z0-9]{2}.*",
    r"\b\w=\w*\b",
    r"\b(?:[s-z|S-Z]{2,}\.[a-zA-Z0-9-]{2,})\b",
    r"\([^)]*\)",
    r"\(\w+,\s*\d{4}\)",
    r"\d{4};\d{1,2}\(\d{1,2}\):e\d+–e\d+.",
    r"\([\w\s,.]+\)",
    r"\d{4};\d{1,2}\(\d{1,2}\):e\d+.",
    r"\bNCT\d{8}\b",
    r"\b\w+=\w*\b|\b\w+&\w*\b",
    r"\b\w+=\w*\b|\b\w+&\w*\b|\b\w+\|\w*\b",
    r"\b\d+px\b",
];

static COMBINED_SKIP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&SKIP_PATTERNS.join("|")).expect("combined skip pattern should be valid")
});

/// Outcome of the pre-normalization screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Run the pipeline.
    Normalize,
    /// Return the token as is.
    Unchanged,
    /// Return the empty string.
    Skip,
}

/// Classify a token without normalizing it.
pub fn screen(text: &str) -> Screen {
    let Some(first) = text.split_whitespace().next() else {
        return Screen::Unchanged;
    };
    if first.ends_with(SOFT_HYPHEN) {
        return Screen::Unchanged;
    }
    if URL_PARTS.iter().any(|part| text.contains(part)) {
        return Screen::Unchanged;
    }
    let longest = text.split(' ').map(|f| f.chars().count()).max().unwrap_or(0);
    if longest > MAX_FRAGMENT_CHARS {
        return Screen::Unchanged;
    }
    if COMBINED_SKIP.is_match(text) {
        return Screen::Skip;
    }
    Screen::Normalize
}

/// Entry point pairing the gate with the per-language pipelines.
#[derive(Debug, Default, Clone, Copy)]
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Normalizer
    }

    /// The pipeline registered for a language tag's primary code.
    pub fn pipeline(&self, language: &str) -> Result<&'static NormalizationPipeline> {
        let lang =
            Language::from_tag(language).ok_or_else(|| OrthosError::unsupported_language(language))?;
        Ok(pipeline_for(lang))
    }

    /// Normalize `text` for `language`, honoring per-rule overrides.
    pub fn normalize(
        &self,
        language: &str,
        text: &str,
        overrides: Option<&RuleOverrides>,
    ) -> Result<String> {
        let pipeline = self.pipeline(language)?;
        match screen(text) {
            Screen::Unchanged => Ok(text.to_string()),
            Screen::Skip => {
                debug!(token = text, "token matches skip pattern");
                Ok(String::new())
            }
            Screen::Normalize => Ok(pipeline.normalize(text, overrides)),
        }
    }
}

/// Normalize with every rule at its default setting.
pub fn normalize_text_for_language(language: &str, text: &str) -> Result<String> {
    Normalizer::new().normalize(language, text, None)
}

/// Build an override map disabling the named rules.
pub fn disable_rules<I, S>(names: I) -> RuleOverrides
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(|n| (n.into(), false)).collect::<HashMap<_, _>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language() {
        let err = normalize_text_for_language("xx_YY", "word").unwrap_err();
        assert!(matches!(err, OrthosError::UnsupportedLanguage(_)));
    }

    #[test]
    fn test_unchanged_tokens() {
        assert_eq!(
            normalize_text_for_language("en_US", "https://example.com").unwrap(),
            "https://example.com"
        );
        assert_eq!(normalize_text_for_language("en_US", "Hyph\u{00ad}").unwrap(), "Hyph\u{00ad}");
        let long = "Pneumonoultramicroscopicsilicovolcanoconiosis";
        assert_eq!(normalize_text_for_language("en_US", long).unwrap(), long);
    }

    #[test]
    fn test_skip_patterns_yield_empty() {
        assert_eq!(normalize_text_for_language("en_US", "(see)").unwrap(), "");
        assert_eq!(normalize_text_for_language("en_US", "NCT01234567").unwrap(), "");
        assert_eq!(normalize_text_for_language("en_US", "12px").unwrap(), "");
        assert_eq!(normalize_text_for_language("en_US", "a=b").unwrap(), "");
    }

    #[test]
    fn test_regular_tokens_are_normalized() {
        assert_eq!(normalize_text_for_language("en_US", "Cats.").unwrap(), "cats");
        assert_eq!(normalize_text_for_language("en_US", "café").unwrap(), "cafe");
    }

    #[test]
    fn test_overrides() {
        let overrides = disable_rules(["lower_text", "lowercase_word"]);
        let result = Normalizer::new()
            .normalize("en_US", "CATS.", Some(&overrides))
            .unwrap();
        assert_eq!(result, "CATS");
    }

    #[test]
    fn test_whitespace_only_is_unchanged() {
        assert_eq!(normalize_text_for_language("en_US", "   ").unwrap(), "   ");
    }
}
