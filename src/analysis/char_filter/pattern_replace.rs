use regex::Regex;

use super::CharFilter;
use crate::error::{OrthosError, Result};

/// A char filter that replaces every match of a regex pattern.
///
/// The replacement may reference capture groups (`${1}`).
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern).map_err(|e| {
                OrthosError::analysis(format!("Invalid replace pattern {pattern:?}: {e}"))
            })?,
            replacement: replacement.to_string(),
        })
    }

    /// A filter deleting every match.
    pub fn remove(pattern: &str) -> Result<Self> {
        Self::new(pattern, "")
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_replace() {
        let filter = PatternReplaceCharFilter::new(r"\s+", " ").unwrap();
        assert_eq!(filter.filter("a  b\t c"), "a b c");
    }

    #[test]
    fn test_remove_pattern() {
        let filter = PatternReplaceCharFilter::remove(r"(?i)pp-\w+-\d+").unwrap();
        assert_eq!(filter.filter("see PP-abc-0004"), "see ");
    }

    #[test]
    fn test_capture_group_replacement() {
        let filter = PatternReplaceCharFilter::new(r"(\b\w+)\W\d+\b", "${1}").unwrap();
        assert_eq!(filter.filter("word,12"), "word");
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(PatternReplaceCharFilter::new("(", "").is_err());
    }
}
