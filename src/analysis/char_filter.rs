//! Char filter implementations for token normalization.
//!
//! A char filter is a pure `&str -> String` transformation. Normalization
//! pipelines are ordered lists of named char filters.
//!
//! # Available Filters
//!
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`unicode_normalize::UnicodeNormalizationCharFilter`] - Unicode normalization (NFC, NFKD, etc.)
//! - [`unicode_normalize::AccentStripCharFilter`] - Decomposition with combining marks removed
//! - [`mapping::MappingCharFilter`] - Ordered literal replacement
//! - [`lowercase::LowercaseCharFilter`] - Case folding, optionally sparing title-case tokens
//! - [`strip::StripCharFilter`] - Punctuation, trailing period and trailing garbage removal
//! - [`stop::StopWordCharFilter`] - Stop word removal
//! - [`numbers::NumberCharFilter`] - Digit handling for citations, dates and superscripts
//!
//! # Examples
//!
//! ```
//! use orthos::analysis::char_filter::CharFilter;
//! use orthos::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"\[.*?\]", "").unwrap();
//! assert_eq!(filter.filter("word[12]"), "word");
//! ```

/// Trait for filters that transform a token before dictionary lookup.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod mapping;
pub mod numbers;
pub mod pattern_replace;
pub mod stop;
pub mod strip;
pub mod unicode_normalize;
