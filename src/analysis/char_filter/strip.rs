//! Edge-trimming char filters.

use super::CharFilter;
use crate::util::text::{remove_extra_characters_and_digits, strip_punctuation};

/// What a [`StripCharFilter`] removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripMode {
    /// ASCII punctuation at both ends.
    Punctuation,
    /// Any run of periods at the end.
    TrailingPeriods,
    /// Non-word characters or digits after the last letter.
    TrailingNoise,
}

#[derive(Debug, Clone, Copy)]
pub struct StripCharFilter {
    mode: StripMode,
}

impl StripCharFilter {
    pub fn new(mode: StripMode) -> Self {
        Self { mode }
    }

    pub fn punctuation() -> Self {
        Self::new(StripMode::Punctuation)
    }

    pub fn trailing_periods() -> Self {
        Self::new(StripMode::TrailingPeriods)
    }

    pub fn trailing_noise() -> Self {
        Self::new(StripMode::TrailingNoise)
    }
}

impl CharFilter for StripCharFilter {
    fn filter(&self, input: &str) -> String {
        match self.mode {
            StripMode::Punctuation => strip_punctuation(input).to_string(),
            StripMode::TrailingPeriods => input.trim_end_matches('.').to_string(),
            StripMode::TrailingNoise => remove_extra_characters_and_digits(input),
        }
    }

    fn name(&self) -> &'static str {
        "strip"
    }
}
