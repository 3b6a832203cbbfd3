//! Digit handling for tokens that mix words and numbers.
//!
//! Citation-like tokens (`2019;12(3):45;`, `A1-23`) pass through untouched.
//! Otherwise digits glued to a word by a separator are dropped (`word,12`),
//! superscript reference digits are cut from words (`cancer12,13`), date-like
//! tokens are kept as is, and remaining digits are stripped from the end.

use std::sync::LazyLock;

use regex::Regex;

use super::CharFilter;

static PRESERVED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^(?:[\da-zA-Z]+-[\d]+)$",
        r"^\d{4};\d{1,3}\(\d{1,3}\):\d{1,3}–\d{1,3};$",
        r"^\d{4};\d+\(\d+\):\d+;$",
        r"^(?:(\d{4};\d+\(\d+\):\d+;))$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("citation pattern should be valid"))
    .collect()
});
static TEXT_SPECIAL_CHAR_DIGIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\b\w+)\W\d+\b").expect("glued digit pattern should be valid")
});
static SUPERSCRIPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\b[A-Za-z-]+[A-Za-z])(\d+(,\d+)*)\b")
        .expect("superscript pattern should be valid")
});
static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(\d{1,2}[-/]\d{1,2}[-/]\d{4}|\d{1,2}-[A-Za-z]{3}-\d{4}|GMT[+-]\d{4}|\d{2}:\d{2}:\d{2})\b",
    )
    .expect("date pattern should be valid")
});
static TRAILING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+$").expect("digit pattern should be valid"));
static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit pattern should be valid"));

/// Which check wins when a token looks like both a date and a superscript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberPrecedence {
    /// Superscript digits are cut before the date check (English, German,
    /// Portuguese).
    #[default]
    SuperscriptFirst,
    /// Date-like tokens are kept before superscripts are considered
    /// (Spanish).
    DateFirst,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NumberCharFilter {
    precedence: NumberPrecedence,
}

impl NumberCharFilter {
    pub fn new(precedence: NumberPrecedence) -> Self {
        Self { precedence }
    }

    pub fn date_first() -> Self {
        Self::new(NumberPrecedence::DateFirst)
    }

    fn strip_digits(text: &str) -> String {
        if text.chars().any(|c| c.is_numeric()) {
            TRAILING_DIGITS.replace(text, "").into_owned()
        } else {
            DIGITS.replace_all(text, "").into_owned()
        }
    }
}

impl CharFilter for NumberCharFilter {
    fn filter(&self, input: &str) -> String {
        if PRESERVED.iter().any(|re| re.is_match(input)) {
            return input.to_string();
        }

        let text = TEXT_SPECIAL_CHAR_DIGIT.replace_all(input, "${1}");

        match self.precedence {
            NumberPrecedence::SuperscriptFirst => {
                if SUPERSCRIPT.is_match(&text) {
                    return SUPERSCRIPT.replace_all(&text, "${1}").into_owned();
                }
                if DATE.is_match(&text) {
                    return text.into_owned();
                }
            }
            NumberPrecedence::DateFirst => {
                if DATE.is_match(&text) {
                    return text.into_owned();
                }
                if SUPERSCRIPT.is_match(&text) {
                    return SUPERSCRIPT.replace_all(&text, "${1}").into_owned();
                }
            }
        }

        Self::strip_digits(&text)
    }

    fn name(&self) -> &'static str {
        "numbers"
    }
}
