//! Lowercase char filter.
//!
//! English pipelines fold case early but leave title-case tokens alone
//! (`"Their"` stays `"Their"`), so capitalized words skip stop word removal.
//! Every pipeline lowercases again at the end.

use super::CharFilter;
use crate::util::text::is_title_case;

#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseCharFilter {
    preserve_title_case: bool,
}

impl LowercaseCharFilter {
    /// Lowercase unconditionally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowercase unless the token is title case.
    pub fn preserving_title_case() -> Self {
        LowercaseCharFilter {
            preserve_title_case: true,
        }
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        if self.preserve_title_case && is_title_case(input) {
            return input.to_string();
        }
        input.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase() {
        let filter = LowercaseCharFilter::new();
        assert_eq!(filter.filter("Their"), "their");
        assert_eq!(filter.filter("ÜBER"), "über");
    }

    #[test]
    fn test_title_case_is_preserved() {
        let filter = LowercaseCharFilter::preserving_title_case();
        assert_eq!(filter.filter("Their"), "Their");
        assert_eq!(filter.filter("THEIR"), "their");
        assert_eq!(filter.filter("cats"), "cats");
    }
}
