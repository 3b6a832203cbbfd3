use std::sync::Arc;

use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::numbers::NumberCharFilter;
use crate::analysis::char_filter::stop::StopWordCharFilter;
use crate::analysis::char_filter::strip::StripCharFilter;
use crate::analysis::char_filter::unicode_normalize::{
    AccentStripCharFilter, NormalizationForm, UnicodeNormalizationCharFilter,
};
use crate::analysis::language::{
    currency_symbols, document_number_tags, document_numbers, en_dash, protocol_urls,
    square_brackets, unicode_apostrophe, unicode_quotes, whitespace_runs,
};
use crate::analysis::pipeline::NormalizationPipeline;
use crate::error::Result;
use crate::language::Language;

/// The English rule list.
///
/// Title-case tokens survive the early case fold, so `"Their"` is not taken
/// for the stop word `"their"`.
pub fn pipeline() -> Result<NormalizationPipeline> {
    Ok(NormalizationPipeline::new(Language::En)
        .add_rule("ignore_document_numbers", document_numbers()?)
        .add_rule("preprocess_numbers", Arc::new(NumberCharFilter::default()))
        .add_rule(
            "lowercase_word",
            Arc::new(LowercaseCharFilter::preserving_title_case()),
        )
        .add_rule(
            "normalize_unicode",
            Arc::new(UnicodeNormalizationCharFilter::new(NormalizationForm::NFKD)),
        )
        .add_rule("replace_unicode_apostrophe", unicode_apostrophe())
        .add_rule("replace_unicode_quotes", unicode_quotes())
        .add_rule("remove_square_brackets", square_brackets()?)
        .add_rule("replace_url_with_tag", protocol_urls()?)
        .add_rule(
            "remove_non_word_characters",
            Arc::new(StripCharFilter::punctuation()),
        )
        .add_rule("replace_document_number_with_tag", document_number_tags()?)
        .add_rule("remove_end_period", Arc::new(StripCharFilter::trailing_periods()))
        .add_rule("remove_double_space", whitespace_runs()?)
        .add_rule(
            "remove_english_stopwords",
            Arc::new(StopWordCharFilter::for_language(Language::En)),
        )
        .add_rule("remove_currency_symbols", currency_symbols())
        .add_rule("remove_en_dash", en_dash())
        .add_rule("remove_unicode_accents", Arc::new(AccentStripCharFilter::new()))
        .add_rule("lower_text", Arc::new(LowercaseCharFilter::new()))
        .add_rule(
            "remove_extra_characters_and_digits",
            Arc::new(StripCharFilter::trailing_noise()),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_normalization() {
        let pipeline = pipeline().unwrap();
        assert_eq!(pipeline.normalize("running.", None), "running");
        assert_eq!(pipeline.normalize("café", None), "cafe");
        assert_eq!(pipeline.normalize("Their", None), "their");
        assert_eq!(pipeline.normalize("are", None), "");
        assert_eq!(pipeline.normalize("don\u{2019}t", None), "don't");
        assert_eq!(pipeline.normalize("\u{201c}cats\u{201d}", None), "cats");
        assert_eq!(pipeline.normalize("cancer12", None), "cancer");
        assert_eq!(pipeline.normalize("word[3]", None), "word");
    }

    #[test]
    fn test_rule_order() {
        let names = pipeline().unwrap().rule_names();
        assert_eq!(names.first(), Some(&"ignore_document_numbers"));
        assert_eq!(names.last(), Some(&"remove_extra_characters_and_digits"));
        let pos = |n: &str| names.iter().position(|x| *x == n).unwrap();
        assert!(pos("normalize_unicode") < pos("remove_english_stopwords"));
        assert!(pos("remove_english_stopwords") < pos("lower_text"));
    }
}
