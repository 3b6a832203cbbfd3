//! Spanish, Portuguese and French share one rule layout: elided articles are
//! removed (`l'homme`), composed forms are kept for lookup and case is only
//! folded at the end.

use std::sync::Arc;

use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::mapping::MappingCharFilter;
use crate::analysis::char_filter::numbers::NumberCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::char_filter::stop::StopWordCharFilter;
use crate::analysis::char_filter::strip::StripCharFilter;
use crate::analysis::char_filter::unicode_normalize::{
    NormalizationForm, UnicodeNormalizationCharFilter,
};
use crate::analysis::language::{
    currency_symbols, document_number_tags, document_numbers, en_dash, protocol_urls,
    square_brackets, unicode_apostrophe, unicode_quotes, whitespace_runs,
};
use crate::analysis::pipeline::NormalizationPipeline;
use crate::error::{OrthosError, Result};
use crate::language::Language;

pub fn pipeline(language: Language) -> Result<NormalizationPipeline> {
    let (numbers, stopwords_rule) = match language {
        Language::Es => (NumberCharFilter::date_first(), "remove_spanish_stopwords"),
        Language::Pt => (NumberCharFilter::default(), "remove_portuguese_stopwords"),
        Language::Fr => (NumberCharFilter::default(), "remove_french_stopwords"),
        other => {
            return Err(OrthosError::analysis(format!(
                "{other} does not use the romance rule layout"
            )));
        }
    };

    Ok(NormalizationPipeline::new(language)
        .add_rule("ignore_document_numbers", document_numbers()?)
        .add_rule("preprocess_numbers", Arc::new(numbers))
        .add_rule(
            "normalize_unicode",
            Arc::new(UnicodeNormalizationCharFilter::new(NormalizationForm::NFC)),
        )
        .add_rule("replace_unicode_apostrophe", unicode_apostrophe())
        .add_rule("replace_unicode_quotes", unicode_quotes())
        .add_rule(
            "replace_french_contractions",
            Arc::new(PatternReplaceCharFilter::remove(r"\b\w'+")?),
        )
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
            stopwords_rule,
            Arc::new(StopWordCharFilter::for_language(language)),
        )
        .add_rule("remove_en_dash", en_dash())
        .add_rule(
            "add_space_after_currency",
            Arc::new(MappingCharFilter::new([("\u{20ac}.", "\u{20ac} .")])),
        )
        .add_rule("remove_currency_symbols", currency_symbols())
        .add_rule("lower_text", Arc::new(LowercaseCharFilter::new()))
        .add_rule(
            "remove_extra_characters_and_digits",
            Arc::new(StripCharFilter::trailing_noise()),
        ))
}
