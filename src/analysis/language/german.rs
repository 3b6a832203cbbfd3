use std::sync::Arc;

use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::numbers::NumberCharFilter;
use crate::analysis::char_filter::stop::StopWordCharFilter;
use crate::analysis::char_filter::strip::StripCharFilter;
use crate::analysis::char_filter::unicode_normalize::{
    NormalizationForm, UnicodeNormalizationCharFilter,
};
use crate::analysis::language::{
    currency_symbols, document_numbers, en_dash, protocol_urls, square_brackets,
    unicode_apostrophe, unicode_quotes, whitespace_runs,
};
use crate::analysis::pipeline::NormalizationPipeline;
use crate::error::Result;
use crate::language::Language;

/// The German rule list.
///
/// Nouns are capitalized, so folding is unconditional. Umlauts are
/// decomposed for the structural rules and recomposed before lookup.
pub fn pipeline() -> Result<NormalizationPipeline> {
    Ok(NormalizationPipeline::new(Language::De)
        .add_rule("ignore_document_numbers", document_numbers()?)
        .add_rule("preprocess_numbers", Arc::new(NumberCharFilter::default()))
        .add_rule("lowercase_word", Arc::new(LowercaseCharFilter::new()))
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
        .add_rule("remove_end_period", Arc::new(StripCharFilter::trailing_periods()))
        .add_rule("remove_double_space", whitespace_runs()?)
        .add_rule(
            "remove_german_stopwords",
            Arc::new(StopWordCharFilter::for_language(Language::De)),
        )
        .add_rule("remove_currency_symbols", currency_symbols())
        .add_rule("remove_en_dash", en_dash())
        .add_rule(
            "compose_unicode",
            Arc::new(UnicodeNormalizationCharFilter::new(NormalizationForm::NFC)),
        )
        .add_rule("lower_text", Arc::new(LowercaseCharFilter::new()))
        .add_rule(
            "remove_extra_characters_and_digits",
            Arc::new(StripCharFilter::trailing_noise()),
        ))
}
