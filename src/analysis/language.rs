//! Per-language normalization pipelines.
//!
//! Every [`Language`] maps to exactly one pipeline, built once on first use
//! and shared for the life of the process.
//!
//! # Available Languages
//!
//! - [`english`] - title-case aware folding, accent stripping
//! - [`german`] - unconditional folding, decomposition then recomposition
//! - [`romance`] - Spanish, Portuguese and French: contractions, composed forms kept
//! - [`cjk`] - Japanese, Korean and Chinese: trimming only

pub mod cjk;
pub mod english;
pub mod german;
pub mod romance;

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::analysis::char_filter::mapping::MappingCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::pipeline::NormalizationPipeline;
use crate::error::Result;
use crate::language::Language;

static PIPELINES: LazyLock<HashMap<Language, NormalizationPipeline>> = LazyLock::new(|| {
    Language::ALL
        .iter()
        .map(|&language| {
            let pipeline =
                build_pipeline(language).expect("built-in normalization rules should compile");
            (language, pipeline)
        })
        .collect()
});

/// Construct a fresh pipeline for `language`.
pub fn build_pipeline(language: Language) -> Result<NormalizationPipeline> {
    match language {
        Language::En => english::pipeline(),
        Language::De => german::pipeline(),
        Language::Es | Language::Pt | Language::Fr => romance::pipeline(language),
        Language::Ja | Language::Ko | Language::Zh => Ok(cjk::pipeline(language)),
    }
}

/// The shared pipeline for `language`.
pub fn pipeline_for(language: Language) -> &'static NormalizationPipeline {
    &PIPELINES[&language]
}

pub(crate) fn document_numbers() -> Result<Arc<PatternReplaceCharFilter>> {
    Ok(Arc::new(PatternReplaceCharFilter::remove(
        r"[A-Z]{2}-[A-Z]{3}-[A-Z]{3}-\d{4}",
    )?))
}

pub(crate) fn unicode_apostrophe() -> Arc<MappingCharFilter> {
    Arc::new(MappingCharFilter::new([("\u{2019}", "'")]))
}

pub(crate) fn unicode_quotes() -> Arc<MappingCharFilter> {
    Arc::new(MappingCharFilter::new([
        ("\u{201c}", "\""),
        ("\u{201d}", "\""),
    ]))
}

pub(crate) fn square_brackets() -> Result<Arc<PatternReplaceCharFilter>> {
    Ok(Arc::new(PatternReplaceCharFilter::remove(r"\[.*?\]")?))
}

pub(crate) fn protocol_urls() -> Result<Arc<PatternReplaceCharFilter>> {
    Ok(Arc::new(PatternReplaceCharFilter::remove(r"http\S+|www.\S+")?))
}

pub(crate) fn document_number_tags() -> Result<Arc<PatternReplaceCharFilter>> {
    Ok(Arc::new(PatternReplaceCharFilter::remove(r"(?i)pp-\w+-\d+")?))
}

pub(crate) fn whitespace_runs() -> Result<Arc<PatternReplaceCharFilter>> {
    Ok(Arc::new(PatternReplaceCharFilter::new(r"\s+", " ")?))
}

pub(crate) fn currency_symbols() -> Arc<MappingCharFilter> {
    Arc::new(MappingCharFilter::new([("\u{20ac}", "")]))
}

pub(crate) fn en_dash() -> Arc<MappingCharFilter> {
    Arc::new(MappingCharFilter::new([("\u{2013}", "")]))
}
