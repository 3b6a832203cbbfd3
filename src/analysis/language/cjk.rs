use crate::analysis::pipeline::NormalizationPipeline;
use crate::language::Language;

/// Ideographic scripts get no rules; the pipeline only trims.
pub fn pipeline(language: Language) -> NormalizationPipeline {
    NormalizationPipeline::new(language)
}
