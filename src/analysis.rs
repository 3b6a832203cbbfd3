//! Token normalization.
//!
//! Raw tokens are reduced to a canonical lookup form by a per-language
//! [`pipeline::NormalizationPipeline`] of [`char_filter::CharFilter`]s, behind
//! the screening gate in [`normalizer`].

pub mod char_filter;
pub mod language;
pub mod normalizer;
pub mod pipeline;

pub use normalizer::{Normalizer, normalize_text_for_language};
pub use pipeline::{NormalizationPipeline, NormalizationRule, RuleOverrides};
