//! Ordered, toggle-able normalization rules.
//!
//! A [`NormalizationPipeline`] is an immutable list of named
//! [`NormalizationRule`]s. Rules run in definition order; a per-call
//! [`RuleOverrides`] map can switch individual rules on or off by name
//! without changing that order. The result is trimmed at the end.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! use orthos::analysis::char_filter::lowercase::LowercaseCharFilter;
//! use orthos::analysis::char_filter::strip::StripCharFilter;
//! use orthos::analysis::pipeline::NormalizationPipeline;
//! use orthos::language::Language;
//!
//! let pipeline = NormalizationPipeline::new(Language::En)
//!     .add_rule("lower_text", Arc::new(LowercaseCharFilter::new()))
//!     .add_rule("remove_non_word_characters", Arc::new(StripCharFilter::punctuation()));
//!
//! assert_eq!(pipeline.normalize(" Cats. ", None), "cats");
//!
//! let mut overrides = HashMap::new();
//! overrides.insert("lower_text".to_string(), false);
//! assert_eq!(pipeline.normalize("Cats.", Some(&overrides)), "Cats");
//! ```

use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::analysis::char_filter::CharFilter;
use crate::language::Language;

/// Per-call enable/disable switches keyed by rule name.
pub type RuleOverrides = HashMap<String, bool>;

/// A named text transformation with its default enabled flag.
#[derive(Clone)]
pub struct NormalizationRule {
    name: &'static str,
    enabled_by_default: bool,
    filter: Arc<dyn CharFilter>,
}

impl NormalizationRule {
    pub fn new(name: &'static str, filter: Arc<dyn CharFilter>) -> Self {
        NormalizationRule {
            name,
            enabled_by_default: true,
            filter,
        }
    }

    pub fn disabled(name: &'static str, filter: Arc<dyn CharFilter>) -> Self {
        NormalizationRule {
            name,
            enabled_by_default: false,
            filter,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn enabled_by_default(&self) -> bool {
        self.enabled_by_default
    }

    pub fn apply(&self, text: &str) -> String {
        self.filter.filter(text)
    }

    fn is_enabled(&self, overrides: Option<&RuleOverrides>) -> bool {
        overrides
            .and_then(|o| o.get(self.name))
            .copied()
            .unwrap_or(self.enabled_by_default)
    }
}

impl Debug for NormalizationRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NormalizationRule")
            .field("name", &self.name)
            .field("enabled_by_default", &self.enabled_by_default)
            .field("filter", &self.filter.name())
            .finish()
    }
}

/// The ordered rule list of one language.
#[derive(Clone)]
pub struct NormalizationPipeline {
    language: Language,
    rules: Vec<NormalizationRule>,
}

impl NormalizationPipeline {
    pub fn new(language: Language) -> Self {
        NormalizationPipeline {
            language,
            rules: Vec::new(),
        }
    }

    /// Append an enabled rule.
    pub fn add_rule(mut self, name: &'static str, filter: Arc<dyn CharFilter>) -> Self {
        self.rules.push(NormalizationRule::new(name, filter));
        self
    }

    /// Append a rule that only runs when an override enables it.
    pub fn add_disabled_rule(mut self, name: &'static str, filter: Arc<dyn CharFilter>) -> Self {
        self.rules.push(NormalizationRule::disabled(name, filter));
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn rules(&self) -> &[NormalizationRule] {
        &self.rules
    }

    /// Rule names in application order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }

    pub fn has_rule(&self, name: &str) -> bool {
        self.rules.iter().any(|r| r.name == name)
    }

    /// Run every enabled rule in order and trim the result.
    pub fn normalize(&self, text: &str, overrides: Option<&RuleOverrides>) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut current = text.to_string();
        for rule in &self.rules {
            if rule.is_enabled(overrides) {
                current = rule.apply(&current);
            }
        }
        current.trim().to_string()
    }
}

impl Debug for NormalizationPipeline {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NormalizationPipeline")
            .field("language", &self.language)
            .field("rules", &self.rule_names())
            .finish()
    }
}
