//! Language tags and the closed set of primary languages.
//!
//! A [`LanguageTag`] is the full `primary[_region[_variant]]` identifier used
//! to locate dictionary files (`en_US`, `de_AT_frami`). Its primary part maps
//! onto exactly one [`Language`], which selects the normalization pipeline,
//! the stop word list and the language-specific ignore patterns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OrthosError, Result};

/// Language tags accepted by default.
///
/// `zh_CN` is deliberately absent: no affix dictionary exists for it, though
/// the Chinese pipeline and patterns are still registered for `zh`.
pub const DEFAULT_SUPPORTED_LANGUAGES: &[&str] = &[
    "de_AT",
    "de_AT_frami",
    "de_CH",
    "de_CH_frami",
    "de_DE",
    "de_DE_frami",
    "en_AU",
    "en_CA",
    "en_GB",
    "en_med_glut",
    "en_US",
    "en_ZA",
    "es_AR",
    "es_BO",
    "es_CL",
    "es_CO",
    "es_CR",
    "es_CU",
    "es_DO",
    "es_EC",
    "es_ES",
    "es_GT",
    "es_HN",
    "es_MX",
    "es_NI",
    "es_PA",
    "es_PE",
    "es_PR",
    "es_PY",
    "es_SV",
    "es_US",
    "es_UY",
    "es_VE",
    "fr_BE",
    "fr_CA",
    "fr_CH",
    "fr_FR",
    "fr_LU",
    "ja_JP",
    "ko_KR",
    "pt_BR",
    "pt_PT",
];

/// Primary languages with a registered pipeline and pattern list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    De,
    En,
    Es,
    Fr,
    Ja,
    Ko,
    Pt,
    Zh,
}

impl Language {
    /// Every registered primary language.
    pub const ALL: [Language; 8] = [
        Language::De,
        Language::En,
        Language::Es,
        Language::Fr,
        Language::Ja,
        Language::Ko,
        Language::Pt,
        Language::Zh,
    ];

    /// The two-letter code of this language.
    pub fn code(&self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::Ja => "ja",
            Language::Ko => "ko",
            Language::Pt => "pt",
            Language::Zh => "zh",
        }
    }

    /// Look up a primary language by its two-letter code.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.iter().copied().find(|lang| lang.code() == code)
    }

    /// Resolve the primary language of a full tag (`en_US` -> `En`).
    pub fn from_tag(tag: &str) -> Option<Language> {
        Language::from_code(primary_code(tag))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The part of a tag before the first underscore.
pub fn primary_code(tag: &str) -> &str {
    tag.split('_').next().unwrap_or(tag)
}

/// A validated `primary[_region[_variant]]` language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageTag {
    tag: String,
    language: Language,
}

impl LanguageTag {
    /// Parse a tag whose primary part is a registered language.
    ///
    /// This does not check membership in a configured supported set; see
    /// [`LanguageTag::supported`] for that.
    pub fn parse(tag: &str) -> Result<Self> {
        let tag = tag.trim();
        let language =
            Language::from_tag(tag).ok_or_else(|| OrthosError::unsupported_language(tag))?;
        Ok(LanguageTag {
            tag: tag.to_string(),
            language,
        })
    }

    /// Parse a tag and require it to be part of `supported`.
    pub fn supported<S: AsRef<str>>(tag: &str, supported: &[S]) -> Result<Self> {
        if !supported.iter().any(|s| s.as_ref() == tag) {
            return Err(OrthosError::unsupported_language(tag));
        }
        Self::parse(tag)
    }

    /// The full tag, e.g. `en_US`.
    pub fn as_str(&self) -> &str {
        &self.tag
    }

    /// The primary code, e.g. `en`.
    pub fn primary(&self) -> &str {
        primary_code(&self.tag)
    }

    /// The primary language.
    pub fn language(&self) -> Language {
        self.language
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl FromStr for LanguageTag {
    type Err = OrthosError;

    fn from_str(s: &str) -> Result<Self> {
        LanguageTag::parse(s)
    }
}

impl TryFrom<String> for LanguageTag {
    type Error = OrthosError;

    fn try_from(value: String) -> Result<Self> {
        LanguageTag::parse(&value)
    }
}

impl From<LanguageTag> for String {
    fn from(tag: LanguageTag) -> Self {
        tag.tag
    }
}
