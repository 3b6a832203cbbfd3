//! Verdict providers and the loaders that construct them.
//!
//! A [`BackendLoader`] reports one of three outcomes for a language:
//!
//! - `Ok(LoadOutcome::Ready(..))`: the backend is usable;
//! - `Ok(LoadOutcome::Unavailable { .. })`: the capability is missing on this
//!   host and the next loader should be tried;
//! - `Err(..)`: a configuration problem such as missing dictionary files,
//!   which stops the search.

use std::fmt::{self, Debug};
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::language::LanguageTag;

/// Which kind of backend answers lookups for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Affix-aware checker built from `.dic` + `.aff`.
    Primary,
    /// Plain word list read from `.dic`.
    Fallback,
    /// Built-in word-frequency list.
    Minimal,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendKind::Primary => "primary",
            BackendKind::Fallback => "fallback",
            BackendKind::Minimal => "minimal",
        };
        f.write_str(name)
    }
}

/// A loaded spelling verdict provider for one language.
pub trait SpellBackend: Send + Sync + Debug {
    /// Whether `word` is spelled correctly.
    fn check(&self, word: &str) -> bool;

    fn kind(&self) -> BackendKind;
}

/// Result of a loader attempt that did not hit a configuration error.
#[derive(Debug)]
pub enum LoadOutcome {
    Ready(Arc<dyn SpellBackend>),
    Unavailable { reason: String },
}

impl LoadOutcome {
    pub fn unavailable<S: Into<String>>(reason: S) -> Self {
        LoadOutcome::Unavailable {
            reason: reason.into(),
        }
    }
}

/// Constructs a backend of one kind.
pub trait BackendLoader: Send + Sync {
    fn kind(&self) -> BackendKind;

    /// Try to load a backend for `language`, searching under `base_path`.
    fn load(&self, language: &LanguageTag, base_path: &Path) -> Result<LoadOutcome>;
}

impl Debug for dyn BackendLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BackendLoader({})", self.kind())
    }
}

/// The built-in loaders in selection order.
pub fn default_loaders() -> Vec<Arc<dyn BackendLoader>> {
    vec![
        Arc::new(crate::spelling::hunspell::HunspellLoader),
        Arc::new(crate::spelling::dic_reader::DicReaderLoader),
        Arc::new(crate::spelling::minimal::MinimalLoader),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_loader_order() {
        let kinds: Vec<BackendKind> = default_loaders().iter().map(|l| l.kind()).collect();
        assert_eq!(
            kinds,
            vec![BackendKind::Primary, BackendKind::Fallback, BackendKind::Minimal]
        );
    }

    #[test]
    fn test_kind_serialization() {
        assert_eq!(serde_json::to_string(&BackendKind::Fallback).unwrap(), "\"fallback\"");
        assert_eq!(BackendKind::Minimal.to_string(), "minimal");
    }
}
