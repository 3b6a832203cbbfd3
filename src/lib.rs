//! # Orthos
//!
//! A multilingual spelling-verification engine for documents and text
//! corpora.
//!
//! ## Features
//!
//! - Per-language ignore patterns for URLs, document codes and citations
//! - Ordered, toggle-able normalization rules per language
//! - Affix-aware dictionaries with automatic fallback to plain word lists
//! - Session and on-disk verdict caches
//! - JSON reports with page and coordinate information

pub mod analysis;
pub mod cache;
pub mod cli;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod ignore;
pub mod language;
pub mod observability;
pub mod spelling;
pub mod util;

pub mod prelude {
    pub use crate::config::Settings;
    pub use crate::engine::{EngineBuilder, Match, SpellcheckEngine, SpellcheckReport};
    pub use crate::error::{OrthosError, Result};
    pub use crate::language::LanguageTag;
    pub use crate::spelling::DictionaryRegistry;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
