//! Spelling verdicts.
//!
//! A [`registry::DictionaryRegistry`] binds one [`handle::DictionaryHandle`]
//! per language, choosing the first usable backend among:
//!
//! 1. [`hunspell`] - affix-aware checking from `.dic` + `.aff`;
//! 2. [`dic_reader`] - the `.dic` word list alone;
//! 3. [`minimal`] - a built-in word-frequency list.

pub mod backend;
pub mod custom;
pub mod dic_reader;
pub mod dictionary;
pub mod handle;
pub mod hunspell;
pub mod locate;
pub mod minimal;
pub mod registry;

pub use backend::{BackendKind, BackendLoader, LoadOutcome, SpellBackend};
pub use handle::DictionaryHandle;
pub use registry::DictionaryRegistry;
