//! The spellcheck engine.
//!
//! A [`SpellcheckEngine`] is bound to one language. It walks the words of a
//! document (or the lines of a plain-text corpus), skips tokens that are
//! ignored or unusable after normalization, verifies the rest through the
//! verdict caches and the shared dictionary registry, and collects a
//! [`Match`] for every misspelled word. [`SpellcheckEngine::finalize`] writes
//! the report and removes the transient cache directory.
//!
//! # Example
//!
//! ```no_run
//! use orthos::config::Settings;
//! use orthos::engine::SpellcheckEngine;
//!
//! # fn main() -> orthos::error::Result<()> {
//! let settings = Settings::builder().storage_root("/srv/orthos").build();
//! let mut engine = SpellcheckEngine::builder(settings).build("en_US")?;
//! engine.check_corpus("Their are two cats running.")?;
//! let report = engine.finalize()?;
//! println!("{} misspelled of {}", report.matches.len(), report.total_words);
//! # Ok(())
//! # }
//! ```

pub mod matches;
pub mod report;

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

use crate::analysis::{Normalizer, RuleOverrides};
use crate::cache::{HashLineCache, VerdictSession};
use crate::config::Settings;
use crate::document::{Document, Page, Rect};
use crate::error::{OrthosError, Result};
use crate::ignore::{self, IgnorePatternRegistry, IgnorePatternSet};
use crate::language::LanguageTag;
use crate::spelling::custom::{case_variants, load_custom_dictionary};
use crate::spelling::{BackendKind, DictionaryHandle, DictionaryRegistry};
use crate::util::debug::debug_json;
use crate::util::text::{is_punctuation_only, remove_extra_characters};

pub use matches::{Match, MatchData, PageRef, SpellResult};
pub use report::SpellcheckReport;

static GREEK_OR_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{0370}-\x{03FF}\x{1F00}-\x{1FFF}]|(/|\\)[\w/.-]+")
        .expect("greek/path pattern should be valid")
});

/// Lifecycle of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Initializing,
    Ready,
    /// Working on the page with this zero-based number.
    ProcessingPage(usize),
    Finalized,
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineState::Initializing => f.write_str("initializing"),
            EngineState::Ready => f.write_str("ready"),
            EngineState::ProcessingPage(n) => write!(f, "processing page {n}"),
            EngineState::Finalized => f.write_str("finalized"),
        }
    }
}

/// Builder for [`SpellcheckEngine`].
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    settings: Settings,
    registry: Option<Arc<DictionaryRegistry>>,
    ignore_registry: Option<Arc<IgnorePatternRegistry>>,
    custom_dictionary: Option<PathBuf>,
    custom_words: Vec<String>,
    rule_overrides: Option<RuleOverrides>,
    persistent_cache: bool,
}

impl EngineBuilder {
    pub fn new(settings: Settings) -> Self {
        EngineBuilder {
            settings,
            registry: None,
            ignore_registry: None,
            custom_dictionary: None,
            custom_words: Vec::new(),
            rule_overrides: None,
            persistent_cache: true,
        }
    }

    /// Share a dictionary registry between engines.
    ///
    /// Without one the engine gets a private registry rooted at
    /// `settings.dictionary_path`.
    pub fn registry(mut self, registry: Arc<DictionaryRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn ignore_registry(mut self, registry: Arc<IgnorePatternRegistry>) -> Self {
        self.ignore_registry = Some(registry);
        self
    }

    /// A word-list file unioned with the global word lists.
    pub fn custom_dictionary<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.custom_dictionary = Some(path.into());
        self
    }

    /// Extra words accepted as correct, in addition to any custom file.
    pub fn custom_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_words.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn rule_overrides(mut self, overrides: RuleOverrides) -> Self {
        self.rule_overrides = Some(overrides);
        self
    }

    /// Enable or disable the on-disk verdict cache (enabled by default).
    pub fn persistent_cache(mut self, enabled: bool) -> Self {
        self.persistent_cache = enabled;
        self
    }

    /// Construct an engine for `language`.
    ///
    /// Fails when the language is not supported or when no dictionary can
    /// be bound for it.
    pub fn build(self, language: &str) -> Result<SpellcheckEngine> {
        let EngineBuilder {
            settings,
            registry,
            ignore_registry,
            custom_dictionary,
            custom_words,
            rule_overrides,
            persistent_cache,
        } = self;

        let mut state = EngineState::Initializing;
        debug!(language, %state, "building engine");

        let tag = LanguageTag::supported(language, &settings.supported_languages)?;
        let ordinal = Regex::new(&format!("^(?:{})$", settings.ordinal_numbers_regex))
            .map_err(|e| OrthosError::config(format!("Invalid ordinal_numbers_regex: {e}")))?;

        let mut custom: HashSet<String> = load_custom_dictionary(
            custom_dictionary.as_deref(),
            &settings.global_dictionary_path,
        );
        custom.extend(case_variants(&custom_words));

        let registry = registry
            .unwrap_or_else(|| Arc::new(DictionaryRegistry::new(&settings.dictionary_path)));
        let handle = registry.load(&tag, &custom)?;

        let ignore_registry = ignore_registry.unwrap_or_default();
        let patterns = ignore_registry.get_patterns(tag.as_str())?;

        let persistent = if persistent_cache {
            match HashLineCache::create(&settings.word_cache_file) {
                Ok(cache) => Some(cache),
                Err(e) => {
                    warn!(
                        path = %settings.word_cache_file.display(),
                        error = %e,
                        "persistent verdict cache disabled"
                    );
                    None
                }
            }
        } else {
            None
        };

        state = EngineState::Ready;
        info!(language = %tag, backend = %handle.kind(), "engine ready");

        Ok(SpellcheckEngine {
            settings,
            language: tag,
            registry,
            handle,
            patterns,
            normalizer: Normalizer::new(),
            overrides: rule_overrides,
            ordinal,
            session: VerdictSession::new(),
            persistent,
            matches: Vec::new(),
            total_words: 0,
            failed_pages: Vec::new(),
            state,
        })
    }
}

/// Spell checks documents and corpora in one language.
pub struct SpellcheckEngine {
    settings: Settings,
    language: LanguageTag,
    registry: Arc<DictionaryRegistry>,
    handle: Arc<DictionaryHandle>,
    patterns: Arc<IgnorePatternSet>,
    normalizer: Normalizer,
    overrides: Option<RuleOverrides>,
    ordinal: Regex,
    session: VerdictSession,
    persistent: Option<HashLineCache>,
    matches: Vec<Match>,
    total_words: usize,
    failed_pages: Vec<usize>,
    state: EngineState,
}

impl SpellcheckEngine {
    pub fn builder(settings: Settings) -> EngineBuilder {
        EngineBuilder::new(settings)
    }

    /// An engine with default options.
    pub fn new(settings: Settings, language: &str) -> Result<Self> {
        EngineBuilder::new(settings).build(language)
    }

    pub fn language(&self) -> &LanguageTag {
        &self.language
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn registry(&self) -> &Arc<DictionaryRegistry> {
        &self.registry
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.handle.kind()
    }

    /// Matches collected so far.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn total_words(&self) -> usize {
        self.total_words
    }

    pub fn failed_pages(&self) -> &[usize] {
        &self.failed_pages
    }

    pub fn session(&self) -> &VerdictSession {
        &self.session
    }

    /// Whether a raw token should go through verification at all.
    pub fn should_check(&self, word: &str) -> bool {
        ignore::should_check(word, &self.patterns, &self.settings.ignore_unicode_list)
            && !self.ordinal.is_match(word)
    }

    /// Whether a normalized form is worth looking up.
    ///
    /// Symbol-only forms, configured skip symbols, Greek letters and
    /// path-like strings are not.
    pub fn is_usable(&self, normalized: &str) -> bool {
        !(is_punctuation_only(normalized)
            || self.settings.symbols_to_skip.iter().any(|s| s == normalized)
            || GREEK_OR_PATH.is_match(normalized))
    }

    /// Normalize `text` with this engine's language and rule overrides.
    pub fn normalize(&self, text: &str) -> Result<String> {
        self.normalizer
            .normalize(self.language.as_str(), text, self.overrides.as_ref())
    }

    /// Verdict for `word`, consulting the session cache, then the
    /// persistent cache, then the dictionary.
    pub fn lookup(&mut self, word: &str) -> bool {
        if let Some(verdict) = self.session.lookup(word) {
            return verdict;
        }

        let key = format!("{}:{}", self.language, word);
        if let Some(cache) = &self.persistent {
            match cache.get::<bool>(&key) {
                Ok(Some(verdict)) => {
                    debug!(word, verdict, "persistent cache hit");
                    self.session.record(word, verdict);
                    return verdict;
                }
                Ok(None) => {}
                Err(e) => warn!(error = %e, "persistent cache read failed"),
            }
        }

        let verdict = self.handle.verify(word);
        self.session.record(word, verdict);
        if let Some(cache) = &self.persistent {
            if let Err(e) = cache.put(&key, &verdict) {
                warn!(error = %e, "persistent cache write failed");
            }
        }
        verdict
    }

    /// Verdict object for an already normalized word.
    pub fn spell(&mut self, word: &str) -> Result<SpellResult> {
        self.ensure_active()?;
        let misspelled = if self.lookup(word) {
            Vec::new()
        } else {
            vec![word.to_string()]
        };
        Ok(SpellResult {
            text: word.to_string(),
            language: self.language.to_string(),
            misspelled,
        })
    }

    /// Check one raw word. Returns a match when it is misspelled.
    pub fn process_word(
        &mut self,
        word: &str,
        page: PageRef,
        coordinates: Option<Rect>,
    ) -> Result<Option<Match>> {
        self.ensure_active()?;

        if self.session.is_known_correct(word) {
            return Ok(None);
        }
        if !self.should_check(word) {
            return Ok(None);
        }

        let normalized = self.normalize(word)?;
        if !self.is_usable(&normalized) {
            return Ok(None);
        }

        let result = self.spell(&normalized)?;
        if result.is_correct() {
            return Ok(None);
        }

        Ok(Some(Match {
            value: remove_extra_characters(word),
            misspelled: result.misspelled,
            page,
            coordinates,
            data: MatchData {
                language: self.language.to_string(),
                preprocessed_text: normalized,
            },
        }))
    }

    /// Check every page of `document`.
    ///
    /// A page that fails is logged and contributes neither matches nor
    /// words; processing continues with the next page. Returns the matches
    /// found in this document.
    #[instrument(skip(self, document), fields(language = %self.language, pages = document.page_count()))]
    pub fn check_document(&mut self, document: &dyn Document) -> Result<Vec<Match>> {
        self.ensure_active()?;
        let mut found = Vec::new();

        for page in document.pages() {
            let number = page.number();
            self.state = EngineState::ProcessingPage(number);
            match self.process_page(page) {
                Ok((page_matches, words)) => {
                    debug!(page = number, words, matches = page_matches.len(), "page checked");
                    self.total_words += words;
                    found.extend(page_matches);
                }
                Err(e) => {
                    error!(page = number, error = %e, "failed to process page");
                    self.failed_pages.push(number);
                }
            }
        }

        self.state = EngineState::Ready;
        self.matches.extend(found.iter().cloned());
        Ok(found)
    }

    fn process_page(&mut self, page: &dyn Page) -> Result<(Vec<Match>, usize)> {
        let words = page.words()?;
        let page_ref = PageRef::from_index(page.number());
        let mut found = Vec::new();
        for word in &words {
            if let Some(m) = self.process_word(&word.text, page_ref, Some(word.rect()))? {
                found.push(m);
            }
        }
        Ok((found, words.len()))
    }

    /// Check a plain-text corpus, one entry per line.
    ///
    /// Every line contributes its whitespace-separated word count. A line
    /// that fails is logged and contributes no matches.
    #[instrument(skip(self, text), fields(language = %self.language))]
    pub fn check_corpus(&mut self, text: &str) -> Result<Vec<Match>> {
        self.ensure_active()?;
        let mut found = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let words: Vec<&str> = line.split_whitespace().collect();
            self.total_words += words.len();

            let line_matches = words
                .iter()
                .map(|w| self.process_word(w, PageRef::NotAvailable, None))
                .collect::<Result<Vec<_>>>();
            match line_matches {
                Ok(line_matches) => found.extend(line_matches.into_iter().flatten()),
                Err(e) => error!(line = index, error = %e, "failed to process corpus line"),
            }
        }

        self.matches.extend(found.iter().cloned());
        Ok(found)
    }

    /// Write the report and remove the transient cache directory.
    ///
    /// The report is written even when no match was found. The engine
    /// accepts no further work afterwards.
    #[instrument(skip(self), fields(language = %self.language))]
    pub fn finalize(&mut self) -> Result<SpellcheckReport> {
        self.ensure_active()?;

        let report_path = self.settings.report_file_path.clone();
        let written = report::write_report(&report_path, &self.matches);
        report::delete_directory(&self.settings.cache_directory);
        self.persistent = None;
        self.state = EngineState::Finalized;
        written?;

        info!(
            matches = self.matches.len(),
            total_words = self.total_words,
            failed_pages = self.failed_pages.len(),
            cache_hits = self.session.hits(),
            cache_misses = self.session.misses(),
            report = %report_path.display(),
            "spellcheck finished"
        );

        Ok(SpellcheckReport {
            language: self.language.to_string(),
            matches: std::mem::take(&mut self.matches),
            total_words: self.total_words,
            failed_pages: self.failed_pages.clone(),
            report_path,
        })
    }

    /// Pretty JSON snapshot of the engine for debug logs.
    pub fn debug_dump(&self) -> String {
        debug_json(&EngineSnapshot {
            language: self.language.as_str(),
            state: self.state,
            backend: self.handle.kind(),
            total_words: self.total_words,
            matches: self.matches.len(),
            failed_pages: &self.failed_pages,
            known_correct: self.session.correct_count(),
            known_incorrect: self.session.incorrect_count(),
            cache_hits: self.session.hits(),
            cache_misses: self.session.misses(),
        })
    }

    fn ensure_active(&self) -> Result<()> {
        if self.state == EngineState::Finalized {
            return Err(OrthosError::invalid_operation("engine already finalized"));
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct EngineSnapshot<'a> {
    language: &'a str,
    state: EngineState,
    backend: BackendKind,
    total_words: usize,
    matches: usize,
    failed_pages: &'a [usize],
    known_correct: usize,
    known_incorrect: usize,
    cache_hits: u64,
    cache_misses: u64,
}

impl fmt::Debug for SpellcheckEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpellcheckEngine")
            .field("language", &self.language)
            .field("state", &self.state)
            .field("backend", &self.handle.kind())
            .field("patterns", &self.patterns.len())
            .field("matches", &self.matches.len())
            .field("total_words", &self.total_words)
            .finish()
    }
}
