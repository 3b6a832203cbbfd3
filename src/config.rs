//! Engine settings.
//!
//! [`Settings`] gathers every path and static table the engine needs. It can
//! be built from defaults, read from a JSON file, overridden from `ORTHOS_*`
//! environment variables, or assembled with [`SettingsBuilder`].
//!
//! # Example
//!
//! ```no_run
//! use orthos::config::Settings;
//!
//! let settings = Settings::builder()
//!     .storage_root("/srv/orthos")
//!     .dictionary_path("/usr/share/hunspell")
//!     .build();
//! assert!(settings.is_supported("en_US"));
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{OrthosError, Result};
use crate::language::DEFAULT_SUPPORTED_LANGUAGES;

/// Unicode punctuation tokens that are never spell checked.
pub const DEFAULT_IGNORE_UNICODE_LIST: &[&str] = &[
    "\u{00ab}", "\u{00bb}", "\u{2022}", "\u{2018}", "\u{2019}", "\u{201c}", "\u{201d}",
    "\u{2026}", "\u{2013}", "\u{2014}",
];

/// Normalized forms that are never looked up.
pub const DEFAULT_SYMBOLS_TO_SKIP: &[&str] = &[
    "ø", "ł", "-", "=", "+", "*", "/", "\\", "|", "~", "`", "!", "@", "#", "$", "%", "ˆ", "^",
    "&", "(", ")", "{", "}", "[", "]", "<", ">", "?", ";", ":", "'", "\"", ",", ".", " ",
];

/// Ordinal numbers such as `2ème`.
pub const DEFAULT_ORDINAL_NUMBERS_REGEX: &str = "[0-9]+\u{00e8}me";

/// Name of the persistent word verdict cache file.
pub const WORD_CACHE_FILE_NAME: &str = "word_dictionary.txt";

/// Settings shared by the registry and every engine instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Language tags accepted at engine construction.
    pub supported_languages: Vec<String>,
    /// Root under which default cache and report locations are derived.
    pub storage_root: PathBuf,
    /// Search base for `<lang>.dic` / `<lang>.aff` files.
    pub dictionary_path: PathBuf,
    /// Directory walked for `.txt` custom word lists.
    pub global_dictionary_path: PathBuf,
    /// Transient working directory, removed at finalization.
    pub cache_directory: PathBuf,
    /// Persistent verdict cache file (normally inside `cache_directory`).
    pub word_cache_file: PathBuf,
    /// Where the JSON report is written.
    pub report_file_path: PathBuf,
    /// Raw tokens that bypass checking entirely.
    pub ignore_unicode_list: Vec<String>,
    /// Normalized forms that are never looked up.
    pub symbols_to_skip: Vec<String>,
    /// Pattern for ordinal numbers that are skipped.
    pub ordinal_numbers_regex: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::rooted(PathBuf::from("storage"))
    }
}

impl Settings {
    /// Create a builder starting from the defaults.
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }

    /// Defaults with every derived path placed under `storage_root`.
    pub fn rooted<P: Into<PathBuf>>(storage_root: P) -> Self {
        let storage_root = storage_root.into();
        let cache_directory = storage_root.join("cache");
        Settings {
            supported_languages: DEFAULT_SUPPORTED_LANGUAGES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            dictionary_path: storage_root.join("dictionaries").join("libreoffice"),
            global_dictionary_path: storage_root.join("dictionaries").join("global"),
            word_cache_file: cache_directory.join(WORD_CACHE_FILE_NAME),
            cache_directory,
            report_file_path: default_report_path(&storage_root.join("reports")),
            ignore_unicode_list: to_strings(DEFAULT_IGNORE_UNICODE_LIST),
            symbols_to_skip: to_strings(DEFAULT_SYMBOLS_TO_SKIP),
            ordinal_numbers_regex: DEFAULT_ORDINAL_NUMBERS_REGEX.to_string(),
            storage_root,
        }
    }

    /// Load settings from a JSON file.
    ///
    /// Missing keys take their defaults. Unset paths are derived from the
    /// file's `storage_root`, and an unset `word_cache_file` follows
    /// `cache_directory`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            OrthosError::config(format!("Failed to read settings {}: {e}", path.display()))
        })?;
        let value: serde_json::Value = serde_json::from_str(&content)?;
        let serde_json::Value::Object(overrides) = value else {
            return Err(OrthosError::config(format!(
                "Settings file {} must hold a JSON object",
                path.display()
            )));
        };

        let mut base = match overrides.get("storage_root").and_then(|v| v.as_str()) {
            Some(root) => Settings::rooted(root),
            None => Settings::default(),
        };
        if let Some(dir) = overrides.get("cache_directory").and_then(|v| v.as_str()) {
            base.word_cache_file = Path::new(dir).join(WORD_CACHE_FILE_NAME);
        }

        let serde_json::Value::Object(mut merged) = serde_json::to_value(&base)? else {
            return Err(OrthosError::config("Settings must serialize to an object"));
        };
        merged.extend(overrides);
        let settings: Settings = serde_json::from_value(serde_json::Value::Object(merged))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Defaults overridden by `ORTHOS_*` environment variables.
    pub fn from_env() -> Self {
        let root = std::env::var("ORTHOS_STORAGE_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("storage"));
        let mut settings = Settings::rooted(root);
        settings.apply_env();
        settings
    }

    /// Override individual paths from the environment.
    pub fn apply_env(&mut self) {
        if let Ok(path) = std::env::var("ORTHOS_DICTIONARY_PATH") {
            self.dictionary_path = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("ORTHOS_GLOBAL_DICTIONARY_PATH") {
            self.global_dictionary_path = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("ORTHOS_CACHE_DIRECTORY") {
            self.cache_directory = PathBuf::from(path);
            self.word_cache_file = self.cache_directory.join(WORD_CACHE_FILE_NAME);
        }
        if let Ok(path) = std::env::var("ORTHOS_REPORT_FILE") {
            self.report_file_path = PathBuf::from(path);
        }
    }

    /// Check that the settings are usable.
    pub fn validate(&self) -> Result<()> {
        if self.supported_languages.is_empty() {
            return Err(OrthosError::config("supported_languages must not be empty"));
        }
        regex::Regex::new(&self.ordinal_numbers_regex).map_err(|e| {
            OrthosError::config(format!("Invalid ordinal_numbers_regex: {e}"))
        })?;
        Ok(())
    }

    /// Whether `language` is one of the configured tags.
    pub fn is_supported(&self, language: &str) -> bool {
        self.supported_languages.iter().any(|l| l == language)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// `spellcheck_<timestamp>.json` inside `directory`.
pub fn default_report_path(directory: &Path) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d%H%M%S");
    directory.join(format!("spellcheck_{stamp}.json"))
}

/// Builder for [`Settings`].
#[derive(Debug, Clone)]
pub struct SettingsBuilder {
    settings: Settings,
    cache_file_set: bool,
    report_set: bool,
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsBuilder {
    /// Start from [`Settings::default`].
    pub fn new() -> Self {
        SettingsBuilder {
            settings: Settings::default(),
            cache_file_set: false,
            report_set: false,
        }
    }

    /// Re-root every derived default path.
    pub fn storage_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        let rooted = Settings::rooted(root);
        self.settings.storage_root = rooted.storage_root;
        self.settings.dictionary_path = rooted.dictionary_path;
        self.settings.global_dictionary_path = rooted.global_dictionary_path;
        self.settings.cache_directory = rooted.cache_directory;
        if !self.cache_file_set {
            self.settings.word_cache_file = rooted.word_cache_file;
        }
        if !self.report_set {
            self.settings.report_file_path = rooted.report_file_path;
        }
        self
    }

    pub fn dictionary_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.settings.dictionary_path = path.into();
        self
    }

    pub fn global_dictionary_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.settings.global_dictionary_path = path.into();
        self
    }

    /// Set the transient cache directory. The word cache file follows it
    /// unless it was set explicitly.
    pub fn cache_directory<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.settings.cache_directory = path.into();
        if !self.cache_file_set {
            self.settings.word_cache_file =
                self.settings.cache_directory.join(WORD_CACHE_FILE_NAME);
        }
        self
    }

    pub fn word_cache_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.settings.word_cache_file = path.into();
        self.cache_file_set = true;
        self
    }

    pub fn report_file_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.settings.report_file_path = path.into();
        self.report_set = true;
        self
    }

    pub fn supported_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.settings.supported_languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn ignore_unicode_list<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.settings.ignore_unicode_list = tokens.into_iter().map(Into::into).collect();
        self
    }

    pub fn symbols_to_skip<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.settings.symbols_to_skip = symbols.into_iter().map(Into::into).collect();
        self
    }

    pub fn ordinal_numbers_regex<S: Into<String>>(mut self, pattern: S) -> Self {
        self.settings.ordinal_numbers_regex = pattern.into();
        self
    }

    pub fn build(self) -> Settings {
        self.settings
    }
}
