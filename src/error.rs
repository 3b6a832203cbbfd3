//! Error types for the Orthos library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`OrthosError`] enum. Configuration problems (an unsupported language, a
//! dictionary that cannot be found) are fatal and surface at construction
//! time; per-page and per-line problems are handled inside the engine and
//! never reach the caller as errors.
//!
//! # Examples
//!
//! ```
//! use orthos::error::{OrthosError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(OrthosError::config("missing dictionary path"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Orthos operations.
#[derive(Error, Debug)]
pub enum OrthosError {
    /// I/O errors (file operations, directory walks, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The language tag is not part of the supported set.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Invalid or incomplete configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No dictionary files were found after exhausting every search path.
    #[error("No dictionary files found for language {language}. Base path: {}", .base_path.display())]
    DictionaryNotFound { language: String, base_path: PathBuf },

    /// A dictionary file exists but could not be parsed.
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Analysis-related errors (pattern compilation, pipeline construction)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Cache-related errors
    #[error("Cache error: {0}")]
    Cache(String),

    /// Document-related errors (unreadable pages, malformed input)
    #[error("Document error: {0}")]
    Document(String),

    /// Invalid operation for the current engine state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with OrthosError.
pub type Result<T> = std::result::Result<T, OrthosError>;

impl OrthosError {
    /// Create a new unsupported language error.
    pub fn unsupported_language<S: Into<String>>(language: S) -> Self {
        OrthosError::UnsupportedLanguage(language.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        OrthosError::Config(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        OrthosError::Dictionary(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        OrthosError::Analysis(msg.into())
    }

    /// Create a new cache error.
    pub fn cache<S: Into<String>>(msg: S) -> Self {
        OrthosError::Cache(msg.into())
    }

    /// Create a new document error.
    pub fn document<S: Into<String>>(msg: S) -> Self {
        OrthosError::Document(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        OrthosError::InvalidOperation(msg.into())
    }

    /// Create a new serialization error.
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        OrthosError::Serialization(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        OrthosError::Other(msg.into())
    }

    /// Whether this error is a fatal configuration problem.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            OrthosError::UnsupportedLanguage(_)
                | OrthosError::Config(_)
                | OrthosError::DictionaryNotFound { .. }
        )
    }
}

impl From<regex::Error> for OrthosError {
    fn from(err: regex::Error) -> Self {
        OrthosError::Analysis(err.to_string())
    }
}

impl From<bincode::Error> for OrthosError {
    fn from(err: bincode::Error) -> Self {
        OrthosError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for OrthosError {
    fn from(err: csv::Error) -> Self {
        OrthosError::Serialization(err.to_string())
    }
}
