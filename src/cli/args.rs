//! Command line argument parsing for the orthos CLI using clap.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// orthos - multilingual spelling verification for documents and corpora
#[derive(Parser, Debug, Clone)]
#[command(name = "orthos")]
#[command(about = "Detect misspelled words in documents and text corpora")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct OrthosArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Settings file (JSON)
    #[arg(short, long, value_name = "SETTINGS_FILE", env = "ORTHOS_SETTINGS")]
    pub config: Option<PathBuf>,

    /// Storage root for dictionaries, cache and reports
    #[arg(long, value_name = "DIR")]
    pub storage_root: Option<PathBuf>,

    /// Directory searched for <lang>.dic / <lang>.aff
    #[arg(long, value_name = "DIR")]
    pub dictionary_path: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl OrthosArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Spell check documents or text corpora and write a report
    Check(CheckArgs),

    /// Print the normalized lookup form of words
    Normalize(NormalizeArgs),

    /// List the ignore patterns of a language, or test words against them
    Patterns(PatternsArgs),

    /// List the normalization rules of a language in order
    Rules(RulesArgs),
}

/// Arguments for checking inputs
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Input files: plain text (one entry per line) or JSON documents
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Language tag, e.g. en_US
    #[arg(short, long, default_value = "en_US")]
    pub language: String,

    /// How to read the inputs
    #[arg(short = 't', long = "input-format", default_value = "auto")]
    pub input_format: InputFormat,

    /// Custom word list (one word per line)
    #[arg(long, value_name = "FILE")]
    pub custom_dictionary: Option<PathBuf>,

    /// Report file (single input) or report directory (several inputs)
    #[arg(short, long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Disable a normalization rule (repeatable)
    #[arg(long, value_name = "RULE")]
    pub disable: Vec<String>,

    /// Do not keep verdicts in the on-disk cache
    #[arg(long)]
    pub no_persistent_cache: bool,

    /// Include every match in the output
    #[arg(long)]
    pub show_matches: bool,
}

/// Arguments for normalizing words
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Words to normalize
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Language tag, e.g. en_US
    #[arg(short, long, default_value = "en_US")]
    pub language: String,

    /// Disable a normalization rule (repeatable)
    #[arg(long, value_name = "RULE")]
    pub disable: Vec<String>,
}

/// Arguments for listing ignore patterns
#[derive(Parser, Debug, Clone)]
pub struct PatternsArgs {
    /// Language tag, e.g. en_US
    #[arg(short, long, default_value = "en_US")]
    pub language: String,

    /// Words to test instead of listing the patterns
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,
}

/// Arguments for listing rules
#[derive(Parser, Debug, Clone)]
pub struct RulesArgs {
    /// Language tag, e.g. en_US
    #[arg(short, long, default_value = "en_US")]
    pub language: String,
}

/// How check inputs are read
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// JSON documents for `.json` files, text otherwise
    Auto,
    /// Plain text corpus
    Text,
    /// JSON paginated document
    Document,
}

impl InputFormat {
    /// Resolve `Auto` for a given path.
    pub fn resolve(self, path: &Path) -> InputFormat {
        match self {
            InputFormat::Auto => {
                if path.extension().is_some_and(|ext| ext == "json") {
                    InputFormat::Document
                } else {
                    InputFormat::Text
                }
            }
            other => other,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
