//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OrthosArgs, OutputFormat};
use crate::engine::Match;
use crate::error::Result;

/// Result of checking one input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckSummary {
    pub input: String,
    pub language: String,
    pub backend: String,
    pub total_words: usize,
    pub misspelled: usize,
    pub failed_pages: Vec<usize>,
    pub report_path: String,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<Match>>,
}

/// Normalized form of one word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedWord {
    pub word: String,
    pub normalized: String,
    /// The normalized form is empty and the word would be skipped.
    pub skipped: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeResult {
    pub language: String,
    pub disabled: Vec<String>,
    pub words: Vec<NormalizedWord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternListResult {
    pub language: String,
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternTestResult {
    pub language: String,
    /// Word -> whether it would be spell checked.
    pub checked: BTreeMap<String, bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleInfo {
    pub position: usize,
    pub name: String,
    pub enabled_by_default: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleListResult {
    pub language: String,
    pub rules: Vec<RuleInfo>,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn print_human(&self);
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &OrthosArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human();
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize + ?Sized>(result: &T, args: &OrthosArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

impl HumanOutput for CheckSummary {
    fn print_human(&self) {
        println!("Spellcheck: {}", self.input);
        println!("═══════════");
        println!("Language: {} ({})", self.language, self.backend);
        println!("Words: {}", self.total_words);
        println!("Misspelled: {}", self.misspelled);
        if !self.failed_pages.is_empty() {
            let pages = self
                .failed_pages
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            println!("Failed pages: {pages}");
        }
        println!("Report: {}", self.report_path);
        println!("Time: {}", format_duration(self.duration_ms));

        if let Some(matches) = &self.matches {
            println!();
            for m in matches {
                println!(
                    "  page {:>4}  {}  -> {}",
                    m.page.to_string(),
                    m.value,
                    m.data.preprocessed_text
                );
            }
        }
    }
}

impl<T: HumanOutput> HumanOutput for Vec<T> {
    fn print_human(&self) {
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                println!();
            }
            item.print_human();
        }
    }
}

impl HumanOutput for NormalizeResult {
    fn print_human(&self) {
        for word in &self.words {
            if word.skipped {
                println!("{}\t(skipped)", word.word);
            } else {
                println!("{}\t{}", word.word, word.normalized);
            }
        }
    }
}

impl HumanOutput for PatternListResult {
    fn print_human(&self) {
        println!("Ignore patterns for {} ({}):", self.language, self.patterns.len());
        println!("────────────────────");
        for pattern in &self.patterns {
            println!("  {pattern}");
        }
    }
}

impl HumanOutput for PatternTestResult {
    fn print_human(&self) {
        for (word, checked) in &self.checked {
            let verdict = if *checked { "check" } else { "ignore" };
            println!("{word}\t{verdict}");
        }
    }
}

impl HumanOutput for RuleListResult {
    fn print_human(&self) {
        println!("Normalization rules for {}:", self.language);
        println!("────────────────────────────");
        if self.rules.is_empty() {
            println!("  (none)");
        }
        for rule in &self.rules {
            let flag = if rule.enabled_by_default { "" } else { " (disabled)" };
            println!("  {:>2}. {}{}", rule.position, rule.name, flag);
        }
    }
}

/// Format milliseconds for humans.
fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else {
        format!("{:.2}s", ms as f64 / 1000.0)
    }
}
