//! Command implementations for the orthos CLI.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::analysis::Normalizer;
use crate::analysis::normalizer::disable_rules;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::Settings;
use crate::document::json::load_document;
use crate::engine::SpellcheckEngine;
use crate::error::{OrthosError, Result};
use crate::ignore::{IgnorePatternRegistry, should_check};
use crate::language::LanguageTag;
use crate::spelling::DictionaryRegistry;

/// Execute a CLI command.
pub fn execute_command(args: OrthosArgs) -> Result<()> {
    let settings = load_settings(&args)?;
    match &args.command {
        Command::Check(check_args) => check(check_args, &args, settings),
        Command::Normalize(normalize_args) => normalize(normalize_args, &args, &settings),
        Command::Patterns(patterns_args) => patterns(patterns_args, &args, &settings),
        Command::Rules(rules_args) => rules(rules_args, &args, &settings),
    }
}

/// Settings from the file given on the command line or from the
/// environment, with path flags applied on top.
pub fn load_settings(args: &OrthosArgs) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::from_env(),
    };

    if let Some(root) = &args.storage_root {
        let rooted = Settings::rooted(root);
        settings.storage_root = rooted.storage_root;
        settings.dictionary_path = rooted.dictionary_path;
        settings.global_dictionary_path = rooted.global_dictionary_path;
        settings.cache_directory = rooted.cache_directory;
        settings.word_cache_file = rooted.word_cache_file;
        settings.report_file_path = rooted.report_file_path;
    }
    if let Some(path) = &args.dictionary_path {
        settings.dictionary_path = path.clone();
    }

    settings.validate()?;
    Ok(settings)
}

/// Check every input, in parallel when there are several.
fn check(args: &CheckArgs, cli_args: &OrthosArgs, settings: Settings) -> Result<()> {
    LanguageTag::supported(&args.language, &settings.supported_languages)?;

    let registry = Arc::new(DictionaryRegistry::new(&settings.dictionary_path));
    let ignore_registry = Arc::new(IgnorePatternRegistry::new());
    let multiple = args.inputs.len() > 1;

    let summaries = args
        .inputs
        .par_iter()
        .enumerate()
        .map(|(index, input)| {
            let input_settings = settings_for_input(&settings, args, index, input, multiple);
            check_input(
                input,
                args,
                input_settings,
                Arc::clone(&registry),
                Arc::clone(&ignore_registry),
            )
        })
        .collect::<Result<Vec<_>>>()?;

    info!(
        inputs = summaries.len(),
        misspelled = summaries.iter().map(|s| s.misspelled).sum::<usize>(),
        "check finished"
    );

    if summaries.len() == 1 {
        output_result("Spellcheck finished", &summaries[0], cli_args)
    } else {
        output_result("Spellcheck finished", &summaries, cli_args)
    }
}

/// Per-input report and cache locations.
///
/// Several inputs run concurrently, so each gets its own cache directory
/// and a report named after the input.
fn settings_for_input(
    settings: &Settings,
    args: &CheckArgs,
    index: usize,
    input: &Path,
    multiple: bool,
) -> Settings {
    let mut settings = settings.clone();
    if !multiple {
        if let Some(report) = &args.report {
            settings.report_file_path = report.clone();
        }
        return settings;
    }

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| format!("input{index}"));
    let report_dir: PathBuf = match &args.report {
        Some(dir) => dir.clone(),
        None => settings
            .report_file_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };
    settings.report_file_path = report_dir.join(format!("spellcheck_{index}_{stem}.json"));
    settings.cache_directory = settings.cache_directory.join(format!("{index}_{stem}"));
    settings.word_cache_file = settings
        .cache_directory
        .join(crate::config::WORD_CACHE_FILE_NAME);
    settings
}

fn check_input(
    input: &Path,
    args: &CheckArgs,
    settings: Settings,
    registry: Arc<DictionaryRegistry>,
    ignore_registry: Arc<IgnorePatternRegistry>,
) -> Result<CheckSummary> {
    let start_time = Instant::now();

    let mut builder = SpellcheckEngine::builder(settings)
        .registry(registry)
        .ignore_registry(ignore_registry)
        .persistent_cache(!args.no_persistent_cache);
    if let Some(custom) = &args.custom_dictionary {
        builder = builder.custom_dictionary(custom);
    }
    if !args.disable.is_empty() {
        builder = builder.rule_overrides(disable_rules(args.disable.iter().cloned()));
    }
    let mut engine = builder.build(&args.language)?;

    match args.input_format.resolve(input) {
        InputFormat::Document => {
            let document = load_document(input)?;
            engine.check_document(&document)?;
        }
        _ => {
            let text = fs::read_to_string(input).map_err(|e| {
                OrthosError::document(format!("Failed to read {}: {e}", input.display()))
            })?;
            engine.check_corpus(&text)?;
        }
    }
    debug!(input = %input.display(), state = %engine.debug_dump(), "engine state");

    let backend = engine.backend_kind().to_string();
    let report = engine.finalize()?;

    Ok(CheckSummary {
        input: input.to_string_lossy().to_string(),
        language: report.language.clone(),
        backend,
        total_words: report.total_words,
        misspelled: report.misspelled_count(),
        failed_pages: report.failed_pages.clone(),
        report_path: report.report_path.to_string_lossy().to_string(),
        duration_ms: start_time.elapsed().as_millis() as u64,
        matches: args.show_matches.then_some(report.matches),
    })
}

fn normalize(args: &NormalizeArgs, cli_args: &OrthosArgs, settings: &Settings) -> Result<()> {
    LanguageTag::supported(&args.language, &settings.supported_languages)?;
    let normalizer = Normalizer::new();
    let overrides = disable_rules(args.disable.iter().cloned());

    for name in &args.disable {
        if !normalizer.pipeline(&args.language)?.has_rule(name) {
            return Err(OrthosError::config(format!(
                "Unknown rule {name:?} for {}",
                args.language
            )));
        }
    }

    let words = args
        .words
        .iter()
        .map(|word| {
            let normalized = normalizer.normalize(&args.language, word, Some(&overrides))?;
            Ok(NormalizedWord {
                word: word.clone(),
                skipped: normalized.is_empty(),
                normalized,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    output_result(
        "Normalized",
        &NormalizeResult {
            language: args.language.clone(),
            disabled: args.disable.clone(),
            words,
        },
        cli_args,
    )
}

fn patterns(args: &PatternsArgs, cli_args: &OrthosArgs, settings: &Settings) -> Result<()> {
    let registry = IgnorePatternRegistry::new();
    let set = registry.get_patterns(&args.language)?;

    if args.words.is_empty() {
        return output_result(
            "Ignore patterns",
            &PatternListResult {
                language: args.language.clone(),
                patterns: set.sources().iter().cloned().collect(),
            },
            cli_args,
        );
    }

    let checked = args
        .words
        .iter()
        .map(|w| (w.clone(), should_check(w, &set, &settings.ignore_unicode_list)))
        .collect();
    output_result(
        "Pattern test",
        &PatternTestResult {
            language: args.language.clone(),
            checked,
        },
        cli_args,
    )
}

fn rules(args: &RulesArgs, cli_args: &OrthosArgs, _settings: &Settings) -> Result<()> {
    let pipeline = Normalizer::new().pipeline(&args.language)?;
    let rules = pipeline
        .rules()
        .iter()
        .enumerate()
        .map(|(i, rule)| RuleInfo {
            position: i + 1,
            name: rule.name().to_string(),
            enabled_by_default: rule.enabled_by_default(),
        })
        .collect();

    output_result(
        "Normalization rules",
        &RuleListResult {
            language: args.language.clone(),
            rules,
        },
        cli_args,
    )
}
