use std::fs;
use std::path::Path;
use std::sync::Arc;

use orthos::config::Settings;
use orthos::document::json::parse_document;
use orthos::document::{InMemoryDocument, InMemoryPage, WordBox};
use orthos::engine::{EngineState, Match, PageRef, SpellcheckEngine};
use orthos::error::{OrthosError, Result};
use orthos::spelling::{BackendKind, DictionaryRegistry};
use tempfile::TempDir;

const AFF: &str = "SET UTF-8\n";
const DIC: &str = "8\ntheir\ntwo\ncats\nrunning\ncafe\nthree\ndogs\nreport\n";

fn write_dictionary(root: &Path) {
    let dir = root.join("dictionaries/libreoffice/en");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("en_US.aff"), AFF).unwrap();
    fs::write(dir.join("en_US.dic"), DIC).unwrap();
}

fn settings(root: &Path) -> Settings {
    Settings::builder()
        .storage_root(root)
        .report_file_path(root.join("reports/report.json"))
        .build()
}

fn engine(root: &Path) -> Result<SpellcheckEngine> {
    write_dictionary(root);
    SpellcheckEngine::new(settings(root), "en_US")
}

#[test]
fn sample_sentence_has_no_misspellings() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let mut engine = engine(dir.path())?;

    let found = engine.check_corpus("Their are two cats running.")?;
    assert!(found.is_empty());
    assert_eq!(engine.total_words(), 5);
    assert_ne!(engine.backend_kind(), BackendKind::Minimal);
    Ok(())
}

#[test]
fn ignored_tokens_never_produce_matches() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let mut engine = engine(dir.path())?;

    let found = engine.check_corpus("PP-0004 https://example.com café zorblax")?;
    assert_eq!(found.len(), 1);

    let m = &found[0];
    assert_eq!(m.value, "zorblax");
    assert_eq!(m.misspelled, vec!["zorblax".to_string()]);
    assert_eq!(m.page, PageRef::NotAvailable);
    assert!(m.coordinates.is_none());
    assert_eq!(m.data.language, "en_US");
    assert_eq!(m.data.preprocessed_text, "zorblax");
    assert_eq!(engine.total_words(), 4);
    Ok(())
}

#[test]
fn partial_failure_over_three_pages() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let mut engine = engine(dir.path())?;

    let document = InMemoryDocument::new(vec![
        InMemoryPage::from_text(0, "two cats zorblax"),
        InMemoryPage::failing(1, "unreadable content stream"),
        InMemoryPage::from_text(2, "three dogs quuxly"),
    ]);

    let found = engine.check_document(&document)?;
    let pages: Vec<PageRef> = found.iter().map(|m| m.page).collect();
    assert_eq!(pages, vec![PageRef::Number(1), PageRef::Number(3)]);
    assert_eq!(engine.total_words(), 6);
    assert_eq!(engine.failed_pages(), &[1]);
    assert_eq!(engine.state(), EngineState::Ready);

    let report = engine.finalize()?;
    assert_eq!(report.matches.len(), 2);
    Ok(())
}

#[test]
fn matches_carry_coordinates() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let mut engine = engine(dir.path())?;

    let document = InMemoryDocument::new(vec![InMemoryPage::new(
        4,
        vec![WordBox::new("Zorblax,", 10.0, 20.0, 58.0, 32.0)],
    )]);
    let found = engine.check_document(&document)?;
    assert_eq!(found.len(), 1);

    let m = &found[0];
    assert_eq!(m.value, "Zorblax");
    assert_eq!(m.page, PageRef::Number(5));
    let rect = m.coordinates.expect("coordinates");
    assert_eq!(rect.x0, 10.0);
    assert_eq!(rect.width, 48.0);
    assert_eq!(rect.height, 12.0);
    Ok(())
}

#[test]
fn json_document_with_error_page() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let mut engine = engine(dir.path())?;

    let document = parse_document(
        r#"{"pages": [
            {"number": 0, "words": [[0, 0, 10, 10, "cats", 0, 0, 0], [12, 0, 30, 10, "blorp", 0, 0, 1]]},
            {"number": 1, "error": "encrypted"}
        ]}"#,
    )?;
    let found = engine.check_document(&document)?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].value, "blorp");
    assert_eq!(engine.total_words(), 2);
    Ok(())
}

#[test]
fn custom_dictionary_accepts_words() -> Result<()> {
    let dir = TempDir::new().unwrap();
    write_dictionary(dir.path());
    let custom = dir.path().join("custom.txt");
    fs::write(&custom, "Zorblax\n").unwrap();

    let mut engine = SpellcheckEngine::builder(settings(dir.path()))
        .custom_dictionary(&custom)
        .build("en_US")?;
    assert!(engine.check_corpus("zorblax ZORBLAX")?.is_empty());
    Ok(())
}

#[test]
fn global_word_lists_are_included() -> Result<()> {
    let dir = TempDir::new().unwrap();
    write_dictionary(dir.path());
    let settings = settings(dir.path());
    fs::create_dir_all(&settings.global_dictionary_path).unwrap();
    fs::write(settings.global_dictionary_path.join("brands.txt"), "quuxly\n").unwrap();

    let mut engine = SpellcheckEngine::new(settings, "en_US")?;
    assert!(engine.check_corpus("quuxly")?.is_empty());
    Ok(())
}

#[test]
fn finalize_writes_report_and_removes_cache() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let mut engine = engine(dir.path())?;
    let cache_dir = engine.settings().cache_directory.clone();
    let report_path = engine.settings().report_file_path.clone();

    engine.check_corpus("zorblax cats\nquuxly")?;
    let report = engine.finalize()?;
    assert_eq!(report.total_words, 3);
    assert_eq!(report.report_path, report_path);
    assert!(!cache_dir.exists());

    let written: Vec<Match> = serde_json::from_str(&fs::read_to_string(&report_path)?)?;
    assert_eq!(written.len(), 2);
    assert_eq!(written, report.matches);
    Ok(())
}

#[test]
fn finalize_without_matches_writes_empty_array() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let mut engine = engine(dir.path())?;
    engine.check_corpus("two cats")?;

    let report = engine.finalize()?;
    assert_eq!(fs::read_to_string(&report.report_path)?, "[]");
    Ok(())
}

#[test]
fn finalized_engine_rejects_work() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let mut engine = engine(dir.path())?;
    engine.finalize()?;

    assert!(matches!(
        engine.check_corpus("cats"),
        Err(OrthosError::InvalidOperation(_))
    ));
    assert!(matches!(engine.finalize(), Err(OrthosError::InvalidOperation(_))));
    Ok(())
}

#[test]
fn unsupported_language_is_fatal() {
    let dir = TempDir::new().unwrap();
    let err = SpellcheckEngine::new(settings(dir.path()), "zh_CN").unwrap_err();
    assert!(matches!(err, OrthosError::UnsupportedLanguage(_)));
}

#[test]
fn missing_dictionary_files_are_fatal() {
    let dir = TempDir::new().unwrap();
    let err = SpellcheckEngine::new(settings(dir.path()), "en_US").unwrap_err();
    assert!(matches!(err, OrthosError::DictionaryNotFound { .. }));
    assert!(err.to_string().contains("en_US"));
}

#[test]
fn engines_share_a_registry() -> Result<()> {
    let dir = TempDir::new().unwrap();
    write_dictionary(dir.path());
    let settings = settings(dir.path());
    let registry = Arc::new(DictionaryRegistry::new(&settings.dictionary_path));

    let first = SpellcheckEngine::builder(settings.clone())
        .registry(Arc::clone(&registry))
        .persistent_cache(false)
        .build("en_US")?;
    let loads = registry.load_count();

    let second = SpellcheckEngine::builder(settings)
        .registry(Arc::clone(&registry))
        .persistent_cache(false)
        .build("en_US")?;
    assert_eq!(registry.load_count(), loads);
    assert_eq!(first.backend_kind(), second.backend_kind());
    Ok(())
}

#[test]
fn verdicts_are_memoized_per_session() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let mut engine = engine(dir.path())?;

    engine.check_corpus("zorblax zorblax zorblax")?;
    assert_eq!(engine.matches().len(), 3);
    assert_eq!(engine.session().incorrect_count(), 1);
    assert_eq!(engine.session().misses(), 1);
    assert_eq!(engine.session().hits(), 2);
    Ok(())
}
