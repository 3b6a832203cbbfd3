use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use orthos::error::{OrthosError, Result};
use orthos::language::LanguageTag;
use orthos::spelling::dic_reader::DicReaderLoader;
use orthos::spelling::minimal::MinimalLoader;
use orthos::spelling::{BackendKind, BackendLoader, DictionaryRegistry, LoadOutcome};
use tempfile::TempDir;

/// A loader whose capability is never present.
#[derive(Debug, Default)]
struct MissingCapability {
    attempts: AtomicUsize,
}

impl BackendLoader for MissingCapability {
    fn kind(&self) -> BackendKind {
        BackendKind::Primary
    }

    fn load(&self, _language: &LanguageTag, _base_path: &Path) -> Result<LoadOutcome> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Ok(LoadOutcome::unavailable("checker library not installed"))
    }
}

/// A loader that reports missing files.
#[derive(Debug, Default)]
struct MissingFiles;

impl BackendLoader for MissingFiles {
    fn kind(&self) -> BackendKind {
        BackendKind::Primary
    }

    fn load(&self, language: &LanguageTag, base_path: &Path) -> Result<LoadOutcome> {
        Err(OrthosError::DictionaryNotFound {
            language: language.to_string(),
            base_path: base_path.to_path_buf(),
        })
    }
}

fn en_us() -> LanguageTag {
    LanguageTag::parse("en_US").unwrap()
}

fn write_dic(dir: &Path, words: &[&str]) {
    let mut content = format!("{}\n", words.len());
    for w in words {
        content.push_str(w);
        content.push('\n');
    }
    fs::write(dir.join("en_US.dic"), content).unwrap();
}

#[test]
fn unavailable_primary_falls_back_to_dictionary_reader() {
    let dir = TempDir::new().unwrap();
    write_dic(dir.path(), &["cat/S", "run"]);

    let primary = Arc::new(MissingCapability::default());
    let loaders: Vec<Arc<dyn BackendLoader>> = vec![
        primary.clone() as Arc<dyn BackendLoader>,
        Arc::new(DicReaderLoader),
        Arc::new(MinimalLoader),
    ];
    let registry = DictionaryRegistry::with_loaders(dir.path(), loaders);

    let handle = registry.load(&en_us(), &HashSet::new()).unwrap();
    assert_eq!(handle.kind(), BackendKind::Fallback);
    assert!(handle.verify("cat"));
    assert!(!handle.verify("zorblax"));
    assert_eq!(primary.attempts.load(Ordering::SeqCst), 1);
}

#[test]
fn minimal_backend_is_last_resort() {
    let registry = DictionaryRegistry::with_loaders(
        "/nonexistent",
        vec![
            Arc::new(MissingCapability::default()),
            Arc::new(MissingCapability::default()),
            Arc::new(MinimalLoader),
        ],
    );

    let handle = registry.load(&en_us(), &HashSet::new()).unwrap();
    assert_eq!(handle.kind(), BackendKind::Minimal);
    assert!(handle.verify("cats"));
    assert_eq!(registry.load_count(), 3);
}

#[test]
fn missing_files_stop_the_search() {
    let registry = DictionaryRegistry::with_loaders(
        "/srv/dictionaries",
        vec![Arc::new(MissingFiles), Arc::new(MinimalLoader)],
    );

    let err = registry.load(&en_us(), &HashSet::new()).unwrap_err();
    assert!(err.is_configuration());
    let message = err.to_string();
    assert!(message.contains("en_US"));
    assert!(message.contains("/srv/dictionaries"));
    assert!(registry.get(&en_us()).is_none());
}

#[test]
fn dictionary_reader_searches_primary_then_tag_then_base() {
    let dir = TempDir::new().unwrap();
    let primary_dir = dir.path().join("en");
    let tag_dir = dir.path().join("en_US");
    fs::create_dir_all(&primary_dir).unwrap();
    fs::create_dir_all(&tag_dir).unwrap();
    write_dic(dir.path(), &["base"]);
    write_dic(&tag_dir, &["tagged"]);
    write_dic(&primary_dir, &["primary"]);

    let registry =
        DictionaryRegistry::with_loaders(dir.path(), vec![Arc::new(DicReaderLoader)]);
    let handle = registry.load(&en_us(), &HashSet::new()).unwrap();
    assert!(handle.verify("primary"));
    assert!(!handle.verify("tagged"));
    assert!(!handle.verify("base"));
}

#[test]
fn handles_are_bound_once_per_language() {
    let registry = DictionaryRegistry::with_loaders("/nonexistent", vec![Arc::new(MinimalLoader)]);
    let de = LanguageTag::parse("de_DE").unwrap();

    let a = registry.load(&en_us(), &HashSet::new()).unwrap();
    let b = registry.load(&en_us(), &HashSet::new()).unwrap();
    let c = registry.load(&de, &HashSet::new()).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert!(!Arc::ptr_eq(&a, &c));
    assert_eq!(registry.load_count(), 2);
    assert_eq!(
        registry.loaded_languages(),
        vec!["de_DE".to_string(), "en_US".to_string()]
    );
}

#[test]
fn custom_words_augment_every_backend() {
    let custom: HashSet<String> = ["zorblax", "ZORBLAX"].iter().map(|s| s.to_string()).collect();
    let registry = DictionaryRegistry::with_loaders("/nonexistent", vec![Arc::new(MinimalLoader)]);

    let handle = registry.load(&en_us(), &custom).unwrap();
    assert!(handle.verify("zorblax"));
    assert!(handle.verify("ZORBLAX"));
    assert!(!handle.custom_words().contains("Zorblax"));

    // custom words only take effect on first binding
    let later: HashSet<String> = ["quuxly".to_string()].into_iter().collect();
    let again = registry.load(&en_us(), &later).unwrap();
    assert!(!again.verify("quuxly"));
}

#[cfg(feature = "hunspell")]
#[test]
fn affix_dictionary_is_primary() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("en_US.aff"), "SET UTF-8\n\nSFX S Y 1\nSFX S 0 s .\n").unwrap();
    write_dic(dir.path(), &["cat/S"]);

    let registry = DictionaryRegistry::new(dir.path());
    let handle = registry.load(&en_us(), &HashSet::new()).unwrap();
    assert_eq!(handle.kind(), BackendKind::Primary);
    assert!(handle.verify("cats"));
}

#[cfg(feature = "hunspell")]
#[test]
fn affix_search_skips_directories_without_affix_file() {
    let dir = TempDir::new().unwrap();
    let primary_dir = dir.path().join("en");
    let tag_dir = dir.path().join("en_US");
    fs::create_dir_all(&primary_dir).unwrap();
    fs::create_dir_all(&tag_dir).unwrap();
    write_dic(&primary_dir, &["zorblax"]);
    write_dic(&tag_dir, &["cat/S"]);
    fs::write(tag_dir.join("en_US.aff"), "SET UTF-8\n\nSFX S Y 1\nSFX S 0 s .\n").unwrap();

    let registry = DictionaryRegistry::new(dir.path());
    let handle = registry.load(&en_us(), &HashSet::new()).unwrap();
    assert_eq!(handle.kind(), BackendKind::Primary);
    assert!(handle.verify("cats"));
    assert!(!handle.verify("zorblax"));
}

#[cfg(feature = "hunspell")]
#[test]
fn dic_without_affix_file_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    write_dic(dir.path(), &["cat/S"]);

    let registry = DictionaryRegistry::new(dir.path());
    let err = registry.load(&en_us(), &HashSet::new()).unwrap_err();
    assert!(matches!(err, OrthosError::DictionaryNotFound { .. }));
    assert!(err.is_configuration());
    assert!(registry.get(&en_us()).is_none());
}

#[cfg(not(feature = "hunspell"))]
#[test]
fn without_affix_support_dic_uses_reader() {
    let dir = TempDir::new().unwrap();
    write_dic(dir.path(), &["cat/S"]);

    let registry = DictionaryRegistry::new(dir.path());
    let handle = registry.load(&en_us(), &HashSet::new()).unwrap();
    assert_eq!(handle.kind(), BackendKind::Fallback);
    assert!(handle.verify("cat"));
    assert!(!handle.verify("cats"));
}
