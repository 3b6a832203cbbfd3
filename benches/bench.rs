//! Criterion benchmarks for orthos.
//!
//! Covers the hot paths of a spellcheck run:
//! - Normalization through the per-language pipelines
//! - Ignore-pattern screening
//! - Engine throughput over a text corpus

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use orthos::analysis::normalize_text_for_language;
use orthos::config::Settings;
use orthos::engine::SpellcheckEngine;
use orthos::ignore::{IgnorePatternRegistry, should_check};
use orthos::spelling::DictionaryRegistry;
use orthos::spelling::minimal::MinimalLoader;
use tempfile::TempDir;

/// Generate corpus lines mixing dictionary words, noise and misspellings.
fn generate_corpus(lines: usize) -> Vec<String> {
    let words = [
        "Their",
        "are",
        "two",
        "cats",
        "running.",
        "café",
        "PP-0004",
        "https://example.com",
        "zorblax",
        "report",
        "(see)",
        "2023-12-31",
        "children",
        "Water,",
        "quuxly",
        "\u{201c}time\u{201d}",
    ];

    (0..lines)
        .map(|i| {
            let len = 8 + (i % 12);
            (0..len)
                .map(|j| words[(i * 7 + j * 13) % words.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Benchmark normalization.
fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");
    let corpus = generate_corpus(100);
    let tokens: Vec<&str> = corpus.iter().flat_map(|l| l.split_whitespace()).collect();

    for language in ["en_US", "de_DE", "fr_FR"] {
        group.throughput(Throughput::Elements(tokens.len() as u64));
        group.bench_function(format!("normalize_{language}"), |b| {
            b.iter(|| {
                for token in &tokens {
                    let _ = black_box(normalize_text_for_language(language, black_box(token)));
                }
            })
        });
    }

    group.finish();
}

/// Benchmark ignore-pattern screening.
fn bench_ignore_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("ignore_patterns");
    let registry = IgnorePatternRegistry::new();
    let patterns = registry.get_patterns("en_US").unwrap();
    let unicode = Settings::default().ignore_unicode_list;
    let corpus = generate_corpus(100);
    let tokens: Vec<&str> = corpus.iter().flat_map(|l| l.split_whitespace()).collect();

    group.throughput(Throughput::Elements(tokens.len() as u64));
    group.bench_function("should_check", |b| {
        b.iter(|| {
            for token in &tokens {
                black_box(should_check(black_box(token), &patterns, &unicode));
            }
        })
    });

    group.finish();
}

/// Benchmark a full corpus run on the built-in word list.
fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    group.sample_size(20);

    let corpus = generate_corpus(500).join("\n");
    let registry = Arc::new(DictionaryRegistry::with_loaders(
        "/nonexistent",
        vec![Arc::new(MinimalLoader)],
    ));

    for persistent in [false, true] {
        let name = if persistent {
            "check_corpus_persistent_cache"
        } else {
            "check_corpus_session_cache"
        };
        group.bench_function(name, |b| {
            b.iter_with_setup(
                || {
                    let dir = TempDir::new().unwrap();
                    let settings = Settings::builder()
                        .storage_root(dir.path())
                        .report_file_path(dir.path().join("report.json"))
                        .build();
                    let engine = SpellcheckEngine::builder(settings)
                        .registry(Arc::clone(&registry))
                        .persistent_cache(persistent)
                        .build("en_US")
                        .unwrap();
                    (dir, engine)
                },
                |(_dir, mut engine)| {
                    let found = engine.check_corpus(black_box(&corpus)).unwrap();
                    black_box(found)
                },
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalization, bench_ignore_patterns, bench_engine);

criterion_main!(benches);
