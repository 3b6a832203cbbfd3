use orthos::analysis::Normalizer;
use orthos::analysis::normalizer::disable_rules;
use orthos::analysis::normalize_text_for_language;
use orthos::error::OrthosError;

#[test]
fn normalization_is_deterministic() {
    let inputs = ["Their", "running.", "café", "\u{201c}Cats\u{201d}", "cancer12", "Straße."];
    for input in inputs {
        let first = normalize_text_for_language("en_US", input).unwrap();
        for _ in 0..5 {
            assert_eq!(normalize_text_for_language("en_US", input).unwrap(), first);
        }
    }
}

#[test]
fn english_examples() {
    let cases = [
        ("running.", "running"),
        ("café", "cafe"),
        ("Their", "their"),
        ("are", ""),
        ("word[3]", "word"),
        ("cancer12", "cancer"),
    ];
    for (input, expected) in cases {
        assert_eq!(
            normalize_text_for_language("en_US", input).unwrap(),
            expected,
            "normalizing {input:?}"
        );
    }
}

#[test]
fn region_and_variant_share_the_pipeline() {
    for tag in ["en_GB", "en_med_glut", "en_ZA"] {
        assert_eq!(normalize_text_for_language(tag, "Cats.").unwrap(), "cats");
    }
}

#[test]
fn german_folds_case_and_keeps_umlauts() {
    assert_eq!(normalize_text_for_language("de_DE", "Häuser,").unwrap(), "häuser");
    assert_eq!(normalize_text_for_language("de_AT_frami", "Für").unwrap(), "");
}

#[test]
fn romance_languages_strip_contractions_and_stopwords() {
    assert_eq!(normalize_text_for_language("fr_FR", "l'homme").unwrap(), "homme");
    assert_eq!(normalize_text_for_language("es_ES", "los").unwrap(), "");
    assert_eq!(normalize_text_for_language("pt_BR", "ação").unwrap(), "ação");
}

#[test]
fn cjk_tokens_are_only_trimmed() {
    assert_eq!(normalize_text_for_language("ja_JP", " 日本語 ").unwrap(), "日本語");
}

#[test]
fn unsupported_language_is_an_error() {
    let err = normalize_text_for_language("xx_YY", "word").unwrap_err();
    assert!(matches!(err, OrthosError::UnsupportedLanguage(_)));
}

#[test]
fn gate_returns_long_and_url_tokens_unchanged() {
    let url = "www.example.com/path";
    assert_eq!(normalize_text_for_language("en_US", url).unwrap(), url);

    let long = "Supercalifragilisticexpialidocious-extended";
    assert_eq!(normalize_text_for_language("en_US", long).unwrap(), long);
}

#[test]
fn gate_skips_noise_tokens() {
    for token in ["(see)", "12px", "a=b", "NCT01234567"] {
        assert_eq!(normalize_text_for_language("en_US", token).unwrap(), "", "{token}");
    }
}

#[test]
fn overrides_disable_named_rules() {
    let normalizer = Normalizer::new();
    let overrides = disable_rules(["lower_text", "lowercase_word"]);
    assert_eq!(
        normalizer.normalize("en_US", "CATS.", Some(&overrides)).unwrap(),
        "CATS"
    );

    let overrides = disable_rules([
        "remove_end_period",
        "remove_non_word_characters",
        "remove_extra_characters_and_digits",
    ]);
    assert_eq!(
        normalizer.normalize("en_US", "cats.", Some(&overrides)).unwrap(),
        "cats."
    );
}

#[test]
fn rules_run_in_definition_order() {
    let pipeline = Normalizer::new().pipeline("en_US").unwrap();
    let names = pipeline.rule_names();
    let pos = |name: &str| names.iter().position(|n| *n == name).unwrap();

    assert_eq!(pos("ignore_document_numbers"), 0);
    assert!(pos("preprocess_numbers") < pos("lowercase_word"));
    assert!(pos("lowercase_word") < pos("normalize_unicode"));
    assert!(pos("normalize_unicode") < pos("remove_square_brackets"));
    assert!(pos("remove_double_space") < pos("remove_english_stopwords"));
    assert!(pos("remove_english_stopwords") < pos("remove_currency_symbols"));
    assert!(pos("remove_en_dash") < pos("lower_text"));
    assert_eq!(names.last(), Some(&"remove_extra_characters_and_digits"));
}
