//! End-to-end tokenization across languages.

use sarissa_analysis::analysis::analyzer::Analyzer;
use sarissa_analysis::analysis::analyzer::language::LanguageAnalyzer;
use sarissa_analysis::analysis::language::Language;
use sarissa_analysis::config::AnalysisConfig;
use sarissa_analysis::pipeline::{TextPipeline, tokenize, tokenize_batch};

#[test]
fn test_tokenize_english_sentences() {
    let stems = tokenize("the quick brown fox jumps over the lazy dog", "english", None).unwrap();
    assert_eq!(stems.len(), 9);
    assert_eq!(stems[4], "jump");
    assert_eq!(stems[7], "lazi");

    let stems = tokenize("I baked some cakes", "english", None).unwrap();
    assert_eq!(stems, vec!["i", "bake", "some", "cake"]);
}

#[test]
fn test_tokenize_french_sentence() {
    let stems = tokenize("j'ai fait des gâteaux", "french", None).unwrap();
    assert_eq!(stems.len(), 4);
    assert_eq!(&stems[1..], &["fait", "de", "gâteau"]);
}

#[test]
fn test_tokenize_russian_sentence() {
    let stems = tokenize("Я приготовила пирожные", "russian", None).unwrap();
    assert_eq!(stems, vec!["я", "приготов", "пирожн"]);
}

#[test]
fn test_tokenize_scandinavian_sentences() {
    let stems = tokenize("Jag lagade några kakor", "swedish", None).unwrap();
    assert_eq!(stems, vec!["jag", "lag", "någr", "kak"]);

    let stems = tokenize("Jeg kokte noen kaker", "norwegian", None).unwrap();
    assert_eq!(stems, vec!["jeg", "kokt", "noen", "kak"]);
}

#[test]
fn test_tokenize_dutch_sentence() {
    let stems = tokenize("de kleine koeien", "dutch", None).unwrap();
    assert_eq!(stems, vec!["de", "klein", "koei"]);

    let stems = tokenize("Ik heb wat taarten gemaakt", "nl", None).unwrap();
    assert_eq!(stems.len(), 5);
    assert_eq!(stems[3], "taart");
}

#[test]
fn test_tokenize_with_stopwords() {
    let config = AnalysisConfig::new().with_stopwords(true);

    let stems = tokenize("Eu cozinhei alguns bolos", "portuguese", Some(&config)).unwrap();
    assert!(stems.contains(&"bol".to_string()));
    assert!(!stems.contains(&"eu".to_string()));

    let stems = tokenize("ho cucinato delle torte", "italian", Some(&config)).unwrap();
    assert_eq!(stems, vec!["cucin", "tort"]);
}

#[test]
fn test_custom_stopwords() {
    let config = AnalysisConfig::from_json_str(r#"{ "stopwords": ["Quick", "brown"] }"#).unwrap();
    let stems = tokenize("the quick brown fox", "english", Some(&config)).unwrap();
    assert_eq!(stems, vec!["the", "fox"]);
}

#[test]
fn test_order_and_duplicates_preserved() {
    let stems = tokenize("cakes baked cakes baked", "english", None).unwrap();
    assert_eq!(stems, vec!["cake", "bake", "cake", "bake"]);

    let config = AnalysisConfig::new().with_dedupe(true);
    let stems = tokenize("cakes baked cakes baked", "english", Some(&config)).unwrap();
    assert_eq!(stems, vec!["cake", "bake"]);
}

#[test]
fn test_fold_diacritics() {
    let config = AnalysisConfig::new().with_fold_diacritics(true);
    let stems = tokenize("gâteaux", "french", Some(&config)).unwrap();
    assert_eq!(stems, vec!["gateau"]);

    let stems = tokenize("jemförelser", "swedish", Some(&config)).unwrap();
    assert_eq!(stems, vec!["jemfor"]);
}

#[test]
fn test_degenerate_inputs() {
    for language in Language::ALL {
        assert!(tokenize("", language.name(), None).unwrap().is_empty());
        assert!(tokenize("  ...  --- ¿¡ ", language.name(), None).unwrap().is_empty());
    }
}

#[test]
fn test_unsupported_language() {
    let err = tokenize("hallo welt", "german", None).unwrap_err();
    assert!(err.is_unsupported_language());
    assert_eq!(err.to_string(), "Unsupported language: german");
}

#[test]
fn test_batch_matches_sequential() {
    let texts = [
        "the quick brown fox",
        "",
        "I baked some cakes",
        "generously hopefulness",
    ];
    let batch = tokenize_batch(&texts, "english", None).unwrap();
    let sequential: Vec<_> = texts
        .iter()
        .map(|text| tokenize(text, "english", None).unwrap())
        .collect();
    assert_eq!(batch, sequential);
}

#[test]
fn test_pipeline_shared_across_threads() {
    let pipeline = TextPipeline::new(Language::Spanish);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let stems = pipeline.tokenize("avenida pasteles").unwrap();
                assert_eq!(stems, vec!["aven", "pastel"]);
            });
        }
    });
}

#[test]
fn test_analyzer_offsets_point_into_source() {
    let text = "Спать трудно, когда тесты не срабатывают";
    let analyzer = LanguageAnalyzer::new(Language::Russian);

    for token in analyzer.analyze(text).unwrap() {
        let source = &text[token.start_offset..token.end_offset];
        assert!(source.to_lowercase().starts_with(&token.text));
        assert!(token.start_offset < token.end_offset);
    }
}
