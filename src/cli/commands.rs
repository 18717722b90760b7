//! Command implementations for the sarissa-analysis CLI.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use log::{debug, info};

use crate::analysis::language::Language;
use crate::analysis::registry::LanguageRegistry;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{AnalysisConfig, Stopwords};
use crate::error::Result;
use crate::pipeline::{TextPipeline, stem_array};

/// Execute a CLI command.
pub fn execute_command(args: SarissaArgs) -> Result<()> {
    match &args.command {
        Command::Tokenize(tokenize_args) => tokenize_text(tokenize_args, &args),
        Command::Stem(stem_args) => stem_words(stem_args, &args),
        Command::Languages => list_languages(&args),
    }
}

/// Tokenize text and print the stems.
fn tokenize_text(args: &TokenizeArgs, cli_args: &SarissaArgs) -> Result<()> {
    let language = Language::from_identifier(&args.language)?;
    let config = build_config(args)?;
    let text = read_input(args)?;

    info!("Tokenizing {} bytes of {} text", text.len(), language);
    let pipeline = TextPipeline::with_config(language, &config);
    let stems = pipeline.tokenize(&text)?;

    output_result(
        "Tokenized successfully",
        &TokenizeResult {
            language: language.name().to_string(),
            token_count: stems.len(),
            stems,
        },
        cli_args,
    )
}

/// Stem individual words.
fn stem_words(args: &StemArgs, cli_args: &SarissaArgs) -> Result<()> {
    let stems = stem_array(&args.words, &args.language)?;
    let language = Language::from_identifier(&args.language)?;

    let stems = args
        .words
        .iter()
        .cloned()
        .zip(stems)
        .map(|(word, stem)| StemPair { word, stem })
        .collect();

    output_result(
        "Stemmed successfully",
        &StemResult {
            language: language.name().to_string(),
            stems,
        },
        cli_args,
    )
}

/// List the supported languages.
fn list_languages(cli_args: &SarissaArgs) -> Result<()> {
    output_result("Languages", &language_list(), cli_args)
}

pub(crate) fn language_list() -> LanguageList {
    let registry = LanguageRegistry::global();
    let languages = registry
        .languages()
        .map(|language| LanguageInfo {
            name: language.name().to_string(),
            code: language.code().to_string(),
            stop_words: registry.profile(language).stop_words().len(),
        })
        .collect();

    LanguageList { languages }
}

/// Combine the configuration file with the command line flags.
pub(crate) fn build_config(args: &TokenizeArgs) -> Result<AnalysisConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading analysis config from: {}", path.display());
            AnalysisConfig::from_file(path)?
        }
        None => AnalysisConfig::default(),
    };

    if let Some(path) = &args.stopwords_file {
        config.stopwords = Stopwords::Custom(read_word_list(path)?);
    } else if args.stopwords && !config.stopwords_enabled() {
        config.stopwords = Stopwords::Enabled(true);
    }
    if args.fold_diacritics {
        config.fold_diacritics = true;
    }
    if args.dedupe {
        config.dedupe = true;
    }

    config.validate()?;
    Ok(config)
}

/// Read a word list: one word per line, blank lines and `#` comments skipped.
pub(crate) fn read_word_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();
    Ok(words)
}

fn read_input(args: &TokenizeArgs) -> Result<String> {
    match (&args.text, &args.file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => Ok(fs::read_to_string(path)?),
        (None, None) => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn tokenize_args(argv: &[&str]) -> TokenizeArgs {
        let mut full = vec!["sarissa-analysis", "tokenize"];
        full.extend_from_slice(argv);
        match SarissaArgs::try_parse_from(full).unwrap().command {
            Command::Tokenize(args) => args,
            _ => panic!("Expected Tokenize command"),
        }
    }

    #[test]
    fn test_build_config_from_flags() {
        let config = build_config(&tokenize_args(&["text", "--stopwords", "--dedupe"])).unwrap();
        assert_eq!(config.stopwords, Stopwords::Enabled(true));
        assert!(config.dedupe);
        assert!(!config.fold_diacritics);
    }

    #[test]
    fn test_stopwords_file_replaces_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# custom list\nFox\n\n  dog  ").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let config =
            build_config(&tokenize_args(&["text", "--stopwords", "--stopwords-file", path.as_str()]))
                .unwrap();
        let set = config.stop_word_set(Language::English).unwrap();

        assert_eq!(set.len(), 2);
        assert!(set.contains("fox"));
        assert!(set.contains("dog"));
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "stopwords": ["quick"], "fold_diacritics": false }}"#).unwrap();
        let path = file.path().to_string_lossy().to_string();

        let config = build_config(&tokenize_args(&[
            "text",
            "--config",
            path.as_str(),
            "--stopwords",
            "--fold-diacritics",
        ]))
        .unwrap();

        // The file's custom list survives a plain --stopwords flag
        assert_eq!(config.stopwords, Stopwords::Custom(vec!["quick".to_string()]));
        assert!(config.fold_diacritics);
    }

    #[test]
    fn test_read_input_prefers_text() {
        let args = tokenize_args(&["the lazy dog"]);
        assert_eq!(read_input(&args).unwrap(), "the lazy dog");

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "I baked some cakes").unwrap();
        let path = file.path().to_string_lossy().to_string();
        let args = tokenize_args(&["--file", path.as_str()]);
        assert_eq!(read_input(&args).unwrap(), "I baked some cakes");
    }

    #[test]
    fn test_language_list() {
        let list = language_list();
        assert_eq!(list.languages.len(), 9);
        assert_eq!(list.languages[0].name, "english");
        assert_eq!(list.languages[8].code, "nl");
        assert!(list.languages.iter().all(|info| info.stop_words > 0));
    }

    #[test]
    fn test_unsupported_language_fails() {
        let args = SarissaArgs::try_parse_from([
            "sarissa-analysis",
            "stem",
            "-l",
            "klingon",
            "word",
        ])
        .unwrap();
        let err = execute_command(args).unwrap_err();
        assert!(err.is_unsupported_language());
    }
}
