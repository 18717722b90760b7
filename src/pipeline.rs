//! Text pipeline entry points.
//!
//! [`tokenize`] turns text into stems, [`stem_array`] stems words that were
//! already split, and [`tokenize_batch`] analyzes many texts in parallel.
//! [`TextPipeline`] is the reusable form of all three for callers that analyze
//! repeatedly with one language and configuration.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::pipeline::{stem_array, tokenize};
//!
//! let stems = tokenize("the quick brown fox jumps over the lazy dog", "english", None).unwrap();
//! assert_eq!(stems, vec!["the", "quick", "brown", "fox", "jump", "over", "the", "lazi", "dog"]);
//!
//! let stems = stem_array(&["banken"], "dutch").unwrap();
//! assert_eq!(stems, vec!["bank"]);
//!
//! assert!(tokenize("hello", "klingon", None).unwrap_err().is_unsupported_language());
//! ```

use log::trace;
use rayon::prelude::*;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::language::LanguageAnalyzer;
use crate::analysis::language::Language;
use crate::analysis::registry::LanguageRegistry;
use crate::analysis::token::Token;
use crate::config::AnalysisConfig;
use crate::error::Result;

/// Split, normalize, optionally stop-filter and stem `text`.
///
/// Stems come back in source order with duplicates kept unless the config
/// enables deduplication. Fails only when `language` is not supported.
pub fn tokenize(text: &str, language: &str, config: Option<&AnalysisConfig>) -> Result<Vec<String>> {
    let language = Language::from_identifier(language)?;
    let pipeline = match config {
        Some(config) => TextPipeline::with_config(language, config),
        None => TextPipeline::new(language),
    };
    pipeline.tokenize(text)
}

/// Stem each word as given; the output has one stem per input word.
///
/// Words are not split or case-folded first.
pub fn stem_array<S: AsRef<str>>(words: &[S], language: &str) -> Result<Vec<String>> {
    let language = Language::from_identifier(language)?;
    Ok(stem_words(language, words))
}

/// Tokenize many texts in parallel, preserving input order.
///
/// # Examples
///
/// ```
/// use sarissa_analysis::pipeline::tokenize_batch;
///
/// let texts = ["I baked some cakes", "the lazy dog"];
/// let stems = tokenize_batch(&texts, "en", None).unwrap();
/// assert_eq!(stems[0], vec!["i", "bake", "some", "cake"]);
/// assert_eq!(stems[1], vec!["the", "lazi", "dog"]);
/// ```
pub fn tokenize_batch<S>(
    texts: &[S],
    language: &str,
    config: Option<&AnalysisConfig>,
) -> Result<Vec<Vec<String>>>
where
    S: AsRef<str> + Sync,
{
    let language = Language::from_identifier(language)?;
    let pipeline = match config {
        Some(config) => TextPipeline::with_config(language, config),
        None => TextPipeline::new(language),
    };
    pipeline.tokenize_batch(texts)
}

fn stem_words<S: AsRef<str>>(language: Language, words: &[S]) -> Vec<String> {
    let stemmer = LanguageRegistry::global().profile(language).stemmer();
    let stems: Vec<String> = words.iter().map(|w| stemmer.stem(w.as_ref())).collect();
    trace!("Stemmed {} {} words", stems.len(), language);
    stems
}

/// A reusable analysis pipeline for one language and configuration.
///
/// `TextPipeline` is `Send + Sync`; share one instance across threads rather
/// than rebuilding it per call.
///
/// # Examples
///
/// ```
/// use sarissa_analysis::analysis::language::Language;
/// use sarissa_analysis::config::AnalysisConfig;
/// use sarissa_analysis::pipeline::TextPipeline;
///
/// let config = AnalysisConfig::new().with_stopwords(true);
/// let pipeline = TextPipeline::with_config(Language::Italian, &config);
///
/// let stems = pipeline.tokenize("ho cucinato delle torte").unwrap();
/// assert_eq!(stems, vec!["cucin", "tort"]);
/// ```
#[derive(Clone, Debug)]
pub struct TextPipeline {
    analyzer: LanguageAnalyzer,
}

impl TextPipeline {
    /// Create a pipeline with the default configuration.
    pub fn new(language: Language) -> Self {
        TextPipeline {
            analyzer: LanguageAnalyzer::new(language),
        }
    }

    /// Create a pipeline with the given configuration.
    pub fn with_config(language: Language, config: &AnalysisConfig) -> Self {
        TextPipeline {
            analyzer: LanguageAnalyzer::with_config(language, config),
        }
    }

    /// Create a pipeline from a language identifier.
    pub fn from_identifier(identifier: &str, config: &AnalysisConfig) -> Result<Self> {
        Ok(Self::with_config(Language::from_identifier(identifier)?, config))
    }

    /// The pipeline's language.
    pub fn language(&self) -> Language {
        self.analyzer.language()
    }

    /// The pipeline's configuration.
    pub fn config(&self) -> &AnalysisConfig {
        self.analyzer.config()
    }

    /// The analyzer behind this pipeline.
    pub fn analyzer(&self) -> &LanguageAnalyzer {
        &self.analyzer
    }

    /// Analyze `text` into stems.
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let stems: Vec<String> = self.analyzer.analyze(text)?.map(|token| token.text).collect();
        trace!("Stemmed {} {} tokens", stems.len(), self.language());
        Ok(stems)
    }

    /// Analyze `text` into full tokens with positions and offsets.
    pub fn analyze(&self, text: &str) -> Result<Vec<Token>> {
        Ok(self.analyzer.analyze(text)?.collect())
    }

    /// Stem each word as given.
    pub fn stem_array<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        stem_words(self.language(), words)
    }

    /// Tokenize many texts in parallel, preserving input order.
    pub fn tokenize_batch<S>(&self, texts: &[S]) -> Result<Vec<Vec<String>>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.tokenize(text.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_english() {
        let stems = tokenize("I baked some cakes", "english", None).unwrap();
        assert_eq!(stems, vec!["i", "bake", "some", "cake"]);
    }

    #[test]
    fn test_tokenize_with_stopwords() {
        let config = AnalysisConfig::new().with_stopwords(true);
        let stems = tokenize(
            "the quick brown fox jumps over the lazy dog",
            "english",
            Some(&config),
        )
        .unwrap();
        assert_eq!(stems, vec!["quick", "brown", "fox", "jump", "lazi", "dog"]);
    }

    #[test]
    fn test_tokenize_degenerate_inputs() {
        assert!(tokenize("", "french", None).unwrap().is_empty());
        assert!(tokenize(" ,;!? ", "french", None).unwrap().is_empty());
        assert_eq!(tokenize("1984", "russian", None).unwrap(), vec!["1984"]);
    }

    #[test]
    fn test_stem_array_keeps_length() {
        let words = ["awesome", "", "42", "awesome"];
        let stems = stem_array(&words, "english").unwrap();
        assert_eq!(stems, vec!["awesom", "", "42", "awesom"]);
    }

    #[test]
    fn test_stem_array_does_not_normalize() {
        assert_eq!(stem_array(&["Banken"], "dutch").unwrap(), vec!["Bank"]);
    }

    #[test]
    fn test_unsupported_language() {
        assert!(tokenize("text", "german", None).unwrap_err().is_unsupported_language());
        assert!(stem_array(&["text"], "").unwrap_err().is_unsupported_language());
        assert!(tokenize_batch(&["text"], "xx", None).unwrap_err().is_unsupported_language());
    }

    #[test]
    fn test_batch_preserves_order() {
        let pipeline = TextPipeline::new(Language::Swedish);
        let texts: Vec<String> = (0..64)
            .map(|i| if i % 2 == 0 { "jemförelser".to_string() } else { format!("{i}") })
            .collect();

        let stems = pipeline.tokenize_batch(&texts).unwrap();
        for (i, stem) in stems.iter().enumerate() {
            if i % 2 == 0 {
                assert_eq!(stem, &vec!["jemför".to_string()]);
            } else {
                assert_eq!(stem, &vec![i.to_string()]);
            }
        }
    }

    #[test]
    fn test_pipeline_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TextPipeline>();
        assert_send_sync::<LanguageAnalyzer>();
    }

    #[test]
    fn test_analyze_returns_positions() {
        let config = AnalysisConfig::new().with_stopwords(true);
        let pipeline = TextPipeline::with_config(Language::Spanish, &config);
        let tokens = pipeline.analyze("cociné unos pasteles").unwrap();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].text, "pastel");
        assert_eq!(tokens[1].position, 2);
        assert_eq!(pipeline.config(), &config);
    }
}
