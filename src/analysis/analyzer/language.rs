//! Language analyzer.
//!
//! Builds the complete analysis chain for one language: normalization, the
//! optional stop filter, stemming, then the optional diacritic and dedupe
//! stages.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::analyzer::Analyzer;
//! use sarissa_analysis::analysis::analyzer::language::LanguageAnalyzer;
//! use sarissa_analysis::analysis::language::Language;
//! use sarissa_analysis::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::new().with_stopwords(true);
//! let analyzer = LanguageAnalyzer::with_config(Language::English, &config);
//! let tokens: Vec<_> = analyzer.analyze("The quick brown fox").unwrap().collect();
//!
//! // "The" is removed as a stop word, others are stemmed
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "quick");
//! assert_eq!(tokens[0].position, 1);
//! ```

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::language::Language;
use crate::analysis::normalizer::Normalizer;
use crate::analysis::registry::LanguageRegistry;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{DedupeFilter, DiacriticFilter, StemFilter, StopFilter};
use crate::config::AnalysisConfig;
use crate::error::Result;

/// Analyzer producing stemmed tokens for one language.
#[derive(Clone)]
pub struct LanguageAnalyzer {
    language: Language,
    config: AnalysisConfig,
    inner: PipelineAnalyzer,
}

impl LanguageAnalyzer {
    /// Create an analyzer with the default configuration.
    pub fn new(language: Language) -> Self {
        Self::with_config(language, &AnalysisConfig::default())
    }

    /// Create an analyzer for a language identifier such as `"portugese"` or `"ru"`.
    pub fn from_identifier(identifier: &str, config: &AnalysisConfig) -> Result<Self> {
        Ok(Self::with_config(Language::from_identifier(identifier)?, config))
    }

    /// Create an analyzer with the given configuration.
    pub fn with_config(language: Language, config: &AnalysisConfig) -> Self {
        let profile = LanguageRegistry::global().profile(language);

        let mut inner = PipelineAnalyzer::new(Arc::new(Normalizer::new(language)));
        if let Some(stop_words) = config.stop_word_set(language) {
            inner = inner.add_filter(Arc::new(StopFilter::with_shared_stop_words(stop_words)));
        }
        inner = inner.add_filter(Arc::new(StemFilter::with_stemmer(Arc::clone(
            profile.stemmer(),
        ))));
        if config.fold_diacritics {
            inner = inner.add_filter(Arc::new(DiacriticFilter::new()));
        }
        if config.dedupe {
            inner = inner.add_filter(Arc::new(DedupeFilter::new()));
        }
        let inner = inner.with_name(language.name());

        debug!(
            "Built {} analyzer with filters {:?}",
            language,
            inner.filter_names()
        );

        LanguageAnalyzer {
            language,
            config: config.clone(),
            inner,
        }
    }

    /// The analyzed language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The configuration this analyzer was built from.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// The underlying pipeline.
    pub fn pipeline(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for LanguageAnalyzer {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

impl Analyzer for LanguageAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        self.language.name()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl Debug for LanguageAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageAnalyzer")
            .field("language", &self.language)
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn texts(analyzer: &LanguageAnalyzer, text: &str) -> Vec<String> {
        analyzer.analyze(text).unwrap().map(|t| t.text).collect()
    }

    #[test]
    fn test_language_analyzer() {
        let analyzer = LanguageAnalyzer::new(Language::English);

        let tokens: Vec<Token> = analyzer.analyze("I baked some cakes").unwrap().collect();

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[1].text, "bake");
        assert_eq!(tokens[1].start_offset, 2);
        assert_eq!(tokens[1].end_offset, 7);
        assert_eq!(tokens[3].text, "cake");
    }

    #[test]
    fn test_default_filters() {
        let analyzer = LanguageAnalyzer::new(Language::French);
        assert_eq!(analyzer.pipeline().filter_names(), vec!["stem"]);
        assert_eq!(analyzer.pipeline().tokenizer().name(), "normalizer");
    }

    #[test]
    fn test_all_stages() {
        let config = AnalysisConfig::new()
            .with_stopwords(true)
            .with_fold_diacritics(true)
            .with_dedupe(true);
        let analyzer = LanguageAnalyzer::with_config(Language::French, &config);

        assert_eq!(
            analyzer.pipeline().filter_names(),
            vec!["stop", "stem", "diacritic", "dedupe"]
        );
        assert_eq!(
            texts(&analyzer, "des gâteaux et des gâteaux"),
            vec!["gateau"]
        );
    }

    #[test]
    fn test_duplicates_preserved_by_default() {
        let analyzer = LanguageAnalyzer::new(Language::Dutch);
        assert_eq!(
            texts(&analyzer, "de kleine koeien en de kleine"),
            vec!["de", "klein", "koei", "en", "de", "klein"]
        );
    }

    #[test]
    fn test_from_identifier() {
        let config = AnalysisConfig::default();
        let analyzer = LanguageAnalyzer::from_identifier("portugese", &config).unwrap();
        assert_eq!(analyzer.language(), Language::Portuguese);
        assert_eq!(analyzer.name(), "portuguese");

        let err = LanguageAnalyzer::from_identifier("klingon", &config).unwrap_err();
        assert!(err.is_unsupported_language());
    }

    #[test]
    fn test_downcast() {
        let analyzer: Box<dyn Analyzer> = Box::new(LanguageAnalyzer::new(Language::Russian));
        let concrete = analyzer.as_any().downcast_ref::<LanguageAnalyzer>().unwrap();
        assert_eq!(concrete.language(), Language::Russian);
        assert!(!concrete.config().stopwords_enabled());
    }
}
