//! Analysis configuration.
//!
//! [`AnalysisConfig`] controls the optional stages of the pipeline: stop word
//! removal, diacritic folding and deduplication. Every field has a default, so
//! an empty JSON object is a valid configuration.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::language::Language;
//! use sarissa_analysis::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::from_json_str(r#"{ "stopwords": ["Fox", "dog"] }"#).unwrap();
//! let stop_words = config.stop_word_set(Language::English).unwrap();
//! assert!(stop_words.contains("fox"));
//! assert!(!stop_words.contains("the"));
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::language::Language;
use crate::analysis::token_filter::lowercase::fold_case;
use crate::analysis::token_filter::stop::default_stop_word_set;
use crate::error::{Result, SarissaError};

/// Stop word setting: a switch for the language defaults or an explicit list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Stopwords {
    /// `true` removes the language's stop words, `false` disables removal.
    Enabled(bool),
    /// Remove exactly these words.
    Custom(Vec<String>),
}

impl Default for Stopwords {
    fn default() -> Self {
        Stopwords::Enabled(false)
    }
}

impl From<bool> for Stopwords {
    fn from(enabled: bool) -> Self {
        Stopwords::Enabled(enabled)
    }
}

impl From<Vec<String>> for Stopwords {
    fn from(words: Vec<String>) -> Self {
        Stopwords::Custom(words)
    }
}

/// Configuration of the analysis pipeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Stop word removal before stemming.
    pub stopwords: Stopwords,

    /// Replacement for the language defaults when `stopwords` is `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_stopwords: Option<Vec<String>>,

    /// Strip accents from stems after stemming.
    pub fold_diacritics: bool,

    /// Keep only the first occurrence of each stem.
    pub dedupe: bool,
}

impl AnalysisConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable removal of the language's default stop words.
    pub fn with_stopwords(mut self, enabled: bool) -> Self {
        self.stopwords = Stopwords::Enabled(enabled);
        self
    }

    /// Remove exactly the given words.
    pub fn with_stop_word_list<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = Stopwords::Custom(words.into_iter().map(Into::into).collect());
        self
    }

    /// Set the list that replaces the defaults when stop words are enabled.
    pub fn with_custom_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_stopwords = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Enable or disable diacritic folding.
    pub fn with_fold_diacritics(mut self, fold: bool) -> Self {
        self.fold_diacritics = fold;
        self
    }

    /// Enable or disable deduplication.
    pub fn with_dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        self
    }

    /// Whether any stop word removal takes place.
    pub fn stopwords_enabled(&self) -> bool {
        !matches!(self.stopwords, Stopwords::Enabled(false))
    }

    /// The stop word set to apply for `language`, or `None` when disabled.
    ///
    /// Default sets are shared with the language registry; custom lists are
    /// case-folded so they match normalized tokens.
    pub fn stop_word_set(&self, language: Language) -> Option<Arc<HashSet<String>>> {
        match (&self.stopwords, &self.custom_stopwords) {
            (Stopwords::Enabled(false), _) => None,
            (Stopwords::Enabled(true), None) => Some(default_stop_word_set(language)),
            (Stopwords::Enabled(true), Some(words)) | (Stopwords::Custom(words), _) => {
                Some(Arc::new(words.iter().map(|w| fold_case(w.trim())).collect()))
            }
        }
    }

    /// Check that no configured stop word is blank.
    pub fn validate(&self) -> Result<()> {
        let lists = [
            match &self.stopwords {
                Stopwords::Custom(words) => Some(words),
                Stopwords::Enabled(_) => None,
            },
            self.custom_stopwords.as_ref(),
        ];

        for words in lists.into_iter().flatten() {
            if words.iter().any(|w| w.trim().is_empty()) {
                return Err(SarissaError::invalid_config("stop words cannot be empty"));
            }
        }

        Ok(())
    }

    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut config: AnalysisConfig = serde_json::from_str(json)?;
        config.validate()?;
        config.fold_stop_words();
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content).map_err(|e| match e {
            SarissaError::Json(e) => {
                SarissaError::invalid_config(format!("{}: {e}", path.display()))
            }
            other => other,
        })
    }

    /// Serialize the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn fold_stop_words(&mut self) {
        if let Stopwords::Custom(words) = &mut self.stopwords {
            for word in words.iter_mut() {
                *word = fold_case(word.trim());
            }
        }
        if let Some(words) = &mut self.custom_stopwords {
            for word in words.iter_mut() {
                *word = fold_case(word.trim());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.stopwords, Stopwords::Enabled(false));
        assert!(!config.stopwords_enabled());
        assert!(!config.fold_diacritics);
        assert!(!config.dedupe);
        assert!(config.stop_word_set(Language::English).is_none());
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = AnalysisConfig::from_json_str("{}").unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn test_stopwords_true_uses_language_defaults() {
        let config = AnalysisConfig::from_json_str(r#"{ "stopwords": true }"#).unwrap();
        let set = config.stop_word_set(Language::Italian).unwrap();
        assert!(Arc::ptr_eq(&set, &default_stop_word_set(Language::Italian)));
    }

    #[test]
    fn test_custom_stopwords_replace_defaults() {
        let config = AnalysisConfig::from_json_str(
            r#"{ "stopwords": true, "custom_stopwords": ["Quick", " Lazy "] }"#,
        )
        .unwrap();
        assert_eq!(
            config.custom_stopwords,
            Some(vec!["quick".to_string(), "lazy".to_string()])
        );

        let set = config.stop_word_set(Language::English).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("lazy"));
        assert!(!set.contains("the"));
    }

    #[test]
    fn test_custom_stopwords_ignored_when_disabled() {
        let config = AnalysisConfig::new()
            .with_stopwords(false)
            .with_custom_stopwords(["quick"]);
        assert!(config.stop_word_set(Language::English).is_none());
    }

    #[test]
    fn test_builder() {
        let config = AnalysisConfig::new()
            .with_stop_word_list(["ÅT"])
            .with_fold_diacritics(true)
            .with_dedupe(true);

        assert!(config.stopwords_enabled());
        assert!(config.fold_diacritics);
        assert!(config.dedupe);
        assert!(config.stop_word_set(Language::Swedish).unwrap().contains("åt"));
    }

    #[test]
    fn test_invalid_config() {
        let err = AnalysisConfig::from_json_str(r#"{ "stopwords": ["ok", "  "] }"#).unwrap_err();
        assert!(matches!(err, SarissaError::Config(_)));

        let err = AnalysisConfig::from_json_str(r#"{ "stopwords": 3 }"#).unwrap_err();
        assert!(matches!(err, SarissaError::Json(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "stopwords": true, "dedupe": true }}"#).unwrap();

        let config = AnalysisConfig::from_file(file.path()).unwrap();
        assert!(config.stopwords_enabled());
        assert!(config.dedupe);

        let missing = AnalysisConfig::from_file(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(SarissaError::Io(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let config = AnalysisConfig::new().with_stopwords(true).with_dedupe(true);
        let json = config.to_json_string().unwrap();
        assert_eq!(AnalysisConfig::from_json_str(&json).unwrap(), config);
    }
}
