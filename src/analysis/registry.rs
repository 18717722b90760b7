//! Process-wide language registry.
//!
//! The registry holds one immutable [`LanguageProfile`] per supported
//! language: its compiled word pattern, its stemmer and its default stop word
//! set. It is built on first use and read without locking afterwards.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::registry::LanguageRegistry;
//!
//! let profile = LanguageRegistry::global().get("Swedish").unwrap();
//! assert_eq!(profile.stemmer().stem("jemförelser"), "jemför");
//! assert!(profile.is_stop_word("och"));
//!
//! assert!(LanguageRegistry::global().get("klingon").is_err());
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, LazyLock};

use log::debug;
use regex::Regex;

use crate::analysis::language::Language;
use crate::analysis::token_filter::stem::{Stemmer, stemmer_for};
use crate::analysis::token_filter::stop::default_stop_word_set;
use crate::analysis::tokenizer::language::compile_word_pattern;
use crate::error::Result;

static REGISTRY: LazyLock<LanguageRegistry> = LazyLock::new(LanguageRegistry::build);

/// Everything the analysis pipeline needs to know about one language.
#[derive(Clone)]
pub struct LanguageProfile {
    language: Language,
    word_pattern: Arc<Regex>,
    stemmer: Arc<dyn Stemmer>,
    stop_words: Arc<HashSet<String>>,
}

impl LanguageProfile {
    fn new(language: Language) -> Result<Self> {
        Ok(LanguageProfile {
            language,
            word_pattern: Arc::new(compile_word_pattern(language)?),
            stemmer: stemmer_for(language),
            stop_words: default_stop_word_set(language),
        })
    }

    /// The language described by this profile.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The compiled word pattern.
    pub fn word_pattern(&self) -> &Arc<Regex> {
        &self.word_pattern
    }

    /// The stemmer for this language.
    pub fn stemmer(&self) -> &Arc<dyn Stemmer> {
        &self.stemmer
    }

    /// The default stop word set.
    pub fn stop_words(&self) -> &Arc<HashSet<String>> {
        &self.stop_words
    }

    /// Check whether a case-folded word is a default stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

impl fmt::Debug for LanguageProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageProfile")
            .field("language", &self.language)
            .field("word_pattern", &self.word_pattern.as_str())
            .field("stemmer", &self.stemmer.name())
            .field("stop_words", &self.stop_words.len())
            .finish()
    }
}

/// Immutable table of language profiles.
#[derive(Debug)]
pub struct LanguageRegistry {
    profiles: HashMap<Language, LanguageProfile>,
}

impl LanguageRegistry {
    fn build() -> Self {
        let profiles: HashMap<_, _> = Language::ALL
            .iter()
            .map(|&language| {
                let profile = LanguageProfile::new(language)
                    .expect("built-in word patterns should be valid");
                (language, profile)
            })
            .collect();
        debug!("Language registry built with {} languages", profiles.len());

        LanguageRegistry { profiles }
    }

    /// The process-wide registry.
    pub fn global() -> &'static LanguageRegistry {
        &REGISTRY
    }

    /// Look up a profile by identifier (name, ISO 639-1 code or alias).
    pub fn get(&self, identifier: &str) -> Result<&LanguageProfile> {
        let language = Language::from_identifier(identifier)?;
        Ok(self.profile(language))
    }

    /// The profile of a language.
    pub fn profile(&self, language: Language) -> &LanguageProfile {
        &self.profiles[&language]
    }

    /// Supported languages, in declaration order.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        Language::ALL
            .iter()
            .copied()
            .filter(|language| self.profiles.contains_key(language))
    }

    /// Number of registered languages.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_is_registered() {
        let registry = LanguageRegistry::global();
        assert_eq!(registry.len(), 9);
        assert_eq!(registry.languages().collect::<Vec<_>>(), Language::ALL.to_vec());

        for language in Language::ALL {
            let profile = registry.profile(language);
            assert_eq!(profile.language(), language);
            assert_eq!(profile.stemmer().name(), language.name());
            assert!(!profile.stop_words().is_empty());
        }
    }

    #[test]
    fn test_lookup_by_identifier() {
        let registry = LanguageRegistry::global();
        assert_eq!(registry.get("english").unwrap().language(), Language::English);
        assert_eq!(registry.get(" RU ").unwrap().language(), Language::Russian);
        assert_eq!(registry.get("portugese").unwrap().language(), Language::Portuguese);

        let err = registry.get("german").unwrap_err();
        assert!(err.is_unsupported_language());
    }

    #[test]
    fn test_profiles_share_state() {
        let registry = LanguageRegistry::global();
        let a = registry.profile(Language::Dutch);
        let b = registry.get("nl").unwrap();
        assert!(Arc::ptr_eq(a.word_pattern(), b.word_pattern()));
        assert!(Arc::ptr_eq(a.stop_words(), &default_stop_word_set(Language::Dutch)));
    }

    #[test]
    fn test_stop_words() {
        let profile = LanguageRegistry::global().profile(Language::English);
        assert!(profile.is_stop_word("the"));
        assert!(!profile.is_stop_word("fox"));
    }
}
