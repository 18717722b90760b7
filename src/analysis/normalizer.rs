//! Text normalizer.
//!
//! Turns raw text into normalized tokens: language-aware word splitting
//! followed by case folding, with empty tokens dropped. Every call to
//! [`Normalizer::normalize`] starts a fresh lazy stream over the input.
//! The normalizer is itself a [`Tokenizer`], so analyzers can build on it.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::language::Language;
//! use sarissa_analysis::analysis::normalizer::Normalizer;
//!
//! let normalizer = Normalizer::new(Language::English);
//! let words = normalizer.normalize_words("I baked some CAKES!").unwrap();
//! assert_eq!(words, vec!["i", "baked", "some", "cakes"]);
//! ```

use crate::analysis::language::Language;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{Filter, LowercaseFilter, RemoveEmptyFilter};
use crate::analysis::tokenizer::{LanguageTokenizer, Tokenizer};
use crate::error::Result;

/// Splits and case-folds text for one language.
#[derive(Clone, Debug)]
pub struct Normalizer {
    tokenizer: LanguageTokenizer,
    lowercase: LowercaseFilter,
    remove_empty: RemoveEmptyFilter,
}

impl Normalizer {
    /// Create a normalizer for a language.
    pub fn new(language: Language) -> Self {
        Normalizer {
            tokenizer: LanguageTokenizer::new(language),
            lowercase: LowercaseFilter::new(),
            remove_empty: RemoveEmptyFilter::new(),
        }
    }

    /// Create a normalizer from a language identifier.
    pub fn from_identifier(identifier: &str) -> Result<Self> {
        Ok(Self::new(Language::from_identifier(identifier)?))
    }

    /// The language this normalizer handles.
    pub fn language(&self) -> Language {
        self.tokenizer.language()
    }

    /// The underlying tokenizer.
    pub fn tokenizer(&self) -> &LanguageTokenizer {
        &self.tokenizer
    }

    /// Produce a lazy stream of normalized tokens in source order.
    pub fn normalize(&self, text: &str) -> Result<TokenStream> {
        let tokens = self.tokenizer.tokenize(text)?;
        let tokens = self.lowercase.filter(tokens)?;
        self.remove_empty.filter(tokens)
    }

    /// Normalize text and collect the token texts.
    pub fn normalize_words(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.normalize(text)?.map(|token| token.text).collect())
    }
}

impl Tokenizer for Normalizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        self.normalize(text)
    }

    fn name(&self) -> &'static str {
        "normalizer"
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_folding() {
        let normalizer = Normalizer::new(Language::Russian);
        assert_eq!(
            normalizer.normalize_words("Я приготовила ПИРОЖНЫЕ").unwrap(),
            vec!["я", "приготовила", "пирожные"]
        );

        let normalizer = Normalizer::new(Language::Norwegian);
        assert_eq!(
            normalizer.normalize_words("Jeg kokte noen kaker").unwrap(),
            vec!["jeg", "kokte", "noen", "kaker"]
        );
    }

    #[test]
    fn test_apostrophes_are_folded() {
        let normalizer = Normalizer::new(Language::English);
        assert_eq!(
            normalizer.normalize_words("Don’t stop").unwrap(),
            vec!["don't", "stop"]
        );
    }

    #[test]
    fn test_offsets_survive_normalization() {
        let normalizer = Normalizer::new(Language::Spanish);
        let tokens: Vec<_> = normalizer.normalize("Cociné unos PASTELES").unwrap().collect();

        assert_eq!(tokens[0].text, "cociné");
        assert_eq!(tokens[0].end_offset, 7);
        assert_eq!(tokens[2].text, "pasteles");
        assert_eq!(tokens[2].start_offset, 13);
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_restartable() {
        let normalizer = Normalizer::default();
        let first = normalizer.normalize_words("quick brown fox").unwrap();
        let second = normalizer.normalize_words("quick brown fox").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_degenerate_inputs() {
        let normalizer = Normalizer::new(Language::Dutch);
        assert!(normalizer.normalize_words("").unwrap().is_empty());
        assert!(normalizer.normalize_words("... --- !!!").unwrap().is_empty());
        assert_eq!(normalizer.normalize_words("1984").unwrap(), vec!["1984"]);
        assert!(Normalizer::from_identifier("xx").is_err());
    }

    #[test]
    fn test_normalizer_as_tokenizer() {
        let normalizer = Normalizer::new(Language::Italian);
        let tokens: Vec<_> = normalizer.tokenize("Ho cucinato").unwrap().collect();
        assert_eq!(tokens[0].text, "ho");
        assert_eq!(normalizer.name(), "normalizer");
    }
}
