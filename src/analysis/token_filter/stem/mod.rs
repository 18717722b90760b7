//! Stemming token filter and stemmer implementations.
//!
//! One Snowball-family stemmer exists per [`Language`]. Stemmers are pure and
//! total: any input string, including the empty string, digits or text in a
//! foreign script, yields a string without failing.

use std::sync::Arc;

use super::Filter;
use crate::analysis::language::Language;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

pub(crate) mod snowball;

// Stemmer implementations
pub mod dutch;
pub mod english;
pub mod french;
pub mod italian;
pub mod norwegian;
pub mod portuguese;
pub mod russian;
pub mod spanish;
pub mod swedish;

// Re-export stemmers
pub use dutch::DutchStemmer;
pub use english::EnglishStemmer;
pub use french::FrenchStemmer;
pub use italian::ItalianStemmer;
pub use norwegian::NorwegianStemmer;
pub use portuguese::PortugueseStemmer;
pub use russian::RussianStemmer;
pub use spanish::SpanishStemmer;
pub use swedish::SwedishStemmer;

/// Create the stemmer for a language.
pub fn stemmer_for(language: Language) -> Arc<dyn Stemmer> {
    match language {
        Language::English => Arc::new(EnglishStemmer::new()),
        Language::French => Arc::new(FrenchStemmer::new()),
        Language::Italian => Arc::new(ItalianStemmer::new()),
        Language::Norwegian => Arc::new(NorwegianStemmer::new()),
        Language::Portuguese => Arc::new(PortugueseStemmer::new()),
        Language::Russian => Arc::new(RussianStemmer::new()),
        Language::Spanish => Arc::new(SpanishStemmer::new()),
        Language::Swedish => Arc::new(SwedishStemmer::new()),
        Language::Dutch => Arc::new(DutchStemmer::new()),
    }
}

/// Filter that applies stemming to tokens.
#[derive(Clone)]
pub struct StemFilter {
    /// The stemmer to use.
    stemmer: Arc<dyn Stemmer>,
}

impl std::fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemFilter {
    /// Create a stem filter for the given language.
    pub fn new(language: Language) -> Self {
        StemFilter {
            stemmer: stemmer_for(language),
        }
    }

    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Arc<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }

    /// The stemmer applied by this filter.
    pub fn stemmer(&self) -> &Arc<dyn Stemmer> {
        &self.stemmer
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stemmer = Arc::clone(&self.stemmer);
        Ok(Box::new(tokens.map(move |token| {
            let stemmed = stemmer.stem(&token.text);
            token.with_text(stemmed)
        })))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}
