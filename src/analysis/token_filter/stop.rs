//! Stop filter implementation.
//!
//! This module provides a filter that removes common words (stop words) that
//! typically don't contribute to search relevance. Every supported language
//! has a default list (see [`stop_words`](super::stop_words)); custom lists
//! replace the defaults.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::language::Language;
//! use sarissa_analysis::analysis::token_filter::Filter;
//! use sarissa_analysis::analysis::token_filter::stop::StopFilter;
//! use sarissa_analysis::analysis::token::Token;
//!
//! let filter = StopFilter::for_language(Language::English);
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("quick", 1),
//!     Token::new("brown", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! // "the" is removed as a stop word
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quick");
//! assert_eq!(result[1].text, "brown");
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, LazyLock};

use crate::analysis::language::Language;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::stop_words::default_stop_words;
use crate::error::Result;

/// Default stop word sets, built once per process.
static DEFAULT_STOP_WORD_SETS: LazyLock<HashMap<Language, Arc<HashSet<String>>>> =
    LazyLock::new(|| {
        Language::ALL
            .iter()
            .map(|&language| {
                let words = default_stop_words(language)
                    .iter()
                    .map(|&s| s.to_string())
                    .collect();
                (language, Arc::new(words))
            })
            .collect()
    });

/// The shared default stop word set for a language.
pub fn default_stop_word_set(language: Language) -> Arc<HashSet<String>> {
    DEFAULT_STOP_WORD_SETS
        .get(&language)
        .cloned()
        .unwrap_or_default()
}

/// A filter that removes stop words from the token stream.
///
/// Stop words are common words (like "the", "is", "at") that are often
/// filtered out during text analysis because they typically don't contribute
/// to search relevance.
///
/// Matching is exact, so the filter belongs after case folding.
///
/// # Examples
///
/// ```
/// use sarissa_analysis::analysis::token_filter::stop::StopFilter;
///
/// let filter = StopFilter::from_words(vec!["custom", "words", "list"]);
/// assert_eq!(filter.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a stop filter with the default stop words of `language`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sarissa_analysis::analysis::language::Language;
    /// use sarissa_analysis::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::for_language(Language::French);
    /// assert!(filter.is_stop_word("des"));
    /// assert!(!filter.is_stop_word("gâteaux"));
    /// ```
    pub fn for_language(language: Language) -> Self {
        Self::with_shared_stop_words(default_stop_word_set(language))
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        Self::with_shared_stop_words(Arc::new(stop_words))
    }

    /// Create a stop filter over an already shared set.
    pub fn with_shared_stop_words(stop_words: Arc<HashSet<String>>) -> Self {
        StopFilter { stop_words }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use sarissa_analysis::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::for_language(Language::English)
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_words = Arc::clone(&self.stop_words);
        Ok(Box::new(
            tokens.filter(move |token| !stop_words.contains(&token.text)),
        ))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::from_words(vec!["the", "and", "or"]);
        let tokens = vec![
            Token::new("hello", 0),
            Token::new("the", 1),
            Token::new("world", 2),
            Token::new("and", 3),
            Token::new("test", 4),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "test");
        // Positions are not renumbered.
        assert_eq!(result[1].position, 2);
    }

    #[test]
    fn test_language_defaults_are_shared() {
        let a = default_stop_word_set(Language::Swedish);
        let b = default_stop_word_set(Language::Swedish);
        assert!(Arc::ptr_eq(&a, &b));
        assert!(a.contains("och"));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::default().name(), "stop");
    }
}
