//! Dedupe filter implementation.
//!
//! Keeps only the first occurrence of each distinct token text. Later
//! duplicates are dropped; surviving tokens keep their original positions.

use std::collections::HashSet;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes repeated tokens from the stream.
///
/// # Examples
///
/// ```
/// use sarissa_analysis::analysis::token_filter::Filter;
/// use sarissa_analysis::analysis::token_filter::dedupe::DedupeFilter;
/// use sarissa_analysis::analysis::token::Token;
///
/// let filter = DedupeFilter::new();
/// let tokens = vec![
///     Token::new("cake", 0),
///     Token::new("bake", 1),
///     Token::new("cake", 2),
/// ];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 2);
/// assert_eq!(result[1].text, "bake");
/// ```
#[derive(Clone, Debug, Default)]
pub struct DedupeFilter;

impl DedupeFilter {
    /// Create a new dedupe filter.
    pub fn new() -> Self {
        DedupeFilter
    }
}

impl Filter for DedupeFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut seen = HashSet::new();
        Ok(Box::new(
            tokens.filter(move |token| seen.insert(token.text.clone())),
        ))
    }

    fn name(&self) -> &'static str {
        "dedupe"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_dedupe_filter() {
        let filter = DedupeFilter::new();
        let tokens = vec![
            Token::new("de", 0),
            Token::new("klein", 1),
            Token::new("de", 2),
            Token::new("koei", 3),
            Token::new("klein", 4),
        ];

        let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
        let texts: Vec<_> = result.iter().map(|t| t.text.as_str()).collect();

        assert_eq!(texts, vec!["de", "klein", "koei"]);
        assert_eq!(result[2].position, 3);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(DedupeFilter::new().name(), "dedupe");
    }
}
