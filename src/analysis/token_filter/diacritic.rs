//! Diacritic folding filter.
//!
//! Folds accented Latin letters to their plain ASCII base (`gâteau` becomes
//! `gateau`, `jemför` becomes `jemfor`). Each character is decomposed (NFD);
//! when the base is an ASCII letter the combining marks are dropped, otherwise
//! the character is left as it was. Letters such as Cyrillic `й` or Nordic `ø`,
//! which are distinct letters rather than accented ones, therefore survive.
//!
//! The filter runs after stemming, since the stemmers rely on accents.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Fold the accented Latin letters of `text` to ASCII.
///
/// # Examples
///
/// ```
/// use sarissa_analysis::analysis::token_filter::diacritic::fold_diacritics;
///
/// assert_eq!(fold_diacritics("gâteau"), "gateau");
/// assert_eq!(fold_diacritics("ça"), "ca");
/// assert_eq!(fold_diacritics("пирожн"), "пирожн");
/// ```
pub fn fold_diacritics(text: &str) -> String {
    if text.is_ascii() {
        return text.to_string();
    }

    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        let mut decomposed = std::iter::once(c).nfd();
        match decomposed.next() {
            Some(base) if base.is_ascii_alphabetic() && decomposed.all(is_combining_mark) => {
                folded.push(base);
            }
            _ => folded.push(c),
        }
    }
    folded
}

/// A filter that folds diacritics on every token.
#[derive(Clone, Debug, Default)]
pub struct DiacriticFilter;

impl DiacriticFilter {
    /// Create a new diacritic filter.
    pub fn new() -> Self {
        DiacriticFilter
    }
}

impl Filter for DiacriticFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| {
            let folded = fold_diacritics(&token.text);
            token.with_text(folded)
        })))
    }

    fn name(&self) -> &'static str {
        "diacritic"
    }
}
