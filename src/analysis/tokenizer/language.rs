//! Language-aware word tokenizer.
//!
//! Splits text into maximal runs of word-constituent characters. What counts
//! as constituent depends on the language: ASCII letters and digits, plus the
//! letters the language writes with diacritics (the Cyrillic alphabet for
//! Russian). English, French, Italian and Dutch also keep an apostrophe that
//! sits between two constituent characters, so `don't` and `j'ai` stay whole.
//! Everything else, hyphens included, is a boundary.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::language::Language;
use crate::analysis::registry::LanguageRegistry;
use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::error::{Result, SarissaError};

/// Letters beyond `a-z` that belong to words of the given language.
///
/// The characters are lowercase; the compiled pattern is case-insensitive.
pub fn word_characters(language: Language) -> &'static str {
    match language {
        Language::English => "àçèéìïòóöùü",
        Language::French => "àâäæçéèêëîïôœùûüÿ",
        Language::Italian => "àèéìíîòóùú",
        Language::Norwegian => "æøåäöüéèêóòô",
        Language::Portuguese => "áàâãçéêíóôõúü",
        Language::Russian => "а-яё",
        Language::Spanish => "áéíóúñü",
        Language::Swedish => "åäöüé",
        Language::Dutch => "áäéëèíïóöúü",
    }
}

/// Whether an apostrophe between two word characters joins them.
pub fn joins_apostrophes(language: Language) -> bool {
    matches!(
        language,
        Language::English | Language::French | Language::Italian | Language::Dutch
    )
}

/// Build the word pattern source for a language.
///
/// # Examples
///
/// ```
/// use sarissa_analysis::analysis::language::Language;
/// use sarissa_analysis::analysis::tokenizer::language::word_pattern;
///
/// assert_eq!(word_pattern(Language::Swedish), "(?i)[a-z0-9åäöüé]+");
/// ```
pub fn word_pattern(language: Language) -> String {
    let class = format!("[a-z0-9{}]", word_characters(language));
    if joins_apostrophes(language) {
        format!("(?i){class}+(?:['’]{class}+)*")
    } else {
        format!("(?i){class}+")
    }
}

/// Compile the word pattern for a language.
pub fn compile_word_pattern(language: Language) -> Result<Regex> {
    Regex::new(&word_pattern(language)).map_err(|e| {
        SarissaError::analysis(format!("Invalid word pattern for {language}: {e}"))
    })
}

/// A tokenizer that extracts the words of one language.
///
/// Tokens carry byte offsets into the input, sequential positions, and
/// metadata recording their [`TokenType`] and language. Their text is the raw
/// slice of the input; case folding is left to
/// [`LowercaseFilter`](crate::analysis::token_filter::LowercaseFilter).
///
/// # Examples
///
/// ```
/// use sarissa_analysis::analysis::language::Language;
/// use sarissa_analysis::analysis::tokenizer::Tokenizer;
/// use sarissa_analysis::analysis::tokenizer::language::LanguageTokenizer;
///
/// let tokenizer = LanguageTokenizer::new(Language::French);
/// let tokens: Vec<_> = tokenizer.tokenize("J'ai fait des gâteaux!").unwrap().collect();
///
/// let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(texts, vec!["J'ai", "fait", "des", "gâteaux"]);
/// assert_eq!(tokens[3].start_offset, 14);
/// ```
#[derive(Clone, Debug)]
pub struct LanguageTokenizer {
    language: Language,
    pattern: Arc<Regex>,
}

impl LanguageTokenizer {
    /// Create a tokenizer using the shared pattern from the language registry.
    pub fn new(language: Language) -> Self {
        let profile = LanguageRegistry::global().profile(language);
        LanguageTokenizer {
            language,
            pattern: Arc::clone(profile.word_pattern()),
        }
    }

    /// Create a tokenizer from a language identifier such as `"english"` or `"sv"`.
    pub fn from_identifier(identifier: &str) -> Result<Self> {
        Ok(Self::new(Language::from_identifier(identifier)?))
    }

    /// The language this tokenizer splits.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The word pattern source.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for LanguageTokenizer {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

impl Tokenizer for LanguageTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(WordMatches {
            pattern: Arc::clone(&self.pattern),
            text: text.to_owned(),
            cursor: 0,
            position: 0,
            language: self.language,
        }))
    }

    fn name(&self) -> &'static str {
        "language"
    }
}

/// Lazy iterator over the pattern matches of an owned text.
struct WordMatches {
    pattern: Arc<Regex>,
    text: String,
    cursor: usize,
    position: usize,
    language: Language,
}

impl Iterator for WordMatches {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let mat = self.pattern.find_at(&self.text, self.cursor)?;
        self.cursor = mat.end();

        let word = mat.as_str();
        let token = Token::with_offsets(word, self.position, mat.start(), mat.end())
            .with_token_type(TokenType::classify(word))
            .with_language(self.language);
        self.position += 1;
        Some(token)
    }
}
