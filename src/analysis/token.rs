//! Token types and utilities for text analysis.
//!
//! This module defines the core data structures for representing text tokens,
//! which are the fundamental units that flow through the analysis pipeline.
//!
//! # Core Types
//!
//! - [`Token`] - A single analyzed token with text, position, and metadata
//! - [`TokenType`] - Classification of token content (letters, digits, mixed)
//! - [`TokenMetadata`] - Additional metadata attached to tokens
//! - [`TokenStream`] - Type alias for a boxed, lazy iterator of tokens
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("Banken", 0, 4, 10)
//!     .with_token_type(TokenType::Word);
//!
//! assert_eq!(token.text, "Banken");
//! assert_eq!(token.start_offset, 4);
//! assert_eq!(
//!     token.metadata.as_ref().unwrap().token_type,
//!     Some(TokenType::Word)
//! );
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::language::Language;

/// A token represents a single unit of text after tokenization.
///
/// # Fields
///
/// - `text` - The token's text content
/// - `position` - Position in the token stream (0-based, assigned by the tokenizer)
/// - `start_offset` / `end_offset` - Byte offsets in the original text
/// - `metadata` - Optional additional metadata
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Additional metadata that can be attached to tokens
    pub metadata: Option<TokenMetadata>,
}

/// Token type classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Letters only (apostrophes inside contractions allowed)
    Word,
    /// Digits only
    Num,
    /// Letters mixed with digits
    Alphanum,
}

impl TokenType {
    /// Classify a run of word-constituent characters.
    pub fn classify(text: &str) -> Self {
        let mut has_digit = false;
        let mut has_letter = false;
        for c in text.chars() {
            if c.is_ascii_digit() {
                has_digit = true;
            } else if c.is_alphabetic() {
                has_letter = true;
            }
        }

        match (has_letter, has_digit) {
            (false, true) => TokenType::Num,
            (true, true) => TokenType::Alphanum,
            _ => TokenType::Word,
        }
    }
}

/// Additional metadata that can be attached to tokens
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Token type classification
    pub token_type: Option<TokenType>,

    /// Language the token was analyzed with
    pub language: Option<Language>,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            metadata: None,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            metadata: None,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get a reference to the metadata.
    pub fn metadata(&self) -> Option<&TokenMetadata> {
        self.metadata.as_ref()
    }

    /// Set the token type in metadata.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        let metadata = self.metadata.get_or_insert_with(TokenMetadata::default);
        metadata.token_type = Some(token_type);
        self
    }

    /// Set the analysis language in metadata.
    pub fn with_language(mut self, language: Language) -> Self {
        let metadata = self.metadata.get_or_insert_with(TokenMetadata::default);
        metadata.language = Some(language);
        self
    }

    /// Replace the text of this token, keeping position, offsets and metadata.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a lazy sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
        assert!(token.metadata.is_none());
    }

    #[test]
    fn test_token_methods() {
        let token = Token::with_offsets("Vagone", 3, 10, 16)
            .with_token_type(TokenType::Word)
            .with_language(Language::Italian)
            .with_text("vagon");

        assert_eq!(token.text, "vagon");
        assert_eq!(token.position, 3);
        assert_eq!(token.end_offset, 16);

        let metadata = token.metadata().unwrap();
        assert_eq!(metadata.token_type, Some(TokenType::Word));
        assert_eq!(metadata.language, Some(Language::Italian));
    }

    #[test]
    fn test_token_type_classification() {
        assert_eq!(TokenType::classify("2024"), TokenType::Num);
        assert_eq!(TokenType::classify("mp3"), TokenType::Alphanum);
        assert_eq!(TokenType::classify("l'acqua"), TokenType::Word);
        assert_eq!(TokenType::classify("вагоне"), TokenType::Word);
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("hello", 0);
        assert_eq!(format!("{token}"), "hello");
    }

    #[test]
    fn test_token_stream() {
        let tokens = vec![Token::new("hello", 0), Token::new("world", 1)];

        let stream = tokens.into_token_stream();
        let collected: Vec<_> = stream.collect();

        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].text, "hello");
        assert_eq!(collected[1].text, "world");
    }
}
