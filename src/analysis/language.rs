//! The closed set of languages supported by the analysis pipeline.
//!
//! A [`Language`] is used only for dispatch: it selects the word-boundary
//! rule, the stemmer and the default stopword list from the
//! [`LanguageRegistry`](crate::analysis::registry::LanguageRegistry).
//!
//! Identifiers are parsed case-insensitively and accept the English language
//! name, the ISO 639-1 code, and the historical `portugese` spelling.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::language::Language;
//!
//! let language: Language = "Swedish".parse().unwrap();
//! assert_eq!(language, Language::Swedish);
//! assert_eq!(language.code(), "sv");
//!
//! assert!("klingon".parse::<Language>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SarissaError};

/// A supported analysis language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (Porter2)
    English,
    /// French
    French,
    /// Italian
    Italian,
    /// Norwegian (Bokmål)
    Norwegian,
    /// Portuguese
    #[serde(alias = "portugese")]
    Portuguese,
    /// Russian (Cyrillic script)
    Russian,
    /// Spanish
    Spanish,
    /// Swedish
    Swedish,
    /// Dutch
    Dutch,
}

impl Language {
    /// Every supported language, in registry order.
    pub const ALL: [Language; 9] = [
        Language::English,
        Language::French,
        Language::Italian,
        Language::Norwegian,
        Language::Portuguese,
        Language::Russian,
        Language::Spanish,
        Language::Swedish,
        Language::Dutch,
    ];

    /// Resolve a language identifier.
    ///
    /// Fails with [`SarissaError::UnsupportedLanguage`] when the identifier
    /// does not name one of the supported languages.
    pub fn from_identifier(identifier: &str) -> Result<Self> {
        let normalized = identifier.trim().to_lowercase();
        let language = match normalized.as_str() {
            "english" | "en" => Language::English,
            "french" | "fr" => Language::French,
            "italian" | "it" => Language::Italian,
            "norwegian" | "no" | "nb" => Language::Norwegian,
            "portuguese" | "portugese" | "pt" => Language::Portuguese,
            "russian" | "ru" => Language::Russian,
            "spanish" | "es" => Language::Spanish,
            "swedish" | "sv" => Language::Swedish,
            "dutch" | "nl" => Language::Dutch,
            _ => return Err(SarissaError::unsupported_language(identifier)),
        };
        Ok(language)
    }

    /// The canonical lowercase name of this language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::French => "french",
            Language::Italian => "italian",
            Language::Norwegian => "norwegian",
            Language::Portuguese => "portuguese",
            Language::Russian => "russian",
            Language::Spanish => "spanish",
            Language::Swedish => "swedish",
            Language::Dutch => "dutch",
        }
    }

    /// The ISO 639-1 code of this language.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::Italian => "it",
            Language::Norwegian => "no",
            Language::Portuguese => "pt",
            Language::Russian => "ru",
            Language::Spanish => "es",
            Language::Swedish => "sv",
            Language::Dutch => "nl",
        }
    }
}

impl FromStr for Language {
    type Err = SarissaError;

    fn from_str(s: &str) -> Result<Self> {
        Language::from_identifier(s)
    }
}

impl TryFrom<&str> for Language {
    type Error = SarissaError;

    fn try_from(value: &str) -> Result<Self> {
        Language::from_identifier(value)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_codes() {
        for language in Language::ALL {
            assert_eq!(language.name().parse::<Language>().unwrap(), language);
            assert_eq!(language.code().parse::<Language>().unwrap(), language);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(" Dutch ".parse::<Language>().unwrap(), Language::Dutch);
        assert_eq!("RUSSIAN".parse::<Language>().unwrap(), Language::Russian);
    }

    #[test]
    fn test_legacy_portuguese_spelling() {
        assert_eq!(
            "portugese".parse::<Language>().unwrap(),
            Language::Portuguese
        );
        let parsed: Language = serde_json::from_str("\"portugese\"").unwrap();
        assert_eq!(parsed, Language::Portuguese);
    }

    #[test]
    fn test_unsupported_language() {
        let err = "german".parse::<Language>().unwrap_err();
        assert!(err.is_unsupported_language());
        assert_eq!(err.to_string(), "Unsupported language: german");
    }

    #[test]
    fn test_serde_round_names() {
        let json = serde_json::to_string(&Language::Norwegian).unwrap();
        assert_eq!(json, "\"norwegian\"");
    }
}
