//! Error types for the Sarissa analysis library.
//!
//! All errors are represented by the [`SarissaError`] enum. Text analysis
//! itself is total: the only error an analysis call can surface is
//! [`SarissaError::UnsupportedLanguage`]. The remaining variants belong to
//! configuration loading and the command-line front end.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::error::{Result, SarissaError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SarissaError::unsupported_language("klingon"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => assert_eq!(e.to_string(), "Unsupported language: klingon"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Sarissa analysis operations.
#[derive(Error, Debug)]
pub enum SarissaError {
    /// The language identifier is not one of the supported languages.
    ///
    /// Callers should treat this as a configuration error and fail the
    /// request instead of retrying.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Analysis-related errors (tokenizer or filter construction)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid analysis configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// I/O errors (reading configuration or input files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SarissaError.
pub type Result<T> = std::result::Result<T, SarissaError>;

impl SarissaError {
    /// Create a new unsupported language error.
    pub fn unsupported_language<S: Into<String>>(language: S) -> Self {
        SarissaError::UnsupportedLanguage(language.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SarissaError::Analysis(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SarissaError::Config(msg.into())
    }

    /// Check whether this error is an unsupported language error.
    pub fn is_unsupported_language(&self) -> bool {
        matches!(self, SarissaError::UnsupportedLanguage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SarissaError::unsupported_language("klingon");
        assert_eq!(error.to_string(), "Unsupported language: klingon");
        assert!(error.is_unsupported_language());

        let error = SarissaError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");
        assert!(!error.is_unsupported_language());

        let error = SarissaError::invalid_config("stopwords must be a list");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: stopwords must be a list"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let sarissa_error = SarissaError::from(io_error);

        match sarissa_error {
            SarissaError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
