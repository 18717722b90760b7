//! Text analysis module.
//!
//! This module provides tokenization, filtering and the analysis pipelines
//! that turn text into stems for the supported languages.

pub mod analyzer;
pub mod language;
pub mod normalizer;
pub mod registry;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use language::Language;
pub use normalizer::Normalizer;
pub use registry::{LanguageProfile, LanguageRegistry};
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
