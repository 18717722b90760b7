//! Core analyzer trait definition.
//!
//! This module defines the [`Analyzer`] trait, the main interface for text
//! analysis. Analyzers combine a tokenizer and filters to turn raw text into
//! stemmed tokens.
//!
//! # Role in Analysis Pipeline
//!
//! ```text
//! Raw Text → Analyzer → Token Stream
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1
//!             ↓
//!         Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//! - [`LanguageAnalyzer`](super::language::LanguageAnalyzer) - Normalize, stop and stem one language
//!
//! # Examples
//!
//! Using a built-in analyzer:
//!
//! ```
//! use sarissa_analysis::analysis::analyzer::Analyzer;
//! use sarissa_analysis::analysis::analyzer::language::LanguageAnalyzer;
//! use sarissa_analysis::analysis::language::Language;
//!
//! let analyzer = LanguageAnalyzer::new(Language::English);
//! let tokens: Vec<_> = analyzer.analyze("I baked some cakes").unwrap().collect();
//!
//! assert_eq!(tokens[1].text, "bake");
//! assert_eq!(tokens[3].text, "cake");
//! ```
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use sarissa_analysis::analysis::analyzer::Analyzer;
//! use sarissa_analysis::analysis::token::TokenStream;
//! use sarissa_analysis::error::Result;
//!
//! struct MyAnalyzer;
//!
//! impl Analyzer for MyAnalyzer {
//!     fn analyze(&self, text: &str) -> Result<TokenStream> {
//!         // Custom analysis logic here
//!         Ok(Box::new(std::iter::empty()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "my_analyzer"
//!     }
//!
//!     fn as_any(&self) -> &dyn std::any::Any {
//!         self
//!     }
//! }
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// # Thread Safety
///
/// The trait requires `Send + Sync` so one analyzer can serve many threads,
/// as [`tokenize_batch`](crate::pipeline::tokenize_batch) does.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// This runs the complete pipeline, tokenization and every configured
    /// filter. The stream is lazy; nothing is stemmed until it is consumed.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    ///
    /// # Examples
    ///
    /// ```
    /// use sarissa_analysis::analysis::analyzer::Analyzer;
    /// use sarissa_analysis::analysis::analyzer::language::LanguageAnalyzer;
    /// use sarissa_analysis::analysis::language::Language;
    ///
    /// let analyzer = LanguageAnalyzer::new(Language::Dutch);
    /// assert_eq!(analyzer.name(), "dutch");
    /// ```
    fn name(&self) -> &'static str;

    /// Provide access to the concrete type for downcasting.
    ///
    /// # Examples
    ///
    /// ```
    /// use sarissa_analysis::analysis::analyzer::Analyzer;
    /// use sarissa_analysis::analysis::analyzer::language::LanguageAnalyzer;
    /// use sarissa_analysis::analysis::language::Language;
    ///
    /// let analyzer: Box<dyn Analyzer> = Box::new(LanguageAnalyzer::new(Language::Italian));
    ///
    /// if let Some(language_analyzer) = analyzer.as_any().downcast_ref::<LanguageAnalyzer>() {
    ///     assert_eq!(language_analyzer.language(), Language::Italian);
    /// }
    /// ```
    fn as_any(&self) -> &dyn std::any::Any;
}
