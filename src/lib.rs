//! # Sarissa Analysis
//!
//! Multilingual text analysis for search: language-aware tokenization, case
//! folding, stop word removal and Snowball stemming for English, French,
//! Italian, Norwegian, Portuguese, Russian, Spanish, Swedish and Dutch.
//!
//! ## Features
//!
//! - Pure Rust stemmers, one per language
//! - Lazy token streams with positions and byte offsets
//! - Composable tokenizers, filters and analyzers
//! - Parallel batch analysis with rayon
//!
//! ## Example
//!
//! ```
//! use sarissa_analysis::pipeline::tokenize;
//!
//! let stems = tokenize("I baked some cakes", "english", None).unwrap();
//! assert_eq!(stems, vec!["i", "bake", "some", "cake"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, LanguageAnalyzer};
    pub use crate::analysis::language::Language;
    pub use crate::config::AnalysisConfig;
    pub use crate::error::{Result, SarissaError};
    pub use crate::pipeline::{TextPipeline, stem_array, tokenize, tokenize_batch};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
