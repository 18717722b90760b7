//! Analyzer implementations that combine tokenizers and filters.

mod analyzer;
pub mod language;
pub mod pipeline;

pub use analyzer::Analyzer;
pub use language::LanguageAnalyzer;
pub use pipeline::PipelineAnalyzer;
