//! Command line argument parsing for the sarissa-analysis CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sarissa Analysis - multilingual tokenization and stemming
#[derive(Parser, Debug, Clone)]
#[command(name = "sarissa-analysis")]
#[command(about = "Tokenize and stem text in nine languages")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Sarissa Contributors")]
#[command(long_about = None)]
pub struct SarissaArgs {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SarissaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Tokenize text into stems
    Tokenize(TokenizeArgs),

    /// Stem individual words
    Stem(StemArgs),

    /// List supported languages
    Languages,
}

/// Arguments for tokenizing text
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Text to tokenize (reads standard input when neither TEXT nor --file is given)
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Language name or ISO 639-1 code
    #[arg(short, long, default_value = "english")]
    pub language: String,

    /// Remove the language's default stop words
    #[arg(long)]
    pub stopwords: bool,

    /// Remove the words listed in a file (one per line) instead of the defaults
    #[arg(long, value_name = "PATH")]
    pub stopwords_file: Option<PathBuf>,

    /// Strip accents from the stems
    #[arg(long)]
    pub fold_diacritics: bool,

    /// Keep only the first occurrence of each stem
    #[arg(long)]
    pub dedupe: bool,

    /// Analysis configuration file (JSON); flags override its settings
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for stemming words
#[derive(Parser, Debug, Clone)]
pub struct StemArgs {
    /// Words to stem
    #[arg(value_name = "WORDS", required = true)]
    pub words: Vec<String>,

    /// Language name or ISO 639-1 code
    #[arg(short, long, default_value = "english")]
    pub language: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
