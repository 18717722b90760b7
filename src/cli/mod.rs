//! Command line interface for the sarissa-analysis binary.

pub mod args;
pub mod commands;
pub mod output;

// Re-export commonly used types
pub use args::*;
pub use commands::execute_command;
pub use output::*;
