//! CLI module
//!
//! Argument parsing and help/version text. There is a single mode (the
//! interactive TUI); flags configure endpoints, layout, and logging.

pub mod args;

// Re-exports
pub use args::{parse_args, render_help, render_version, Args};

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("Missing required argument: {0}")]
    MissingArgument(String),
}

/// Exit codes (deterministic)
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, Error>;
