//! Terminal interface
//!
//! The UI is a deterministic surface: no background threads of its own, no
//! blocking calls. Retrieval runs elsewhere; the main loop drains events
//! each tick and re-renders from state.
//!
//! Input model:
//! - Plain text + Enter → query submitted to both backends
//! - Commands start with '/' — /quit, /clear, /help
//! - Up/Down walk the query history, Tab switches panel focus,
//!   Left/Right cycle the focused panel's tabs

pub mod handlers;
pub mod history;
pub mod input;
pub mod state;
pub mod view;

// Re-exports
pub use handlers::execute_command;
pub use history::{HistoryEntry, QueryHistory, MAX_HISTORY_ENTRIES};
pub use input::{parse_command, Command};
pub use state::{App, GraphTab, Panel, VectorTab};
pub use view::{columns_for_width, render};

/// UI result type
pub type Result<T> = std::result::Result<T, Error>;

/// UI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Command error: {0}")]
    Command(String),
}
