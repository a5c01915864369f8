//! Input routing for the TUI
//!
//! Strict 2-way router:
//! A) COMMAND: input starts with "/" — /quit, /clear, /help
//! B) QUERY: default (no "/" prefix) — submitted to both retrieval
//!    backends
//!
//! Empty or whitespace-only input is a silent no-op: no signal, no history
//! mutation. Query text is trimmed before anything observes it.
//!
//! EXIT HANDLING: /quit, /q, /exit work from any state; Ctrl+C exits
//! immediately in the main loop.

/// Parsed input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    Quit,          // /quit, /q, /exit — exits immediately from any state
    Clear,         // /clear — reset the comparison to idle
    Help,          // /help
    Query(String), // Default: trimmed query text for both backends
}

/// Parse input string into Command
///
/// # Examples
/// ```
/// use ragdiff::ui::input::{parse_command, Command};
///
/// assert_eq!(parse_command("/quit"), Command::Quit);
/// assert_eq!(parse_command("  "), Command::None);
/// assert_eq!(
///     parse_command(" What is diabetes? "),
///     Command::Query("What is diabetes?".to_string())
/// );
/// ```
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if input.is_empty() {
        return Command::None;
    }

    if !input.starts_with('/') {
        return Command::Query(input.to_string());
    }

    let rest = &input[1..];

    // "/" alone is not a command
    if rest.is_empty() {
        return Command::None;
    }

    // Leading space after "/" means invalid syntax
    if rest.starts_with(' ') || rest.starts_with('\t') {
        return Command::None;
    }

    let parts: Vec<&str> = rest.splitn(2, |c: char| [' ', '\t'].contains(&c)).collect();

    match parts[0] {
        // Exit commands (work from any state, no args allowed)
        "quit" | "q" | "exit" => {
            if parts.len() == 1 {
                Command::Quit
            } else {
                Command::None
            }
        }
        "clear" => Command::Clear,
        "help" | "h" => Command::Help,
        _ => Command::None,
    }
}
