//! Command execution
//!
//! Bridges parsed input to state mutation. Quit is checked in the main loop
//! before anything else so it works from any state.

use crate::ui::input::Command;
use crate::ui::state::App;

const HELP_TEXT: &str =
    "Commands: /quit /clear /help | Enter submits | Up/Down history | Tab focus | Left/Right tabs";

/// Execute a parsed command against the app state
pub fn execute_command(app: &mut App, command: Command) {
    match command {
        Command::Quit => app.quit(),
        Command::Clear => app.clear_session(),
        Command::Help => app.notice(HELP_TEXT.to_string()),
        Command::Query(text) => app.submit(&text),
        Command::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retrieval::{Dispatcher, FakeTransport, RetrievalClient, Transport};

    fn test_app() -> App {
        let client = RetrievalClient::new(
            Transport::Fake(FakeTransport::new("{}")),
            "http://test/vector-search".to_string(),
            "http://test/graphrag-search".to_string(),
        );
        App::new(Dispatcher::new(client), 100)
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut app = test_app();
        execute_command(&mut app, Command::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_help_posts_notice() {
        let mut app = test_app();
        execute_command(&mut app, Command::Help);
        assert!(app.latest_notice().unwrap().contains("/quit"));
    }

    #[test]
    fn test_query_submits() {
        let mut app = test_app();
        execute_command(&mut app, Command::Query("q".to_string()));
        assert_eq!(app.history_len(), 1);
    }

    #[test]
    fn test_clear_resets_session() {
        let mut app = test_app();
        execute_command(&mut app, Command::Query("q".to_string()));
        app.pump();
        execute_command(&mut app, Command::Clear);
        assert!(app.session().is_idle());
    }

    #[test]
    fn test_none_is_a_noop() {
        let mut app = test_app();
        execute_command(&mut app, Command::None);
        assert!(!app.should_quit());
        assert!(app.latest_notice().is_none());
    }
}
