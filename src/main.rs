//! ragdiff CLI
//!
//! Interactive TUI comparing a vector-similarity backend against a
//! knowledge-graph-augmented backend for the same query.
//!
//! Input routing:
//! - Plain text + Enter — submit the query to both backends
//! - Commands (start with "/") — /quit, /clear, /help
//!
//! EXIT: /quit, /q, /exit work from ANY state; Ctrl+C exits immediately

use std::io;
use std::time::Duration;

use anyhow::Context;

use crossterm::{
    event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use ragdiff::cli::{parse_args, render_help, render_version, EXIT_FAILURE};
use ragdiff::retrieval::{Dispatcher, RetrievalClient, Transport, UreqTransport};
use ragdiff::ui::{execute_command, parse_command, App, Command};
use ragdiff::Config;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let parsed = match parse_args(args) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };

    if parsed.show_version {
        println!("{}", render_version());
        return Ok(());
    }

    if parsed.show_help {
        println!("{}", render_help());
        return Ok(());
    }

    let config = Config::from_args(&parsed);

    // Keep the guard alive for the process lifetime so buffered log lines
    // are flushed on exit
    let _log_guard =
        init_logging(&config.log_file).with_context(|| format!("logging to {}", config.log_file))?;
    tracing::info!(
        vector_url = %config.vector_url,
        graph_url = %config.graph_url,
        "starting ragdiff"
    );

    run_tui_mode(config)?;
    Ok(())
}

/// Set up file logging; stdout belongs to the TUI
fn init_logging(log_file: &str) -> io::Result<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::EnvFilter;

    let path = std::path::Path::new(log_file);
    let directory = path.parent().filter(|p| !p.as_os_str().is_empty());
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid log file path"))?;

    let appender = tracing_appender::rolling::never(
        directory.unwrap_or_else(|| std::path::Path::new(".")),
        file_name,
    );
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

/// Run the interactive comparison UI
fn run_tui_mode(config: Config) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let client = RetrievalClient::new(
        Transport::Real(UreqTransport::with_timeout(config.timeout_secs)),
        config.vector_url,
        config.graph_url,
    );
    let mut app = App::new(Dispatcher::new(client), config.narrow_threshold);
    app.notice("Type a question to compare retrieval strategies, /help for commands".to_string());

    // Main event loop
    while !app.should_quit() {
        ragdiff::ui::render(&mut terminal, &app)?;

        // Block for input (100ms timeout)
        if poll(Duration::from_millis(100))? {
            if let Event::Key(key) = read()? {
                // Ctrl+C exits immediately from any state
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }

                handle_key_event(&mut app, key);

                if app.should_quit() {
                    break;
                }
            }
        }

        // Drain submitted queries and retrieval completions; next render
        // shows whatever arrived
        app.pump();
    }

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Handle keyboard input
fn handle_key_event(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => {
            app.handle_char(c);
        }
        KeyCode::Backspace => {
            app.handle_backspace();
        }
        KeyCode::Enter => {
            let input = app.input_buffer.clone();
            let cmd = parse_command(&input);

            // Quit bypasses everything else
            if matches!(cmd, Command::Quit) {
                app.quit();
                app.input_buffer.clear();
                return;
            }

            let is_query = matches!(cmd, Command::Query(_));
            execute_command(app, cmd);
            // A query manages the buffer itself: cleared on successful
            // emit, preserved on a listener fault. Everything else clears.
            if !is_query {
                app.input_buffer.clear();
            }
        }
        KeyCode::Esc => {
            app.clear_input();
        }
        KeyCode::Up => {
            app.history_older();
        }
        KeyCode::Down => {
            app.history_newer();
        }
        KeyCode::Tab => {
            app.toggle_focus();
        }
        KeyCode::Right => {
            app.next_tab();
        }
        KeyCode::Left => {
            app.prev_tab();
        }
        _ => {}
    }
}
