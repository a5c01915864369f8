//! Application state
//!
//! `App` owns the submission surface (input buffer, bounded history, the
//! query-submitted bus) and the dispatcher. The view reads this state and
//! renders; it never writes. All mutation happens on the main thread.

use crate::retrieval::{Dispatcher, Session};
use crate::signal::{SubmitBus, SubmitReceiver};
use crate::ui::history::QueryHistory;

/// Maximum number of notices to retain (prevents unbounded memory growth)
const MAX_NOTICES: usize = 50;

/// Which comparison panel currently has focus (for tab cycling)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Vector,
    Graph,
}

/// Tabs of the vector panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorTab {
    Summary,
    Hits,
}

impl VectorTab {
    pub fn next(self) -> Self {
        match self {
            VectorTab::Summary => VectorTab::Hits,
            VectorTab::Hits => VectorTab::Summary,
        }
    }

    pub fn prev(self) -> Self {
        // Two tabs: prev == next
        self.next()
    }
}

/// Tabs of the graph panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphTab {
    Summary,
    Query,
    Rows,
    Hits,
}

impl GraphTab {
    pub fn next(self) -> Self {
        match self {
            GraphTab::Summary => GraphTab::Query,
            GraphTab::Query => GraphTab::Rows,
            GraphTab::Rows => GraphTab::Hits,
            GraphTab::Hits => GraphTab::Summary,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            GraphTab::Summary => GraphTab::Hits,
            GraphTab::Query => GraphTab::Summary,
            GraphTab::Rows => GraphTab::Query,
            GraphTab::Hits => GraphTab::Rows,
        }
    }
}

/// One line in the notice bar
#[derive(Debug, Clone)]
pub struct Notice {
    pub content: String,
    pub timestamp: u64,
}

/// Main application state
pub struct App {
    /// Current input buffer
    pub input_buffer: String,
    /// Bounded submission history + navigation cursor
    history: QueryHistory,
    /// Broadcast bus for the query-submitted signal
    bus: SubmitBus,
    /// The app's own subscription (drained in `pump`, feeds the dispatcher)
    submissions: SubmitReceiver,
    /// Owner of the live comparison session
    dispatcher: Dispatcher,
    /// Notice log (most recent rendered in the notice bar)
    notices: Vec<Notice>,
    /// Focused comparison panel
    focused: Panel,
    vector_tab: VectorTab,
    graph_tab: GraphTab,
    /// Below this terminal width the panels stack vertically
    narrow_threshold: u16,
    /// Render tick, drives the pending spinner
    tick: u64,
    should_quit: bool,
}

impl App {
    pub fn new(dispatcher: Dispatcher, narrow_threshold: u16) -> Self {
        let mut bus = SubmitBus::new();
        let submissions = bus.subscribe();
        App {
            input_buffer: String::new(),
            history: QueryHistory::new(),
            bus,
            submissions,
            dispatcher,
            notices: Vec::new(),
            focused: Panel::Vector,
            vector_tab: VectorTab::Summary,
            graph_tab: GraphTab::Summary,
            narrow_threshold,
            tick: 0,
            should_quit: false,
        }
    }

    /// Register an additional listener on the query-submitted bus
    pub fn subscribe(&mut self) -> SubmitReceiver {
        self.bus.subscribe()
    }

    // Submission surface

    /// Submit the given text as a query
    ///
    /// Whitespace-only text is a silent no-op. Otherwise: record a history
    /// entry, broadcast the trimmed text, and clear the input. If a
    /// listener faults at emit time the input is preserved so the user's
    /// text is not lost.
    pub fn submit(&mut self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }

        self.history.push(trimmed);
        match self.bus.emit(trimmed) {
            Ok(()) => {
                self.input_buffer.clear();
            }
            Err(e) => {
                self.notice(format!("Query not delivered: {}", e));
            }
        }
    }

    /// Drain submitted queries into the dispatcher, then drain retrieval
    /// completions. Called once per main-loop tick; never blocks.
    ///
    /// Returns the number of retrieval events applied.
    pub fn pump(&mut self) -> usize {
        self.tick = self.tick.wrapping_add(1);
        while let Ok(signal) = self.submissions.try_recv() {
            // New comparison: both panels back to their first tab
            self.vector_tab = VectorTab::Summary;
            self.graph_tab = GraphTab::Summary;
            self.dispatcher.dispatch(&signal.query);
        }
        self.dispatcher.pump()
    }

    // Input buffer

    pub fn handle_char(&mut self, c: char) {
        self.input_buffer.push(c);
    }

    pub fn handle_backspace(&mut self) {
        self.input_buffer.pop();
    }

    /// Clear the input and leave history navigation
    pub fn clear_input(&mut self) {
        self.input_buffer.clear();
        self.history.reset_cursor();
    }

    // History navigation

    /// Step to an older history entry (Up key)
    ///
    /// Navigation starts only from an empty field; once navigating, it
    /// continues regardless of the shown entry text. Free typing and
    /// navigation are mutually exclusive per keystroke.
    pub fn history_older(&mut self) {
        if self.history.cursor().is_none() && !self.input_buffer.trim().is_empty() {
            return;
        }
        if let Some(text) = self.history.older() {
            self.input_buffer = text;
        }
    }

    /// Step to a newer history entry (Down key); past the newest entry the
    /// field is restored to empty
    pub fn history_newer(&mut self) {
        if let Some(text) = self.history.newer() {
            self.input_buffer = text;
        }
    }

    /// 1-based navigation position and history length, if navigating
    pub fn history_position(&self) -> Option<(usize, usize)> {
        self.history.cursor().map(|i| (i + 1, self.history.len()))
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    // Panels and tabs

    pub fn focused(&self) -> Panel {
        self.focused
    }

    pub fn toggle_focus(&mut self) {
        self.focused = match self.focused {
            Panel::Vector => Panel::Graph,
            Panel::Graph => Panel::Vector,
        };
    }

    pub fn vector_tab(&self) -> VectorTab {
        self.vector_tab
    }

    pub fn graph_tab(&self) -> GraphTab {
        self.graph_tab
    }

    pub fn next_tab(&mut self) {
        match self.focused {
            Panel::Vector => self.vector_tab = self.vector_tab.next(),
            Panel::Graph => self.graph_tab = self.graph_tab.next(),
        }
    }

    pub fn prev_tab(&mut self) {
        match self.focused {
            Panel::Vector => self.vector_tab = self.vector_tab.prev(),
            Panel::Graph => self.graph_tab = self.graph_tab.prev(),
        }
    }

    // Session

    /// Read-only view of the live comparison session
    pub fn session(&self) -> &Session {
        self.dispatcher.session()
    }

    /// Reset the comparison to idle (in-flight results become stale)
    pub fn clear_session(&mut self) {
        self.dispatcher.clear();
        self.vector_tab = VectorTab::Summary;
        self.graph_tab = GraphTab::Summary;
        self.notice("Cleared".to_string());
    }

    // Notices

    /// Add a notice line, evicting beyond the cap
    pub fn notice(&mut self, content: String) {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        self.notices.push(Notice { content, timestamp });
        if self.notices.len() > MAX_NOTICES {
            self.notices.remove(0);
        }
    }

    pub fn latest_notice(&self) -> Option<&str> {
        self.notices.last().map(|n| n.content.as_str())
    }

    // Lifecycle

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn narrow_threshold(&self) -> u16 {
        self.narrow_threshold
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }
}
