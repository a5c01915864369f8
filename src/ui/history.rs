//! Bounded query history with a navigation cursor
//!
//! Most-recent-first, capped at 20 entries; oldest entries are evicted on
//! overflow. Entries are immutable after creation and live only for the
//! process (nothing is persisted).
//!
//! The cursor tracks history navigation: `None` means the input field is
//! live-edited, `Some(i)` means the field is showing entry `i`. Stepping
//! older walks toward the oldest entry (clamped); stepping newer walks back
//! to `None`, which restores an empty field. Only a submission resets the
//! cursor.

/// Maximum number of history entries retained
pub const MAX_HISTORY_ENTRIES: usize = 20;

/// One successful submission
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub id: String,
    pub text: String,
    /// Milliseconds since the UNIX epoch
    pub submitted_at: u64,
}

/// Bounded most-recent-first history plus navigation cursor
#[derive(Debug, Default)]
pub struct QueryHistory {
    entries: Vec<HistoryEntry>,
    cursor: Option<usize>,
}

impl QueryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submission at the front, evicting beyond the cap, and
    /// reset the cursor to live input
    pub fn push(&mut self, text: &str) {
        self.entries.insert(
            0,
            HistoryEntry {
                id: uuid::Uuid::new_v4().to_string(),
                text: text.to_string(),
                submitted_at: epoch_millis(),
            },
        );
        self.entries.truncate(MAX_HISTORY_ENTRIES);
        self.cursor = None;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Forget the navigation position (field becomes live input)
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    /// Step toward older entries; returns the text to place in the input
    /// field, or None if there is no history. Clamped at the oldest entry.
    pub fn older(&mut self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        let next = match self.cursor {
            None => 0,
            Some(i) => (i + 1).min(self.entries.len() - 1),
        };
        self.cursor = Some(next);
        Some(self.entries[next].text.clone())
    }

    /// Step toward newer entries; returns the text to place in the input
    /// field (empty string when stepping off the newest entry), or None if
    /// not currently navigating.
    pub fn newer(&mut self) -> Option<String> {
        match self.cursor {
            None => None,
            Some(0) => {
                self.cursor = None;
                Some(String::new())
            }
            Some(i) => {
                self.cursor = Some(i - 1);
                Some(self.entries[i - 1].text.clone())
            }
        }
    }
}

fn epoch_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
