use std::collections::VecDeque;

use chrono::{DateTime, Local};

// Event categories for the in-app log.
pub const LOG_TYPE_GRID: &str = "grid";
pub const LOG_TYPE_NODE: &str = "node";
pub const LOG_TYPE_SNAP: &str = "snap";
pub const LOG_TYPE_PROJECT: &str = "project";

const DEFAULT_CAPACITY: usize = 200;

#[derive(Debug, Clone)]
pub struct EventEntry {
    pub timestamp: DateTime<Local>,
    pub category: &'static str,
    pub message: String,
}

/// Bounded, newest-first event log shown in the log panel. Entries are also
/// forwarded to the `log` facade for terminal output.
#[derive(Debug)]
pub struct EventLog {
    entries: VecDeque<EventEntry>,
    capacity: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn log(&mut self, category: &'static str, message: impl Into<String>) {
        let message = message.into();
        log::info!("[{}] {}", category, message);

        self.entries.push_front(EventEntry {
            timestamp: Local::now(),
            category,
            message,
        });
        self.entries.truncate(self.capacity);
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &EventEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
