//! Game message log.

use crate::events::GameEvent;

/// Entries kept before the oldest are dropped.
const MAX_ENTRIES: usize = 256;

/// Style of a log entry, picked from the event that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStyle {
    Normal,
    Notable,
    Error,
}

/// A single log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub text: String,
    pub style: LogStyle,
    pub dups: u32,
}

impl LogEntry {
    /// The entry text with a repeat marker when it was logged more than once.
    pub fn line(&self) -> String {
        if self.dups > 0 {
            format!("{} ({}×)", self.text, self.dups + 1)
        } else {
            self.text.clone()
        }
    }
}

/// The game's message log.
#[derive(Debug, Default)]
pub struct GameLog {
    entries: Vec<LogEntry>,
}

impl GameLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message with a given style.
    pub fn log_styled(&mut self, text: &str, style: LogStyle) {
        // Dedup consecutive identical messages
        if let Some(last) = self.entries.last_mut() {
            if last.text == text && last.style == style {
                last.dups += 1;
                return;
            }
        }

        self.entries.push(LogEntry {
            text: text.to_string(),
            style,
            dups: 0,
        });

        if self.entries.len() > MAX_ENTRIES {
            let excess = self.entries.len() - MAX_ENTRIES;
            self.entries.drain(0..excess);
        }
    }

    /// Add a normal-style message.
    pub fn log(&mut self, text: &str) {
        self.log_styled(text, LogStyle::Normal);
    }

    /// Record a game notification, echoing it to the `log` facade.
    pub fn push_event(&mut self, event: &GameEvent) {
        let style = match event {
            GameEvent::Reset | GameEvent::Selected(_) => LogStyle::Normal,
            GameEvent::GameOver { .. } => LogStyle::Notable,
            GameEvent::AlreadyRemoved { .. } => LogStyle::Error,
        };
        let text = event.to_string();
        ::log::info!("{text}");
        self.log_styled(&text, style);
    }

    /// The newest entry, if any.
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Up to `max_lines` most recent lines, oldest first.
    #[cfg(test)]
    pub(crate) fn recent_lines(&self, max_lines: usize) -> Vec<String> {
        let start = self.entries.len().saturating_sub(max_lines);
        self.entries[start..].iter().map(LogEntry::line).collect()
    }
}
