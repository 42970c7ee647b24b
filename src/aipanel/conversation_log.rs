//! Display-facing conversation transcript.
//!
//! The [`ConversationLog`] is the append-only sequence of `(speaker, text)`
//! pairs the rendering surface consumes. It is deliberately decoupled from
//! the panelists' private histories: [`clear`](ConversationLog::clear) wipes
//! the displayed transcript while every agent still remembers prior rounds.
//! Clearing the view is cosmetic, not a conversation reset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One displayed utterance.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogEntry {
    /// Display label of whoever spoke: the moderator or a panelist.
    pub speaker: String,
    /// The utterance as displayed.
    pub text: String,
    /// When the entry was appended.
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        LogEntry {
            speaker: speaker.into(),
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Append-only ordered transcript consumed by the display surface.
#[derive(Default)]
pub struct ConversationLog {
    entries: Vec<LogEntry>,
}

impl ConversationLog {
    pub fn new() -> Self {
        ConversationLog::default()
    }

    /// Append a single `(speaker, text)` entry.
    pub fn push(&mut self, speaker: impl Into<String>, text: impl Into<String>) {
        self.entries.push(LogEntry::new(speaker, text));
    }

    /// Append pre-built entries in order.
    pub fn append(&mut self, entries: impl IntoIterator<Item = LogEntry>) {
        self.entries.extend(entries);
    }

    /// All displayed entries, in append order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empty the displayed transcript. Agent histories are not touched:
    /// panelists still remember everything said before the clear.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
