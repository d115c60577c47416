//! Notice and chat history for the table view.
//!
//! Entries are stamped against the session clock, so a frontend can show how
//! long ago a player was eliminated or a request was refused.
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Severity of a notice shown to the player.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Origin of a line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageSource {
    /// Written by the client for a table change: eliminations, lobby and game
    /// lifecycle.
    Table,
    /// Server text shown verbatim (`error_message`, `chat_message`).
    Server,
    /// Feedback to local input: refused actions, command errors, help.
    Local,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    pub level: MessageLevel,
    pub source: MessageSource,
    /// Session time of the latest occurrence.
    pub at: Duration,
    /// Consecutive identical notices folded into this entry.
    pub count: u32,
}

/// Bounded history; the oldest entry falls out when full.
///
/// A notice matching the newest entry (same text, level and source) bumps its
/// count instead of taking a slot. Server lines are never folded: two players
/// may well send the same chat line.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
    started: Instant,
}

impl MessageLog {
    pub fn new(capacity: usize, started: Instant) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            started,
        }
    }

    pub fn record(
        &mut self,
        level: MessageLevel,
        source: MessageSource,
        text: impl Into<String>,
        now: Instant,
    ) {
        let text = text.into();
        let at = now.saturating_duration_since(self.started);

        if source != MessageSource::Server {
            if let Some(last) = self.entries.back_mut().filter(|last| {
                last.source == source && last.level == level && last.text == text
            }) {
                last.count = last.count.saturating_add(1);
                last.at = at;
                return;
            }
        }

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(MessageEntry {
            text,
            level,
            source,
            at,
            count: 1,
        });
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
