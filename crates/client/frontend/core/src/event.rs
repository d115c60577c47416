//! Utilities for reacting to session events inside UI layers.
use std::time::Instant;

use runtime::SessionEvent;

use crate::message::MessageLog;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
        }
    }
}

pub trait EventConsumer {
    fn on_event(&mut self, event: &SessionEvent, now: Instant) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
    fn take_message_log(self) -> MessageLog
    where
        Self: Sized;

    /// Feeds every event in order and merges their impact.
    fn on_events(&mut self, events: &[SessionEvent], now: Instant) -> EventImpact {
        events
            .iter()
            .fold(EventImpact::none(), |impact, event| {
                impact.combine(self.on_event(event, now))
            })
    }
}
