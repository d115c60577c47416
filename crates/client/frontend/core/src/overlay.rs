//! Timed elimination banner.
//!
//! Each elimination is shown for a fixed dwell. Further eliminations that
//! arrive while one is showing wait in a bounded FIFO queue; a name that is
//! already showing or queued is not queued twice. When the queue is full the
//! oldest pending name is dropped. The overlay owns no timer: the caller
//! passes the current instant to [`EliminationOverlay::push`] and
//! [`EliminationOverlay::tick`].
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
struct Showing {
    name: String,
    until: Instant,
}

#[derive(Clone, Debug)]
pub struct EliminationOverlay {
    dwell: Duration,
    capacity: usize,
    showing: Option<Showing>,
    pending: VecDeque<String>,
}

impl EliminationOverlay {
    pub fn new(dwell: Duration, capacity: usize) -> Self {
        Self {
            dwell,
            capacity: capacity.max(1),
            showing: None,
            pending: VecDeque::new(),
        }
    }

    /// Queues `name`. Returns `true` if it went straight on screen.
    pub fn push(&mut self, name: impl Into<String>, now: Instant) -> bool {
        let name = name.into();

        if self.current() == Some(name.as_str()) || self.pending.contains(&name) {
            return false;
        }

        if self.showing.is_none() {
            self.show(name, now);
            return true;
        }

        self.pending.push_back(name);
        if self.pending.len() > self.capacity
            && let Some(dropped) = self.pending.pop_front()
        {
            tracing::debug!(name = %dropped, "elimination overlay queue full, dropping oldest");
        }
        false
    }

    /// Dismisses an expired banner and promotes the next one. Returns `true`
    /// when what is on screen changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.showing {
            Some(showing) if now >= showing.until => {
                self.showing = None;
                if let Some(next) = self.pending.pop_front() {
                    self.show(next, now);
                }
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.showing.as_ref().map(|showing| showing.name.as_str())
    }

    /// Number of names waiting behind the current one.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    fn show(&mut self, name: String, now: Instant) {
        self.showing = Some(Showing {
            name,
            until: now + self.dwell,
        });
    }
}
