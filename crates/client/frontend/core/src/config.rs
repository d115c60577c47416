//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations.

use std::env;
use std::time::Duration;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
    pub overlay: OverlayConfig,
    pub view: ViewConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig, overlay: OverlayConfig, view: ViewConfig) -> Self {
        Self {
            messages,
            overlay,
            view,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BLUFF_MESSAGE_CAPACITY` - Notice log capacity (default: 64)
    /// - `BLUFF_ELIMINATION_DWELL_MS` - Elimination banner duration (default: 2500)
    /// - `BLUFF_ELIMINATION_QUEUE` - Eliminations waiting behind the banner (default: 8)
    /// - `BLUFF_LOG_LINES` - Game log lines per frame (default: 10)
    /// - `BLUFF_TICK_MS` - Overlay tick interval (default: 100)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("BLUFF_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        if let Some(millis) = read_env::<u64>("BLUFF_ELIMINATION_DWELL_MS") {
            config.overlay.dwell = Duration::from_millis(millis);
        }
        if let Some(queue) = read_env::<usize>("BLUFF_ELIMINATION_QUEUE") {
            config.overlay.queue = queue.max(1);
        }

        if let Some(lines) = read_env::<usize>("BLUFF_LOG_LINES") {
            config.view.log_lines = lines;
        }
        if let Some(millis) = read_env::<u64>("BLUFF_TICK_MS") {
            config.view.tick = Duration::from_millis(millis.max(10));
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
    /// Notices shown per frame.
    pub visible: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            visible: 5,
        }
    }
}

#[derive(Clone, Debug)]
pub struct OverlayConfig {
    pub dwell: Duration,
    pub queue: usize,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            dwell: Duration::from_millis(2500),
            queue: 8,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ViewConfig {
    pub log_lines: usize,
    pub tick: Duration,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            log_lines: 10,
            tick: Duration::from_millis(100),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
