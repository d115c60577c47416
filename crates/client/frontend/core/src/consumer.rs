//! Default event consumer: turns session events into notices, chat lines and
//! elimination banners.
use std::time::Instant;

use runtime::SessionEvent;

use crate::config::FrontendConfig;
use crate::event::{EventConsumer, EventImpact};
use crate::message::{MessageLevel, MessageLog, MessageSource};
use crate::overlay::EliminationOverlay;

pub struct FrontendState {
    messages: MessageLog,
    chat: MessageLog,
    overlay: EliminationOverlay,
}

impl FrontendState {
    pub fn new(config: &FrontendConfig, started: Instant) -> Self {
        Self {
            messages: MessageLog::new(config.messages.capacity, started),
            chat: MessageLog::new(config.messages.capacity, started),
            overlay: EliminationOverlay::new(config.overlay.dwell, config.overlay.queue),
        }
    }

    pub fn chat(&self) -> &MessageLog {
        &self.chat
    }

    pub fn overlay(&self) -> &EliminationOverlay {
        &self.overlay
    }

    /// Advances the elimination banner.
    pub fn tick(&mut self, now: Instant) -> EventImpact {
        if self.overlay.tick(now) {
            EventImpact::redraw()
        } else {
            EventImpact::none()
        }
    }

    fn notice(&mut self, text: impl Into<String>, level: MessageLevel, now: Instant) {
        self.messages
            .record(level, MessageSource::Table, text, now);
    }
}

impl EventConsumer for FrontendState {
    fn on_event(&mut self, event: &SessionEvent, now: Instant) -> EventImpact {
        match event {
            SessionEvent::SnapshotApplied { .. } | SessionEvent::SelectionChanged { .. } => {
                EventImpact::redraw()
            }
            SessionEvent::PlayerEliminated(eliminated) => {
                self.overlay.push(eliminated.name.clone(), now);
                self.notice(
                    format!("{} has been eliminated!", eliminated.name),
                    MessageLevel::Warning,
                    now,
                );
                EventImpact::redraw()
            }
            SessionEvent::LobbyJoined(code) => {
                self.notice(format!("Joined lobby {code}."), MessageLevel::Info, now);
                EventImpact::redraw()
            }
            SessionEvent::LobbyUpdated { players } => {
                self.notice(
                    format!("Players in lobby: {}", players.join(", ")),
                    MessageLevel::Info,
                    now,
                );
                EventImpact::redraw()
            }
            SessionEvent::GameStarted { lobby_code } => {
                let text = match lobby_code {
                    Some(code) => format!("The game has started in lobby {code}!"),
                    None => "The game has started!".to_owned(),
                };
                self.notice(text, MessageLevel::Info, now);
                EventImpact::redraw()
            }
            SessionEvent::GameOver { winner } => {
                let text = match winner {
                    Some(name) => format!("Game over! The winner is: {name}!"),
                    None => "Game over! No winner (every player may have been eliminated)."
                        .to_owned(),
                };
                self.notice(text, MessageLevel::Info, now);
                EventImpact::redraw()
            }
            SessionEvent::GameRestarted => {
                self.notice("The game was restarted.", MessageLevel::Info, now);
                EventImpact::redraw()
            }
            SessionEvent::Rejected { reason } => {
                self.messages.record(
                    MessageLevel::Warning,
                    MessageSource::Local,
                    reason.clone(),
                    now,
                );
                EventImpact::redraw()
            }
            SessionEvent::ServerError { message } => {
                self.messages.record(
                    MessageLevel::Error,
                    MessageSource::Server,
                    message.clone(),
                    now,
                );
                EventImpact::redraw()
            }
            SessionEvent::Chat { message } => {
                self.chat.record(
                    MessageLevel::Info,
                    MessageSource::Server,
                    message.clone(),
                    now,
                );
                EventImpact::redraw()
            }
            SessionEvent::RequestSent(_) => EventImpact::none(),
        }
    }

    fn message_log(&self) -> &MessageLog {
        &self.messages
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.messages
    }

    fn take_message_log(self) -> MessageLog {
        self.messages
    }
}
