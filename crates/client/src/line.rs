//! Line-oriented frontend.
//!
//! Reads one line at a time from `input`. Lines starting with `/` are local
//! commands; every other non-empty line is a server frame. Outbound requests
//! are written to `wire` as JSON lines and the table is rendered to `display`.
use std::time::Instant;

use anyhow::{Context, Result};
use async_trait::async_trait;
use client_frontend_core::{
    EventConsumer, EventImpact, Frontend, FrontendConfig, FrontendState, MessageLevel,
    MessageSource, UiFrame,
};
use game_core::ClientRequest;
use runtime::{ChannelTransport, ClientSession, codec};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::command::Command;
use crate::render::render;

enum Step {
    Continue(EventImpact),
    Quit,
}

pub struct LineFrontend<R, W, D> {
    config: FrontendConfig,
    input: Option<R>,
    wire: W,
    display: D,
}

impl<R, W, D> LineFrontend<R, W, D>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
    D: AsyncWrite + Unpin + Send,
{
    pub fn new(config: FrontendConfig, input: R, wire: W, display: D) -> Self {
        Self {
            config,
            input: Some(input),
            wire,
            display,
        }
    }

    pub fn into_outputs(self) -> (W, D) {
        (self.wire, self.display)
    }

    fn handle_line(
        &self,
        session: &mut ClientSession<ChannelTransport>,
        state: &mut FrontendState,
        line: &str,
    ) -> Step {
        let line = line.trim();
        if line.is_empty() {
            return Step::Continue(EventImpact::none());
        }

        let now = Instant::now();
        if !line.starts_with('/') {
            let events = session.apply_frame(line);
            return Step::Continue(state.on_events(&events, now));
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(error) => {
                state.message_log_mut().record(
                    MessageLevel::Warning,
                    MessageSource::Local,
                    error.to_string(),
                    now,
                );
                return Step::Continue(EventImpact::redraw());
            }
        };
        debug!(target: "client::line", ?command, "command");

        let events = match command {
            Command::Quit => return Step::Quit,
            Command::Show => return Step::Continue(EventImpact::redraw()),
            Command::Help => {
                state.message_log_mut().record(
                    MessageLevel::Info,
                    MessageSource::Local,
                    Command::USAGE,
                    now,
                );
                return Step::Continue(EventImpact::redraw());
            }
            Command::Select(index) => session.toggle_card(index),
            Command::Chat(text) => session.chat(&text),
            other => match other.action() {
                Some(kind) => session.perform(kind),
                None => Vec::new(),
            },
        };

        Step::Continue(state.on_events(&events, now))
    }

    async fn send(&mut self, request: &ClientRequest) -> Result<()> {
        let line = codec::encode_request(request)?;
        self.wire.write_all(line.as_bytes()).await?;
        self.wire.write_all(b"\n").await?;
        self.wire.flush().await?;
        debug!(target: "client::line", event = request.name(), "request written");
        Ok(())
    }

    async fn redraw(
        &mut self,
        session: &ClientSession<ChannelTransport>,
        state: &FrontendState,
    ) -> Result<()> {
        let frame = UiFrame::from_session(session, state, &self.config);
        self.display.write_all(render(&frame).as_bytes()).await?;
        self.display.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl<R, W, D> Frontend for LineFrontend<R, W, D>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
    D: AsyncWrite + Unpin + Send,
{
    async fn run(
        &mut self,
        mut session: ClientSession<ChannelTransport>,
        mut outbound: mpsc::UnboundedReceiver<ClientRequest>,
    ) -> Result<()> {
        let input = self
            .input
            .take()
            .context("line frontend input was already consumed")?;
        let mut lines = input.lines();
        let mut state = FrontendState::new(&self.config, Instant::now());
        let mut ticker = interval(self.config.view.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(target: "client::line", player = %session.local_player(), "line frontend started");
        self.redraw(&session, &state).await?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line.context("failed to read input")? else {
                        info!(target: "client::line", "input closed");
                        break;
                    };
                    match self.handle_line(&mut session, &mut state, &line) {
                        Step::Quit => break,
                        Step::Continue(impact) if impact.requires_redraw => {
                            self.redraw(&session, &state).await?;
                        }
                        Step::Continue(_) => {}
                    }
                }
                Some(request) = outbound.recv() => {
                    self.send(&request).await?;
                }
                _ = ticker.tick() => {
                    if state.tick(Instant::now()).requires_redraw {
                        self.redraw(&session, &state).await?;
                    }
                }
            }
        }

        while let Ok(request) = outbound.try_recv() {
            self.send(&request).await?;
        }
        info!(target: "client::line", "line frontend stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{LobbyCode, PlayerId};
    use serde_json::json;

    fn table_frame() -> String {
        json!({
            "event": "game_state_update",
            "data": {
                "players": [
                    {"id": "me", "name": "Me", "alive": true, "hand": ["Koning", "Joker"]},
                    {"id": "rival", "name": "Rival", "alive": true, "hand": ["Boer"]}
                ],
                "currentTurn": "me",
                "phase": "awaitingPlay",
                "deckType": ["Boer"]
            }
        })
        .to_string()
    }

    async fn run_script(script: String) -> (String, String) {
        let (transport, outbound) = ChannelTransport::new();
        let session = ClientSession::new(
            PlayerId::from("me"),
            Some(LobbyCode::new("ABCD")),
            transport,
        );
        let mut frontend = LineFrontend::new(
            FrontendConfig::default(),
            script.as_bytes(),
            Vec::new(),
            Vec::new(),
        );

        frontend.run(session, outbound).await.unwrap();

        let (wire, display) = frontend.into_outputs();
        (
            String::from_utf8(wire).unwrap(),
            String::from_utf8(display).unwrap(),
        )
    }

    #[tokio::test]
    async fn selected_cards_are_played_over_the_wire() {
        let script = format!("{}\n/select 2\n/play\n/quit\n", table_frame());

        let (wire, display) = run_script(script).await;

        let sent: Vec<serde_json::Value> = wire
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(
            sent,
            vec![json!({
                "event": "make_play",
                "data": {"lobbyCode": "ABCD", "cardsPlayed": ["Joker"]}
            })]
        );
        assert!(display.contains("Hand: [1] King [2*] Joker"));
    }

    #[tokio::test]
    async fn refused_actions_send_nothing() {
        let script = format!("{}\n/play\n/play\n/liar\n/bogus\n", table_frame());

        let (wire, display) = run_script(script).await;

        assert!(wire.is_empty());
        assert!(display.contains("! Select at least 1 card to play. (x2)"));
        assert!(display.contains("! unknown command /bogus; try /help"));
    }
}
