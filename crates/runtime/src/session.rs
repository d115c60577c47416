//! The reconciliation pipeline for one connected client.
//!
//! [`ClientSession`] owns the only mutable client state: the latest snapshot,
//! the elimination detector's alive map and the card selection. Every inbound
//! frame and every local input runs synchronously to completion and returns
//! the [`SessionEvent`]s it produced; nothing runs in the background.
//!
//! For a snapshot the order is fixed: detect eliminations against the previous
//! alive map, reconcile the selection against the new hand, then store the
//! snapshot. Permitted actions are never stored; [`ClientSession::actions`]
//! evaluates the gate on demand.
use game_core::{
    ActionGate, ActionKind, CardSlot, ClientRequest, EliminationDetector, GameSnapshot, LobbyCode,
    PermittedActions, Phase, PlayerId, SelectionStore, ServerEvent,
};
use tracing::{debug, info, trace, warn};

use crate::api::{Result, RuntimeError, Transport};
use crate::codec;
use crate::config::RuntimeConfig;
use crate::dispatch::ActionDispatcher;
use crate::event::SessionEvent;

const SELECT_AT_LEAST_ONE: &str = "Select at least 1 card to play.";
const NO_GAME_YET: &str = "The game has not started yet.";

pub struct ClientSession<T> {
    local: PlayerId,
    lobby: Option<LobbyCode>,
    snapshot: Option<GameSnapshot>,
    detector: EliminationDetector,
    selection: SelectionStore,
    dispatcher: ActionDispatcher<T>,
}

impl<T: Transport> ClientSession<T> {
    pub fn new(local: PlayerId, lobby: Option<LobbyCode>, transport: T) -> Self {
        Self {
            dispatcher: ActionDispatcher::new(transport, local.clone()),
            local,
            lobby,
            snapshot: None,
            detector: EliminationDetector::new(),
            selection: SelectionStore::new(),
        }
    }

    pub fn from_config(config: &RuntimeConfig, transport: T) -> Self {
        Self::new(config.player_id.clone(), config.lobby_code.clone(), transport)
    }

    /// Decodes one line from the server and applies it.
    ///
    /// Undecodable or unknown frames are logged and dropped; the previous
    /// snapshot stays in effect.
    pub fn apply_frame(&mut self, line: &str) -> Vec<SessionEvent> {
        match codec::decode_frame(line) {
            Ok(event) => self.apply_event(event),
            Err(error) => {
                let name = codec::frame_name(line);
                warn!(
                    target: "runtime::session",
                    event = name.as_deref().unwrap_or("<none>"),
                    error = %error_chain(&error),
                    "dropping server frame"
                );
                Vec::new()
            }
        }
    }

    pub fn apply_event(&mut self, event: ServerEvent) -> Vec<SessionEvent> {
        trace!(target: "runtime::session", event = event.name(), "server event");

        match event {
            ServerEvent::GameStateUpdate(snapshot) => self.apply_snapshot(snapshot),
            ServerEvent::GameStarted(started) => {
                let mut events = self.adopt_lobby(started.lobby_code.clone());
                for entry in &started.players {
                    if let Some(alive) = entry.alive {
                        self.detector.seed(entry.id.clone(), alive);
                    }
                }
                info!(target: "runtime::session", players = started.players.len(), "game started");
                events.push(SessionEvent::GameStarted {
                    lobby_code: started.lobby_code,
                });
                events
            }
            ServerEvent::GameOver(info) => {
                // The final snapshot follows this event; the alive map must
                // survive until it arrives.
                self.selection.clear();
                let winner = info.winner().map(str::to_owned);
                info!(target: "runtime::session", winner = ?winner, "game over");
                vec![SessionEvent::GameOver { winner }]
            }
            ServerEvent::GameRestarted(info) => {
                let mut events = self.adopt_lobby(info.lobby_code);
                self.detector.reset();
                self.selection.clear();
                info!(target: "runtime::session", "game restarted");
                events.push(SessionEvent::GameRestarted);
                events
            }
            ServerEvent::LobbyCreated(info) | ServerEvent::LobbyJoined(info) => {
                self.adopt_lobby(info.lobby_code)
            }
            ServerEvent::LobbyUpdate(roster) => vec![SessionEvent::LobbyUpdated {
                players: roster.players,
            }],
            ServerEvent::ErrorMessage(text) => {
                warn!(target: "runtime::session", message = %text.message, "server error");
                vec![SessionEvent::ServerError {
                    message: text.message,
                }]
            }
            ServerEvent::ChatMessage(text) => vec![SessionEvent::Chat {
                message: text.message,
            }],
        }
    }

    fn apply_snapshot(&mut self, snapshot: GameSnapshot) -> Vec<SessionEvent> {
        let mut events: Vec<SessionEvent> = self
            .detector
            .observe(&snapshot)
            .into_iter()
            .map(SessionEvent::PlayerEliminated)
            .collect();

        let dropped = if snapshot.phase == Phase::GameOver {
            let held = self.selection.len();
            self.selection.clear();
            held
        } else {
            self.selection.reconcile(&snapshot, &self.local)
        };
        if dropped > 0 {
            debug!(target: "runtime::session", dropped, "pruned stale selection");
            events.push(SessionEvent::SelectionChanged {
                selected: self.selection.len(),
            });
        }

        trace!(
            target: "runtime::session",
            phase = ?snapshot.phase,
            turn = ?snapshot.current_turn,
            players = snapshot.players.len(),
            "snapshot applied"
        );
        events.push(SessionEvent::SnapshotApplied {
            phase: snapshot.phase,
        });
        self.snapshot = Some(snapshot);
        events
    }

    fn adopt_lobby(&mut self, code: Option<LobbyCode>) -> Vec<SessionEvent> {
        match code {
            Some(code) if self.lobby.as_ref() != Some(&code) => {
                info!(target: "runtime::session", lobby = %code, "lobby joined");
                self.lobby = Some(code.clone());
                vec![SessionEvent::LobbyJoined(code)]
            }
            _ => Vec::new(),
        }
    }

    /// Toggles the card at `index` in the local hand.
    pub fn toggle_card(&mut self, index: usize) -> Vec<SessionEvent> {
        let Some(snapshot) = &self.snapshot else {
            return rejected(NO_GAME_YET);
        };
        let Some(slot) = CardSlot::at(snapshot.hand_of(&self.local), index) else {
            return rejected(format!("There is no card at position {}.", index + 1));
        };

        match self.selection.toggle(slot, snapshot, &self.local) {
            Ok(toggled) => {
                debug!(target: "runtime::session", rank = %slot.rank, ?toggled, "selection toggled");
                vec![SessionEvent::SelectionChanged {
                    selected: self.selection.len(),
                }]
            }
            Err(reason) => rejected(reason.to_string()),
        }
    }

    /// Sends `kind` if the gate currently allows it.
    pub fn perform(&mut self, kind: ActionKind) -> Vec<SessionEvent> {
        let actions = self.actions();

        if kind == ActionKind::MakePlay && actions.make_play.visible && self.selection.is_empty() {
            return rejected(SELECT_AT_LEAST_ONE);
        }

        match self.dispatch(kind, &actions) {
            Ok(request) => {
                let mut events = vec![SessionEvent::RequestSent(request)];
                if kind == ActionKind::MakePlay {
                    events.push(SessionEvent::SelectionChanged { selected: 0 });
                }
                events
            }
            Err(error) => {
                debug!(target: "runtime::session", action = %kind, %error, "action refused");
                rejected(error.to_string())
            }
        }
    }

    fn dispatch(&mut self, kind: ActionKind, actions: &PermittedActions) -> Result<ClientRequest> {
        actions.check(kind)?;
        let lobby = self.lobby.clone().ok_or(RuntimeError::NoLobby)?;

        match kind {
            ActionKind::MakePlay => {
                self.dispatcher
                    .make_play(actions, &lobby, &mut self.selection)
            }
            ActionKind::BelieveClaim => self.dispatcher.believe_claim(actions, &lobby),
            ActionKind::CallLiar => self.dispatcher.call_liar(actions, &lobby),
            ActionKind::RollDice => self.dispatcher.roll_dice(actions, &lobby),
            ActionKind::Restart => self.dispatcher.restart(actions, &lobby),
        }
    }

    pub fn chat(&mut self, message: &str) -> Vec<SessionEvent> {
        let result = match &self.lobby {
            Some(lobby) => self.dispatcher.chat(lobby, message),
            None => Err(RuntimeError::NoLobby),
        };

        match result {
            Ok(request) => vec![SessionEvent::RequestSent(request)],
            Err(error) => rejected(error.to_string()),
        }
    }

    /// Permitted actions for the current snapshot, recomputed on every call.
    pub fn actions(&self) -> PermittedActions {
        match &self.snapshot {
            Some(snapshot) => ActionGate::evaluate(snapshot, &self.local, &self.selection),
            None => PermittedActions::idle(),
        }
    }

    pub fn snapshot(&self) -> Option<&GameSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn lobby_code(&self) -> Option<&LobbyCode> {
        self.lobby.as_ref()
    }

    pub fn local_player(&self) -> &PlayerId {
        &self.local
    }

    pub fn detector(&self) -> &EliminationDetector {
        &self.detector
    }

    pub fn transport(&self) -> &T {
        self.dispatcher.transport()
    }

    pub fn transport_mut(&mut self) -> &mut T {
        self.dispatcher.transport_mut()
    }
}

fn rejected(reason: impl Into<String>) -> Vec<SessionEvent> {
    vec![SessionEvent::Rejected {
        reason: reason.into(),
    }]
}

fn error_chain(error: &RuntimeError) -> String {
    let mut text = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    text
}
