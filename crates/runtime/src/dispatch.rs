//! Turns permitted actions into outbound requests.
//!
//! Every operation re-checks the caller's [`PermittedActions`] before sending.
//! A refused action sends nothing and leaves the selection untouched.
use game_core::{
    ActionKind, ClientRequest, LobbyCode, PermittedActions, PlayerId, SelectionStore,
};

use crate::api::{Result, RuntimeError, Transport};

pub struct ActionDispatcher<T> {
    transport: T,
    local: PlayerId,
}

impl<T: Transport> ActionDispatcher<T> {
    pub fn new(transport: T, local: PlayerId) -> Self {
        Self { transport, local }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Plays the selected cards and clears the selection once sent.
    pub fn make_play(
        &mut self,
        actions: &PermittedActions,
        lobby: &LobbyCode,
        selection: &mut SelectionStore,
    ) -> Result<ClientRequest> {
        let request = ClientRequest::MakePlay {
            lobby_code: lobby.clone(),
            cards_played: selection.cards(),
        };
        let sent = self.send(actions, ActionKind::MakePlay, request)?;
        selection.clear();
        Ok(sent)
    }

    pub fn believe_claim(
        &mut self,
        actions: &PermittedActions,
        lobby: &LobbyCode,
    ) -> Result<ClientRequest> {
        let request = ClientRequest::BelieveClaim {
            lobby_code: lobby.clone(),
        };
        self.send(actions, ActionKind::BelieveClaim, request)
    }

    pub fn call_liar(
        &mut self,
        actions: &PermittedActions,
        lobby: &LobbyCode,
    ) -> Result<ClientRequest> {
        let request = ClientRequest::CallLiar {
            lobby_code: lobby.clone(),
        };
        self.send(actions, ActionKind::CallLiar, request)
    }

    pub fn roll_dice(
        &mut self,
        actions: &PermittedActions,
        lobby: &LobbyCode,
    ) -> Result<ClientRequest> {
        let request = ClientRequest::RollDice {
            lobby_code: lobby.clone(),
            player_id: self.local.clone(),
        };
        self.send(actions, ActionKind::RollDice, request)
    }

    pub fn restart(
        &mut self,
        actions: &PermittedActions,
        lobby: &LobbyCode,
    ) -> Result<ClientRequest> {
        let request = ClientRequest::RestartGameRequest {
            lobby_code: lobby.clone(),
        };
        self.send(actions, ActionKind::Restart, request)
    }

    /// Chat is not a game action and is never gated.
    pub fn chat(&mut self, lobby: &LobbyCode, message: &str) -> Result<ClientRequest> {
        let message = message.trim();
        if message.is_empty() {
            return Err(RuntimeError::EmptyMessage);
        }

        let request = ClientRequest::ChatMessage {
            lobby_code: lobby.clone(),
            message: message.to_owned(),
        };
        self.transport.send(request.clone())?;
        Ok(request)
    }

    fn send(
        &mut self,
        actions: &PermittedActions,
        kind: ActionKind,
        request: ClientRequest,
    ) -> Result<ClientRequest> {
        if let Err(rejected) = actions.check(kind) {
            tracing::debug!(target: "runtime::dispatch", action = %kind, "refusing disabled action");
            return Err(rejected.into());
        }

        self.transport.send(request.clone())?;
        tracing::info!(
            target: "runtime::dispatch",
            event = request.name(),
            lobby = %request.lobby_code(),
            "request sent"
        );
        Ok(request)
    }
}
