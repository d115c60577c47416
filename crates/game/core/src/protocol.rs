//! Messages exchanged with the game server.
//!
//! Every frame is a JSON object `{"event": <name>, "data": <payload>}`.
//! [`ServerEvent`] covers what the client consumes, [`ClientRequest`] what it
//! emits. Optional payload keys that are missing mean the feature is not
//! currently active, never an error.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rank::Rank;
use crate::snapshot::{GameSnapshot, PlayerId};

/// Four-letter code identifying a lobby on the server.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LobbyCode(pub String);

impl LobbyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl fmt::Display for LobbyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inbound frames.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    GameStarted(GameStarted),
    GameStateUpdate(GameSnapshot),
    GameOver(GameOverInfo),
    GameRestarted(LobbyInfo),
    ErrorMessage(TextMessage),
    ChatMessage(TextMessage),
    LobbyCreated(LobbyInfo),
    LobbyJoined(LobbyInfo),
    LobbyUpdate(LobbyRoster),
}

impl ServerEvent {
    pub const fn name(&self) -> &'static str {
        match self {
            ServerEvent::GameStarted(_) => "game_started",
            ServerEvent::GameStateUpdate(_) => "game_state_update",
            ServerEvent::GameOver(_) => "game_over",
            ServerEvent::GameRestarted(_) => "game_restarted",
            ServerEvent::ErrorMessage(_) => "error_message",
            ServerEvent::ChatMessage(_) => "chat_message",
            ServerEvent::LobbyCreated(_) => "lobby_created",
            ServerEvent::LobbyJoined(_) => "lobby_joined",
            ServerEvent::LobbyUpdate(_) => "lobby_update",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStarted {
    #[serde(default)]
    pub lobby_code: Option<LobbyCode>,
    #[serde(default)]
    pub players: Vec<RosterEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RosterEntry {
    pub id: PlayerId,
    pub name: String,
    /// Only present when the server announces the initial alive status.
    #[serde(default)]
    pub alive: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GameOverInfo {
    #[serde(default)]
    pub winner: Option<String>,
}

impl GameOverInfo {
    /// Sentinel the server sends when every player was eliminated.
    pub const NO_WINNER: &'static str = "geen";

    pub fn winner(&self) -> Option<&str> {
        self.winner
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty() && *name != Self::NO_WINNER)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbyInfo {
    #[serde(default)]
    pub lobby_code: Option<LobbyCode>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LobbyRoster {
    #[serde(default)]
    pub players: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TextMessage {
    #[serde(default)]
    pub message: String,
}

/// Outbound requests. Each one is sent exactly once and never awaited; its
/// effect arrives later as a new snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientRequest {
    MakePlay {
        #[serde(rename = "lobbyCode")]
        lobby_code: LobbyCode,
        #[serde(rename = "cardsPlayed")]
        cards_played: Vec<Rank>,
    },
    BelieveClaim {
        #[serde(rename = "lobbyCode")]
        lobby_code: LobbyCode,
    },
    CallLiar {
        #[serde(rename = "lobbyCode")]
        lobby_code: LobbyCode,
    },
    RollDice {
        #[serde(rename = "lobbyCode")]
        lobby_code: LobbyCode,
        #[serde(rename = "playerId")]
        player_id: PlayerId,
    },
    RestartGameRequest {
        #[serde(rename = "lobbyCode")]
        lobby_code: LobbyCode,
    },
    ChatMessage {
        #[serde(rename = "lobbyCode")]
        lobby_code: LobbyCode,
        message: String,
    },
}

impl ClientRequest {
    pub const fn name(&self) -> &'static str {
        match self {
            ClientRequest::MakePlay { .. } => "make_play",
            ClientRequest::BelieveClaim { .. } => "believe_claim",
            ClientRequest::CallLiar { .. } => "call_liar",
            ClientRequest::RollDice { .. } => "roll_dice",
            ClientRequest::RestartGameRequest { .. } => "restart_game_request",
            ClientRequest::ChatMessage { .. } => "chat_message",
        }
    }

    pub fn lobby_code(&self) -> &LobbyCode {
        match self {
            ClientRequest::MakePlay { lobby_code, .. }
            | ClientRequest::BelieveClaim { lobby_code }
            | ClientRequest::CallLiar { lobby_code }
            | ClientRequest::RollDice { lobby_code, .. }
            | ClientRequest::RestartGameRequest { lobby_code }
            | ClientRequest::ChatMessage { lobby_code, .. } => lobby_code,
        }
    }
}
