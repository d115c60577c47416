use game_core::{ClientRequest, LobbyCode, Phase, PlayerEliminated};

/// Events emitted by a [`ClientSession`](crate::ClientSession) while it
/// processes server frames and local input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A new snapshot replaced the previous one
    SnapshotApplied { phase: Phase },
    /// A player's alive flag went from true to false
    PlayerEliminated(PlayerEliminated),
    /// The selection grew, shrank, or was pruned by reconciliation
    SelectionChanged { selected: usize },
    /// The lobby code was learned or changed
    LobbyJoined(LobbyCode),
    LobbyUpdated { players: Vec<String> },
    GameStarted { lobby_code: Option<LobbyCode> },
    GameOver { winner: Option<String> },
    GameRestarted,
    /// A local input was refused and nothing was sent
    Rejected { reason: String },
    /// Error text from the server, shown verbatim
    ServerError { message: String },
    Chat { message: String },
    RequestSent(ClientRequest),
}
