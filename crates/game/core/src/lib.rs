//! Authoritative game model and client-side rules for the bluffing card game.
//!
//! `game-core` defines the snapshot the server pushes after every state change,
//! the messages exchanged with the server, and the pure functions the client
//! uses to react to a snapshot: which players were just eliminated, which
//! selected cards are still valid, and which actions may be offered.
//! Nothing in this crate mutates a snapshot; a new one always replaces the old.
pub mod elimination;
pub mod error;
pub mod gate;
pub mod protocol;
pub mod rank;
pub mod selection;
pub mod snapshot;

mod wire;

pub use elimination::{AliveMap, EliminationDetector, PlayerEliminated, diff};
pub use error::{ActionRejected, SelectionRejected, SnapshotError};
pub use gate::{ActionGate, ActionKind, ActionState, PermittedActions};
pub use protocol::{
    ClientRequest, GameOverInfo, GameStarted, LobbyCode, LobbyInfo, LobbyRoster, RosterEntry,
    ServerEvent, TextMessage,
};
pub use rank::Rank;
pub use selection::{CardSlot, SelectionStore, Toggled};
pub use snapshot::{Claim, DiceOutcome, GameSnapshot, Phase, Player, PlayerId, RevealedInfo};
