//! Error types for snapshot decoding and local rule checks.
//!
//! None of these are fatal. A snapshot that fails to decode is skipped and the
//! previous one stays in effect; a rejected selection or action becomes a
//! transient notice and is never sent to the server.
use thiserror::Error;

use crate::gate::ActionKind;
use crate::snapshot::Phase;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("snapshot has no phase")]
    MissingPhase,
}

/// Why a card could not be selected or deselected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionRejected {
    #[error("you are not seated in this game")]
    NotSeated,

    #[error("eliminated players cannot select cards")]
    NotAlive,

    #[error("it is not your turn")]
    NotYourTurn,

    #[error("cards cannot be selected while the game is in the {0} phase")]
    WrongPhase(Phase),

    #[error("that card is not in your hand")]
    NotInHand,
}

/// An action was attempted while the gate reports it unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionRejected {
    #[error("{action} is not available right now")]
    Unavailable { action: ActionKind },
}
