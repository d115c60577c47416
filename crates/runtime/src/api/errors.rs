//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from frame decoding, the outbound transport and the local
//! action gate so the session can turn each into a notice or a log line.
use thiserror::Error;

use game_core::ActionRejected;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("outbound channel closed")]
    Closed,

    #[error("failed to encode {event} request")]
    Encode {
        event: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to decode server frame")]
    Decode(#[source] serde_json::Error),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Rejected(#[from] ActionRejected),

    #[error("not in a lobby yet")]
    NoLobby,

    #[error("chat message is empty")]
    EmptyMessage,
}
