//! Line codec for the server connection.
//!
//! Each line carries one JSON frame `{"event": <name>, "data": <payload>}`.
use game_core::{ClientRequest, GameSnapshot, ServerEvent};
use serde_json::Value;

use crate::api::{Result, RuntimeError, TransportError};

pub fn decode_frame(line: &str) -> Result<ServerEvent> {
    serde_json::from_str(line.trim()).map_err(RuntimeError::Decode)
}

/// Decodes a bare snapshot payload, without the event envelope.
pub fn decode_snapshot(value: Value) -> Result<GameSnapshot> {
    serde_json::from_value(value).map_err(RuntimeError::Decode)
}

pub fn encode_request(request: &ClientRequest) -> std::result::Result<String, TransportError> {
    serde_json::to_string(request).map_err(|source| TransportError::Encode {
        event: request.name(),
        source,
    })
}

/// Best-effort event name of a frame, for logging frames that fail to decode.
pub fn frame_name(line: &str) -> Option<String> {
    let value: Value = serde_json::from_str(line.trim()).ok()?;
    value.get("event")?.as_str().map(str::to_owned)
}
