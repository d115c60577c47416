//! Public runtime API surface.
//!
//! Gathers the seams downstream crates plug into: the error types and the
//! outbound [`Transport`].

pub mod errors;
pub mod transport;

pub use errors::{Result, RuntimeError, TransportError};
pub use transport::{ChannelTransport, RecordingTransport, Transport};
