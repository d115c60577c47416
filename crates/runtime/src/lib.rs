//! Session orchestration for the bluffing card game client.
//!
//! This crate wires the pure rules from `game-core` into a running client
//! session: decoding server frames, reconciling local state against each
//! snapshot, and dispatching gated requests through a [`Transport`].
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the reconciliation pipeline
//! - [`dispatch`] turns permitted actions into outbound requests
//! - [`api`] exposes the error types and transport seam
//! - [`codec`] reads and writes line-delimited JSON frames
pub mod api;
pub mod codec;
pub mod config;
pub mod dispatch;
pub mod event;
pub mod session;

pub use api::{
    ChannelTransport, RecordingTransport, Result, RuntimeError, Transport, TransportError,
};
pub use config::RuntimeConfig;
pub use dispatch::ActionDispatcher;
pub use event::SessionEvent;
pub use session::ClientSession;
