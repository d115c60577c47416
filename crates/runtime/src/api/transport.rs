//! Outbound request sinks.
//!
//! Sending is fire-and-forget: a transport accepts a request or fails
//! immediately, and never waits for the server. Whatever the server does with
//! the request arrives later as a new snapshot.
use tokio::sync::mpsc;

use game_core::ClientRequest;

use super::errors::TransportError;

pub trait Transport {
    fn send(&mut self, request: ClientRequest) -> Result<(), TransportError>;
}

/// Hands requests to an async writer task over an unbounded channel.
#[derive(Clone, Debug)]
pub struct ChannelTransport {
    tx: mpsc::UnboundedSender<ClientRequest>,
}

impl ChannelTransport {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ClientRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Transport for ChannelTransport {
    fn send(&mut self, request: ClientRequest) -> Result<(), TransportError> {
        self.tx.send(request).map_err(|_| TransportError::Closed)
    }
}

/// Keeps every request in memory. Useful for tests and dry runs.
#[derive(Clone, Debug, Default)]
pub struct RecordingTransport {
    sent: Vec<ClientRequest>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> &[ClientRequest] {
        &self.sent
    }

    pub fn take(&mut self) -> Vec<ClientRequest> {
        std::mem::take(&mut self.sent)
    }
}

impl Transport for RecordingTransport {
    fn send(&mut self, request: ClientRequest) -> Result<(), TransportError> {
        self.sent.push(request);
        Ok(())
    }
}
