//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use game_core::ClientRequest;
use runtime::{ChannelTransport, ClientSession};
use tokio::sync::mpsc;

/// Frontend abstraction for UI layers.
///
/// A frontend owns the session for the lifetime of the connection. It feeds
/// server frames and local input into the session, renders [`UiFrame`]s, and
/// forwards the requests that arrive on `outbound` to the server.
///
/// [`UiFrame`]: crate::view_model::UiFrame
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits or input ends.
    async fn run(
        &mut self,
        session: ClientSession<ChannelTransport>,
        outbound: mpsc::UnboundedReceiver<ClientRequest>,
    ) -> Result<()>;
}
