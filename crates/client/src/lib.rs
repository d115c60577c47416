//! Top-level client wiring a [`ClientSession`] to a frontend.
//!
//! ```text
//! Client
//!   ├─→ ClientSession (reconciliation, gating, dispatch)
//!   └─→ Frontend (input, rendering, connection I/O)
//! ```
//!
//! The session sends requests through a [`ChannelTransport`]; the frontend
//! drains the matching receiver and writes each request to the server.
mod builder;
pub mod command;
pub mod line;
pub mod logging;
pub mod render;

pub use builder::ClientBuilder;
pub use client_frontend_core::Frontend;
pub use line::LineFrontend;

use anyhow::Result;
use runtime::{ChannelTransport, ClientSession, RuntimeConfig};

pub struct Client {
    config: RuntimeConfig,
    frontend: Box<dyn Frontend>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Runs the frontend until the user quits or input ends.
    pub async fn run(self) -> Result<()> {
        let (transport, outbound) = ChannelTransport::new();
        let session = ClientSession::from_config(&self.config, transport);

        tracing::info!(
            player = %self.config.player_id,
            lobby = ?self.config.lobby_code,
            "client session ready"
        );

        let mut frontend = self.frontend;
        frontend.run(session, outbound).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::PlayerId;

    #[test]
    fn build_requires_a_frontend() {
        let error = Client::builder().build().err().unwrap();
        assert!(error.to_string().contains("Frontend is required"));
    }

    #[tokio::test]
    async fn run_hands_the_session_to_the_frontend() {
        let frontend = LineFrontend::new(
            client_frontend_core::FrontendConfig::default(),
            &b"/quit\n"[..],
            Vec::new(),
            Vec::new(),
        );
        let client = Client::builder()
            .config(RuntimeConfig {
                player_id: PlayerId::from("me"),
                ..RuntimeConfig::default()
            })
            .frontend(frontend)
            .build()
            .unwrap();

        assert_eq!(client.config().player_id, PlayerId::from("me"));
        client.run().await.unwrap();
    }
}
