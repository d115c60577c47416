//! Client builder with dependency injection pattern.

use crate::{Client, Frontend};
use anyhow::{Context, Result};
use runtime::RuntimeConfig;

/// Builder for constructing a [`Client`].
///
/// The frontend is required; the runtime configuration falls back to
/// [`RuntimeConfig::default`].
#[derive(Default)]
pub struct ClientBuilder {
    config: Option<RuntimeConfig>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity, lobby and log settings for the session.
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if no frontend was set.
    pub fn build(self) -> Result<Client> {
        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client {
            config: self.config.unwrap_or_default(),
            frontend,
        })
    }
}
