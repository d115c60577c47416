//! Cross-frontend primitives for presenting the game.
//!
//! Houses the notice log, the elimination banner, event handling and the
//! view-model types that both the line client and future graphical clients
//! can reuse.
pub mod config;
pub mod consumer;
pub mod event;
pub mod frontend;
pub mod message;
pub mod overlay;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig, OverlayConfig, ViewConfig};
pub use consumer::FrontendState;
pub use event::{EventConsumer, EventImpact};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog, MessageSource};
pub use overlay::EliminationOverlay;
pub use view_model::{ActionView, HandCard, PlayerRow, RevealedPanel, UiFrame};
