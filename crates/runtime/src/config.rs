//! Session configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use directories::ProjectDirs;
use game_core::{LobbyCode, PlayerId};

const DEFAULT_PLAYER_ID: &str = "player";

#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Identity the server uses for this client in `players[].id`.
    pub player_id: PlayerId,
    /// Lobby to act in before the server announces one.
    pub lobby_code: Option<LobbyCode>,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            player_id: PlayerId::from(DEFAULT_PLAYER_ID),
            lobby_code: None,
            session_id: None,
            log_dir: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BLUFF_PLAYER_ID` - Local player identity (default: "player")
    /// - `BLUFF_LOBBY_CODE` - Initial lobby code (optional)
    /// - `BLUFF_SESSION_ID` - Log directory name (generated if absent)
    /// - `BLUFF_LOG_DIR` - Log root (default: platform cache directory)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(id) = read_env_string("BLUFF_PLAYER_ID") {
            config.player_id = PlayerId::new(id);
        }
        config.lobby_code = read_env_string("BLUFF_LOBBY_CODE").map(LobbyCode::new);
        config.session_id = read_env_string("BLUFF_SESSION_ID");
        config.log_dir = read_env_string("BLUFF_LOG_DIR").map(PathBuf::from);

        config
    }

    /// Configured session id, or one derived from the current time.
    pub fn session_id(&self) -> String {
        self.session_id.clone().unwrap_or_else(|| {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{timestamp}")
        })
    }

    /// Directory that holds one sub-directory of logs per session.
    pub fn log_root(&self) -> PathBuf {
        if let Some(dir) = &self.log_dir {
            return dir.clone();
        }

        ProjectDirs::from("", "", "bluff")
            .map(|dirs| dirs.cache_dir().join("logs"))
            .unwrap_or_else(|| env::temp_dir().join("bluff").join("logs"))
    }
}

fn read_env_string(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_values_win() {
        let config = RuntimeConfig {
            session_id: Some("table-7".into()),
            log_dir: Some(PathBuf::from("/var/log/bluff")),
            ..RuntimeConfig::default()
        };

        assert_eq!(config.session_id(), "table-7");
        assert_eq!(config.log_root(), PathBuf::from("/var/log/bluff"));
    }

    #[test]
    fn generated_session_id_is_prefixed() {
        let config = RuntimeConfig::default();
        assert!(config.session_id().starts_with("session_"));
        assert_eq!(config.player_id, PlayerId::from("player"));
    }
}
