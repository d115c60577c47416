//! File-only tracing setup; the terminal is reserved for the table view.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use runtime::RuntimeConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "client.log";

/// Installs the global subscriber. Keep the guard alive until exit so
/// buffered lines reach the file.
pub fn setup_logging(config: &RuntimeConfig) -> Result<WorkerGuard> {
    let session_id = config.session_id();
    let dir = session_log_dir(&config.log_root(), &session_id)?;

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", dir.join(LOG_FILE).display());

    Ok(guard)
}

/// Creates `root/session_id` and returns it.
pub fn session_log_dir(root: &Path, session_id: &str) -> Result<PathBuf> {
    let dir = root.join(session_id);
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    Ok(dir)
}
