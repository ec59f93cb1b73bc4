use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::state;

const DEFAULT_FILTER: &str = "medibot=info";

/// Directive source, e.g. `MEDIBOT_LOG=medibot_core=debug`.
pub const LOG_ENV: &str = "MEDIBOT_LOG";

/// Route tracing output to `<home>/medibot.log`. The TUI owns the terminal,
/// so nothing is written to stderr.
pub fn init() -> Result<()> {
    let path = state::log_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("install log subscriber: {e}"))?;

    tracing::debug!(path = %path.display(), "logging initialized");
    Ok(())
}
