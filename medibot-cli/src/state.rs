use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use medibot_store::ListStore;

/// `$MEDIBOT_HOME`, else `~/.medibot`.
pub fn medibot_home() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("MEDIBOT_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".medibot"))
}

pub fn ensure_medibot_home() -> Result<PathBuf> {
    let dir = medibot_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Persisted lists (cart, symptom checks) live under `<home>/data`.
pub fn open_store() -> Result<ListStore> {
    ListStore::open(ensure_medibot_home()?.join("data"))
}

pub fn log_path() -> Result<PathBuf> {
    Ok(ensure_medibot_home()?.join("medibot.log"))
}
