use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::ensure_medibot_home;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub completion: CompletionSection,
    pub chat: ChatSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CompletionSection {
    /// OpenAI-compatible endpoint root; `/v1/chat/completions` is appended.
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub system_prompt: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChatSection {
    /// Pause before each bot message in the TUI.
    pub typing_delay_ms: u64,
    /// Recent turns sent along with a delegated question.
    pub max_turns_context: usize,
}

impl Default for CompletionSection {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 200,
            temperature: 0.7,
            system_prompt: "You are a helpful medical assistant. Provide general advice.".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for ChatSection {
    fn default() -> Self {
        Self {
            typing_delay_ms: 600,
            max_turns_context: 5,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_medibot_home()?.join("config.toml"))
}

pub fn parse_config(s: &str) -> Result<Config> {
    toml::from_str(s).context("parse config.toml")
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s)
}

/// Like [`load_config`], but an unreadable file degrades to defaults.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_else(|e| {
        tracing::warn!(error = %format!("{e:#}"), "config unreadable; using defaults");
        Config::default()
    })
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

pub fn show_config() -> Result<()> {
    let cfg = load_config()?;
    println!("# {}", config_path()?.display());
    print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_completion_settings() {
        let cfg = Config::default();
        assert_eq!(cfg.completion.model, "gpt-3.5-turbo");
        assert_eq!(cfg.completion.max_tokens, 200);
        assert_eq!(cfg.completion.temperature, 0.7);
        assert_eq!(cfg.completion.timeout_secs, 30);
        assert_eq!(cfg.chat.max_turns_context, 5);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let cfg = parse_config("[chat]\ntyping_delay_ms = 0\n").unwrap();
        assert_eq!(cfg.chat.typing_delay_ms, 0);
        assert_eq!(cfg.chat.max_turns_context, 5);
        assert_eq!(cfg.completion, CompletionSection::default());
    }

    #[test]
    fn test_round_trips_through_toml() {
        let mut cfg = Config::default();
        cfg.completion.model = "gpt-4o-mini".to_string();
        let s = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(parse_config(&s).unwrap(), cfg);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(parse_config("[chat\n").is_err());
    }
}
