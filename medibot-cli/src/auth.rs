use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};

use crate::state::ensure_medibot_home;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthState {
    pub openai_api_key: Option<String>,
}

impl AuthState {
    /// A configured, non-blank key.
    pub fn api_key(&self) -> Option<&str> {
        self.openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

fn auth_path() -> Result<std::path::PathBuf> {
    Ok(ensure_medibot_home()?.join("auth.json"))
}

pub fn load_auth() -> Result<AuthState> {
    let p = auth_path()?;
    if !p.exists() {
        return Ok(AuthState::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_auth(auth: &AuthState) -> Result<()> {
    let p = auth_path()?;
    let s = serde_json::to_string_pretty(auth)?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

/// The stored key, or `None` when absent or unreadable.
pub fn configured_key() -> Option<String> {
    match load_auth() {
        Ok(a) => a.api_key().map(str::to_string),
        Err(e) => {
            tracing::warn!(error = %format!("{e:#}"), "auth.json unreadable; AI answers disabled");
            None
        }
    }
}

pub fn validate_key(key: &str) -> Result<()> {
    if !key.starts_with("sk-") {
        bail!("Invalid API Key format. OpenAI API keys should start with \"sk-\"");
    }
    Ok(())
}

/// First 7 and last 4 characters: `sk-abcd...wxyz`.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 11 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

fn prompt_secret(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush().ok();
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s.trim().to_string())
}

pub fn openai_paste_api_key() -> Result<()> {
    let mut auth = load_auth()?;
    let key = prompt_secret("Paste OpenAI API key (starts with sk-)")?;
    validate_key(&key)?;
    auth.openai_api_key = Some(key);
    save_auth(&auth)?;
    println!("✅ Saved OpenAI API key to {}", auth_path()?.display());
    Ok(())
}

pub fn status() -> Result<()> {
    match load_auth()?.api_key() {
        Some(k) => println!("✓ Connected ({})", mask_key(k)),
        None => println!("✗ Not Set. Run: medibot auth paste-openai-api-key"),
    }
    Ok(())
}

pub fn clear() -> Result<()> {
    save_auth(&AuthState::default())?;
    println!("Removed stored API key.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key_keeps_prefix_and_suffix() {
        assert_eq!(mask_key("sk-abcdefghijklmnwxyz"), "sk-abcd...wxyz");
        assert_eq!(mask_key("sk-short"), "********");
    }

    #[test]
    fn test_validate_key_requires_sk_prefix() {
        assert!(validate_key("sk-proj-123").is_ok());
        let err = validate_key("pk-123").unwrap_err();
        assert!(err.to_string().contains("should start with"));
    }

    #[test]
    fn test_blank_key_counts_as_absent() {
        let a = AuthState {
            openai_api_key: Some("   ".to_string()),
        };
        assert_eq!(a.api_key(), None);
        assert_eq!(AuthState::default().api_key(), None);
    }
}
