//! OpenAI-compatible chat completion client for questions the symptom
//! checker does not recognize.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use medibot_core::{ChatTurn, Speaker};

use crate::config::CompletionSection;

const FAILED_PREFIX: &str = "⚠️ AI Connection failed. ";

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("no API key configured")]
    MissingKey,

    #[error("API key rejected (401)")]
    Unauthorized,

    #[error("rate limited (429)")]
    RateLimited,

    #[error("completion service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion response had no content")]
    EmptyResponse,
}

impl CompletionError {
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => CompletionError::Unauthorized,
            StatusCode::TOO_MANY_REQUESTS => CompletionError::RateLimited,
            other => CompletionError::Status {
                status: other.as_u16(),
                body,
            },
        }
    }

    /// Text for the error-styled transcript entry.
    pub fn user_message(&self) -> String {
        let detail = match self {
            CompletionError::Unauthorized => {
                "Invalid API Key. Please check your key with `medibot auth status`."
            }
            CompletionError::RateLimited => "Rate limit exceeded. Please try again later.",
            CompletionError::MissingKey => {
                "No API key configured. Run `medibot auth paste-openai-api-key` to add one, or try the specific symptom checkers (Headache, Fever, etc)."
            }
            CompletionError::Status { .. }
            | CompletionError::Transport(_)
            | CompletionError::EmptyResponse => {
                "Please check your API Key or try the specific symptom checkers (Headache, Fever, etc)."
            }
        };
        format!("{FAILED_PREFIX}{detail}")
    }
}

#[derive(Debug, Serialize)]
pub struct CompletionRequestBody {
    pub model: String,
    pub messages: Vec<ChatTurn>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Deserialize)]
struct Resp {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MsgOut,
}

#[derive(Deserialize)]
struct MsgOut {
    content: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    settings: CompletionSection,
    api_key: String,
}

impl CompletionClient {
    pub fn new(settings: CompletionSection, api_key: Option<String>) -> Result<Self, CompletionError> {
        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or(CompletionError::MissingKey)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs.max(1)))
            .build()?;
        Ok(Self {
            http,
            settings,
            api_key,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.settings.base_url.trim_end_matches('/'))
    }

    /// System prompt, then the recent turns, then the new utterance.
    pub fn request_body(&self, history: &[ChatTurn], utterance: &str) -> CompletionRequestBody {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatTurn {
            role: Speaker::System,
            content: self.settings.system_prompt.clone(),
        });
        messages.extend(history.iter().cloned());
        messages.push(ChatTurn::user(utterance));

        CompletionRequestBody {
            model: self.settings.model.clone(),
            messages,
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        }
    }

    pub async fn complete(&self, history: &[ChatTurn], utterance: &str) -> Result<String, CompletionError> {
        let body = self.request_body(history, utterance);
        tracing::debug!(model = %body.model, turns = body.messages.len(), "completion request");

        let resp = self
            .http
            .post(self.endpoint())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            tracing::warn!(%status, "completion service error");
            return Err(CompletionError::from_status(status, txt));
        }

        let out: Resp = resp.json().await?;
        let content = out
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(CompletionError::EmptyResponse)?;
        Ok(content)
    }
}

/// A client when an API key is stored; `None` disables delegation.
pub fn configured_client(settings: &CompletionSection) -> Option<CompletionClient> {
    let key = crate::auth::configured_key()?;
    match CompletionClient::new(settings.clone(), Some(key)) {
        Ok(c) => Some(c),
        Err(e) => {
            tracing::warn!(error = %e, "completion client unavailable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CompletionClient {
        let settings = CompletionSection {
            base_url: "https://example.test/".to_string(),
            ..CompletionSection::default()
        };
        CompletionClient::new(settings, Some("sk-test".to_string())).unwrap()
    }

    #[test]
    fn test_missing_key_is_rejected_up_front() {
        let err = CompletionClient::new(CompletionSection::default(), None).unwrap_err();
        assert!(matches!(err, CompletionError::MissingKey));
        assert!(CompletionClient::new(CompletionSection::default(), Some("  ".into())).is_err());
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        assert_eq!(client().endpoint(), "https://example.test/v1/chat/completions");
    }

    #[test]
    fn test_request_body_orders_system_history_user() {
        let history = vec![ChatTurn::user("hi"), ChatTurn::assistant("hello")];
        let body = client().request_body(&history, "is ibuprofen safe?");
        let roles: Vec<Speaker> = body.messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![Speaker::System, Speaker::User, Speaker::Assistant, Speaker::User]
        );
        assert_eq!(body.messages[3].content, "is ibuprofen safe?");
        assert_eq!(body.max_tokens, 200);

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "system");
    }

    #[test]
    fn test_status_mapping_and_messages() {
        let e = CompletionError::from_status(StatusCode::UNAUTHORIZED, String::new());
        assert!(e.user_message().starts_with("⚠️ AI Connection failed. Invalid API Key."));

        let e = CompletionError::from_status(StatusCode::TOO_MANY_REQUESTS, String::new());
        assert!(e.user_message().contains("Rate limit exceeded"));

        let e = CompletionError::from_status(StatusCode::BAD_GATEWAY, "upstream".to_string());
        assert!(matches!(e, CompletionError::Status { status: 502, .. }));
        assert!(e.user_message().contains("Please check your API Key"));

        assert!(CompletionError::MissingKey.user_message().contains("No API key configured"));
    }
}
