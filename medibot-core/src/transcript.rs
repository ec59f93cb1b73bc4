//! Conversation entries and the fixed bot texts.

use serde::{Deserialize, Serialize};

use crate::symptom::SymptomKey;

pub const GREETING: &str = "Hello! I'm MediBot. Tell me what's bothering you (for example \"I have a headache\") and I'll ask a few questions to suggest over-the-counter relief.";

pub const DISCLAIMER: &str = "Disclaimer: I am an AI, not a doctor. These are OTC recommendations. If symptoms persist or worsen, please visit a hospital immediately.";

pub const NO_KEY_TIP: &str = "💡 Tip: run `medibot auth paste-openai-api-key` to enable AI answers for general questions. You can still use the symptom checker without it!";

pub const ANALYZING: &str = "💊 MediBot is analyzing your answers...";

pub const THINKING: &str = "🤔 AI is thinking...";

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
    /// Error-styled bot entry (failed completion call and the like).
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            role: Role::Error,
            content: content.into(),
        }
    }
}

/// Speaker in a chat-completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    System,
    User,
    Assistant,
}

/// One turn handed to the completion service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Speaker,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Speaker::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Speaker::Assistant,
            content: content.into(),
        }
    }
}

/// Last `window` user/bot messages as completion turns. Error entries are skipped.
pub fn recent_turns(messages: &[Message], window: usize) -> Vec<ChatTurn> {
    let turns: Vec<ChatTurn> = messages
        .iter()
        .filter_map(|m| match m.role {
            Role::User => Some(ChatTurn::user(m.content.clone())),
            Role::Bot => Some(ChatTurn::assistant(m.content.clone())),
            Role::Error => None,
        })
        .collect();
    let start = turns.len().saturating_sub(window);
    turns[start..].to_vec()
}

pub fn intro(symptom: SymptomKey) -> String {
    format!("I see you have a {symptom}. Let me ask you a few questions to suggest the best medicine.")
}

/// "Q3: On a scale of 1-10, ..." for the zero-based `index`.
pub fn question_prompt(index: usize, question: &str) -> String {
    format!("Q{}: {}", index + 1, question)
}

pub fn help_message() -> String {
    let mut out = String::from("I can help with specific symptoms like:\n\n");
    for row in SymptomKey::ALL.chunks(3) {
        let labels: Vec<String> = row.iter().map(|k| format!("• {}", k.label())).collect();
        out.push_str(&labels.join(" "));
        out.push('\n');
    }
    out.push_str(
        "\nPlease type one of these symptoms to start a detailed check-up, or configure your API key for general questions.",
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_prompt_is_one_based() {
        assert_eq!(question_prompt(0, "How long?"), "Q1: How long?");
        assert_eq!(question_prompt(9, "Last?"), "Q10: Last?");
    }

    #[test]
    fn test_help_lists_every_label() {
        let help = help_message();
        for key in SymptomKey::ALL {
            assert!(help.contains(key.label()), "{key}");
        }
        assert!(help.ends_with("configure your API key for general questions."));
    }

    #[test]
    fn test_recent_turns_keeps_tail_and_skips_errors() {
        let msgs = vec![
            Message::user("a"),
            Message::bot("b"),
            Message::error("boom"),
            Message::user("c"),
            Message::bot("d"),
        ];
        let turns = recent_turns(&msgs, 3);
        assert_eq!(
            turns,
            vec![ChatTurn::assistant("b"), ChatTurn::user("c"), ChatTurn::assistant("d")]
        );
        assert!(recent_turns(&msgs, 0).is_empty());
    }

    #[test]
    fn test_speaker_serializes_lowercase() {
        let json = serde_json::to_string(&ChatTurn::assistant("hi")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"hi"}"#);
    }
}
