//! One-shot symptom check on stdin/stdout, for scripts and terminals
//! without the TUI.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use medibot_core::{Assistant, CartSink, CheckLog, Message, Reply};
use medibot_store::{CheckHistory, LocalCart};

use crate::completion::{self, CompletionClient};
use crate::config::Config;
use crate::state;

pub async fn run_ask(cfg: &Config, text: &str) -> Result<()> {
    let store = state::open_store()?;
    let client = completion::configured_client(&cfg.completion);
    let mut assistant = Assistant::new(LocalCart::new(store.clone()), CheckHistory::new(store))
        .with_history_window(cfg.chat.max_turns_context)
        .with_delegation(client.is_some());

    let stdin = io::stdin();
    let mut out = io::stdout();
    converse(&mut assistant, client.as_ref(), text, stdin.lock(), &mut out).await
}

/// Answer `text`, then keep reading answers from `input` while a check is running.
async fn converse<C, L, R, W>(
    assistant: &mut Assistant<C, L>,
    client: Option<&CompletionClient>,
    text: &str,
    mut input: R,
    out: &mut W,
) -> Result<()>
where
    C: CartSink,
    L: CheckLog,
    R: BufRead,
    W: Write,
{
    let mut replies = assistant.respond(text);
    loop {
        for reply in replies {
            match reply {
                Reply::Bot(s) | Reply::Help(s) => writeln!(out, "{s}\n")?,
                Reply::Recommendation(r) => writeln!(out, "{}\n", r.render())?,
                Reply::Disclaimer(d) => writeln!(out, "{d}")?,
                Reply::Delegate { utterance, history } => {
                    let message = match client {
                        Some(c) => match c.complete(&history, &utterance).await {
                            Ok(text) => Message::bot(text),
                            Err(e) => Message::error(e.user_message()),
                        },
                        None => Message::error(completion::CompletionError::MissingKey.user_message()),
                    };
                    writeln!(out, "{}", message.content)?;
                    assistant.record_reply(message);
                }
            }
        }

        if !assistant.session().is_diagnosing() {
            break;
        }

        write!(out, "> ")?;
        out.flush()?;
        let mut line = String::new();
        let n = input.read_line(&mut line).context("read answer")?;
        if n == 0 {
            writeln!(out, "\n{}", assistant.reset())?;
            break;
        }
        replies = assistant.respond(&line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn run(text: &str, answers: &str) -> (String, Assistant) {
        let mut assistant: Assistant = Assistant::default();
        let mut out = Vec::new();
        converse(&mut assistant, None, text, answers.as_bytes(), &mut out)
            .await
            .unwrap();
        (String::from_utf8(out).unwrap(), assistant)
    }

    #[tokio::test]
    async fn test_full_check_from_piped_answers() {
        let answers = "one side\n1 day\n6\nno\nno\nno\nno\nno\nno\nno\n";
        let (out, assistant) = run("I have a headache", answers).await;
        assert!(out.contains("Q1: "));
        assert!(out.contains("Q10: "));
        assert!(out.contains("📋 "));
        assert!(out.contains(medibot_core::transcript::DISCLAIMER));
        assert!(!assistant.session().is_diagnosing());
        assert!(assistant.last_recommendation().is_some());
    }

    #[tokio::test]
    async fn test_eof_mid_check_resets() {
        let (out, assistant) = run("fever", "2 days\n").await;
        assert!(out.contains("Q2: "));
        assert!(out.contains("I stopped the fever check"));
        assert!(!assistant.session().is_diagnosing());
    }

    #[tokio::test]
    async fn test_unknown_text_prints_help_without_key() {
        let (out, _) = run("what's the weather", "").await;
        assert!(out.contains("I can help with specific symptoms like"));
    }
}
