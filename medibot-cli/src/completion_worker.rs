use std::sync::Arc;

use tokio::sync::mpsc;

use medibot_core::ChatTurn;

use crate::completion::{CompletionClient, CompletionError};

#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub request_id: u64,
    pub utterance: String,
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompletionEvent {
    Started { request_id: u64 },
    Completed { request_id: u64, text: String },
    Failed { request_id: u64, message: String },
}

/// Answers requests until the sender side is dropped. Requests run
/// concurrently; each yields `Started` then `Completed` or `Failed`.
pub async fn run_worker(
    client: Option<Arc<CompletionClient>>,
    mut rx: mpsc::UnboundedReceiver<CompletionRequest>,
    tx: std::sync::mpsc::Sender<CompletionEvent>,
) {
    let mut in_flight: Vec<tokio::task::JoinHandle<()>> = Vec::new();

    while let Some(req) = rx.recv().await {
        in_flight.retain(|h| !h.is_finished());

        let tx2 = tx.clone();
        let client = client.clone();
        in_flight.push(tokio::spawn(async move {
            let _ = tx2.send(CompletionEvent::Started {
                request_id: req.request_id,
            });

            let result = match client {
                Some(c) => c.complete(&req.history, &req.utterance).await,
                None => Err(CompletionError::MissingKey),
            };

            let event = match result {
                Ok(text) => CompletionEvent::Completed {
                    request_id: req.request_id,
                    text,
                },
                Err(e) => {
                    tracing::warn!(request_id = req.request_id, error = %e, "completion failed");
                    CompletionEvent::Failed {
                        request_id: req.request_id,
                        message: e.user_message(),
                    }
                }
            };
            let _ = tx2.send(event);
        }));
    }

    for h in in_flight {
        h.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_client_reports_failure() {
        let (req_tx, req_rx) = mpsc::unbounded_channel();
        let (ev_tx, ev_rx) = std::sync::mpsc::channel();
        let worker = tokio::spawn(run_worker(None, req_rx, ev_tx));

        req_tx
            .send(CompletionRequest {
                request_id: 7,
                utterance: "what is a fever".to_string(),
                history: Vec::new(),
            })
            .unwrap();

        let first = tokio::task::spawn_blocking(move || {
            let a = ev_rx.recv().unwrap();
            let b = ev_rx.recv().unwrap();
            (a, b)
        })
        .await
        .unwrap();

        assert_eq!(first.0, CompletionEvent::Started { request_id: 7 });
        match first.1 {
            CompletionEvent::Failed { request_id, message } => {
                assert_eq!(request_id, 7);
                assert!(message.contains("No API key configured"));
            }
            other => panic!("unexpected event {other:?}"),
        }

        drop(req_tx);
        worker.await.unwrap();
    }
}
