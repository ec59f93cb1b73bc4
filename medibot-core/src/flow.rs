//! Diagnostic flow controller: one linear question walk per session.
//!
//! `Idle -> Asking(symptom, 0) -> ... -> Asking(symptom, len) -> Idle`.
//! While a walk is in progress every utterance is taken as the answer to the
//! current question; nothing mid-walk is re-classified.

use crate::catalogue::Catalogue;
use crate::classifier;
use crate::recommendation::Recommendation;
use crate::symptom::SymptomKey;
use crate::transcript::{self, ChatTurn, Message};

pub const DEFAULT_HISTORY_WINDOW: usize = 5;

/// Kept message count; older entries are dropped.
const HISTORY_CAP: usize = 64;

/// What the controller did with one utterance.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// A walk began; show the intro then the first question.
    Started {
        symptom: SymptomKey,
        intro: String,
        question: String,
    },
    /// Answer stored; show the next question.
    Question { index: usize, question: String },
    /// Last answer stored and analyzed; the session is idle again.
    Completed {
        recommendation: Recommendation,
        answers: Vec<String>,
        disclaimer: &'static str,
    },
    /// No symptom recognized; the caller decides between help text and delegation.
    Unrecognized {
        utterance: String,
        history: Vec<ChatTurn>,
    },
}

#[derive(Debug, Clone)]
struct Walk {
    symptom: SymptomKey,
    answers: Vec<String>,
}

/// Conversation state for one chat.
#[derive(Debug, Clone)]
pub struct Session {
    walk: Option<Walk>,
    history: Vec<Message>,
    history_window: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_WINDOW)
    }
}

impl Session {
    /// `history_window` is how many recent turns accompany a delegated utterance.
    pub fn new(history_window: usize) -> Self {
        Self {
            walk: None,
            history: Vec::new(),
            history_window,
        }
    }

    pub fn is_diagnosing(&self) -> bool {
        self.walk.is_some()
    }

    pub fn current_symptom(&self) -> Option<SymptomKey> {
        self.walk.as_ref().map(|w| w.symptom)
    }

    /// Equals `answers().len()` during a walk, 0 when idle.
    pub fn current_question_index(&self) -> usize {
        self.answers().len()
    }

    pub fn answers(&self) -> &[String] {
        self.walk.as_ref().map(|w| w.answers.as_slice()).unwrap_or(&[])
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Feed one user utterance through the state machine.
    pub fn handle(&mut self, catalogue: &Catalogue, utterance: &str) -> Step {
        let prior = transcript::recent_turns(&self.history, self.history_window);
        self.remember(Message::user(utterance));

        let step = match self.walk.take() {
            Some(walk) => self.answer(catalogue, walk, utterance),
            None => match classifier::classify_with(catalogue, utterance) {
                Some(symptom) => self.start(catalogue, symptom),
                None => Step::Unrecognized {
                    utterance: utterance.to_string(),
                    history: prior,
                },
            },
        };

        match &step {
            Step::Started { intro, question, .. } => {
                self.remember(Message::bot(intro.clone()));
                self.remember(Message::bot(question.clone()));
            }
            Step::Question { question, .. } => self.remember(Message::bot(question.clone())),
            Step::Completed { recommendation, .. } => {
                self.remember(Message::bot(recommendation.render()))
            }
            Step::Unrecognized { .. } => {}
        }
        step
    }

    /// Record a reply produced outside the flow (help text, completion answer).
    pub fn record_reply(&mut self, message: Message) {
        self.remember(message);
    }

    /// Abandon any walk in progress. Returns the symptom that was being checked.
    pub fn reset(&mut self) -> Option<SymptomKey> {
        let dropped = self.walk.take().map(|w| w.symptom);
        if let Some(symptom) = dropped {
            tracing::debug!(%symptom, "walk abandoned");
        }
        dropped
    }

    fn start(&mut self, catalogue: &Catalogue, symptom: SymptomKey) -> Step {
        let protocol = catalogue.protocol(symptom);
        tracing::debug!(%symptom, questions = protocol.questions.len(), "walk started");
        self.walk = Some(Walk {
            symptom,
            answers: Vec::with_capacity(protocol.questions.len()),
        });
        Step::Started {
            symptom,
            intro: transcript::intro(symptom),
            question: transcript::question_prompt(0, protocol.questions[0]),
        }
    }

    fn answer(&mut self, catalogue: &Catalogue, mut walk: Walk, utterance: &str) -> Step {
        let protocol = catalogue.protocol(walk.symptom);
        walk.answers.push(utterance.to_string());
        let index = walk.answers.len();

        match protocol.question(index) {
            Some(q) => {
                tracing::debug!(symptom = %walk.symptom, index, "answer stored");
                self.walk = Some(walk);
                Step::Question {
                    index,
                    question: transcript::question_prompt(index, q),
                }
            }
            None => {
                let recommendation = protocol.analyze(&walk.answers);
                tracing::info!(
                    symptom = %walk.symptom,
                    urgent = recommendation.urgent,
                    "walk completed"
                );
                Step::Completed {
                    recommendation,
                    answers: walk.answers,
                    disclaimer: transcript::DISCLAIMER,
                }
            }
        }
    }

    fn remember(&mut self, message: Message) {
        self.history.push(message);
        if self.history.len() > HISTORY_CAP {
            let excess = self.history.len() - HISTORY_CAP;
            self.history.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat() -> &'static Catalogue {
        Catalogue::standard()
    }

    #[test]
    fn test_idle_session() {
        let s = Session::default();
        assert!(!s.is_diagnosing());
        assert_eq!(s.current_symptom(), None);
        assert_eq!(s.current_question_index(), 0);
    }

    #[test]
    fn test_start_emits_intro_and_first_question() {
        let mut s = Session::default();
        match s.handle(cat(), "I have a fever") {
            Step::Started {
                symptom,
                intro,
                question,
            } => {
                assert_eq!(symptom, SymptomKey::Fever);
                assert!(intro.starts_with("I see you have a fever."));
                assert!(question.starts_with("Q1: "));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(s.is_diagnosing());
        assert_eq!(s.current_question_index(), 0);
    }

    #[test]
    fn test_mid_walk_symptom_text_is_an_answer() {
        let mut s = Session::default();
        s.handle(cat(), "headache");
        let step = s.handle(cat(), "actually I also have a cough");
        assert!(matches!(step, Step::Question { index: 1, .. }));
        assert_eq!(s.current_symptom(), Some(SymptomKey::Headache));
        assert_eq!(s.answers(), ["actually I also have a cough"]);
    }

    #[test]
    fn test_unrecognized_carries_recent_history() {
        let mut s = Session::new(2);
        s.record_reply(Message::bot("earlier"));
        s.record_reply(Message::bot("latest"));
        match s.handle(cat(), "what time do you open?") {
            Step::Unrecognized { utterance, history } => {
                assert_eq!(utterance, "what time do you open?");
                assert_eq!(history, vec![ChatTurn::assistant("earlier"), ChatTurn::assistant("latest")]);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(!s.is_diagnosing());
    }

    #[test]
    fn test_reset_drops_walk() {
        let mut s = Session::default();
        s.handle(cat(), "cough");
        s.handle(cat(), "3 days");
        assert_eq!(s.reset(), Some(SymptomKey::Cough));
        assert!(!s.is_diagnosing());
        assert!(s.answers().is_empty());
        assert_eq!(s.reset(), None);
    }

    #[test]
    fn test_history_is_capped() {
        let mut s = Session::default();
        for i in 0..(HISTORY_CAP + 10) {
            s.record_reply(Message::bot(format!("m{i}")));
        }
        assert_eq!(s.history().len(), HISTORY_CAP);
        assert_eq!(s.history()[0].content, "m10");
    }
}
