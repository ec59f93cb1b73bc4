//! A session wired to its collaborators: cart, check log, and the choice
//! between help text and delegating to a completion service.

use anyhow::Result;

use crate::cart::{CartSink, NoopCart};
use crate::catalogue::Catalogue;
use crate::checks::{CheckLog, CheckRecord, NoopLog};
use crate::flow::{DEFAULT_HISTORY_WINDOW, Session, Step};
use crate::recommendation::Recommendation;
use crate::transcript::{self, ChatTurn, Message};

/// One transcript entry to show the user, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Bot(String),
    Recommendation(Recommendation),
    Disclaimer(&'static str),
    Help(String),
    /// Hand the utterance to the completion service; its answer comes back
    /// through [`Assistant::record_reply`].
    Delegate {
        utterance: String,
        history: Vec<ChatTurn>,
    },
}

pub struct Assistant<C = NoopCart, L = NoopLog> {
    catalogue: &'static Catalogue,
    session: Session,
    cart: C,
    checks: L,
    delegate: bool,
    last: Option<Recommendation>,
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new(NoopCart, NoopLog)
    }
}

impl<C: CartSink, L: CheckLog> Assistant<C, L> {
    pub fn new(cart: C, checks: L) -> Self {
        Self {
            catalogue: Catalogue::standard(),
            session: Session::new(DEFAULT_HISTORY_WINDOW),
            cart,
            checks,
            delegate: false,
            last: None,
        }
    }

    pub fn with_history_window(mut self, window: usize) -> Self {
        self.session = Session::new(window);
        self
    }

    /// Delegate unrecognized input instead of answering with help text.
    pub fn with_delegation(mut self, enabled: bool) -> Self {
        self.delegate = enabled;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn cart(&self) -> &C {
        &self.cart
    }

    pub fn checks(&self) -> &L {
        &self.checks
    }

    pub fn last_recommendation(&self) -> Option<&Recommendation> {
        self.last.as_ref()
    }

    pub fn respond(&mut self, utterance: &str) -> Vec<Reply> {
        let utterance = utterance.trim();
        if utterance.is_empty() {
            return Vec::new();
        }

        match self.session.handle(self.catalogue, utterance) {
            Step::Started { intro, question, .. } => vec![Reply::Bot(intro), Reply::Bot(question)],
            Step::Question { question, .. } => vec![Reply::Bot(question)],
            Step::Completed {
                recommendation,
                answers,
                disclaimer,
            } => {
                let check = CheckRecord::new(&recommendation, answers);
                if let Err(e) = self.checks.record(&check) {
                    tracing::warn!(error = %e, symptom = %check.symptom, "failed to record symptom check");
                }
                self.session.record_reply(Message::bot(disclaimer));
                self.last = Some(recommendation.clone());
                vec![Reply::Recommendation(recommendation), Reply::Disclaimer(disclaimer)]
            }
            Step::Unrecognized { utterance, history } => {
                if self.delegate {
                    vec![Reply::Delegate { utterance, history }]
                } else {
                    let help = transcript::help_message();
                    self.session.record_reply(Message::bot(help.clone()));
                    vec![Reply::Help(help)]
                }
            }
        }
    }

    /// Store an answer (or error) that arrived from outside the flow.
    pub fn record_reply(&mut self, message: Message) {
        self.session.record_reply(message);
    }

    /// Add medicine `number` (1-based, as rendered) of the last recommendation.
    pub fn add_to_cart(&mut self, number: usize) -> Result<String> {
        let Some(rec) = &self.last else {
            return Ok("There is no recommendation yet. Describe a symptom first.".to_string());
        };
        let Some(medicine) = rec.medicine(number) else {
            return Ok(format!(
                "No medicine [{number}] in the last recommendation ({} listed).",
                rec.medicines.len()
            ));
        };
        let outcome = self.cart.add(&medicine.cart_action())?;
        Ok(outcome.message())
    }

    pub fn reset(&mut self) -> String {
        match self.session.reset() {
            Some(symptom) => format!("Okay, I stopped the {symptom} check. Tell me another symptom any time."),
            None => "Nothing to reset.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{CartAction, CartAdd};

    #[derive(Default)]
    struct RecordingCart(Vec<CartAction>);

    impl CartSink for RecordingCart {
        fn add(&mut self, action: &CartAction) -> Result<CartAdd> {
            self.0.push(action.clone());
            Ok(CartAdd::Added {
                product_name: action.product_name.clone(),
            })
        }
    }

    fn walk(a: &mut Assistant<RecordingCart, Vec<CheckRecord>>, answers: &[&str]) -> Vec<Reply> {
        let mut last = Vec::new();
        for text in answers {
            last = a.respond(text);
        }
        last
    }

    #[test]
    fn test_unrecognized_without_key_shows_help() {
        let mut a: Assistant = Assistant::default();
        let replies = a.respond("hello there");
        assert!(matches!(&replies[..], [Reply::Help(h)] if h.contains("Sore Throat")));
    }

    #[test]
    fn test_unrecognized_with_key_delegates() {
        let mut a: Assistant = Assistant::default().with_delegation(true);
        let replies = a.respond("what is paracetamol?");
        assert!(matches!(&replies[..], [Reply::Delegate { utterance, .. }] if utterance == "what is paracetamol?"));
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut a: Assistant = Assistant::default();
        assert!(a.respond("   ").is_empty());
        assert!(a.session().history().is_empty());
    }

    #[test]
    fn test_completed_walk_records_check_and_enables_cart() {
        let mut a = Assistant::new(RecordingCart::default(), Vec::new());
        let mut inputs = vec!["I have a headache", "since morning", "one side", "6"];
        inputs.extend(["no"; 7]);
        let replies = walk(&mut a, &inputs);

        let [Reply::Recommendation(rec), Reply::Disclaimer(d)] = &replies[..] else {
            panic!("unexpected {replies:?}");
        };
        assert!(rec.fired("headache.migraine"));
        assert!(d.starts_with("Disclaimer:"));
        assert!(!a.session().is_diagnosing());

        assert_eq!(a.checks().len(), 1);
        assert_eq!(a.checks()[0].answers.len(), 10);

        let msg = a.add_to_cart(2).unwrap();
        assert!(msg.contains("Ibuprofen 400"));
        assert_eq!(a.cart().0[0].price, 80.0);
        assert!(a.add_to_cart(99).unwrap().starts_with("No medicine [99]"));
    }

    #[test]
    fn test_add_to_cart_before_any_check() {
        let mut a = Assistant::new(RecordingCart::default(), NoopLog);
        assert!(a.add_to_cart(1).unwrap().contains("no recommendation yet"));
        assert!(a.cart().0.is_empty());
    }

    #[test]
    fn test_reset_mid_walk() {
        let mut a: Assistant = Assistant::default();
        a.respond("dizzy");
        assert!(a.reset().contains("dizziness"));
        assert!(!a.session().is_diagnosing());
        assert_eq!(a.reset(), "Nothing to reset.");
    }
}
