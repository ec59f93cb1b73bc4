//! Many independent conversations keyed by id.

use std::collections::HashMap;
use std::fmt;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalogue::Catalogue;
use crate::flow::{DEFAULT_HISTORY_WINDOW, Session, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

pub struct SessionRegistry {
    catalogue: &'static Catalogue,
    history_window: usize,
    sessions: HashMap<SessionId, Session>,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(Catalogue::standard(), DEFAULT_HISTORY_WINDOW)
    }
}

impl SessionRegistry {
    pub fn new(catalogue: &'static Catalogue, history_window: usize) -> Self {
        Self {
            catalogue,
            history_window,
            sessions: HashMap::new(),
        }
    }

    pub fn open(&mut self) -> SessionId {
        let id = SessionId::new();
        self.sessions.insert(id, Session::new(self.history_window));
        tracing::debug!(session = %id, open = self.sessions.len(), "session opened");
        id
    }

    pub fn get(&self, id: SessionId) -> Option<&Session> {
        self.sessions.get(&id)
    }

    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut Session> {
        self.sessions.get_mut(&id)
    }

    pub fn handle(&mut self, id: SessionId, utterance: &str) -> Result<Step> {
        let catalogue = self.catalogue;
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or_else(|| anyhow!("unknown session {id}"))?;
        Ok(session.handle(catalogue, utterance))
    }

    pub fn close(&mut self, id: SessionId) -> Option<Session> {
        let closed = self.sessions.remove(&id);
        if closed.is_some() {
            tracing::debug!(session = %id, "session closed");
        }
        closed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symptom::SymptomKey;

    #[test]
    fn test_sessions_are_independent() {
        let mut reg = SessionRegistry::default();
        let a = reg.open();
        let b = reg.open();
        assert_ne!(a, b);

        reg.handle(a, "headache").unwrap();
        reg.handle(b, "my throat hurts, sore throat").unwrap();
        reg.handle(a, "two hours").unwrap();

        let sa = reg.get(a).unwrap();
        let sb = reg.get(b).unwrap();
        assert_eq!(sa.current_symptom(), Some(SymptomKey::Headache));
        assert_eq!(sa.current_question_index(), 1);
        assert_eq!(sb.current_symptom(), Some(SymptomKey::SoreThroat));
        assert_eq!(sb.current_question_index(), 0);
    }

    #[test]
    fn test_closed_session_is_unknown() {
        let mut reg = SessionRegistry::default();
        let id = reg.open();
        assert!(reg.close(id).is_some());
        assert!(reg.is_empty());
        let err = reg.handle(id, "fever").unwrap_err();
        assert!(err.to_string().contains("unknown session"));
    }
}
