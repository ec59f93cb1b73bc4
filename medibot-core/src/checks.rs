//! Completed symptom checks and where they get recorded.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::recommendation::Recommendation;
use crate::symptom::SymptomKey;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckRecord {
    pub timestamp: DateTime<Utc>,
    pub symptom: SymptomKey,
    pub answers: Vec<String>,
    pub urgent: bool,
    /// Product names offered in the recommendation.
    #[serde(default)]
    pub medicines: Vec<String>,
}

impl CheckRecord {
    pub fn new(recommendation: &Recommendation, answers: Vec<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            symptom: recommendation.symptom,
            answers,
            urgent: recommendation.urgent,
            medicines: recommendation.medicines.iter().map(|m| m.name.clone()).collect(),
        }
    }
}

pub trait CheckLog {
    fn record(&mut self, check: &CheckRecord) -> Result<()>;
}

/// Keeps nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLog;

impl CheckLog for NoopLog {
    fn record(&mut self, _check: &CheckRecord) -> Result<()> {
        Ok(())
    }
}

/// In-memory log, handy when nothing should touch disk.
impl CheckLog for Vec<CheckRecord> {
    fn record(&mut self, check: &CheckRecord) -> Result<()> {
        self.push(check.clone());
        Ok(())
    }
}
