//! Completed symptom checks, appended under `symptom-checks`.

use anyhow::Result;

use medibot_core::checks::{CheckLog, CheckRecord};

use crate::list_store::ListStore;

pub const CHECKS_KEY: &str = "symptom-checks";

#[derive(Debug, Clone)]
pub struct CheckHistory {
    store: ListStore,
}

impl CheckHistory {
    pub fn new(store: ListStore) -> Self {
        Self { store }
    }

    /// Oldest first.
    pub fn all(&self) -> Result<Vec<CheckRecord>> {
        self.store.load(CHECKS_KEY)
    }

    pub fn recent(&self, limit: usize) -> Result<Vec<CheckRecord>> {
        let mut all = self.all()?;
        let start = all.len().saturating_sub(limit);
        Ok(all.split_off(start))
    }
}

impl CheckLog for CheckHistory {
    fn record(&mut self, check: &CheckRecord) -> Result<()> {
        let n = self.store.append(CHECKS_KEY, check.clone())?;
        tracing::debug!(symptom = %check.symptom, stored = n, "symptom check recorded");
        Ok(())
    }
}
