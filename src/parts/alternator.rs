//! Alternator failure behavior: a failed alternator stops charging.

use serde::{Deserialize, Serialize};

use crate::engine::signals::PartSignals;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alternator {
    enabled: bool,
}

impl Default for Alternator {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Alternator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Alternators turn with the engine
    pub fn is_active(&self, signals: &PartSignals) -> bool {
        signals.engine_ignited
    }

    pub fn apply_failure_effects(&mut self) {
        self.enabled = false;
    }

    pub fn clear_failure_effects(&mut self) {
        self.enabled = true;
    }
}
