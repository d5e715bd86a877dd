//! RCS thruster failure behavior: a failed block stops responding.

use serde::{Deserialize, Serialize};

use crate::engine::signals::PartSignals;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RcsThruster {
    enabled: bool,
}

impl Default for RcsThruster {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl RcsThruster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// A thruster block is in use whenever any of its nozzles fires
    pub fn is_active(&self, signals: &PartSignals) -> bool {
        self.enabled && signals.rcs_firing
    }

    pub fn apply_failure_effects(&mut self) {
        self.enabled = false;
    }

    pub fn clear_failure_effects(&mut self) {
        self.enabled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_thruster_does_not_wear() {
        let rcs = RcsThruster::new();
        assert!(!rcs.is_active(&PartSignals::default()));
        assert!(rcs.is_active(&PartSignals {
            rcs_firing: true,
            ..PartSignals::default()
        }));
    }

    #[test]
    fn test_failure_disables_the_block() {
        let mut rcs = RcsThruster::new();
        rcs.apply_failure_effects();
        assert!(!rcs.is_enabled());
        rcs.clear_failure_effects();
        assert!(rcs.is_enabled());
    }
}
