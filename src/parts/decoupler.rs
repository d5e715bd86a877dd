//! Decoupler failure behavior
//!
//! A failed decoupler keeps its charge but loses all ejection force,
//! which is exactly the kind of failure nobody notices until staging.

use serde::{Deserialize, Serialize};

use crate::engine::signals::PartSignals;
use crate::persist::tree::StateTree;

const ORIGINAL_FORCE_KEY: &str = "OriginalEjectionForce";

/// Sentinel meaning "no force has been stashed"
const UNSET: f64 = -1.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decoupler {
    ejection_force_percent: f64,
    original_percent: f64,
}

impl Decoupler {
    pub fn new(ejection_force_percent: f64) -> Self {
        Self {
            ejection_force_percent,
            original_percent: UNSET,
        }
    }

    pub fn ejection_force_percent(&self) -> f64 {
        self.ejection_force_percent
    }

    /// Armed whenever the pilot has not locked staging
    pub fn is_active(&self, signals: &PartSignals) -> bool {
        !signals.staging_locked
    }

    pub fn apply_failure_effects(&mut self) {
        if self.original_percent < 0.0 {
            self.original_percent = self.ejection_force_percent;
        }
        self.ejection_force_percent = 0.0;
    }

    pub fn clear_failure_effects(&mut self) {
        if self.original_percent >= 0.0 {
            self.ejection_force_percent = self.original_percent;
            self.original_percent = UNSET;
        }
    }

    pub fn save_extras(&self, tree: &mut StateTree) {
        tree.set_f64(ORIGINAL_FORCE_KEY, self.original_percent);
    }

    pub fn load_extras(&mut self, tree: &StateTree) {
        self.original_percent = tree.get_f64(ORIGINAL_FORCE_KEY, UNSET);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_zeroes_ejection_force() {
        let mut decoupler = Decoupler::new(100.0);
        decoupler.apply_failure_effects();
        assert_eq!(decoupler.ejection_force_percent(), 0.0);
        decoupler.clear_failure_effects();
        assert_eq!(decoupler.ejection_force_percent(), 100.0);
    }

    #[test]
    fn test_reapplied_failure_keeps_the_original_force() {
        let mut decoupler = Decoupler::new(75.0);
        decoupler.apply_failure_effects();
        // Load-time re-application must not stash the zeroed value
        decoupler.apply_failure_effects();
        decoupler.clear_failure_effects();
        assert_eq!(decoupler.ejection_force_percent(), 75.0);
    }

    #[test]
    fn test_extras_survive_a_save_load() {
        let mut decoupler = Decoupler::new(80.0);
        decoupler.apply_failure_effects();

        let mut tree = StateTree::new();
        decoupler.save_extras(&mut tree);

        let mut restored = Decoupler::new(0.0);
        restored.apply_failure_effects();
        restored.load_extras(&tree);
        restored.clear_failure_effects();
        assert_eq!(restored.ejection_force_percent(), 80.0);
    }
}
