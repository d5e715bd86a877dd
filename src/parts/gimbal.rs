//! Gimbal failure behavior: a failed gimbal locks in place.

use serde::{Deserialize, Serialize};

use crate::engine::signals::PartSignals;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gimbal {
    enabled: bool,
    locked: bool,
}

impl Default for Gimbal {
    fn default() -> Self {
        Self {
            enabled: true,
            locked: false,
        }
    }
}

impl Gimbal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Gimbals only work while their engine is burning
    pub fn is_active(&self, signals: &PartSignals) -> bool {
        signals.engine_ignited
    }

    pub fn apply_failure_effects(&mut self) {
        self.enabled = false;
        self.locked = true;
    }

    pub fn clear_failure_effects(&mut self) {
        self.enabled = true;
        self.locked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_locks_the_gimbal() {
        let mut gimbal = Gimbal::new();
        assert!(!gimbal.is_locked());
        gimbal.apply_failure_effects();
        assert!(gimbal.is_locked());
        gimbal.clear_failure_effects();
        assert!(!gimbal.is_locked());
    }
}
