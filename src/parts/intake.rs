//! Intake failure behavior: a clogged intake stops feeding air.

use serde::{Deserialize, Serialize};

use crate::engine::signals::PartSignals;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intake {
    open: bool,
    clogged: bool,
}

impl Default for Intake {
    fn default() -> Self {
        Self {
            open: true,
            clogged: false,
        }
    }
}

impl Intake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_clogged(&self) -> bool {
        self.clogged
    }

    /// An intake works while airborne in an atmosphere with its
    /// cover open
    pub fn is_active(&self, signals: &PartSignals) -> bool {
        !signals.landed_or_splashed && signals.atm_density > 0.0 && self.open
    }

    pub fn apply_failure_effects(&mut self) {
        self.clogged = true;
    }

    pub fn clear_failure_effects(&mut self) {
        self.clogged = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_only_airborne_in_atmosphere() {
        let intake = Intake::new();
        let airborne = PartSignals {
            atm_density: 0.5,
            ..PartSignals::default()
        };
        assert!(intake.is_active(&airborne));

        assert!(!intake.is_active(&PartSignals {
            landed_or_splashed: true,
            ..airborne.clone()
        }));
        assert!(!intake.is_active(&PartSignals::default()));
    }

    #[test]
    fn test_clog_and_clear() {
        let mut intake = Intake::new();
        intake.apply_failure_effects();
        assert!(intake.is_clogged());
        intake.clear_failure_effects();
        assert!(!intake.is_clogged());
    }
}
