//! Coolant line failure behavior
//!
//! A leaking line triples the heat output of the engine it serves,
//! letting the thermal hazard term finish the job if the operator
//! ignores it for long enough.

use serde::{Deserialize, Serialize};

use crate::engine::signals::PartSignals;

const FAILED_HEAT_SCALE: f64 = 3.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoolantLine {
    heat_scale: f64,
}

impl Default for CoolantLine {
    fn default() -> Self {
        Self { heat_scale: 1.0 }
    }
}

impl CoolantLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Multiplier the host applies to the engine's heat production
    pub fn heat_scale(&self) -> f64 {
        self.heat_scale
    }

    pub fn is_active(&self, signals: &PartSignals) -> bool {
        signals.engine_ignited
    }

    pub fn apply_failure_effects(&mut self) {
        // Guarded so a load-time re-application cannot compound
        if self.heat_scale == 1.0 {
            self.heat_scale = FAILED_HEAT_SCALE;
        }
    }

    pub fn clear_failure_effects(&mut self) {
        self.heat_scale = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leak_triples_heat_output() {
        let mut line = CoolantLine::new();
        line.apply_failure_effects();
        assert_eq!(line.heat_scale(), 3.0);
        line.clear_failure_effects();
        assert_eq!(line.heat_scale(), 1.0);
    }

    #[test]
    fn test_reapplied_leak_does_not_compound() {
        let mut line = CoolantLine::new();
        line.apply_failure_effects();
        line.apply_failure_effects();
        assert_eq!(line.heat_scale(), 3.0);
    }
}
