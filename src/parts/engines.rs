//! Engine failure behavior
//!
//! A failed engine is shut down and its ignition locked out until it
//! is repaired. Engines are designed to run near full throttle, so the
//! hazard multiplier penalizes deep throttling as well as redlining.

use serde::{Deserialize, Serialize};

use crate::engine::signals::PartSignals;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineUnit {
    ignition_locked: bool,
}

impl EngineUnit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the failure effect currently blocks ignition
    pub fn ignition_locked(&self) -> bool {
        self.ignition_locked
    }

    pub fn is_active(&self, signals: &PartSignals) -> bool {
        signals.engine_ignited && !self.ignition_locked
    }

    /// Parabola in throttle with its minimum at 50%
    ///
    /// `2x^2 - 2x + 1.25` reads 1.25 at idle and full throttle and
    /// 0.75 at the mid-throttle sweet spot.
    pub fn hazard_multiplier(&self, signals: &PartSignals) -> f64 {
        let x = signals.throttle.clamp(0.0, 1.0);
        2.0 * x * x - 2.0 * x + 1.25
    }

    pub fn apply_failure_effects(&mut self) {
        self.ignition_locked = true;
    }

    pub fn clear_failure_effects(&mut self) {
        self.ignition_locked = false;
    }
}
