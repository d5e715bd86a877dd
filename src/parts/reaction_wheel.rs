//! Reaction wheel failure behavior: a failed wheel stops producing
//! torque and reads as broken to the host.

use serde::{Deserialize, Serialize};

/// Operating state of the torque module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelSpin {
    Active,
    Broken,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionWheel {
    enabled: bool,
    spin: WheelSpin,
}

impl Default for ReactionWheel {
    fn default() -> Self {
        Self {
            enabled: true,
            spin: WheelSpin::Active,
        }
    }
}

impl ReactionWheel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spin(&self) -> WheelSpin {
        self.spin
    }

    /// A reaction wheel is always spinning unless the operator has
    /// switched it off, so it wears even when producing no torque
    pub fn is_active(&self) -> bool {
        self.enabled && self.spin == WheelSpin::Active
    }

    pub fn apply_failure_effects(&mut self) {
        self.enabled = false;
        self.spin = WheelSpin::Broken;
    }

    pub fn clear_failure_effects(&mut self) {
        self.enabled = true;
        self.spin = WheelSpin::Active;
    }
}
