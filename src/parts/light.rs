//! Light failure behavior: a burned-out bulb goes dark and stays dark
//! until replaced, ignoring the master light switch.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Light {
    is_on: bool,
    functional: bool,
}

impl Light {
    pub fn new(is_on: bool) -> Self {
        Self {
            is_on,
            functional: true,
        }
    }

    pub fn is_on(&self) -> bool {
        self.is_on && self.functional
    }

    /// Host-side switch; a dead bulb ignores it
    pub fn set_on(&mut self, on: bool) {
        if self.functional {
            self.is_on = on;
        }
    }

    /// Bulbs only wear while lit
    pub fn is_active(&self) -> bool {
        self.is_on()
    }

    pub fn apply_failure_effects(&mut self) {
        self.is_on = false;
        self.functional = false;
    }

    pub fn clear_failure_effects(&mut self) {
        self.functional = true;
    }
}
