//! Control surface failure behavior
//!
//! A failed surface jams: every control axis is ignored until it is
//! freed again. The pilot may already have told the surface to ignore
//! some axes, so those settings are remembered and restored on repair
//! instead of being clobbered.

use serde::{Deserialize, Serialize};

use crate::engine::signals::PartSignals;
use crate::persist::tree::StateTree;

const IGNORE_PITCH_KEY: &str = "IgnorePitch";
const IGNORE_ROLL_KEY: &str = "IgnoreRoll";
const IGNORE_YAW_KEY: &str = "IgnoreYaw";

/// The deflection module on the host part
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceModule {
    pub enabled: bool,
    pub ignore_pitch: bool,
    pub ignore_roll: bool,
    pub ignore_yaw: bool,
}

impl Default for SurfaceModule {
    fn default() -> Self {
        Self {
            enabled: true,
            ignore_pitch: false,
            ignore_roll: false,
            ignore_yaw: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ControlSurface {
    module: SurfaceModule,
    saved_ignore_pitch: bool,
    saved_ignore_roll: bool,
    saved_ignore_yaw: bool,
}

impl ControlSurface {
    pub fn new(module: SurfaceModule) -> Self {
        Self {
            module,
            saved_ignore_pitch: false,
            saved_ignore_roll: false,
            saved_ignore_yaw: false,
        }
    }

    pub fn module(&self) -> &SurfaceModule {
        &self.module
    }

    /// Surfaces only matter inside an atmosphere
    pub fn is_active(&self, signals: &PartSignals) -> bool {
        signals.atm_density > 0.0
    }

    /// Thicker air works the hinges harder
    pub fn hazard_multiplier(&self, signals: &PartSignals) -> f64 {
        signals.atm_density.max(0.0)
    }

    pub fn apply_failure_effects(&mut self) {
        // The enabled flag doubles as the "already jammed" guard, so a
        // re-applied disable cannot overwrite the remembered settings
        if self.module.enabled {
            self.saved_ignore_pitch = self.module.ignore_pitch;
            self.saved_ignore_roll = self.module.ignore_roll;
            self.saved_ignore_yaw = self.module.ignore_yaw;

            self.module.ignore_pitch = true;
            self.module.ignore_roll = true;
            self.module.ignore_yaw = true;
            self.module.enabled = false;
        }
    }

    pub fn clear_failure_effects(&mut self) {
        self.module.enabled = true;
        self.module.ignore_pitch = self.saved_ignore_pitch;
        self.module.ignore_roll = self.saved_ignore_roll;
        self.module.ignore_yaw = self.saved_ignore_yaw;
    }

    pub fn save_extras(&self, tree: &mut StateTree) {
        tree.set_bool(IGNORE_PITCH_KEY, self.saved_ignore_pitch);
        tree.set_bool(IGNORE_ROLL_KEY, self.saved_ignore_roll);
        tree.set_bool(IGNORE_YAW_KEY, self.saved_ignore_yaw);
    }

    pub fn load_extras(&mut self, tree: &StateTree) {
        self.saved_ignore_pitch = tree.get_bool(IGNORE_PITCH_KEY, false);
        self.saved_ignore_roll = tree.get_bool(IGNORE_ROLL_KEY, false);
        self.saved_ignore_yaw = tree.get_bool(IGNORE_YAW_KEY, false);
    }
}
