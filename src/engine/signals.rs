//! Per-tick input signals supplied by the host vehicle simulation
//!
//! The engine does not model propulsion, aerodynamics or thermal
//! transfer itself; everything it needs to know about the vehicle's
//! physical situation arrives through this bundle once per tick.

use serde::{Deserialize, Serialize};

/// Snapshot of the vehicle state relevant to part wear, for one tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartSignals {
    /// Monotonic simulation clock, seconds
    pub now: f64,
    /// Seconds elapsed since the previous tick (large under time-warp)
    pub dt: f64,
    /// Current part temperature, same unit as `max_temperature`
    pub temperature: f64,
    /// Temperature rating of the part
    pub max_temperature: f64,
    /// Commanded throttle, 0.0 to 1.0
    pub throttle: f64,
    /// Whether the engine on this part is ignited and burning
    pub engine_ignited: bool,
    /// Local atmospheric density (0.0 in vacuum)
    pub atm_density: f64,
    /// Whether any wheel of the part touches the ground
    pub ground_contact: bool,
    /// Whether the vehicle is landed or splashed down
    pub landed_or_splashed: bool,
    /// Whether staging is locked by the pilot
    pub staging_locked: bool,
    /// Whether any RCS nozzle on the part is currently firing
    pub rcs_firing: bool,
}

impl Default for PartSignals {
    fn default() -> Self {
        Self {
            now: 0.0,
            dt: 0.0,
            temperature: 0.0,
            max_temperature: 1200.0,
            throttle: 0.0,
            engine_ignited: false,
            atm_density: 0.0,
            ground_contact: false,
            landed_or_splashed: false,
            staging_locked: false,
            rcs_firing: false,
        }
    }
}

impl PartSignals {
    /// Convenience constructor for a quiescent vehicle at a given clock
    pub fn at(now: f64, dt: f64) -> Self {
        Self {
            now,
            dt,
            ..Self::default()
        }
    }

    /// Fraction of the thermal rating currently in use
    ///
    /// Clamped below at zero and sanitized against non-finite inputs
    /// and a missing rating; can exceed 1.0 when the part is hotter
    /// than its rating.
    pub fn thermal_fraction(&self) -> f64 {
        if !self.temperature.is_finite() || !(self.max_temperature > 0.0) {
            return 0.0;
        }
        (self.temperature / self.max_temperature).max(0.0)
    }
}
