//! Aging clock: converts elapsed sim time into weighted exposure
//!
//! Thermal exposure always ages a part; time in active use ages it
//! further at full rate. The thermal penalty is a steep quintic so
//! that aging accelerates sharply only near the thermal limit and is
//! negligible below roughly 60% of it.

use crate::engine::profile::AgingPolicy;
use crate::engine::state::ReliabilityState;

/// Aging acceleration caused by heat: `3 * x^5` of the thermal fraction
///
/// At 60% of the rating this adds ~0.23x; at the rating it adds 3x;
/// past the rating it grows without bound.
pub fn thermal_multiplier(thermal_fraction: f64) -> f64 {
    let x = if thermal_fraction.is_finite() {
        thermal_fraction.max(0.0)
    } else {
        0.0
    };
    3.0 * x.powi(5)
}

/// Advance the aging clock by one tick
///
/// Thermal aging applies unconditionally; use aging applies when the
/// part is in active use, or always under `AgingPolicy::Continuous`.
/// A negative or non-finite `dt` (sim clock reset) is treated as zero.
pub fn advance(
    state: &mut ReliabilityState,
    now: f64,
    dt: f64,
    thermal_fraction: f64,
    in_use: bool,
    policy: AgingPolicy,
) {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

    state.age_seconds += dt * thermal_multiplier(thermal_fraction);

    if in_use || policy == AgingPolicy::Continuous {
        state.age_seconds += dt;
    }

    state.time_of_last_update = now;
}
