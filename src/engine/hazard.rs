//! Hazard model: per-tick failure probability
//!
//! Four independent multiplicative factors compose into a single
//! probability for the tick just elapsed: the MTBF-derived base rate,
//! the thermal stress term, the part-kind multiplier and the
//! inspection discount. Exactly one uniform sample decides the
//! outcome, so the failure rate stays calibrated no matter how many
//! factors are in play.

use rand::Rng;

use crate::engine::aging::thermal_multiplier;

/// MTBF below this is treated as "already gone": hazard saturates at
/// certainty instead of dividing by a vanishing number.
const MIN_MTBF_HOURS: f64 = 1e-9;

/// Hazard contribution of the decayed MTBF alone, for one tick
///
/// `(1 / mtbf_hours) / 3600 * dt` converts a rate per hour into a
/// probability over `dt` seconds. An infinite MTBF (uninitialized
/// tracker) contributes nothing; a vanishing or non-finite one
/// saturates at 1.0.
pub fn base_hazard(current_mtbf_hours: f64, dt: f64) -> f64 {
    if current_mtbf_hours == f64::INFINITY {
        return 0.0;
    }
    if !current_mtbf_hours.is_finite() || current_mtbf_hours < MIN_MTBF_HOURS {
        return 1.0;
    }
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    (1.0 / current_mtbf_hours) / 3600.0 * dt
}

/// Multiplier that suppresses hazard right after an inspection
///
/// Exactly 0.0 at the moment of inspection, fading linearly back to
/// 1.0 once `bonus_seconds` have elapsed. With no inspection on
/// record (`-inf` sentinel) the multiplier is 1.0.
pub fn inspection_discount(now: f64, time_of_last_inspection: f64, bonus_seconds: f64) -> f64 {
    if !(bonus_seconds > 0.0) {
        return 1.0;
    }
    let elapsed = now - time_of_last_inspection;
    (elapsed / bonus_seconds).clamp(0.0, 1.0)
}

/// Compose the final failure probability for the elapsed tick
///
/// `base * (1 + thermal) * kind_multiplier * inspection`, clamped into
/// [0, 1]. Anything non-finite collapsing out of the product is
/// treated as certain failure rather than propagated.
pub fn tick_probability(
    current_mtbf_hours: f64,
    dt: f64,
    thermal_fraction: f64,
    kind_multiplier: f64,
    now: f64,
    time_of_last_inspection: f64,
    inspection_bonus_seconds: f64,
) -> f64 {
    let base = base_hazard(current_mtbf_hours, dt);
    let probability = base
        * (1.0 + thermal_multiplier(thermal_fraction))
        * kind_multiplier
        * inspection_discount(now, time_of_last_inspection, inspection_bonus_seconds);

    if probability.is_finite() {
        probability.clamp(0.0, 1.0)
    } else {
        1.0
    }
}

/// Draw the single per-tick sample and decide whether the part fails
pub fn roll_failure(probability: f64, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < probability
}
