//! Save/load of part reliability state
//!
//! Saving writes every numeric state field plus the part kind's extra
//! fields into the key/value tree; loading is the structural inverse,
//! with each field falling back to its documented default when the
//! key is missing or unreadable. Loading only restores scalars; the
//! host must call `PartReliability::start` afterwards to re-bind the
//! kind's handles and re-apply a persisted failure, before the first
//! tick.

use crate::engine::part::PartReliability;
use crate::engine::state::ReliabilityState;
use crate::persist::tree::StateTree;

const INITIALIZED_KEY: &str = "Initialized";
const AGE_KEY: &str = "Age";
const TIME_OF_LAST_RESET_KEY: &str = "TimeOfLastReset";
const TIME_OF_LAST_INSPECTION_KEY: &str = "TimeOfLastInspection";
const TIME_OF_LAST_UPDATE_KEY: &str = "TimeOfLastUpdate";
const CURRENT_MTBF_KEY: &str = "CurrentMtbf";
const LIFETIME_SECS_KEY: &str = "LifetimeSecs";
const HAS_FAILED_KEY: &str = "HasFailed";

/// Write the numeric state into the tree
///
/// Only known keys are touched; anything else already in the tree is
/// preserved as-is.
pub fn save_state(state: &ReliabilityState, tree: &mut StateTree) {
    tree.set_bool(INITIALIZED_KEY, state.initialized);
    tree.set_f64(AGE_KEY, state.age_seconds);
    tree.set_f64(TIME_OF_LAST_RESET_KEY, state.time_of_last_reset);
    tree.set_f64(TIME_OF_LAST_INSPECTION_KEY, state.time_of_last_inspection);
    tree.set_f64(TIME_OF_LAST_UPDATE_KEY, state.time_of_last_update);
    tree.set_f64(CURRENT_MTBF_KEY, state.current_mtbf_hours);
    tree.set_f64(LIFETIME_SECS_KEY, state.lifetime_seconds);
    tree.set_bool(HAS_FAILED_KEY, state.has_failed);
}

/// Rebuild the numeric state from the tree, defaulting field by field
pub fn load_state(tree: &StateTree) -> ReliabilityState {
    let defaults = ReliabilityState::default();
    ReliabilityState {
        initialized: tree.get_bool(INITIALIZED_KEY, defaults.initialized),
        age_seconds: tree.get_f64(AGE_KEY, defaults.age_seconds),
        time_of_last_reset: tree.get_f64(TIME_OF_LAST_RESET_KEY, defaults.time_of_last_reset),
        time_of_last_inspection: tree.get_f64(
            TIME_OF_LAST_INSPECTION_KEY,
            defaults.time_of_last_inspection,
        ),
        time_of_last_update: tree.get_f64(TIME_OF_LAST_UPDATE_KEY, defaults.time_of_last_update),
        current_mtbf_hours: tree.get_f64(CURRENT_MTBF_KEY, defaults.current_mtbf_hours),
        lifetime_seconds: tree.get_f64(LIFETIME_SECS_KEY, defaults.lifetime_seconds),
        has_failed: tree.get_bool(HAS_FAILED_KEY, defaults.has_failed),
    }
}

/// Save a whole part: numeric state plus the kind's extra fields
pub fn save_part(part: &PartReliability, tree: &mut StateTree) {
    save_state(part.state(), tree);
    part.adapter().save_extras(tree);
}

/// Load a whole part's scalars; follow with `start` to re-bind
pub fn load_part(part: &mut PartReliability, tree: &StateTree) {
    *part.state_mut() = load_state(tree);
    part.adapter_mut().load_extras(tree);
}
