//! Part-kind failure behavior
//!
//! Every tracked part kind plugs into the wear engine through one
//! capability surface: an activity predicate, an optional hazard
//! multiplier, the effect applied on failure, the effect applied on
//! repair, and a handful of extra persisted fields. Kinds are a
//! closed set of enum variants; adding a part kind means adding a
//! variant here, not a new inheritance branch.

pub mod alternator;
pub mod battery;
pub mod control_surface;
pub mod coolant;
pub mod decoupler;
pub mod engines;
pub mod gimbal;
pub mod intake;
pub mod light;
pub mod rcs;
pub mod reaction_wheel;
pub mod tank;
pub mod wheel;

pub use alternator::Alternator;
pub use battery::{Battery, ChargeStore};
pub use control_surface::{ControlSurface, SurfaceModule};
pub use coolant::CoolantLine;
pub use decoupler::Decoupler;
pub use engines::EngineUnit;
pub use gimbal::Gimbal;
pub use intake::Intake;
pub use light::Light;
pub use rcs::RcsThruster;
pub use reaction_wheel::{ReactionWheel, WheelSpin};
pub use tank::{Tank, TankResource};
pub use wheel::{WheelModule, WheelMotor, WheelTire};

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::config::EngineConfig;
use crate::engine::signals::PartSignals;
use crate::persist::tree::StateTree;

/// A required host-side handle is missing or unusable
///
/// These are fatal for the session: the part stops participating in
/// ticks because the missing dependency cannot regenerate without a
/// fresh vehicle load.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterFault {
    #[error("part carries no charge store")]
    MissingChargeStore,

    #[error("part holds no leakable resource")]
    NothingToLeak,

    #[error("wheel has no motor")]
    NoMotor,

    #[error("tire is not damageable")]
    TireNotDamageable,
}

/// Outcome of asking a part kind whether it agrees to fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureDecision {
    /// Go ahead with the failure
    Proceed,
    /// The kind refuses (e.g. a tank with nothing left to leak);
    /// the part stays armed and this is a normal outcome, not an error
    Refuse(&'static str),
}

/// One tracked part kind and the live handles it owns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PartAdapter {
    Engine(EngineUnit),
    Battery(Battery),
    Tank(Tank),
    ControlSurface(ControlSurface),
    Gimbal(Gimbal),
    ReactionWheel(ReactionWheel),
    Decoupler(Decoupler),
    WheelMotor(WheelMotor),
    WheelTire(WheelTire),
    Light(Light),
    Rcs(RcsThruster),
    Intake(Intake),
    Alternator(Alternator),
    Coolant(CoolantLine),
}

impl PartAdapter {
    /// Short identifier used in logs
    pub fn kind_name(&self) -> &'static str {
        match self {
            PartAdapter::Engine(_) => "Engine",
            PartAdapter::Battery(_) => "Battery",
            PartAdapter::Tank(_) => "Tank",
            PartAdapter::ControlSurface(_) => "ControlSurface",
            PartAdapter::Gimbal(_) => "Gimbal",
            PartAdapter::ReactionWheel(_) => "ReactionWheel",
            PartAdapter::Decoupler(_) => "Decoupler",
            PartAdapter::WheelMotor(_) => "WheelMotor",
            PartAdapter::WheelTire(_) => "WheelTire",
            PartAdapter::Light(_) => "Light",
            PartAdapter::Rcs(_) => "RcsThruster",
            PartAdapter::Intake(_) => "Intake",
            PartAdapter::Alternator(_) => "Alternator",
            PartAdapter::Coolant(_) => "CoolantLine",
        }
    }

    /// Message posted when this kind fails
    pub fn failure_message(&self) -> String {
        match self {
            PartAdapter::Engine(_) => "Engine failure!".into(),
            PartAdapter::Battery(_) => "A battery has short-circuited!".into(),
            PartAdapter::Tank(tank) => tank.failure_message(),
            PartAdapter::ControlSurface(_) => "A control surface is stuck!".into(),
            PartAdapter::Gimbal(_) => "Gimbal failure!".into(),
            PartAdapter::ReactionWheel(_) => "Reaction wheel failure!".into(),
            PartAdapter::Decoupler(_) => "Explosive bolt failure!".into(),
            PartAdapter::WheelMotor(_) => "A wheel motor burnt out!".into(),
            PartAdapter::WheelTire(_) => "A tire has popped!".into(),
            PartAdapter::Light(_) => "A light bulb has burned out.".into(),
            PartAdapter::Rcs(_) => "A thruster has stopped firing!".into(),
            PartAdapter::Intake(_) => "An intake has clogged up.".into(),
            PartAdapter::Alternator(_) => "Alternator failure!".into(),
            PartAdapter::Coolant(_) => "A coolant line is leaking!".into(),
        }
    }

    /// Message posted on a successful repair
    pub fn repair_message(&self) -> &'static str {
        match self {
            PartAdapter::Engine(_) => "Engine repaired.",
            PartAdapter::Battery(_) => "Battery repaired.",
            PartAdapter::Tank(_) => "Leak patched.",
            PartAdapter::ControlSurface(_) => "Control surface freed.",
            PartAdapter::Gimbal(_) => "Gimbal repaired.",
            PartAdapter::ReactionWheel(_) => "Reaction wheel repaired.",
            PartAdapter::Decoupler(_) => "Bolts rewired.",
            PartAdapter::WheelMotor(_) => "Motor replaced.",
            PartAdapter::WheelTire(_) => "Tire replaced.",
            PartAdapter::Light(_) => "Bulb replaced.",
            PartAdapter::Rcs(_) => "Thruster back online.",
            PartAdapter::Intake(_) => "Intake cleared.",
            PartAdapter::Alternator(_) => "Alternator replaced.",
            PartAdapter::Coolant(_) => "Coolant line patched.",
        }
    }

    /// Check the host-side handles this kind depends on
    pub fn validate(&self, config: &EngineConfig) -> Result<(), AdapterFault> {
        match self {
            PartAdapter::Battery(battery) => battery.validate(),
            PartAdapter::Tank(tank) => tank.validate(config),
            PartAdapter::WheelMotor(motor) => motor.validate(),
            PartAdapter::WheelTire(tire) => tire.validate(),
            _ => Ok(()),
        }
    }

    /// Whether the part is in active use this tick
    pub fn is_active(&self, signals: &PartSignals) -> bool {
        match self {
            PartAdapter::Engine(engine) => engine.is_active(signals),
            PartAdapter::Battery(_) => true,
            PartAdapter::Tank(_) => true,
            PartAdapter::ControlSurface(surface) => surface.is_active(signals),
            PartAdapter::Gimbal(gimbal) => gimbal.is_active(signals),
            PartAdapter::ReactionWheel(wheel) => wheel.is_active(),
            PartAdapter::Decoupler(decoupler) => decoupler.is_active(signals),
            PartAdapter::WheelMotor(motor) => motor.is_active(signals),
            PartAdapter::WheelTire(tire) => tire.is_active(signals),
            PartAdapter::Light(light) => light.is_active(),
            PartAdapter::Rcs(rcs) => rcs.is_active(signals),
            PartAdapter::Intake(intake) => intake.is_active(signals),
            PartAdapter::Alternator(alternator) => alternator.is_active(signals),
            PartAdapter::Coolant(coolant) => coolant.is_active(signals),
        }
    }

    /// Kind-specific hazard multiplier (1.0 when the kind has none)
    pub fn hazard_multiplier(&self, signals: &PartSignals) -> f64 {
        match self {
            PartAdapter::Engine(engine) => engine.hazard_multiplier(signals),
            PartAdapter::ControlSurface(surface) => surface.hazard_multiplier(signals),
            _ => 1.0,
        }
    }

    /// Ask the kind to commit to a failure
    ///
    /// Kinds that need to pick failure details (a tank choosing its
    /// leak target and severity) do so here; kinds with nothing to
    /// decide always proceed.
    pub fn try_begin_failure(
        &mut self,
        config: &EngineConfig,
        rng: &mut impl Rng,
    ) -> FailureDecision {
        match self {
            PartAdapter::Tank(tank) => tank.try_begin_failure(config, rng),
            _ => FailureDecision::Proceed,
        }
    }

    /// Apply the disable effect; safe to call repeatedly
    pub fn apply_failure_effects(&mut self) {
        match self {
            PartAdapter::Engine(engine) => engine.apply_failure_effects(),
            PartAdapter::Battery(battery) => battery.apply_failure_effects(),
            PartAdapter::Tank(_) => {} // the leak itself is the effect
            PartAdapter::ControlSurface(surface) => surface.apply_failure_effects(),
            PartAdapter::Gimbal(gimbal) => gimbal.apply_failure_effects(),
            PartAdapter::ReactionWheel(wheel) => wheel.apply_failure_effects(),
            PartAdapter::Decoupler(decoupler) => decoupler.apply_failure_effects(),
            PartAdapter::WheelMotor(motor) => motor.apply_failure_effects(),
            PartAdapter::WheelTire(tire) => tire.apply_failure_effects(),
            PartAdapter::Light(light) => light.apply_failure_effects(),
            PartAdapter::Rcs(rcs) => rcs.apply_failure_effects(),
            PartAdapter::Intake(intake) => intake.apply_failure_effects(),
            PartAdapter::Alternator(alternator) => alternator.apply_failure_effects(),
            PartAdapter::Coolant(coolant) => coolant.apply_failure_effects(),
        }
    }

    /// Undo the disable effect after a settled repair
    pub fn clear_failure_effects(&mut self) {
        match self {
            PartAdapter::Engine(engine) => engine.clear_failure_effects(),
            PartAdapter::Battery(battery) => battery.clear_failure_effects(),
            PartAdapter::Tank(tank) => tank.clear_failure_effects(),
            PartAdapter::ControlSurface(surface) => surface.clear_failure_effects(),
            PartAdapter::Gimbal(gimbal) => gimbal.clear_failure_effects(),
            PartAdapter::ReactionWheel(wheel) => wheel.clear_failure_effects(),
            PartAdapter::Decoupler(decoupler) => decoupler.clear_failure_effects(),
            PartAdapter::WheelMotor(motor) => motor.clear_failure_effects(),
            PartAdapter::WheelTire(tire) => tire.clear_failure_effects(),
            PartAdapter::Light(light) => light.clear_failure_effects(),
            PartAdapter::Rcs(rcs) => rcs.clear_failure_effects(),
            PartAdapter::Intake(intake) => intake.clear_failure_effects(),
            PartAdapter::Alternator(alternator) => alternator.clear_failure_effects(),
            PartAdapter::Coolant(coolant) => coolant.clear_failure_effects(),
        }
    }

    /// Continuous while-failed effect, run every tick in the failed
    /// state (a tank keeps draining its leak target)
    pub fn tick_failed(&mut self, dt: f64) {
        if let PartAdapter::Tank(tank) = self {
            tank.tick_failed(dt);
        }
    }

    /// Whether a persisted failed state is still coherent for this
    /// kind after a load
    pub fn confirm_failed_state(&self) -> bool {
        match self {
            PartAdapter::Tank(tank) => tank.confirm_failed_state(),
            _ => true,
        }
    }

    /// Write the kind's extra persisted fields into the tree
    pub fn save_extras(&self, tree: &mut StateTree) {
        match self {
            PartAdapter::Tank(tank) => tank.save_extras(tree),
            PartAdapter::ControlSurface(surface) => surface.save_extras(tree),
            PartAdapter::Decoupler(decoupler) => decoupler.save_extras(tree),
            _ => {}
        }
    }

    /// Restore the kind's extra persisted fields from the tree
    pub fn load_extras(&mut self, tree: &StateTree) {
        match self {
            PartAdapter::Tank(tank) => tank.load_extras(tree),
            PartAdapter::ControlSurface(surface) => surface.load_extras(tree),
            PartAdapter::Decoupler(decoupler) => decoupler.load_extras(tree),
            _ => {}
        }
    }
}
