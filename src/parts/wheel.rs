//! Wheel failure behavior, split into two independently tracked
//! failure modes: the drive motor burning out and the tire popping.

use serde::{Deserialize, Serialize};

use crate::engine::signals::PartSignals;
use crate::parts::AdapterFault;

/// The wheel module on the host part
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WheelModule {
    pub has_motor: bool,
    pub motor_enabled: bool,
    pub damageable: bool,
    pub damaged: bool,
}

impl Default for WheelModule {
    fn default() -> Self {
        Self {
            has_motor: true,
            motor_enabled: true,
            damageable: true,
            damaged: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WheelMotor {
    module: WheelModule,
}

impl WheelMotor {
    pub fn new(module: WheelModule) -> Self {
        Self { module }
    }

    pub fn module(&self) -> &WheelModule {
        &self.module
    }

    pub fn validate(&self) -> Result<(), AdapterFault> {
        if self.module.has_motor {
            Ok(())
        } else {
            Err(AdapterFault::NoMotor)
        }
    }

    /// Motors only wear while the wheel is carrying the vehicle
    pub fn is_active(&self, signals: &PartSignals) -> bool {
        signals.ground_contact
    }

    pub fn apply_failure_effects(&mut self) {
        self.module.motor_enabled = false;
    }

    pub fn clear_failure_effects(&mut self) {
        self.module.motor_enabled = true;
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WheelTire {
    module: WheelModule,
}

impl WheelTire {
    pub fn new(module: WheelModule) -> Self {
        Self { module }
    }

    pub fn module(&self) -> &WheelModule {
        &self.module
    }

    pub fn validate(&self) -> Result<(), AdapterFault> {
        if self.module.damageable {
            Ok(())
        } else {
            Err(AdapterFault::TireNotDamageable)
        }
    }

    pub fn is_active(&self, signals: &PartSignals) -> bool {
        signals.ground_contact
    }

    pub fn apply_failure_effects(&mut self) {
        self.module.damaged = true;
    }

    pub fn clear_failure_effects(&mut self) {
        self.module.damaged = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motorless_wheel_faults_at_bind() {
        let motor = WheelMotor::new(WheelModule {
            has_motor: false,
            ..WheelModule::default()
        });
        assert_eq!(motor.validate(), Err(AdapterFault::NoMotor));
    }

    #[test]
    fn test_wheel_only_wears_on_the_ground() {
        let motor = WheelMotor::default();
        assert!(!motor.is_active(&PartSignals::default()));
        assert!(motor.is_active(&PartSignals {
            ground_contact: true,
            ..PartSignals::default()
        }));
    }

    #[test]
    fn test_tire_pop_and_replace() {
        let mut tire = WheelTire::default();
        tire.apply_failure_effects();
        assert!(tire.module().damaged);
        tire.clear_failure_effects();
        assert!(!tire.module().damaged);
    }
}
