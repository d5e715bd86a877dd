//! Tank failure behavior
//!
//! A failed tank springs a leak in one randomly chosen resource. The
//! leak drains exponentially: `dQ = pole * Q * dt`, with the pole
//! drawn at failure time from a random time constant, so some leaks
//! are a hiss and some empty the tank in seconds.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::EngineConfig;
use crate::parts::{AdapterFault, FailureDecision};
use crate::persist::tree::StateTree;

const LEAK_NAME_KEY: &str = "LeakName";
const LEAK_POLE_KEY: &str = "LeakPole";

const DEFAULT_POLE: f64 = 0.01;

/// One resource held by the tank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankResource {
    pub name: String,
    pub amount: f64,
    pub max_amount: f64,
    /// Whether the host allows flow out of this resource; a leak
    /// drains a closed resource by direct subtraction instead
    pub flow_enabled: bool,
}

impl TankResource {
    pub fn full(name: impl Into<String>, max_amount: f64) -> Self {
        Self {
            name: name.into(),
            amount: max_amount,
            max_amount,
            flow_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tank {
    resources: Vec<TankResource>,
    leak_name: Option<String>,
    /// Reciprocal of the leak time constant, per second
    leak_pole: f64,
    /// Fastest leak the tank can spring (smallest time constant)
    min_tc_seconds: f64,
    /// Slowest leak the tank can spring
    max_tc_seconds: f64,
}

impl Tank {
    pub fn new(resources: Vec<TankResource>) -> Self {
        Self {
            resources,
            leak_name: None,
            leak_pole: DEFAULT_POLE,
            min_tc_seconds: 10.0,
            max_tc_seconds: 60.0,
        }
    }

    /// Override the leak severity range
    pub fn with_leak_severity(mut self, min_tc_seconds: f64, max_tc_seconds: f64) -> Self {
        self.min_tc_seconds = min_tc_seconds;
        self.max_tc_seconds = max_tc_seconds;
        self
    }

    pub fn resources(&self) -> &[TankResource] {
        &self.resources
    }

    pub fn resource(&self, name: &str) -> Option<&TankResource> {
        self.resources.iter().find(|r| r.name == name)
    }

    /// The resource currently leaking, if any
    pub fn leak_name(&self) -> Option<&str> {
        self.leak_name.as_deref()
    }

    pub fn failure_message(&self) -> String {
        match &self.leak_name {
            Some(name) => format!("A tank of {} is leaking!", name),
            None => "A tank is leaking!".into(),
        }
    }

    /// Indices of resources that are allowed to leak and not empty
    fn leakable_indices(&self, config: &EngineConfig) -> Vec<usize> {
        self.resources
            .iter()
            .enumerate()
            .filter(|(_, r)| !config.is_leak_blacklisted(&r.name) && r.amount > 0.0)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// A tank whose every resource is blacklisted has nothing the
    /// engine could ever leak, so tracking it is pointless.
    pub fn validate(&self, config: &EngineConfig) -> Result<(), AdapterFault> {
        let any_candidate = self
            .resources
            .iter()
            .any(|r| !config.is_leak_blacklisted(&r.name));
        if any_candidate {
            Ok(())
        } else {
            Err(AdapterFault::NothingToLeak)
        }
    }

    /// Pick a leak target and severity, or refuse when every candidate
    /// has already been emptied
    pub fn try_begin_failure(
        &mut self,
        config: &EngineConfig,
        rng: &mut impl Rng,
    ) -> FailureDecision {
        let candidates = self.leakable_indices(config);
        if candidates.is_empty() {
            self.leak_name = None;
            return FailureDecision::Refuse("nothing left to leak");
        }

        let tc = self.min_tc_seconds + (self.max_tc_seconds - self.min_tc_seconds) * rng.gen::<f64>();
        self.leak_pole = 1.0 / tc;

        let pick = candidates[rng.gen_range(0..candidates.len())];
        self.leak_name = Some(self.resources[pick].name.clone());

        tracing::debug!(
            leak = %self.resources[pick].name,
            time_constant = tc,
            "tank picked a leak target"
        );

        FailureDecision::Proceed
    }

    /// Drain the leak target; empty tanks are left alone
    pub fn tick_failed(&mut self, dt: f64) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        let Some(name) = &self.leak_name else {
            return;
        };
        let pole = self.leak_pole;
        if let Some(resource) = self.resources.iter_mut().find(|r| r.name == *name) {
            if resource.amount > 0.0 {
                let drained = pole * resource.amount * dt;
                resource.amount = (resource.amount - drained).max(0.0);
            }
        }
    }

    /// A persisted failed tank is only coherent if its leak target
    /// still names a resource the tank actually holds
    pub fn confirm_failed_state(&self) -> bool {
        match &self.leak_name {
            Some(name) => self.resources.iter().any(|r| r.name == *name),
            None => false,
        }
    }

    pub fn clear_failure_effects(&mut self) {
        self.leak_name = None;
    }

    pub fn save_extras(&self, tree: &mut StateTree) {
        tree.set_str(LEAK_NAME_KEY, self.leak_name.as_deref().unwrap_or(""));
        tree.set_f64(LEAK_POLE_KEY, self.leak_pole);
    }

    pub fn load_extras(&mut self, tree: &StateTree) {
        self.leak_name = match tree.get_str(LEAK_NAME_KEY) {
            Some(name) if !name.is_empty() => Some(name.to_string()),
            _ => None,
        };
        self.leak_pole = tree.get_f64(LEAK_POLE_KEY, DEFAULT_POLE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn two_resource_tank() -> Tank {
        Tank::new(vec![
            TankResource::full("Fuel", 100.0),
            TankResource::full("Oxidizer", 80.0),
        ])
    }

    #[test]
    fn test_failure_picks_a_leak_target() {
        let mut tank = two_resource_tank();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let decision = tank.try_begin_failure(&EngineConfig::default(), &mut rng);
        assert_eq!(decision, FailureDecision::Proceed);
        assert!(tank.leak_name().is_some());
        // The pole falls inside the configured severity range
        assert!(tank.leak_pole >= 1.0 / 60.0 && tank.leak_pole <= 1.0 / 10.0);
    }

    #[test]
    fn test_empty_tank_refuses_to_fail() {
        let mut tank = Tank::new(vec![TankResource {
            name: "Fuel".into(),
            amount: 0.0,
            max_amount: 100.0,
            flow_enabled: true,
        }]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let decision = tank.try_begin_failure(&EngineConfig::default(), &mut rng);
        assert!(matches!(decision, FailureDecision::Refuse(_)));
        assert!(tank.leak_name().is_none());
    }

    #[test]
    fn test_blacklisted_resources_never_leak() {
        let config = EngineConfig {
            leak_blacklist: vec!["Fuel".into()],
            ..EngineConfig::default()
        };
        let mut tank = two_resource_tank();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..20 {
            tank.try_begin_failure(&config, &mut rng);
            assert_eq!(tank.leak_name(), Some("Oxidizer"));
            tank.clear_failure_effects();
        }
    }

    #[test]
    fn test_fully_blacklisted_tank_faults_at_bind() {
        let config = EngineConfig {
            leak_blacklist: vec!["Fuel".into(), "Oxidizer".into()],
            ..EngineConfig::default()
        };
        assert_eq!(
            two_resource_tank().validate(&config),
            Err(AdapterFault::NothingToLeak)
        );
    }

    #[test]
    fn test_leak_drains_exponentially() {
        let mut tank = two_resource_tank();
        tank.leak_name = Some("Fuel".into());
        tank.leak_pole = 0.1;

        tank.tick_failed(1.0);
        let after_one = tank.resource("Fuel").unwrap().amount;
        assert!((after_one - 90.0).abs() < 1e-9);

        tank.tick_failed(1.0);
        let after_two = tank.resource("Fuel").unwrap().amount;
        // Second tick drains less than the first: the leak decays
        assert!(90.0 - after_two < 10.0);

        // The untouched resource is untouched
        assert_eq!(tank.resource("Oxidizer").unwrap().amount, 80.0);
    }

    #[test]
    fn test_leak_never_goes_negative() {
        let mut tank = two_resource_tank();
        tank.leak_name = Some("Fuel".into());
        tank.leak_pole = 0.5;
        // A huge warp tick cannot drain past empty
        tank.tick_failed(1_000_000.0);
        assert!(tank.resource("Fuel").unwrap().amount >= 0.0);
    }

    #[test]
    fn test_extras_round_trip() {
        let mut tank = two_resource_tank();
        tank.leak_name = Some("Oxidizer".into());
        tank.leak_pole = 0.05;

        let mut tree = StateTree::new();
        tank.save_extras(&mut tree);

        let mut restored = two_resource_tank();
        restored.load_extras(&tree);
        assert_eq!(restored.leak_name(), Some("Oxidizer"));
        assert_eq!(restored.leak_pole, 0.05);
    }

    #[test]
    fn test_missing_leak_key_is_incoherent_failed_state() {
        let mut tank = two_resource_tank();
        tank.load_extras(&StateTree::new());
        assert!(!tank.confirm_failed_state());
    }
}
