//! Per-part reliability lifecycle
//!
//! `PartReliability` ties one part's profile, numeric state and kind
//! behavior together and walks it through the
//! Uninitialized -> Armed -> Failed -> Armed lifecycle. The host calls
//! `start` once per session and `update` once per fixed tick; repair
//! and maintenance arrive through the service transactions in
//! `economy::service`.

use rand::Rng;

use crate::core::config::EngineConfig;
use crate::economy::skills::{self, Operator, Skill};
use crate::engine::aging;
use crate::engine::events::ReliabilityEvent;
use crate::engine::hazard;
use crate::engine::profile::ReliabilityProfile;
use crate::engine::signals::PartSignals;
use crate::engine::state::{Condition, ReliabilityState};
use crate::parts::{FailureDecision, PartAdapter};

/// What an inspection tells the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectionReport {
    /// The part has already failed
    Failed,
    /// The operator lacks the skills to judge this part
    Unsure,
    /// A proper reading; the inspection hazard discount was granted
    Reading(Condition),
}

/// Reliability tracker for a single part instance
#[derive(Debug, Clone)]
pub struct PartReliability {
    name: String,
    profile: ReliabilityProfile,
    state: ReliabilityState,
    adapter: PartAdapter,
    requirements: Vec<Skill>,
    /// Cleared for the rest of the session when a required host
    /// handle is missing; a disabled part never ticks
    enabled: bool,
}

impl PartReliability {
    pub fn new(name: impl Into<String>, profile: ReliabilityProfile, adapter: PartAdapter) -> Self {
        Self {
            name: name.into(),
            profile,
            state: ReliabilityState::default(),
            adapter,
            requirements: Vec::new(),
            enabled: true,
        }
    }

    /// Attach the skill requirements that gate servicing this part
    pub fn with_requirements(mut self, requirements: Vec<Skill>) -> Self {
        self.requirements = requirements;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn profile(&self) -> &ReliabilityProfile {
        &self.profile
    }

    pub fn state(&self) -> &ReliabilityState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut ReliabilityState {
        &mut self.state
    }

    pub fn adapter(&self) -> &PartAdapter {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut PartAdapter {
        &mut self.adapter
    }

    pub fn requirements(&self) -> &[Skill] {
        &self.requirements
    }

    pub fn has_failed(&self) -> bool {
        self.state.has_failed
    }

    /// Whether the part is participating in ticks this session
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Session start / rebind
    ///
    /// Runs after construction and again after every load, before the
    /// first tick. Validates the kind's host handles, re-arms the
    /// tracker when this is a genuinely fresh session (the clock reads
    /// earlier than the last reset, i.e. a new flight or a revert),
    /// and re-applies the disable effect of a persisted failure.
    pub fn start(&mut self, config: &EngineConfig, now: f64) {
        if let Err(fault) = self.adapter.validate(config) {
            tracing::warn!(
                part = %self.name,
                kind = self.adapter.kind_name(),
                %fault,
                "disabling part for this session"
            );
            self.enabled = false;
            return;
        }
        self.enabled = true;

        if now < self.state.time_of_last_reset + config.reset_epsilon {
            self.reset(now);
        }

        if self.state.has_failed {
            if self.adapter.confirm_failed_state() {
                // Only the flag is persisted; the effect is re-applied
                self.adapter.apply_failure_effects();
            } else {
                tracing::warn!(
                    part = %self.name,
                    kind = self.adapter.kind_name(),
                    "persisted failure is incoherent, clearing it"
                );
                self.state.has_failed = false;
            }
        }
    }

    /// Zero the tracker and arm it
    fn reset(&mut self, now: f64) {
        tracing::debug!(part = %self.name, now, "resetting wear tracker");

        self.state.age_seconds = 0.0;
        self.state.time_of_last_reset = now;
        self.state.time_of_last_update = now;
        self.state.time_of_last_inspection = f64::NEG_INFINITY;
        self.state.current_mtbf_hours = self.profile.mtbf_hours;
        self.state.lifetime_seconds = self.profile.lifetime_seconds();
        self.state.has_failed = false;
        self.state.initialized = true;
    }

    /// Fixed-tick update
    ///
    /// Ages the part, refreshes the decayed MTBF and, while armed and
    /// in use, rolls the single failure sample for the tick. While
    /// failed, only the kind's continuous effect runs (a tank keeps
    /// leaking). Returns the failure notification when the part fails
    /// this tick.
    pub fn update(
        &mut self,
        config: &EngineConfig,
        signals: &PartSignals,
        rng: &mut impl Rng,
    ) -> Option<ReliabilityEvent> {
        if !self.enabled || !self.state.initialized {
            return None;
        }

        let thermal_fraction = signals.thermal_fraction();
        let in_use = self.adapter.is_active(signals);

        aging::advance(
            &mut self.state,
            signals.now,
            signals.dt,
            thermal_fraction,
            in_use,
            self.profile.aging,
        );
        self.state.current_mtbf_hours = self.profile.mtbf_hours * self.state.decay_factor();

        if self.state.has_failed {
            self.adapter.tick_failed(signals.dt);
            return None;
        }

        if !in_use {
            return None;
        }

        let probability = hazard::tick_probability(
            self.state.current_mtbf_hours,
            signals.dt,
            thermal_fraction,
            self.adapter.hazard_multiplier(signals),
            signals.now,
            self.state.time_of_last_inspection,
            self.profile.inspection_bonus_seconds,
        );

        if hazard::roll_failure(probability, rng) {
            self.fail(config, rng)
        } else {
            None
        }
    }

    /// Force a failure outside the stochastic path (host debug hooks)
    pub fn force_fail(
        &mut self,
        config: &EngineConfig,
        rng: &mut impl Rng,
    ) -> Option<ReliabilityEvent> {
        if !self.enabled || !self.state.initialized || self.state.has_failed {
            return None;
        }
        self.fail(config, rng)
    }

    fn fail(&mut self, config: &EngineConfig, rng: &mut impl Rng) -> Option<ReliabilityEvent> {
        match self.adapter.try_begin_failure(config, rng) {
            FailureDecision::Refuse(reason) => {
                tracing::debug!(
                    part = %self.name,
                    kind = self.adapter.kind_name(),
                    reason,
                    "part refused to fail"
                );
                None
            }
            FailureDecision::Proceed => {
                self.adapter.apply_failure_effects();
                self.state.has_failed = true;

                tracing::info!(
                    part = %self.name,
                    kind = self.adapter.kind_name(),
                    age_seconds = self.state.age_seconds,
                    "part failed"
                );

                Some(ReliabilityEvent::failure(
                    self.adapter.failure_message(),
                    self.profile.silent,
                ))
            }
        }
    }

    /// Look the part over
    ///
    /// A qualified operator gets a condition reading and the part gets
    /// the temporary inspection hazard discount; an unqualified one
    /// learns nothing and grants nothing.
    pub fn inspect(&mut self, now: f64, operator: &Operator) -> InspectionReport {
        if self.state.has_failed {
            return InspectionReport::Failed;
        }
        if !skills::meets_all(&self.requirements, &operator.skills) {
            tracing::debug!(part = %self.name, operator = %operator.name, "inspection inconclusive");
            return InspectionReport::Unsure;
        }

        self.state.time_of_last_inspection = now;
        InspectionReport::Reading(self.state.condition())
    }

    /// Settle a repair that the service transaction has authorized
    pub(crate) fn settle_repair(&mut self) -> ReliabilityEvent {
        self.adapter.clear_failure_effects();
        self.state.has_failed = false;
        self.state.discount_age(self.profile.repair_age_bonus);

        tracing::info!(part = %self.name, kind = self.adapter.kind_name(), "part repaired");
        ReliabilityEvent::repair(self.adapter.repair_message())
    }

    /// Settle authorized preventive maintenance
    pub(crate) fn settle_maintenance(&mut self) {
        self.state.discount_age(self.profile.maintenance_age_bonus);
        tracing::debug!(
            part = %self.name,
            age_seconds = self.state.age_seconds,
            "maintenance performed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::Gimbal;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_part() -> PartReliability {
        PartReliability::new(
            "gimbal-1",
            ReliabilityProfile::default(),
            PartAdapter::Gimbal(Gimbal::new()),
        )
    }

    #[test]
    fn test_uninitialized_part_never_ages() {
        let config = EngineConfig::default();
        let mut part = test_part();
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let signals = PartSignals {
            engine_ignited: true,
            ..PartSignals::at(100.0, 1.0)
        };
        assert!(part.update(&config, &signals, &mut rng).is_none());
        assert_eq!(part.state().age_seconds, 0.0);
        assert!(!part.state().initialized);
    }

    #[test]
    fn test_start_arms_a_fresh_part() {
        let config = EngineConfig::default();
        let mut part = test_part();
        part.start(&config, 50.0);

        let state = part.state();
        assert!(state.initialized);
        assert_eq!(state.time_of_last_reset, 50.0);
        assert_eq!(state.current_mtbf_hours, 1000.0);
        assert_eq!(state.lifetime_seconds, 360_000.0);
    }

    #[test]
    fn test_reload_mid_session_preserves_age() {
        let config = EngineConfig::default();
        let mut part = test_part();
        part.start(&config, 0.0);
        part.state_mut().age_seconds = 500.0;

        // A reload at t=2000 is not a fresh session: no re-arm
        part.start(&config, 2000.0);
        assert_eq!(part.state().age_seconds, 500.0);

        // Time travel backward signals a revert: re-arm
        part.start(&config, -10.0);
        assert_eq!(part.state().age_seconds, 0.0);
    }

    #[test]
    fn test_armed_part_ages_while_in_use() {
        let config = EngineConfig::default();
        let mut part = test_part();
        part.start(&config, 0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let burning = PartSignals {
            engine_ignited: true,
            ..PartSignals::at(1.0, 1.0)
        };
        part.update(&config, &burning, &mut rng);
        assert!(part.state().age_seconds > 0.0);
        assert!(part.state().current_mtbf_hours < 1000.0);

        let idle_age = part.state().age_seconds;
        let idle = PartSignals::at(2.0, 1.0);
        part.update(&config, &idle, &mut rng);
        assert_eq!(part.state().age_seconds, idle_age);
    }

    #[test]
    fn test_forced_failure_and_repair_cycle() {
        let config = EngineConfig::default();
        let mut part = test_part();
        part.start(&config, 0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let event = part.force_fail(&config, &mut rng).unwrap();
        assert!(part.has_failed());
        assert!(!event.silent);
        assert!(matches!(part.adapter(), PartAdapter::Gimbal(g) if g.is_locked()));

        // Already failed: a second forced failure is a no-op
        assert!(part.force_fail(&config, &mut rng).is_none());

        part.settle_repair();
        assert!(!part.has_failed());
        assert!(matches!(part.adapter(), PartAdapter::Gimbal(g) if !g.is_locked()));
    }

    #[test]
    fn test_silent_profile_yields_silent_event() {
        let config = EngineConfig::default();
        let mut part = PartReliability::new(
            "quiet",
            ReliabilityProfile {
                silent: true,
                ..ReliabilityProfile::default()
            },
            PartAdapter::Gimbal(Gimbal::new()),
        );
        part.start(&config, 0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let event = part.force_fail(&config, &mut rng).unwrap();
        assert!(event.silent);
    }

    #[test]
    fn test_inspection_grants_discount_to_qualified_operator() {
        let config = EngineConfig::default();
        let mut part = test_part();
        part.start(&config, 0.0);

        let operator = Operator::new("Sam", 0.5);
        let report = part.inspect(120.0, &operator);
        assert_eq!(report, InspectionReport::Reading(Condition::LikeNew));
        assert_eq!(part.state().time_of_last_inspection, 120.0);
    }

    #[test]
    fn test_inspection_by_unqualified_operator_is_inconclusive() {
        use crate::economy::skills::{Skill, SkillLevel, Specialty};

        let config = EngineConfig::default();
        let mut part = test_part()
            .with_requirements(vec![Skill::new(Specialty::Mechanic, SkillLevel::Normal)]);
        part.start(&config, 0.0);

        let novice = Operator::new("Pat", 0.5);
        assert_eq!(part.inspect(120.0, &novice), InspectionReport::Unsure);
        // No discount granted
        assert_eq!(part.state().time_of_last_inspection, f64::NEG_INFINITY);
    }
}
