//! Reliability profiles: immutable per-part tuning data
//!
//! A profile describes how quickly a part kind wears out and what it
//! costs to keep it alive. Profiles are authored in TOML data files
//! shipped by the host and are never mutated at runtime.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, WearoutError};

/// Whether a part accumulates use-aging while its activity predicate
/// is false
///
/// Under `WhileActive`, only thermal exposure ages an idle part; under
/// `Continuous`, the full tick duration is always added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AgingPolicy {
    #[default]
    WhileActive,
    Continuous,
}

/// Immutable reliability tuning for one part instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReliabilityProfile {
    /// Nominal mean time between failures when new, hours
    pub mtbf_hours: f64,
    /// Time constant of the exponential MTBF decay, hours
    pub lifetime_hours: f64,
    /// Spares consumed by a repair
    pub repair_cost: f64,
    /// Fractional age reduction granted by a repair, in [0, 1)
    pub repair_age_bonus: f64,
    /// Spares consumed by preventive maintenance
    pub maintenance_cost: f64,
    /// Fractional age reduction granted by maintenance, in [0, 1)
    pub maintenance_age_bonus: f64,
    /// Seconds over which a fresh inspection fully discounts hazard
    pub inspection_bonus_seconds: f64,
    /// Suppress the failure notification (probability is unaffected)
    pub silent: bool,
    /// Whether idle time counts toward use-aging
    pub aging: AgingPolicy,
}

impl Default for ReliabilityProfile {
    fn default() -> Self {
        Self {
            mtbf_hours: 1000.0,
            lifetime_hours: 100.0,
            repair_cost: 5.0,
            repair_age_bonus: 0.0,
            maintenance_cost: 1.0,
            maintenance_age_bonus: 0.2,
            inspection_bonus_seconds: 60.0,
            silent: false,
            aging: AgingPolicy::WhileActive,
        }
    }
}

impl ReliabilityProfile {
    /// Lifetime time constant expressed in seconds
    pub fn lifetime_seconds(&self) -> f64 {
        self.lifetime_hours * 3600.0
    }

    /// Validate the profile for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !(self.mtbf_hours > 0.0) {
            return Err(WearoutError::InvalidConfig(format!(
                "mtbf_hours ({}) must be positive",
                self.mtbf_hours
            )));
        }
        if !(self.lifetime_hours > 0.0) {
            return Err(WearoutError::InvalidConfig(format!(
                "lifetime_hours ({}) must be positive",
                self.lifetime_hours
            )));
        }
        for (name, bonus) in [
            ("repair_age_bonus", self.repair_age_bonus),
            ("maintenance_age_bonus", self.maintenance_age_bonus),
        ] {
            if !(0.0..1.0).contains(&bonus) {
                return Err(WearoutError::InvalidConfig(format!(
                    "{} ({}) must be within [0, 1)",
                    name, bonus
                )));
            }
        }
        Ok(())
    }
}

/// Named profile tables loaded from a TOML data file
///
/// The file is a set of tables, one per part kind:
///
/// ```toml
/// [engine]
/// mtbf_hours = 600.0
/// lifetime_hours = 8.0
///
/// [battery]
/// mtbf_hours = 2000.0
/// silent = true
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProfileSet {
    profiles: BTreeMap<String, ReliabilityProfile>,
}

impl ProfileSet {
    /// Parse a profile set from TOML text
    ///
    /// Every table is validated; the first invalid profile aborts the
    /// load so that bad tuning data is caught at startup rather than
    /// mid-flight.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let profiles: BTreeMap<String, ReliabilityProfile> = toml::from_str(text)?;
        for profile in profiles.values() {
            profile.validate()?;
        }
        Ok(Self { profiles })
    }

    /// Look up a profile by part-kind name
    pub fn get(&self, name: &str) -> Result<&ReliabilityProfile> {
        self.profiles
            .get(name)
            .ok_or_else(|| WearoutError::UnknownProfile(name.to_string()))
    }

    /// Number of profiles in the set
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_valid() {
        assert!(ReliabilityProfile::default().validate().is_ok());
    }

    #[test]
    fn test_lifetime_seconds_conversion() {
        let profile = ReliabilityProfile {
            lifetime_hours: 2.0,
            ..ReliabilityProfile::default()
        };
        assert_eq!(profile.lifetime_seconds(), 7200.0);
    }

    #[test]
    fn test_rejects_full_age_bonus() {
        let profile = ReliabilityProfile {
            repair_age_bonus: 1.0,
            ..ReliabilityProfile::default()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_profile_set_from_toml() {
        let text = r#"
            [engine]
            mtbf_hours = 600.0
            lifetime_hours = 8.0

            [battery]
            silent = true
        "#;
        let set = ProfileSet::from_toml_str(text).unwrap();
        assert_eq!(set.len(), 2);

        let engine = set.get("engine").unwrap();
        assert_eq!(engine.mtbf_hours, 600.0);
        // Unspecified fields fall back to defaults
        assert_eq!(engine.maintenance_cost, 1.0);

        assert!(set.get("battery").unwrap().silent);
        assert!(set.get("gimbal").is_err());
    }

    #[test]
    fn test_profile_set_rejects_bad_tuning() {
        let text = r#"
            [engine]
            mtbf_hours = -1.0
        "#;
        assert!(ProfileSet::from_toml_str(text).is_err());
    }
}
